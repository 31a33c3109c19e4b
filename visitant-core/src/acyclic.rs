//! # Acyclic Visitors
//!
//! The open-hierarchy counterpart of [`Visitable`](crate::Visitable). A type
//! becomes acyclic-visitable without naming any sibling type, and new variant
//! types can be added anywhere in a program without touching existing
//! declarations.
//!
//! The price is that dispatch is probed rather than guaranteed: a visitor is
//! asked at runtime whether it handles exactly the visited type, and the
//! probe reports `false` when it does not. A failed probe is an ordinary
//! outcome: it has no side effect and is not an error.
//!
//! # Flavors
//!
//! [`AcyclicVisitor::try_visit`] answers shared probes (made by
//! [`AcyclicVisitable::try_accept_const`]) and
//! [`AcyclicVisitor::try_visit_mut`] answers exclusive probes (made by
//! [`AcyclicVisitable::try_accept`]). A visitor built for one flavor reports
//! `false` to the other.

use crate::error::DispatchError;
use std::any::Any;

/// Views any `'static` value as [`Any`].
///
/// Implemented for every `'static` type, so trait objects whose trait has
/// `AsAny` as a supertrait can be downcast to their concrete type.
pub trait AsAny: Any {
    /// Returns `self` as `&dyn Any`.
    fn as_any(&self) -> &dyn Any;

    /// Returns `self` as `&mut dyn Any`.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Returns the name of the concrete type, for diagnostics.
    fn type_name(&self) -> &'static str;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// The untyped base of every acyclic visitor.
///
/// Both probes default to `false`, so an implementation only overrides the
/// flavor it supports.
pub trait AcyclicVisitor {
    /// Visits `target` through a shared reference if this visitor handles its
    /// exact type. Returns whether the visit happened.
    fn try_visit(&mut self, target: &dyn Any) -> bool {
        let _ = target;
        false
    }

    /// Visits `target` through an exclusive reference if this visitor handles
    /// its exact type. Returns whether the visit happened.
    fn try_visit_mut(&mut self, target: &mut dyn Any) -> bool {
        let _ = target;
        false
    }
}

impl<V: AcyclicVisitor + ?Sized> AcyclicVisitor for &mut V {
    fn try_visit(&mut self, target: &dyn Any) -> bool {
        (**self).try_visit(target)
    }

    fn try_visit_mut(&mut self, target: &mut dyn Any) -> bool {
        (**self).try_visit_mut(target)
    }
}

impl<V: AcyclicVisitor + ?Sized> AcyclicVisitor for Box<V> {
    fn try_visit(&mut self, target: &dyn Any) -> bool {
        (**self).try_visit(target)
    }

    fn try_visit_mut(&mut self, target: &mut dyn Any) -> bool {
        (**self).try_visit_mut(target)
    }
}

/// The open-hierarchy visitable capability.
///
/// Attach it with an empty impl (`impl AcyclicVisitable for Circle {}`) or
/// `#[derive(AcyclicVisitable)]`. The provided methods probe the visitor for
/// the implementor's own type; overriding them is not needed.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not acyclic-visitable",
    label = "missing `AcyclicVisitable` implementation",
    note = "Attach the capability with `impl AcyclicVisitable for {Self} {{}}` or `#[derive(AcyclicVisitable)]`."
)]
pub trait AcyclicVisitable: AsAny {
    /// Offers `self` to the visitor through an exclusive reference.
    ///
    /// Returns `true` if the visitor handled this exact type and its entry
    /// point ran once, `false` otherwise.
    fn try_accept(&mut self, visitor: &mut dyn AcyclicVisitor) -> bool {
        visitor.try_visit_mut(AsAny::as_any_mut(self))
    }

    /// Offers `self` to the visitor through a shared reference.
    fn try_accept_const(&self, visitor: &mut dyn AcyclicVisitor) -> bool {
        visitor.try_visit(AsAny::as_any(self))
    }

    /// Like [`try_accept`](Self::try_accept), but a failed probe becomes
    /// [`DispatchError::Unhandled`].
    fn accept_checked(&mut self, visitor: &mut dyn AcyclicVisitor) -> Result<(), DispatchError> {
        if self.try_accept(visitor) {
            Ok(())
        } else {
            Err(DispatchError::Unhandled {
                type_name: AsAny::type_name(&*self),
            })
        }
    }

    /// Like [`try_accept_const`](Self::try_accept_const), but a failed probe
    /// becomes [`DispatchError::Unhandled`].
    fn accept_const_checked(&self, visitor: &mut dyn AcyclicVisitor) -> Result<(), DispatchError> {
        if self.try_accept_const(visitor) {
            Ok(())
        } else {
            Err(DispatchError::Unhandled {
                type_name: AsAny::type_name(&*self),
            })
        }
    }
}

impl dyn AcyclicVisitable {
    /// Returns `true` if the concrete type is `T`.
    ///
    /// Prefer these helpers over [`AsAny::as_any`] on a
    /// `Box<dyn AcyclicVisitable>`: method lookup resolves `as_any` on the box
    /// itself, while these always look through to the boxed value.
    pub fn is<T: Any>(&self) -> bool {
        AsAny::as_any(self).is::<T>()
    }

    /// Returns the value as a `&T` if its concrete type is `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        AsAny::as_any(self).downcast_ref::<T>()
    }

    /// Returns the value as a `&mut T` if its concrete type is `T`.
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        AsAny::as_any_mut(self).downcast_mut::<T>()
    }

    /// Returns the name of the concrete type.
    pub fn concrete_type_name(&self) -> &'static str {
        AsAny::type_name(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Ping(u8);

    impl AcyclicVisitable for Ping {}

    #[derive(Debug)]
    struct Pong;

    impl AcyclicVisitable for Pong {}

    #[derive(Default)]
    struct PingOnly {
        seen: Vec<u8>,
    }

    impl AcyclicVisitor for PingOnly {
        fn try_visit(&mut self, target: &dyn Any) -> bool {
            match target.downcast_ref::<Ping>() {
                Some(ping) => {
                    self.seen.push(ping.0);
                    true
                }
                None => false,
            }
        }
    }

    #[test]
    fn test_probe_matches_exact_type() {
        let mut visitor = PingOnly::default();
        assert!(Ping(3).try_accept_const(&mut visitor));
        assert!(!Pong.try_accept_const(&mut visitor));
        assert_eq!(visitor.seen, vec![3]);
    }

    #[test]
    fn test_probe_through_trait_object() {
        let items: Vec<Box<dyn AcyclicVisitable>> = vec![Box::new(Pong), Box::new(Ping(1))];
        let mut visitor = PingOnly::default();
        let handled: Vec<bool> = items
            .iter()
            .map(|item| item.try_accept_const(&mut visitor))
            .collect();
        assert_eq!(handled, vec![false, true]);
        assert_eq!(visitor.seen, vec![1]);
    }

    #[test]
    fn test_shared_visitor_rejects_exclusive_probe() {
        let mut visitor = PingOnly::default();
        let mut ping = Ping(9);
        assert!(!ping.try_accept(&mut visitor));
        assert!(visitor.seen.is_empty());
        assert_eq!(ping, Ping(9));
    }

    #[test]
    fn test_checked_accept_reports_type() {
        let mut visitor = PingOnly::default();
        let err = Pong.accept_const_checked(&mut visitor).unwrap_err();
        assert!(matches!(
            err,
            DispatchError::Unhandled { type_name } if type_name.ends_with("Pong")
        ));
        assert!(Ping(0).accept_const_checked(&mut visitor).is_ok());
    }

    #[derive(Default)]
    struct DoublePing;

    impl AcyclicVisitor for DoublePing {
        fn try_visit_mut(&mut self, target: &mut dyn Any) -> bool {
            match target.downcast_mut::<Ping>() {
                Some(ping) => {
                    ping.0 *= 2;
                    true
                }
                None => false,
            }
        }
    }

    #[test]
    fn test_checked_exclusive_accept() {
        let mut ping = Ping(4);
        assert!(ping.accept_checked(&mut DoublePing).is_ok());
        assert_eq!(ping, Ping(8));

        let err = Pong.accept_checked(&mut DoublePing).unwrap_err();
        match err {
            DispatchError::Unhandled { type_name } => {
                assert!(type_name.ends_with("Pong"));
                assert!(!type_name.starts_with("&mut"));
            }
            other => panic!("expected an unhandled dispatch, got {other:?}"),
        }
    }

    #[test]
    fn test_boxed_downcast_looks_through_box() {
        let mut boxed: Box<dyn AcyclicVisitable> = Box::new(Ping(1));
        assert!(boxed.is::<Ping>());
        assert!(!boxed.is::<Pong>());
        assert_eq!(boxed.downcast_ref::<Ping>(), Some(&Ping(1)));
        assert!(boxed.concrete_type_name().ends_with("Ping"));

        if let Some(ping) = boxed.downcast_mut::<Ping>() {
            ping.0 = 5;
        }
        assert_eq!(boxed.downcast_ref::<Ping>(), Some(&Ping(5)));
    }

    #[test]
    fn test_as_any_names_concrete_type() {
        let boxed: Box<dyn AcyclicVisitable> = Box::new(Ping(0));
        let item: &dyn AcyclicVisitable = &*boxed;
        assert!(item.type_name().ends_with("Ping"));
        assert!(item.as_any().is::<Ping>());
    }
}
