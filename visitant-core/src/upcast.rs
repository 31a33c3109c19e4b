//! Boxing a concrete variant as its declared base.
//!
//! Generic code that produces a new variant (the cloner, for one) knows the
//! concrete type `T` and the base `B` it must hand back, but cannot coerce
//! `Box<T>` to `Box<B>` without a bound that proves `T` unsizes to `B`.
//! [`Upcast`] is that bound.

use crate::{
    acyclic::AcyclicVisitable,
    set::{Visitable, VisitorSet},
};

/// Converts a boxed concrete value into a box of its base `B`.
///
/// Implemented for every `'static` [`Visitable<V>`] as `dyn Visitable<V>` and
/// for every [`AcyclicVisitable`] as `dyn AcyclicVisitable`. For a base trait
/// of your own, use [`upcast!`](crate::upcast).
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be boxed as `{B}`",
    label = "missing `Upcast<{B}>` implementation",
    note = "Use `upcast!({B} => {Self})` to implement it for a custom base."
)]
pub trait Upcast<B: ?Sized> {
    /// Performs the conversion.
    fn upcast(self: Box<Self>) -> Box<B>;
}

impl<V, T> Upcast<dyn Visitable<V>> for T
where
    V: VisitorSet,
    T: Visitable<V> + 'static,
{
    fn upcast(self: Box<Self>) -> Box<dyn Visitable<V>> {
        self
    }
}

impl<T: AcyclicVisitable> Upcast<dyn AcyclicVisitable> for T {
    fn upcast(self: Box<Self>) -> Box<dyn AcyclicVisitable> {
        self
    }
}

/// Implements [`Upcast`] from concrete types to a base of your own.
///
/// # Example
/// ```ignore
/// trait Shape: Visitable<Shapes> + Debug {}
///
/// upcast!(dyn Shape => Circle, Square);
/// ```
#[macro_export]
macro_rules! upcast {
    ($base:ty => $($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Upcast<$base> for $ty {
                fn upcast(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<$base> {
                    self
                }
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Debug;

    #[derive(Debug, Clone, PartialEq)]
    struct Note(&'static str);

    impl AcyclicVisitable for Note {}

    trait Annotation: Debug {
        fn text(&self) -> &str;
    }

    impl Annotation for Note {
        fn text(&self) -> &str {
            self.0
        }
    }

    crate::upcast!(dyn Annotation => Note);

    #[test]
    fn test_upcast_to_acyclic_base() {
        let boxed: Box<dyn AcyclicVisitable> = Box::new(Note("hi")).upcast();
        assert!(boxed.is::<Note>());
    }

    #[test]
    fn test_upcast_to_custom_base() {
        let boxed: Box<dyn Annotation> = Box::new(Note("hello")).upcast();
        assert_eq!(boxed.text(), "hello");
    }
}
