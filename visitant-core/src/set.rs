//! # Closed Visitor Sets
//!
//! A visitor set names a fixed list of variant types. It decides which
//! object-safe visitor type a [`Visitable`] accepts, and with it which entry
//! points every visitor of the set must provide.
//!
//! # Declaring a Set
//!
//! ```rust,ignore
//! use visitant::{visitable, visitor_set};
//!
//! visitor_set! {
//!     /// Visitors over every shape.
//!     pub Shapes: ShapeVisitor, ShapeVisitorMut { Circle, Square }
//! }
//!
//! visitable!(Shapes => Circle, Square);
//! ```
//!
//! # Static Membership
//!
//! The `accept` generated by [`visitable!`](crate::visitable) calls
//! `Visit<S>` on the set's visitor object. Attaching a type that is not a
//! member fails to compile, so a closed set can never be dispatched to a
//! missing entry point at runtime.

/// A closed list of variant types.
///
/// Implemented by the marker type that [`visitor_set!`](crate::visitor_set)
/// declares. The associated types are trait objects whose supertraits are one
/// `Visit<T>` (or `VisitMut<T>`) per member.
pub trait VisitorSet: 'static {
    /// The shared visitor object, `dyn SetVisitor + 'v`.
    type Visitor<'v>: ?Sized + 'v;

    /// The exclusive visitor object, `dyn SetVisitorMut + 'v`.
    type VisitorMut<'v>: ?Sized + 'v;
}

/// A value that can dispatch itself to the visitors of the set `V`.
///
/// This is the visitable interface of a closed hierarchy: collections of
/// variants are held as `dyn Visitable<V>` (or as a user trait that has
/// `Visitable<V>` as a supertrait).
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not visitable by the visitor set `{V}`",
    label = "missing `Visitable<{V}>` implementation",
    note = "Attach the capability with `visitable!({V} => {Self})` or `#[derive(Visitable)]`."
)]
pub trait Visitable<V: VisitorSet> {
    /// Calls the shared entry point for this value's own type, exactly once.
    fn accept(&self, visitor: &mut V::Visitor<'_>);

    /// Calls the exclusive entry point for this value's own type, exactly once.
    fn accept_mut(&mut self, visitor: &mut V::VisitorMut<'_>);
}

/// Conversion of a concrete visitor into the shared visitor object of `V`.
///
/// Generic code cannot coerce a concrete visitor to `V::Visitor` on its own;
/// [`visitor_set!`](crate::visitor_set) implements this for
/// [`FnVisitor`](crate::FnVisitor) whenever its functor covers every member.
pub trait Erase<V: VisitorSet> {
    /// Returns `self` as the set's shared visitor object.
    fn erase(&mut self) -> &mut V::Visitor<'_>;
}

/// Conversion of a concrete visitor into the exclusive visitor object of `V`.
pub trait EraseMut<V: VisitorSet> {
    /// Returns `self` as the set's exclusive visitor object.
    fn erase_mut(&mut self) -> &mut V::VisitorMut<'_>;
}

/// Declares a closed visitor set.
///
/// `visitor_set!(pub Set: SetVisitor, SetVisitorMut { A, B, C })` expands to:
///
/// - an uninhabited marker `Set` implementing [`VisitorSet`];
/// - `SetVisitor`, with `Visit<A> + Visit<B> + Visit<C>` as supertraits, and
///   `SetVisitorMut`, with the matching `VisitMut` supertraits; both are
///   implemented for every type that provides all entry points;
/// - [`Erase<Set>`] and [`EraseMut<Set>`] for `FnVisitor<F>`.
#[macro_export]
macro_rules! visitor_set {
    (
        $(#[$meta:meta])*
        $vis:vis $set:ident : $visitor:ident, $visitor_mut:ident { $first:ty $(, $rest:ty)* $(,)? }
    ) => {
        $(#[$meta])*
        $vis enum $set {}

        #[doc = concat!("Shared visitor of every member of [`", stringify!($set), "`].")]
        $vis trait $visitor: $crate::Visit<$first> $(+ $crate::Visit<$rest>)* {}

        impl<X> $visitor for X where X: ?Sized + $crate::Visit<$first> $(+ $crate::Visit<$rest>)* {}

        #[doc = concat!("Exclusive visitor of every member of [`", stringify!($set), "`].")]
        $vis trait $visitor_mut: $crate::VisitMut<$first> $(+ $crate::VisitMut<$rest>)* {}

        impl<X> $visitor_mut for X where X: ?Sized + $crate::VisitMut<$first> $(+ $crate::VisitMut<$rest>)* {}

        impl $crate::VisitorSet for $set {
            type Visitor<'v> = dyn $visitor + 'v;
            type VisitorMut<'v> = dyn $visitor_mut + 'v;
        }

        impl<F> $crate::Erase<$set> for $crate::FnVisitor<F>
        where
            F: $crate::Functor<$first> $(+ $crate::Functor<$rest>)*,
        {
            fn erase(&mut self) -> &mut (dyn $visitor + '_) {
                self
            }
        }

        impl<F> $crate::EraseMut<$set> for $crate::FnVisitor<F>
        where
            F: $crate::FunctorMut<$first> $(+ $crate::FunctorMut<$rest>)*,
        {
            fn erase_mut(&mut self) -> &mut (dyn $visitor_mut + '_) {
                self
            }
        }
    };
}

/// Attaches the closed-hierarchy visitable capability to concrete types.
///
/// `visitable!(Set => A, B)` implements [`Visitable<Set>`] for `A` and `B`,
/// each dispatching to its own entry point. Types outside `Set` are rejected
/// at compile time.
#[macro_export]
macro_rules! visitable {
    ($set:ty => $($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Visitable<$set> for $ty {
                fn accept(&self, visitor: &mut <$set as $crate::VisitorSet>::Visitor<'_>) {
                    $crate::Visit::<$ty>::visit(visitor, self)
                }

                fn accept_mut(&mut self, visitor: &mut <$set as $crate::VisitorSet>::VisitorMut<'_>) {
                    $crate::VisitMut::<$ty>::visit_mut(visitor, self)
                }
            }
        )+
    };
}
