//! # Entry Points and Functors
//!
//! The smallest units of dispatch. A visitor is anything that exposes one
//! entry point per variant type it handles; a functor is the single callable
//! a functor-backed visitor forwards every entry point to.
//!
//! # Shared vs. Exclusive
//!
//! Each concept comes in two flavors with no conversion between them:
//!
//! - [`Visit`] / [`Functor`] receive `&T` (the "const" visitor)
//! - [`VisitMut`] / [`FunctorMut`] receive `&mut T` (the "mutable" visitor)
//!
//! A visitor set built from one flavor can never be handed to the accept
//! method of the other, so constness always dispatches correctly.

/// The shared entry point of a visitor for the variant type `T`.
///
/// A visitor set's visitor trait has one `Visit<T>` supertrait per member,
/// so implementing this trait for every member is all a hand-written visitor
/// needs to do.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot visit `{T}`",
    label = "missing `Visit<{T}>` implementation",
    note = "Every type of a visitor set needs its own entry point. Use `FnVisitor` to forward all of them to one functor."
)]
pub trait Visit<T: ?Sized> {
    /// Visits `target` through a shared reference.
    fn visit(&mut self, target: &T);
}

/// The exclusive entry point of a visitor for the variant type `T`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot mutably visit `{T}`",
    label = "missing `VisitMut<{T}>` implementation"
)]
pub trait VisitMut<T: ?Sized> {
    /// Visits `target` through an exclusive reference.
    fn visit_mut(&mut self, target: &mut T);
}

/// A callable that accepts a shared reference to `T`.
///
/// Closures taking `&T` are functors for that one type. To handle every type
/// of a set with a single value, implement this trait generically:
///
/// ```rust,ignore
/// struct TotalArea(f64);
///
/// impl<T: Area> Functor<T> for TotalArea {
///     fn call(&mut self, target: &T) {
///         self.0 += target.area();
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be called with `&{T}`",
    label = "missing `Functor<{T}>` implementation",
    note = "A functor must handle every type of the visitor set it is adapted to."
)]
pub trait Functor<T: ?Sized> {
    /// Invokes the functor.
    fn call(&mut self, target: &T);
}

/// A callable that accepts an exclusive reference to `T`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be called with `&mut {T}`",
    label = "missing `FunctorMut<{T}>` implementation"
)]
pub trait FunctorMut<T: ?Sized> {
    /// Invokes the functor.
    fn call_mut(&mut self, target: &mut T);
}

// Blanket impls for closures
impl<T, F> Functor<T> for F
where
    T: ?Sized,
    F: FnMut(&T),
{
    fn call(&mut self, target: &T) {
        (self)(target)
    }
}

impl<T, F> FunctorMut<T> for F
where
    T: ?Sized,
    F: FnMut(&mut T),
{
    fn call_mut(&mut self, target: &mut T) {
        (self)(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Doubler;

    impl VisitMut<i32> for Doubler {
        fn visit_mut(&mut self, target: &mut i32) {
            *target *= 2;
        }
    }

    #[test]
    fn test_closure_is_functor() {
        let mut seen = Vec::new();
        let mut f = |value: &i32| seen.push(*value);
        Functor::call(&mut f, &1);
        Functor::call(&mut f, &2);
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn test_closure_is_functor_mut() {
        let mut f = |value: &mut String| value.push('!');
        let mut text = String::from("hi");
        FunctorMut::call_mut(&mut f, &mut text);
        assert_eq!(text, "hi!");
    }

    #[test]
    fn test_hand_written_entry_point() {
        let mut value = 21;
        Doubler.visit_mut(&mut value);
        assert_eq!(value, 42);
    }
}
