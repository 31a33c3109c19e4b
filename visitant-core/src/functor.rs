//! Functor-backed visitors for both dispatch strategies.
//!
//! - [`FnVisitor`] adapts a functor to every entry point of a closed set
//! - [`AcyclicFnVisitor`] / [`AcyclicFnVisitorMut`] adapt a functor to the
//!   shared / exclusive probes of an acyclic visitor over a type list

use crate::{
    acyclic::AcyclicVisitor,
    list::{Dispatch, DispatchMut},
    visit::{Functor, FunctorMut, Visit, VisitMut},
};
use std::{any::Any, fmt, marker::PhantomData};

/// A visitor whose every entry point forwards to one stored functor.
///
/// `FnVisitor<F>` implements [`Visit<T>`] for every `T` the functor handles
/// through [`Functor<T>`], and [`VisitMut<T>`] for every `T` it handles through
/// [`FunctorMut<T>`]. One value therefore covers a whole visitor set, which
/// saves writing one visitor type per operation.
///
/// The functor is stored by value. Cloning the visitor clones the functor
/// through a shared reference, so the source is never mutated by a copy.
///
/// # Example
///
/// ```rust,ignore
/// let mut visitor = FnVisitor::new(TotalArea(0.0));
/// for shape in &shapes {
///     shape.accept(&mut visitor);
/// }
/// let TotalArea(total) = visitor.into_inner();
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FnVisitor<F> {
    functor: F,
}

impl<F> FnVisitor<F> {
    /// Wraps a functor.
    pub const fn new(functor: F) -> Self {
        Self { functor }
    }

    /// Returns a reference to the stored functor.
    pub fn functor(&self) -> &F {
        &self.functor
    }

    /// Returns a mutable reference to the stored functor.
    pub fn functor_mut(&mut self) -> &mut F {
        &mut self.functor
    }

    /// Consumes the visitor, returning the functor and whatever it collected.
    pub fn into_inner(self) -> F {
        self.functor
    }
}

impl<F> From<F> for FnVisitor<F> {
    fn from(functor: F) -> Self {
        Self::new(functor)
    }
}

impl<T, F> Visit<T> for FnVisitor<F>
where
    T: ?Sized,
    F: Functor<T>,
{
    fn visit(&mut self, target: &T) {
        self.functor.call(target)
    }
}

impl<T, F> VisitMut<T> for FnVisitor<F>
where
    T: ?Sized,
    F: FunctorMut<T>,
{
    fn visit_mut(&mut self, target: &mut T) {
        self.functor.call_mut(target)
    }
}

// ============================================================================
// Acyclic
// ============================================================================

/// An acyclic visitor answering shared probes for the types of `L`.
///
/// A probe succeeds when the target's concrete type is exactly a member of
/// `L`; the functor is then called once with it. Exclusive probes always
/// report `false`.
///
/// # Example
/// ```ignore
/// let mut visitor = AcyclicFnVisitor::<type_list![Circle], _>::new(|c: &Circle| {
///     println!("radius {}", c.radius);
/// });
/// assert!(circle.try_accept_const(&mut visitor));
/// ```
pub struct AcyclicFnVisitor<L, F> {
    functor: F,
    _types: PhantomData<fn() -> L>,
}

/// An acyclic visitor answering exclusive probes for the types of `L`.
///
/// Shared probes always report `false`.
pub struct AcyclicFnVisitorMut<L, F> {
    functor: F,
    _types: PhantomData<fn() -> L>,
}

macro_rules! acyclic_fn_visitor_common {
    ($name:ident) => {
        impl<L, F> $name<L, F> {
            /// Wraps a functor.
            pub const fn new(functor: F) -> Self {
                Self {
                    functor,
                    _types: PhantomData,
                }
            }

            /// Returns a reference to the stored functor.
            pub fn functor(&self) -> &F {
                &self.functor
            }

            /// Returns a mutable reference to the stored functor.
            pub fn functor_mut(&mut self) -> &mut F {
                &mut self.functor
            }

            /// Consumes the visitor, returning the functor.
            pub fn into_inner(self) -> F {
                self.functor
            }
        }

        impl<L, F: Clone> Clone for $name<L, F> {
            fn clone(&self) -> Self {
                Self::new(self.functor.clone())
            }
        }

        impl<L, F: fmt::Debug> fmt::Debug for $name<L, F> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("functor", &self.functor)
                    .field("types", &std::any::type_name::<L>())
                    .finish()
            }
        }
    };
}

acyclic_fn_visitor_common!(AcyclicFnVisitor);
acyclic_fn_visitor_common!(AcyclicFnVisitorMut);

impl<L, F> AcyclicVisitor for AcyclicFnVisitor<L, F>
where
    L: Dispatch<F>,
{
    fn try_visit(&mut self, target: &dyn Any) -> bool {
        L::dispatch(&mut self.functor, target)
    }
}

impl<L, F> AcyclicVisitor for AcyclicFnVisitorMut<L, F>
where
    L: DispatchMut<F>,
{
    fn try_visit_mut(&mut self, target: &mut dyn Any) -> bool {
        L::dispatch_mut(&mut self.functor, target)
    }
}
