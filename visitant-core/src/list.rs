//! Type-level lists of variant types.
//!
//! An acyclic visitor built from a functor handles exactly the types of a
//! list. Dispatch walks the list in order and calls the functor on the first
//! member the target downcasts to.

use crate::visit::{Functor, FunctorMut};
use std::{
    any::{Any, TypeId},
    marker::PhantomData,
};

/// The empty type list.
#[derive(Debug, Clone, Copy, Default)]
pub struct HNil;

/// A type list with head `H` and tail `T`.
///
/// Only ever used as a type; build it with [`type_list!`](crate::type_list).
pub struct HCons<H, T>(PhantomData<fn() -> (H, T)>);

/// A compile-time list of `'static` types.
pub trait TypeList: 'static {
    /// The number of types in the list.
    const LEN: usize;

    /// Returns whether `id` belongs to a member of the list.
    fn contains(id: TypeId) -> bool;

    /// Appends the member type names, in order, to `names`.
    fn collect_names(names: &mut Vec<&'static str>);

    /// Returns the member type names, in order.
    fn type_names() -> Vec<&'static str> {
        let mut names = Vec::with_capacity(Self::LEN);
        Self::collect_names(&mut names);
        names
    }
}

impl TypeList for HNil {
    const LEN: usize = 0;

    fn contains(_id: TypeId) -> bool {
        false
    }

    fn collect_names(_names: &mut Vec<&'static str>) {}
}

impl<H: 'static, T: TypeList> TypeList for HCons<H, T> {
    const LEN: usize = 1 + T::LEN;

    fn contains(id: TypeId) -> bool {
        id == TypeId::of::<H>() || T::contains(id)
    }

    fn collect_names(names: &mut Vec<&'static str>) {
        names.push(std::any::type_name::<H>());
        T::collect_names(names);
    }
}

/// Shared dispatch of a type-erased target to a functor over every member.
pub trait Dispatch<F: ?Sized>: TypeList {
    /// Calls `functor` with `target` if it is exactly one of the members.
    fn dispatch(functor: &mut F, target: &dyn Any) -> bool;
}

impl<F: ?Sized> Dispatch<F> for HNil {
    fn dispatch(_functor: &mut F, _target: &dyn Any) -> bool {
        false
    }
}

impl<F, H, T> Dispatch<F> for HCons<H, T>
where
    F: Functor<H> + ?Sized,
    H: 'static,
    T: Dispatch<F>,
{
    fn dispatch(functor: &mut F, target: &dyn Any) -> bool {
        match target.downcast_ref::<H>() {
            Some(head) => {
                functor.call(head);
                true
            }
            None => T::dispatch(functor, target),
        }
    }
}

/// Exclusive dispatch of a type-erased target to a functor over every member.
pub trait DispatchMut<F: ?Sized>: TypeList {
    /// Calls `functor` with `target` if it is exactly one of the members.
    fn dispatch_mut(functor: &mut F, target: &mut dyn Any) -> bool;
}

impl<F: ?Sized> DispatchMut<F> for HNil {
    fn dispatch_mut(_functor: &mut F, _target: &mut dyn Any) -> bool {
        false
    }
}

impl<F, H, T> DispatchMut<F> for HCons<H, T>
where
    F: FunctorMut<H> + ?Sized,
    H: 'static,
    T: DispatchMut<F>,
{
    fn dispatch_mut(functor: &mut F, target: &mut dyn Any) -> bool {
        if let Some(head) = target.downcast_mut::<H>() {
            functor.call_mut(head);
            return true;
        }
        T::dispatch_mut(functor, target)
    }
}

/// Builds a type list from a comma-separated list of types.
///
/// # Example
/// ```ignore
/// type Shapes = type_list![Circle, Square];
/// ```
#[macro_export]
macro_rules! type_list {
    () => { $crate::HNil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::HCons<$head, $crate::type_list!($($tail),*)>
    };
}
