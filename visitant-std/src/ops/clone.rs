//! Polymorphic deep copy.
//!
//! [`Cloner`] is a plain functor: for whatever concrete type it is called
//! with, it clones the value into a fresh box of the base `B`. The free
//! functions plug it into either dispatch strategy.

use visitant_core::{
    AcyclicFnVisitor, AcyclicVisitable, Dispatch, Erase, FnVisitor, Functor, Upcast, Visitable,
    VisitorSet,
};

/// A functor that clones the visited value into a `Box<B>`.
pub struct Cloner<B: ?Sized> {
    copy: Option<Box<B>>,
}

impl<B: ?Sized> Cloner<B> {
    /// Creates a cloner with an empty result slot.
    pub fn new() -> Self {
        Self { copy: None }
    }

    /// Returns whether a copy has been made.
    pub fn has_copy(&self) -> bool {
        self.copy.is_some()
    }

    /// Consumes the cloner, returning the copy if the functor was called.
    pub fn into_copy(self) -> Option<Box<B>> {
        self.copy
    }
}

impl<B: ?Sized> Default for Cloner<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B, T> Functor<T> for Cloner<B>
where
    B: ?Sized,
    T: Clone + Upcast<B>,
{
    fn call(&mut self, target: &T) {
        self.copy = Some(Upcast::<B>::upcast(Box::new(target.clone())));
    }
}

/// Clones a closed-hierarchy variant as the set's visitable interface.
///
/// # Example
/// ```rust,ignore
/// let shape: &dyn Visitable<Shapes> = &Circle { radius: 2.0 };
/// let copy: Box<dyn Visitable<Shapes>> = clone::<Shapes>(shape);
/// ```
///
/// # Panics
///
/// Panics if `client`'s `accept` returns without calling its visitor, which
/// only a hand-written `Visitable` impl can do.
pub fn clone<V>(client: &(impl Visitable<V> + ?Sized)) -> Box<dyn Visitable<V>>
where
    V: VisitorSet,
    FnVisitor<Cloner<dyn Visitable<V>>>: Erase<V>,
{
    clone_as::<V, dyn Visitable<V>>(client)
}

/// Clones a closed-hierarchy variant as the base `B`.
///
/// Every member of `V` must be `Clone` and [`Upcast<B>`].
///
/// # Panics
///
/// Panics if `client`'s `accept` returns without calling its visitor.
pub fn clone_as<V, B>(client: &(impl Visitable<V> + ?Sized)) -> Box<B>
where
    V: VisitorSet,
    B: ?Sized,
    FnVisitor<Cloner<B>>: Erase<V>,
{
    let mut visitor = FnVisitor::new(Cloner::new());
    client.accept(Erase::<V>::erase(&mut visitor));
    match visitor.into_inner().into_copy() {
        Some(copy) => copy,
        None => panic!(
            "`Visitable::accept` returned without dispatching to its visitor; \
             closed-hierarchy implementations must call exactly one entry point"
        ),
    }
}

/// Clones an open-hierarchy variant as the base `B`.
///
/// Returns `None` when the concrete type of `client` is not a member of `L`.
///
/// # Example
/// ```rust,ignore
/// let node: &dyn AcyclicVisitable = &Circle { radius: 2.0 };
/// let copy = clone_acyclic::<type_list![Circle, Square], dyn AcyclicVisitable>(node);
/// assert!(copy.is_some());
/// ```
pub fn clone_acyclic<L, B>(client: &(impl AcyclicVisitable + ?Sized)) -> Option<Box<B>>
where
    L: Dispatch<Cloner<B>>,
    B: ?Sized,
{
    let mut visitor = AcyclicFnVisitor::<L, _>::new(Cloner::new());
    client.try_accept_const(&mut visitor);
    visitor.into_inner().into_copy()
}

#[cfg(test)]
mod tests {
    use super::*;
    use visitant_core::type_list;

    #[derive(Debug, Clone, PartialEq)]
    struct Word(String);

    impl AcyclicVisitable for Word {}

    #[derive(Debug, Clone, PartialEq)]
    struct Number(i64);

    impl AcyclicVisitable for Number {}

    #[derive(Debug)]
    struct Opaque;

    impl AcyclicVisitable for Opaque {}

    type Tokens = type_list![Word, Number];

    #[test]
    fn test_clone_acyclic_member() {
        let source = Word("hello".into());
        let copy = clone_acyclic::<Tokens, dyn AcyclicVisitable>(&source).unwrap();
        let copy = copy.downcast_ref::<Word>().unwrap();
        assert_eq!(copy, &source);
        assert!(!std::ptr::eq(copy, &source));
    }

    #[test]
    fn test_clone_acyclic_through_trait_object() {
        let source: Box<dyn AcyclicVisitable> = Box::new(Number(7));
        let copy = clone_acyclic::<Tokens, dyn AcyclicVisitable>(&*source).unwrap();
        assert_eq!(copy.downcast_ref::<Number>(), Some(&Number(7)));
    }

    #[test]
    fn test_clone_acyclic_non_member_is_empty() {
        assert!(clone_acyclic::<Tokens, dyn AcyclicVisitable>(&Opaque).is_none());
    }

    #[test]
    fn test_cloner_starts_empty() {
        let cloner = Cloner::<dyn AcyclicVisitable>::default();
        assert!(!cloner.has_copy());
        assert!(cloner.into_copy().is_none());
    }
}
