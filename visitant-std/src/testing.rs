//! Testing utilities for Visitant.
//!
//! This module provides utilities to make testing visitors and visitable types
//! easier.
//!
//! # Features
//!
//! - [`RecordingFunctor`]: A functor that records every call it receives
//! - [`RejectingVisitor`]: An acyclic visitor that refuses every probe

use std::{
    any::Any,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};
use visitant_core::{AcyclicVisitor, Functor, FunctorMut};

// ============================================================================
// Recording Functor
// ============================================================================

/// One call received by a [`RecordingFunctor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedCall {
    /// The static type the functor was called with.
    pub type_name: &'static str,
    /// The address of the visited value.
    pub address: usize,
    /// Whether the call came through an exclusive reference.
    pub exclusive: bool,
}

impl RecordedCall {
    /// Returns whether this call visited exactly `target`.
    pub fn is_for<T: ?Sized>(&self, target: &T) -> bool {
        self.address == address_of(target)
    }
}

/// A functor that records every call, for any type, through both flavors.
///
/// Clones share the same record, so one handle can be moved into a visitor
/// while another inspects it.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingFunctor::new();
/// let mut visitor = FnVisitor::new(recorder.clone());
///
/// shape.accept(&mut visitor);
///
/// assert_eq!(recorder.count(), 1);
/// assert!(recorder.calls()[0].is_for(&*shape));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingFunctor {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl RecordingFunctor {
    /// Create a new recorder with no calls.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a copy of the recorded calls.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Get the recorded type names, in call order.
    pub fn type_names(&self) -> Vec<&'static str> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|call| call.type_name)
            .collect()
    }

    /// Get the number of recorded calls.
    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Clear all recorded calls.
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record<T: ?Sized>(&self, target: &T, exclusive: bool) {
        self.calls.lock().unwrap().push(RecordedCall {
            type_name: std::any::type_name::<T>(),
            address: address_of(target),
            exclusive,
        });
    }
}

impl<T: ?Sized> Functor<T> for RecordingFunctor {
    fn call(&mut self, target: &T) {
        self.record(target, false);
    }
}

impl<T: ?Sized> FunctorMut<T> for RecordingFunctor {
    fn call_mut(&mut self, target: &mut T) {
        self.record(target, true);
    }
}

fn address_of<T: ?Sized>(target: &T) -> usize {
    (target as *const T).cast::<()>() as usize
}

// ============================================================================
// Rejecting Visitor
// ============================================================================

/// An acyclic visitor that handles nothing and counts the probes it refused.
#[derive(Debug, Clone, Default)]
pub struct RejectingVisitor {
    probes: Arc<AtomicUsize>,
}

impl RejectingVisitor {
    /// Create a new rejecting visitor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of probes refused so far.
    pub fn probes(&self) -> usize {
        self.probes.load(Ordering::SeqCst)
    }
}

impl AcyclicVisitor for RejectingVisitor {
    fn try_visit(&mut self, _target: &dyn Any) -> bool {
        self.probes.fetch_add(1, Ordering::SeqCst);
        false
    }

    fn try_visit_mut(&mut self, _target: &mut dyn Any) -> bool {
        self.probes.fetch_add(1, Ordering::SeqCst);
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use visitant_core::{AcyclicVisitable, FnVisitor, Visit, VisitMut};

    #[derive(Debug)]
    struct Probe;

    impl AcyclicVisitable for Probe {}

    #[test]
    fn test_recording_functor_shares_record() {
        let recorder = RecordingFunctor::new();
        let mut visitor = FnVisitor::new(recorder.clone());

        let first = 1u32;
        let mut second = String::from("two");
        Visit::<u32>::visit(&mut visitor, &first);
        VisitMut::<String>::visit_mut(&mut visitor, &mut second);

        assert_eq!(recorder.count(), 2);
        assert_eq!(recorder.type_names(), vec!["u32", "alloc::string::String"]);

        let calls = recorder.calls();
        assert!(calls[0].is_for(&first));
        assert!(!calls[0].exclusive);
        assert!(calls[1].is_for(&second));
        assert!(calls[1].exclusive);

        recorder.clear();
        assert_eq!(recorder.count(), 0);
    }

    #[test]
    fn test_rejecting_visitor_counts_probes() {
        let rejecting = RejectingVisitor::new();
        let mut visitor = rejecting.clone();

        let mut probe = Probe;
        assert!(!probe.try_accept_const(&mut visitor));
        assert!(!probe.try_accept(&mut visitor));
        assert_eq!(rejecting.probes(), 2);
    }
}
