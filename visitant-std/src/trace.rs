//! Instrumentation of acyclic dispatch.

use std::any::Any;
use visitant_core::AcyclicVisitor;

/// An acyclic visitor wrapper that reports successful dispatches.
///
/// Both probes are forwarded to the inner visitor unchanged. With the
/// `tracing` feature enabled, every probe the inner visitor accepts emits a
/// `trace!` event carrying the wrapper's label, the probe flavor and the
/// `TypeId` of the visited value; failed probes stay silent.
pub struct Traced<V> {
    inner: V,
    label: &'static str,
}

impl<V> Traced<V> {
    /// Create a new `Traced` wrapper around a visitor.
    pub const fn new(inner: V, label: &'static str) -> Self {
        Self { inner, label }
    }

    /// Returns the label attached to every event.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Returns a reference to the wrapped visitor.
    pub fn get_ref(&self) -> &V {
        &self.inner
    }

    /// Consumes the wrapper, returning the visitor.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V: Clone> Clone for Traced<V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            label: self.label,
        }
    }
}

impl<V: AcyclicVisitor> AcyclicVisitor for Traced<V> {
    fn try_visit(&mut self, target: &dyn Any) -> bool {
        let handled = self.inner.try_visit(target);
        #[cfg(feature = "tracing")]
        if handled {
            tracing::trace!(
                visitor = %self.label,
                flavor = "shared",
                type_id = ?(*target).type_id(),
                "Dispatched"
            );
        }
        handled
    }

    fn try_visit_mut(&mut self, target: &mut dyn Any) -> bool {
        let handled = self.inner.try_visit_mut(target);
        #[cfg(feature = "tracing")]
        if handled {
            tracing::trace!(
                visitor = %self.label,
                flavor = "exclusive",
                type_id = ?(*target).type_id(),
                "Dispatched"
            );
        }
        handled
    }
}
