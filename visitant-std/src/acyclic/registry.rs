//! Registry of per-type handlers for runtime registration.

use std::{
    any::{Any, TypeId},
    collections::HashMap,
    fmt,
};
use visitant_core::{AcyclicVisitor, RegistryError};

type SharedHandler<'h> = Box<dyn FnMut(&dyn Any) + 'h>;
type ExclusiveHandler<'h> = Box<dyn FnMut(&mut dyn Any) + 'h>;

struct Entry<H> {
    type_name: &'static str,
    handler: H,
}

/// An acyclic visitor whose entry points are registered at runtime.
///
/// Each concrete type has at most one shared and one exclusive handler. A
/// probe looks the target's exact type up and reports `false` when nothing is
/// registered for it.
///
/// # Example
/// ```rust,ignore
/// let mut total = 0.0;
/// let mut registry = RegistryBuilder::new()
///     .on(|c: &Circle| total += c.area())
///     .on(|s: &Square| total += s.area())
///     .build();
///
/// for shape in &shapes {
///     shape.try_accept_const(&mut registry);
/// }
/// ```
pub struct Registry<'h> {
    shared: HashMap<TypeId, Entry<SharedHandler<'h>>>,
    exclusive: HashMap<TypeId, Entry<ExclusiveHandler<'h>>>,
}

impl Registry<'_> {
    /// Returns the number of registered handlers across both flavors.
    pub fn len(&self) -> usize {
        self.shared.len() + self.exclusive.len()
    }

    /// Returns `true` if no handler is registered.
    pub fn is_empty(&self) -> bool {
        self.shared.is_empty() && self.exclusive.is_empty()
    }

    /// Returns whether a shared handler is registered for `T`.
    pub fn handles<T: Any>(&self) -> bool {
        self.shared.contains_key(&TypeId::of::<T>())
    }

    /// Returns whether an exclusive handler is registered for `T`.
    pub fn handles_mut<T: Any>(&self) -> bool {
        self.exclusive.contains_key(&TypeId::of::<T>())
    }

    /// Returns the names of every type with a handler, sorted and deduplicated.
    pub fn handled_types(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self
            .shared
            .values()
            .map(|entry| entry.type_name)
            .chain(self.exclusive.values().map(|entry| entry.type_name))
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}

impl AcyclicVisitor for Registry<'_> {
    fn try_visit(&mut self, target: &dyn Any) -> bool {
        match self.shared.get_mut(&(*target).type_id()) {
            Some(entry) => {
                (entry.handler)(target);
                true
            }
            None => false,
        }
    }

    fn try_visit_mut(&mut self, target: &mut dyn Any) -> bool {
        match self.exclusive.get_mut(&(*target).type_id()) {
            Some(entry) => {
                (entry.handler)(target);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for Registry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("shared", &type_names(&self.shared))
            .field("exclusive", &type_names(&self.exclusive))
            .finish()
    }
}

/// Builder for constructing a [`Registry`].
pub struct RegistryBuilder<'h> {
    shared: HashMap<TypeId, Entry<SharedHandler<'h>>>,
    exclusive: HashMap<TypeId, Entry<ExclusiveHandler<'h>>>,
}

impl fmt::Debug for RegistryBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryBuilder")
            .field("shared", &type_names(&self.shared))
            .field("exclusive", &type_names(&self.exclusive))
            .finish()
    }
}

impl Default for RegistryBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'h> RegistryBuilder<'h> {
    /// Create a new empty registry builder.
    pub fn new() -> Self {
        Self {
            shared: HashMap::new(),
            exclusive: HashMap::new(),
        }
    }

    /// Register the shared handler for `T`, replacing any previous one.
    pub fn on<T, F>(mut self, mut handler: F) -> Self
    where
        T: Any,
        F: FnMut(&T) + 'h,
    {
        let type_name = std::any::type_name::<T>();
        let handler: SharedHandler<'h> = Box::new(move |target: &dyn Any| {
            if let Some(target) = target.downcast_ref::<T>() {
                handler(target);
            }
        });
        let replaced = self
            .shared
            .insert(TypeId::of::<T>(), Entry { type_name, handler })
            .is_some();
        log_registration("shared", type_name, replaced);
        self
    }

    /// Register the exclusive handler for `T`, replacing any previous one.
    pub fn on_mut<T, F>(mut self, mut handler: F) -> Self
    where
        T: Any,
        F: FnMut(&mut T) + 'h,
    {
        let type_name = std::any::type_name::<T>();
        let handler: ExclusiveHandler<'h> = Box::new(move |target: &mut dyn Any| {
            if let Some(target) = target.downcast_mut::<T>() {
                handler(target);
            }
        });
        let replaced = self
            .exclusive
            .insert(TypeId::of::<T>(), Entry { type_name, handler })
            .is_some();
        log_registration("exclusive", type_name, replaced);
        self
    }

    /// Register the shared handler for `T`.
    ///
    /// Fails with [`RegistryError::DuplicateHandler`] if one is already
    /// registered.
    pub fn try_on<T, F>(self, handler: F) -> Result<Self, RegistryError>
    where
        T: Any,
        F: FnMut(&T) + 'h,
    {
        if self.shared.contains_key(&TypeId::of::<T>()) {
            return Err(RegistryError::DuplicateHandler {
                type_name: std::any::type_name::<T>(),
            });
        }
        Ok(self.on(handler))
    }

    /// Register the exclusive handler for `T`.
    ///
    /// Fails with [`RegistryError::DuplicateHandler`] if one is already
    /// registered.
    pub fn try_on_mut<T, F>(self, handler: F) -> Result<Self, RegistryError>
    where
        T: Any,
        F: FnMut(&mut T) + 'h,
    {
        if self.exclusive.contains_key(&TypeId::of::<T>()) {
            return Err(RegistryError::DuplicateHandler {
                type_name: std::any::type_name::<T>(),
            });
        }
        Ok(self.on_mut(handler))
    }

    /// Build the registry.
    pub fn build(self) -> Registry<'h> {
        Registry {
            shared: self.shared,
            exclusive: self.exclusive,
        }
    }
}

fn type_names<H>(entries: &HashMap<TypeId, Entry<H>>) -> Vec<&'static str> {
    let mut names: Vec<_> = entries.values().map(|entry| entry.type_name).collect();
    names.sort_unstable();
    names
}

fn log_registration(flavor: &'static str, type_name: &'static str, replaced: bool) {
    #[cfg(feature = "tracing")]
    {
        if replaced {
            tracing::warn!(flavor, type_name, "Replacing registered handler");
        } else {
            tracing::debug!(flavor, type_name, "Registered handler");
        }
    }
    #[cfg(not(feature = "tracing"))]
    {
        let _ = (flavor, type_name, replaced); // Suppress unused warning
    }
}
