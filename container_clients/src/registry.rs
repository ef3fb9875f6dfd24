//! Named container constructors.
//!
//! A [`Registry`] is a plain value: whoever builds it owns it and hands it to
//! the code that needs to create containers by name. There is no global table.

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, collections::BTreeMap, string::String};
#[cfg(feature = "std")]
use std::collections::BTreeMap;

use container_contract::Container;

/// Builds a fresh, empty container.
pub type Constructor<T> = fn() -> Box<dyn Container<T>>;

/// Table mapping a name to a [`Constructor`].
///
/// # Examples
///
/// ```
/// use container_clients::{Container, Registry};
/// use container_variants::{Queue, Stack};
///
/// let mut registry = Registry::<i32>::new();
/// registry.register("stack", || Box::new(Stack::<i32>::new()));
/// registry.register("queue", || Box::new(Queue::<i32>::new()));
///
/// let mut c = registry.create("queue").expect("registered above");
/// c.add(1);
/// c.add(2);
/// assert_eq!(c.remove(), Ok(1));
///
/// assert!(registry.create("heap").is_none());
/// assert_eq!(registry.names().collect::<Vec<_>>(), ["queue", "stack"]);
/// ```
#[derive(Debug, Clone)]
pub struct Registry<T> {
    constructors: BTreeMap<String, Constructor<T>>,
}

impl<T> Registry<T> {
    pub fn new() -> Self {
        Self {
            constructors: BTreeMap::new(),
        }
    }

    /// Registers `ctor` under `name`, returning whatever was registered there before.
    pub fn register(&mut self, name: impl Into<String>, ctor: Constructor<T>) -> Option<Constructor<T>> {
        self.constructors.insert(name.into(), ctor)
    }

    pub fn unregister(&mut self, name: &str) -> Option<Constructor<T>> {
        self.constructors.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<Constructor<T>> {
        self.constructors.get(name).copied()
    }

    /// Creates a new empty container of the kind registered as `name`.
    pub fn create(&self, name: &str) -> Option<Box<dyn Container<T>>> {
        self.get(name).map(|ctor| ctor())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}
