//! Property-change notification for mutable entities.
//!
//! Entities own a [`ChangeSupport`] and fire a [`PropertyChange`] after every successful
//! setter call. Listeners run synchronously on the caller's stack. A change whose old and
//! new values are equal is never delivered.

use std::fmt;

use super::person::Person;
use super::priority::{Priority, RequirementKind};

/// A snapshot of a property value carried by a [`PropertyChange`].
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Int(i64),
    Float(f32),
    Text(String),
    Priority(Priority),
    Kind(RequirementKind),
    Members(Vec<Person>),
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f32> for PropertyValue {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<Priority> for PropertyValue {
    fn from(value: Priority) -> Self {
        Self::Priority(value)
    }
}

impl From<RequirementKind> for PropertyValue {
    fn from(value: RequirementKind) -> Self {
        Self::Kind(value)
    }
}

impl From<Vec<Person>> for PropertyValue {
    fn from(value: Vec<Person>) -> Self {
        Self::Members(value)
    }
}

/// A single mutation: which property changed, its former value and its new value.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyChange {
    pub property: &'static str,
    pub old: PropertyValue,
    pub new: PropertyValue,
}

/// Handle returned by `subscribe`, used to remove the listener again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&PropertyChange) + Send>;

/// Registry of change listeners owned by one entity instance.
///
/// Cloning an entity does not clone its listeners; the clone starts with an empty registry.
#[derive(Default)]
pub struct ChangeSupport {
    next_id: u64,
    listeners: Vec<(ListenerId, Listener)>,
}

impl ChangeSupport {
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&PropertyChange) + Send + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if the listener was never registered or is already gone.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Delivers the change to every listener in subscription order, unless `old == new`.
    pub fn fire(&mut self, property: &'static str, old: PropertyValue, new: PropertyValue) {
        if old == new || self.listeners.is_empty() {
            return;
        }

        tracing::debug!(
            property,
            listeners = self.listeners.len(),
            "firing property change"
        );

        let change = PropertyChange { property, old, new };
        for (_, listener) in self.listeners.iter_mut() {
            listener(&change);
        }
    }
}

impl Clone for ChangeSupport {
    fn clone(&self) -> Self {
        Self::default()
    }
}

impl fmt::Debug for ChangeSupport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeSupport")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
