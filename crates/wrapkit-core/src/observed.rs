/// Value that notifies observers whenever it changes.
use std::fmt;

/// Handle returned by [`Observed::add_observer`], used to remove it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Callback<'a, T> = Box<dyn FnMut(&T) + 'a>;

/// Value with a list of observers called after every change.
///
/// Observers run synchronously, in registration order, with the new value.
pub struct Observed<'a, T> {
    value: T,
    observers: Vec<(ObserverId, Callback<'a, T>)>,
    next_id: u64,
}

impl<T: fmt::Debug> fmt::Debug for Observed<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observed")
            .field("value", &self.value)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl<'a, T> Observed<'a, T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replaces the value and notifies every observer.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.notify();
    }

    /// Edits the value in place, then notifies every observer once.
    pub fn modify(&mut self, f: impl FnOnce(&mut T)) {
        f(&mut self.value);
        self.notify();
    }

    pub fn add_observer(&mut self, observer: impl FnMut(&T) + 'a) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes an observer. Returns `false` if it was already removed.
    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn notify(&mut self) {
        for (_, observer) in &mut self.observers {
            observer(&self.value);
        }
    }
}
