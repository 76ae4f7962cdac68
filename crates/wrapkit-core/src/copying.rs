/// Value that always owns its own copy.
///
/// Assigning from a borrowed value stores a fresh clone, so later changes
/// to the source do not show up in the wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Copying<T> {
    value: T,
}

impl<T: Clone> Copying<T> {
    /// Stores a clone of `value`.
    pub fn new(value: &T) -> Self {
        Self {
            value: value.clone(),
        }
    }

    /// Takes ownership of `value` as-is, skipping the clone.
    pub fn without_copying(value: T) -> Self {
        Self { value }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replaces the stored value with a clone of `value`.
    pub fn set(&mut self, value: &T) {
        self.value = value.clone();
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}
