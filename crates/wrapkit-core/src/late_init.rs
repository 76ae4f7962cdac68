/// Value that is set after construction but must be set before it is read.
use crate::error::WrapError;

/// Storage that starts empty and must be `set` before it is read.
///
/// Reading an uninitialized value through [`get`](Self::get) is a
/// programming error and panics; [`try_get`](Self::try_get) reports it
/// as `WrapError::Uninitialized` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LateInit<T> {
    storage: Option<T>,
}

impl<T> Default for LateInit<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LateInit<T> {
    pub const fn new() -> Self {
        Self { storage: None }
    }

    /// # Panics
    ///
    /// Panics if the value has never been set.
    pub fn get(&self) -> &T {
        match &self.storage {
            Some(value) => value,
            None => panic!("{}", Self::uninitialized()),
        }
    }

    pub fn try_get(&self) -> Result<&T, WrapError> {
        self.storage.as_ref().ok_or_else(Self::uninitialized)
    }

    /// # Panics
    ///
    /// Panics if the value has never been set.
    pub fn get_mut(&mut self) -> &mut T {
        match &mut self.storage {
            Some(value) => value,
            None => panic!("{}", Self::uninitialized()),
        }
    }

    pub fn set(&mut self, value: T) {
        self.storage = Some(value);
    }

    pub fn is_initialized(&self) -> bool {
        self.storage.is_some()
    }

    /// Returns the value if it was ever set.
    pub fn into_inner(self) -> Option<T> {
        self.storage
    }

    fn uninitialized() -> WrapError {
        WrapError::Uninitialized {
            type_name: std::any::type_name::<Self>(),
        }
    }
}
