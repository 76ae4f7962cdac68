/// Optional value that reads as `default` whenever it is unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultValue<T> {
    storage: Option<T>,
    default: T,
}

impl<T> DefaultValue<T> {
    pub fn new(default: T) -> Self {
        Self {
            storage: None,
            default,
        }
    }

    pub fn with_value(value: Option<T>, default: T) -> Self {
        Self {
            storage: value,
            default,
        }
    }

    /// Returns the stored value, or the default when unset.
    pub fn get(&self) -> &T {
        self.storage.as_ref().unwrap_or(&self.default)
    }

    /// Stores `value`; `None` reverts to the default.
    pub fn set(&mut self, value: Option<T>) {
        self.storage = value;
    }

    pub fn reset(&mut self) {
        self.storage = None;
    }

    pub fn is_default(&self) -> bool {
        self.storage.is_none()
    }

    pub fn default_value(&self) -> &T {
        &self.default
    }
}
