/// Reads and writes one environment variable by name.
///
/// Writes affect the whole process. Concurrent readers in other threads
/// (including C code calling `getenv`) may race with `set`; callers that
/// mutate the environment should do so before spawning threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentVariable {
    name: String,
}

impl EnvironmentVariable {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value, or `None` when unset or not valid Unicode.
    pub fn get(&self) -> Option<String> {
        std::env::var(&self.name).ok()
    }

    /// Sets the variable; `None` removes it.
    pub fn set(&self, value: Option<&str>) {
        match value {
            Some(value) => std::env::set_var(&self.name, value),
            None => std::env::remove_var(&self.name),
        }
    }

    pub fn is_set(&self) -> bool {
        std::env::var_os(&self.name).is_some()
    }
}
