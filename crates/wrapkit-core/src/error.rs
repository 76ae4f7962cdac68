/// Errors reported by wrappers that can be read before they hold a value.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WrapError {
    /// A `LateInit` was read before its first `set`.
    #[error("{type_name} was accessed before being initialized")]
    Uninitialized { type_name: &'static str },
}
