/// Deferred construction: values built on first access.
///
/// - `Lazy`: memoized, can be overwritten.
/// - `LazyConstant`: memoized, read-only, can be reset to rebuild.
/// - `SharedLazy`: memoized across threads; the constructor runs once.
use std::fmt;
use std::sync::OnceLock;

/// Value built by `constructor` on first access, then cached.
pub struct Lazy<T, F = fn() -> T> {
    storage: Option<T>,
    constructor: F,
}

impl<T: fmt::Debug, F> fmt::Debug for Lazy<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lazy")
            .field("storage", &self.storage)
            .finish_non_exhaustive()
    }
}

impl<T, F: Fn() -> T> Lazy<T, F> {
    pub const fn new(constructor: F) -> Self {
        Self {
            storage: None,
            constructor,
        }
    }

    /// Returns the cached value, constructing it first if needed.
    pub fn get(&mut self) -> &T {
        self.storage.get_or_insert_with(&self.constructor)
    }

    /// Replaces the value; the constructor will not run afterwards.
    pub fn set(&mut self, value: T) {
        self.storage = Some(value);
    }

    pub fn is_initialized(&self) -> bool {
        self.storage.is_some()
    }

    /// Peeks at the cached value without constructing it.
    pub fn cached(&self) -> Option<&T> {
        self.storage.as_ref()
    }
}

/// Read-only value built on first access.
///
/// Unlike [`Lazy`] it cannot be assigned; [`reset`](Self::reset) drops the
/// cached value so the next access runs the constructor again.
pub struct LazyConstant<T, F = fn() -> T> {
    storage: Option<T>,
    constructor: F,
}

impl<T: fmt::Debug, F> fmt::Debug for LazyConstant<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyConstant")
            .field("storage", &self.storage)
            .finish_non_exhaustive()
    }
}

impl<T, F: Fn() -> T> LazyConstant<T, F> {
    pub const fn new(constructor: F) -> Self {
        Self {
            storage: None,
            constructor,
        }
    }

    pub fn get(&mut self) -> &T {
        self.storage.get_or_insert_with(&self.constructor)
    }

    pub fn reset(&mut self) {
        self.storage = None;
    }

    pub fn is_initialized(&self) -> bool {
        self.storage.is_some()
    }

    pub fn cached(&self) -> Option<&T> {
        self.storage.as_ref()
    }
}

/// Lazily built value that can be shared between threads.
///
/// Concurrent first accesses block until one of them has run the
/// constructor; it never runs twice for the same initialization.
pub struct SharedLazy<T, F = fn() -> T> {
    cell: OnceLock<T>,
    constructor: F,
}

impl<T: fmt::Debug, F> fmt::Debug for SharedLazy<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedLazy")
            .field("cell", &self.cell)
            .finish_non_exhaustive()
    }
}

impl<T, F: Fn() -> T> SharedLazy<T, F> {
    pub const fn new(constructor: F) -> Self {
        Self {
            cell: OnceLock::new(),
            constructor,
        }
    }

    pub fn get(&self) -> &T {
        self.cell.get_or_init(&self.constructor)
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Drops the cached value and returns it.
    pub fn reset(&mut self) -> Option<T> {
        self.cell.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn hello() -> String {
        String::from("Hello, World!")
    }

    #[test]
    fn test_lazy_defers_construction() {
        let mut text = Lazy::new(hello);
        assert!(!text.is_initialized());
        assert!(text.cached().is_none());

        assert_eq!(text.get(), "Hello, World!");
        assert_eq!(text.cached().map(String::as_str), Some("Hello, World!"));
    }

    #[test]
    fn test_lazy_set_skips_constructor() {
        let calls = AtomicUsize::new(0);
        let mut text = Lazy::new(|| {
            calls.fetch_add(1, Ordering::SeqCst);
            hello()
        });
        text.set(String::from("New text"));
        assert_eq!(text.get(), "New text");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_lazy_constructs_once() {
        let calls = AtomicUsize::new(0);
        let mut value = Lazy::new(|| calls.fetch_add(1, Ordering::SeqCst));
        value.get();
        value.get();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_lazy_constant_reset_rebuilds() {
        let calls = AtomicUsize::new(0);
        let mut value = LazyConstant::new(|| calls.fetch_add(1, Ordering::SeqCst));
        assert!(value.cached().is_none());

        assert_eq!(*value.get(), 0);
        assert!(value.is_initialized());

        value.reset();
        assert!(value.cached().is_none());
        assert_eq!(*value.get(), 1);
    }

    #[test]
    fn test_shared_lazy_constructs_once_across_threads() {
        let calls = AtomicUsize::new(0);
        let value = SharedLazy::new(|| {
            calls.fetch_add(1, Ordering::SeqCst);
            std::thread::sleep(std::time::Duration::from_millis(10));
            42
        });

        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| assert_eq!(*value.get(), 42));
            }
        });

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(value.is_initialized());
    }

    #[test]
    fn test_shared_lazy_reset() {
        let mut value = SharedLazy::new(hello);
        assert!(value.reset().is_none());
        value.get();
        assert_eq!(value.reset().as_deref(), Some("Hello, World!"));
        assert!(!value.is_initialized());
    }
}
