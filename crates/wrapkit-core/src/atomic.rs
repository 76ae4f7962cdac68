/// Mutual-exclusion box around a single value.
use parking_lot::Mutex;

/// A value that can be read, written and updated from many threads.
///
/// Every access takes the internal lock. `get` and `set` are each atomic
/// on their own, but a `get` followed by a `set` is two separate critical
/// sections: another thread can write in between, and its update is lost.
/// Use [`AtomicValue::mutate`] for read-modify-write.
///
/// The lock is `parking_lot::Mutex` (spins briefly, then parks on a
/// futex). It never times out, is not fair, and is not poisoned by a
/// panicking closure.
#[derive(Debug, Default)]
pub struct AtomicValue<T> {
    value: Mutex<T>,
}

impl<T> From<T> for AtomicValue<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> AtomicValue<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Mutex::new(value),
        }
    }

    /// Returns a copy of the current value.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.value.lock().clone()
    }

    /// Overwrites the current value.
    pub fn set(&self, value: T) {
        *self.value.lock() = value;
    }

    /// Overwrites the current value and returns the previous one.
    pub fn replace(&self, value: T) -> T {
        std::mem::replace(&mut *self.value.lock(), value)
    }

    /// Runs `f` with exclusive access to the value.
    ///
    /// This is the only atomic read-modify-write. The lock is held for the
    /// whole call and released on every exit path, unwinding included.
    /// Whatever `f` returns (including an `Err`) is handed back after the
    /// lock is released. Changes `f` made before failing are kept.
    pub fn mutate<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self.value.lock();
        f(&mut *guard)
    }

    /// Fallible form of [`mutate`](Self::mutate); the closure's error is
    /// returned unchanged.
    pub fn try_mutate<R, E>(&self, f: impl FnOnce(&mut T) -> Result<R, E>) -> Result<R, E> {
        self.mutate(f)
    }

    /// Borrows the value mutably without locking; `&mut self` already
    /// guarantees exclusivity.
    pub fn get_mut(&mut self) -> &mut T {
        self.value.get_mut()
    }

    pub fn into_inner(self) -> T {
        self.value.into_inner()
    }
}
