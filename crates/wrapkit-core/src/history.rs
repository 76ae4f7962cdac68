// Re-exports the undo/redo buffer from wrapkit-mod-history and adds the
// bridge to the shared-value wrappers.
pub use wrapkit_mod_history::UndoRedoBuffer;

use crate::atomic::AtomicValue;

impl<T: Clone> AtomicValue<UndoRedoBuffer<T>> {
    /// Writes `value` under the lock and returns the new cursor.
    pub fn write_history(&self, value: T) -> usize {
        self.mutate(|buffer| {
            buffer.write(value);
            buffer.cursor()
        })
    }

    /// Snapshot of the current history entry.
    pub fn current_history(&self) -> T {
        self.mutate(|buffer| buffer.current().clone())
    }
}
