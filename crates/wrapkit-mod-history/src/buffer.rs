/// Browsable history of values written to one logical variable.
///
/// Every written value is retained until the buffer is compacted. The
/// cursor marks the visible value; undo and redo only move the cursor,
/// and a write behind the head truncates the redo branch first.
///
/// The history is never empty and the cursor always points into it.
/// All mutation goes through `&mut self`, so sharing a buffer across
/// threads requires an external lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoRedoBuffer<T> {
    /// Values in write order, oldest first.
    history: Vec<T>,
    /// Index of the visible value.
    cursor: usize,
}

impl<T: Default> Default for UndoRedoBuffer<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> From<T> for UndoRedoBuffer<T> {
    fn from(initial: T) -> Self {
        Self::new(initial)
    }
}

impl<T> UndoRedoBuffer<T> {
    /// Creates a buffer seeded with `initial` as its only entry.
    pub fn new(initial: T) -> Self {
        Self {
            history: vec![initial],
            cursor: 0,
        }
    }

    /// Returns the value under the cursor.
    pub fn current(&self) -> &T {
        &self.history[self.cursor]
    }

    /// Consumes the buffer and returns the value under the cursor.
    pub fn into_current(mut self) -> T {
        self.history.swap_remove(self.cursor)
    }

    /// Records a new value and moves the cursor onto it.
    ///
    /// If the cursor is behind the head, everything after it is
    /// discarded first and can no longer be redone.
    pub fn write(&mut self, value: T) {
        if self.can_redo() {
            let discarded = self.history.len() - self.cursor - 1;
            self.history.truncate(self.cursor + 1);
            tracing::debug!("Discarded {discarded} redo entries on write");
        }
        self.history.push(value);
        self.cursor = self.history.len() - 1;
    }

    /// Whether there is an older value to step back to.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Whether there is a newer value to step forward to.
    pub fn can_redo(&self) -> bool {
        self.cursor < self.history.len() - 1
    }

    /// Steps back one value. Returns `false` (and does nothing) at the
    /// oldest entry.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Steps forward one value. Returns `false` (and does nothing) at the
    /// newest entry.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Drops every entry except the current one.
    ///
    /// The buffer otherwise keeps all values forever; this releases them.
    pub fn compact(&mut self) {
        let released = self.history.len() - 1;
        let current = self.history.swap_remove(self.cursor);
        self.history.clear();
        self.history.push(current);
        self.history.shrink_to_fit();
        self.cursor = 0;
        tracing::debug!("Compacted history, released {released} entries");
    }

    /// Number of retained entries (always at least one).
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Index of the current value within `history()`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// All retained entries, oldest first.
    pub fn history(&self) -> &[T] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> UndoRedoBuffer<&'static str> {
        let mut buf = UndoRedoBuffer::new("a");
        buf.write("b");
        buf.write("c");
        buf
    }

    #[test]
    fn test_new_has_single_entry() {
        let buf = UndoRedoBuffer::new(7);
        assert_eq!(*buf.current(), 7);
        assert_eq!(buf.len(), 1);
        assert_eq!(buf.cursor(), 0);
        assert!(!buf.can_undo());
        assert!(!buf.can_redo());
        assert!(!buf.is_empty());
    }

    #[test]
    fn test_write_moves_cursor_to_head() {
        let buf = abc();
        assert_eq!(*buf.current(), "c");
        assert_eq!(buf.cursor(), 2);
        assert!(buf.can_undo());
        assert!(!buf.can_redo());
    }

    #[test]
    fn test_undo_redo_basic() {
        let mut buf = abc();
        assert!(buf.undo());
        assert_eq!(*buf.current(), "b");
        assert!(buf.can_redo());
        assert!(buf.redo());
        assert_eq!(*buf.current(), "c");
    }

    #[test]
    fn test_undo_at_oldest_is_noop() {
        let mut buf = UndoRedoBuffer::new("only");
        assert!(!buf.undo());
        assert_eq!(*buf.current(), "only");
        assert_eq!(buf.cursor(), 0);
    }

    #[test]
    fn test_redo_at_newest_is_noop() {
        let mut buf = abc();
        assert!(!buf.redo());
        assert_eq!(*buf.current(), "c");
    }

    #[test]
    fn test_write_after_undo_discards_redo_branch() {
        let mut buf = abc();
        buf.undo();
        assert_eq!(*buf.current(), "b");

        buf.write("d");
        assert_eq!(buf.history(), &["a", "b", "d"]);
        assert!(!buf.can_redo());
        assert!(!buf.redo());
    }

    #[test]
    fn test_write_after_undo_to_oldest() {
        let mut buf = abc();
        buf.undo();
        buf.undo();
        buf.write("z");
        assert_eq!(buf.history(), &["a", "z"]);
        assert_eq!(buf.cursor(), 1);
    }

    #[test]
    fn test_compact_keeps_current() {
        let mut buf = abc();
        buf.undo();
        buf.compact();
        assert_eq!(buf.history(), &["b"]);
        assert_eq!(buf.cursor(), 0);
        assert!(!buf.can_undo());
        assert!(!buf.can_redo());
    }

    #[test]
    fn test_compact_fresh_buffer() {
        let mut buf = UndoRedoBuffer::new(1);
        buf.compact();
        assert_eq!(buf.history(), &[1]);
    }

    #[test]
    fn test_into_current() {
        let mut buf = abc();
        buf.undo();
        assert_eq!(buf.into_current(), "b");
    }

    #[test]
    fn test_non_clone_values() {
        struct Token(u32);
        let mut buf = UndoRedoBuffer::new(Token(1));
        buf.write(Token(2));
        buf.undo();
        buf.compact();
        assert_eq!(buf.current().0, 1);
    }

    #[test]
    fn test_default_and_from() {
        let buf: UndoRedoBuffer<String> = UndoRedoBuffer::default();
        assert_eq!(buf.current(), "");
        let buf = UndoRedoBuffer::from(3u8);
        assert_eq!(*buf.current(), 3);
    }
}
