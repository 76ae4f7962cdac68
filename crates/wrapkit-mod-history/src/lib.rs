/// Undo/redo history for a single logical value.
///
/// Provides an `UndoRedoBuffer` that records every value written to it and
/// lets callers step back and forth through that history. Writing while
/// positioned behind the head discards the undone branch, matching the
/// usual editor convention.
pub mod buffer;

pub use buffer::UndoRedoBuffer;
