//! Undo/redo history of tile mutations

/// Single recorded tile mutation
pub mod change;
/// Cursor-addressed log of changes
pub mod change_set;

pub use change::Change;
pub use change_set::ChangeSet;
