//! Composition root for edits: decorated sessions and the clipboard

/// Tile snapshot that can be pasted elsewhere
pub mod clipboard;
/// World wrapped in the logging, limiting and masking decorators
pub mod edit_session;

pub use clipboard::Clipboard;
pub use edit_session::{EditSession, EditSessionBuilder};
