//! Cell state and the template capability that tests and transforms it

/// Plain cell state stored in an extent
pub mod state;
/// Block catalog implementing the template capability
pub mod template;

pub use state::Tile;
pub use template::{Block, Template};
