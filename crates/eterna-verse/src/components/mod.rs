//! UI components for the poem board.

mod app;
mod composer;
mod header;
mod poem_list;

pub use app::*;
pub use composer::*;
pub use header::*;
pub use poem_list::*;
