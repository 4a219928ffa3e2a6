//! EternaVerse desktop front-end.
//!
//! Renders the poem board from [`eterna_core::BoardState`] snapshots and
//! forwards clicks to the shared [`eterna_core::PoemBoard`].

pub mod components;
pub mod config;
pub mod state;
pub mod view;

/// Board CSS, embedded at compile time.
pub const STYLES_CSS: &str = include_str!("style.css");
