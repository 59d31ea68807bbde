//! Terminal rendering module
//!
//! Draws a [`SessionView`](crate::view::SessionView) onto a ratatui canvas
//! whose coordinates match the arena's.

pub mod canvas;

pub use canvas::draw;
