//! Platform abstraction layer
//!
//! Translates terminal input into session commands. The session itself never
//! sees key codes.

pub mod input;

pub use input::{KeyAction, map_key};
