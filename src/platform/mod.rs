//! Platform abstraction layer
//!
//! Turns browser key events into per-tick simulation input.

pub mod input;

pub use input::InputState;
