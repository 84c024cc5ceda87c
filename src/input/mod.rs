//! Input hosts that turn native events into explorer input.

#[cfg(feature = "gui")]
pub mod gui;
