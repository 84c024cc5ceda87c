//! Windowed host for interactive exploration.
//!
//! `winit` owns the window and event loop, `pixels` draws the frame and `egui`
//! draws the overlay. Native events are translated to
//! [`InputEvent`](crate::controllers::interactive::InputEvent)s and fed to the
//! interactive controller, which is ticked at the configured frame rate.

pub mod app;
pub mod commands;
