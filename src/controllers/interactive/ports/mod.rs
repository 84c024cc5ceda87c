//! Port definitions for the interactive controller.
//!
//! The controller pushes finished frames to a presenter and typed log events
//! to an event sink; both are implemented outside the controller.

pub mod event_sink;
pub mod presenter;
