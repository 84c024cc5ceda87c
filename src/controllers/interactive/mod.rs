//! Interactive controller for real-time Mandelbrot exploration.
//!
//! # Architecture
//!
//! The interactive controller follows the ports & adapters pattern:
//! - **Input**: `InputEvent`s from the host plus a periodic `tick`
//! - **Output**: `InteractiveControllerPresenterPort` for finished frames and
//!   `EventSink` for typed log events
//! - **Core**: viewport, iteration policy, engine and colour map from `core/`

pub mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod input;
pub mod ports;
pub mod scheduler;
pub mod stats;

pub use controller::{InteractiveController, LoopControl};
pub use data::input_event::{ExplorerKey, InputEvent, PointerButton};
pub use data::render_request::{RenderRequest, ResolutionTier};
pub use events::explorer_event::{ExplorerEvent, ViewportChange};
pub use ports::event_sink::EventSink;
pub use ports::presenter::InteractiveControllerPresenterPort;
