pub mod adapters;
pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;

pub use crate::adapters::logging::tracing_sink::TracingEventSink;
pub use crate::controllers::cli::replay::{
    ReplayController, ReplayError, ReplayOutcome, ReplayStep, load_script,
};
pub use crate::controllers::cli::snapshot::{SnapshotController, SnapshotError};
pub use crate::controllers::interactive::{
    EventSink, ExplorerEvent, ExplorerKey, InputEvent, InteractiveController, LoopControl,
    PointerButton, RenderRequest, ResolutionTier,
};
pub use crate::core::data::viewport::{ViewState, Viewport, ViewportError};
pub use crate::core::fractals::mandelbrot::mandelbrot_config::{ConfigError, MandelbrotConfig};
pub use crate::presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use crate::input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::factory::PixelsPresenterFactory;

/// Installs the global `tracing` subscriber. `RUST_LOG` overrides the
/// default `info` filter.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}
