use crate::controllers::interactive::events::explorer_event::{CONTROLS_HELP, ExplorerEvent};
use crate::controllers::interactive::ports::event_sink::EventSink;

/// Forwards explorer events to `tracing` with structured fields.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn emit(&self, event: ExplorerEvent) {
        match event {
            ExplorerEvent::ViewportChanged {
                change,
                zoom,
                offset_x,
                offset_y,
            } => {
                tracing::info!(%change, zoom, offset_x, offset_y, "viewport changed");
            }
            ExplorerEvent::ViewportRejected { change, message } => {
                tracing::warn!(%change, %message, "viewport change rejected");
            }
            ExplorerEvent::RenderStarted {
                tier,
                generation,
                width,
                height,
                max_iterations,
                zoom,
                offset_x,
                offset_y,
            } => {
                tracing::debug!(
                    %tier,
                    generation,
                    width,
                    height,
                    max_iterations,
                    zoom,
                    offset_x,
                    offset_y,
                    "render started"
                );
            }
            ExplorerEvent::RenderDone {
                tier,
                generation,
                duration,
            } => {
                tracing::info!(
                    %tier,
                    generation,
                    duration_ms = duration.as_secs_f64() * 1000.0,
                    "render done"
                );
            }
            ExplorerEvent::RenderFailed { tier, message } => {
                tracing::warn!(%tier, %message, "render failed");
            }
            ExplorerEvent::Stats {
                fps,
                zoom,
                offset_x,
                offset_y,
            } => {
                tracing::info!(fps, zoom, offset_x, offset_y, "stats");
            }
            ExplorerEvent::HelpRequested => {
                for line in CONTROLS_HELP {
                    tracing::info!("{line}");
                }
            }
        }
    }
}
