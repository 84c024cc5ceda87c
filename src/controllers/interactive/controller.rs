use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::input_event::{ExplorerKey, InputEvent, PointerButton};
use crate::controllers::interactive::data::render_request::{RenderRequest, ResolutionTier};
use crate::controllers::interactive::errors::render::RenderError;
use crate::controllers::interactive::events::explorer_event::{ExplorerEvent, ViewportChange};
use crate::controllers::interactive::events::render::{RenderEvent, RenderFailure};
use crate::controllers::interactive::input::{InputSnapshot, InteractionState};
use crate::controllers::interactive::ports::event_sink::EventSink;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::controllers::interactive::scheduler::{RenderDecision, RenderScheduler, SchedulerState};
use crate::controllers::interactive::stats::FrameStats;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::point::ScreenPosition;
use crate::core::data::viewport::{ViewState, Viewport, ViewportError};
use crate::core::fractals::mandelbrot::colour_map::SmoothLinearGradient;
use crate::core::fractals::mandelbrot::engine::compute_escape_field;
use crate::core::fractals::mandelbrot::iteration_policy::IterationPolicy;
use crate::core::fractals::mandelbrot::mandelbrot_config::{ConfigError, MandelbrotConfig};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Engine then colour mapper for one view sampled on `grid`.
pub fn render_view(
    view: ViewState,
    reference_grid: PixelGrid,
    grid: PixelGrid,
    max_iterations: u32,
) -> Result<PixelBuffer, RenderError> {
    let field = compute_escape_field(view, reference_grid, grid, max_iterations)?;
    let colour_map = SmoothLinearGradient::new(max_iterations);

    Ok(generate_pixel_buffer(&field, &colour_map)?)
}

/// Owns the explorer state and turns input into renders.
///
/// Everything runs on the caller's thread: `handle_event` and `tick` return
/// only after any render they triggered has been presented.
pub struct InteractiveController {
    config: MandelbrotConfig,
    reference_grid: PixelGrid,
    viewport: Viewport,
    policy: IterationPolicy,
    scheduler: RenderScheduler,
    interaction: InteractionState,
    stats: FrameStats,
    generation: u64,
    presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
    event_sink: Arc<dyn EventSink>,
}

impl InteractiveController {
    pub fn new(
        config: MandelbrotConfig,
        presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
        event_sink: Arc<dyn EventSink>,
    ) -> Result<Self, ConfigError> {
        let resolved = config.resolve()?;

        Ok(Self {
            reference_grid: resolved.reference_grid,
            viewport: Viewport::new(resolved.initial_view),
            policy: resolved.iteration_policy,
            scheduler: RenderScheduler::new(),
            interaction: InteractionState::new(),
            stats: FrameStats::new(Duration::from_millis(config.stats_interval_ms)),
            generation: 0,
            presenter_port,
            event_sink,
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &MandelbrotConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn scheduler_state(&self) -> SchedulerState {
        self.scheduler.state()
    }

    #[must_use]
    pub fn input_snapshot(&self) -> InputSnapshot {
        self.interaction.snapshot()
    }

    #[must_use]
    pub fn current_max_iterations(&self) -> u32 {
        self.policy.max_iterations(self.viewport.zoom())
    }

    #[must_use]
    pub fn last_generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn last_fps(&self) -> Option<f64> {
        self.stats.last_fps()
    }

    #[must_use]
    pub fn request_for(&self, tier: ResolutionTier) -> RenderRequest {
        let (width, height) = match tier {
            ResolutionTier::Preview => (self.config.preview_width, self.config.preview_height),
            ResolutionTier::Full => (self.config.render_width, self.config.render_height),
        };

        RenderRequest {
            width,
            height,
            resolution_tier: tier,
        }
    }

    pub fn handle_event(&mut self, event: InputEvent) -> LoopControl {
        match event {
            InputEvent::CloseRequested => return LoopControl::Exit,
            InputEvent::PointerPressed { button, position } => {
                if !position.is_finite() {
                    return LoopControl::Continue;
                }

                self.interaction.button_pressed(button, position);

                if button == PointerButton::Secondary {
                    self.zoom_out_at(position);
                }
            }
            InputEvent::PointerMoved { position } => {
                if !position.is_finite() {
                    return LoopControl::Continue;
                }

                if let Some((dx, dy)) = self.interaction.pointer_moved(position) {
                    let smoothing = self.config.drag_smoothing;
                    self.change_view(ViewportChange::DragPan, |viewport| {
                        viewport.pan(dx * smoothing, dy * smoothing)
                    });
                }
            }
            InputEvent::PointerReleased { button, .. } => {
                if let Some(gesture) = self.interaction.button_released(button) {
                    if !gesture.moved {
                        self.zoom_in_at(gesture.press);
                    }
                }
            }
            InputEvent::Scrolled { delta, position } => {
                if !position.is_finite() {
                    return LoopControl::Continue;
                }

                if delta > 0.0 {
                    self.zoom_in_at(position);
                } else if delta < 0.0 {
                    self.zoom_out_at(position);
                }
            }
            InputEvent::KeyPressed { key } => {
                self.interaction.key_pressed(key);
                self.handle_key_action(key);
            }
            InputEvent::KeyReleased { key } => self.interaction.key_released(key),
            // an abandoned click must not zoom, so no gesture is finished here
            InputEvent::FocusLost => self.interaction.release_all(),
        }

        LoopControl::Continue
    }

    /// One frame of the host loop: held-key panning, then the debounced full
    /// render, then frame statistics.
    pub fn tick(&mut self, now: Instant) {
        let (x, y) = self.interaction.pan_vector();
        let step = self.config.pan_step;
        let (dx, dy) = (x * step, y * step);

        if dx != 0.0 || dy != 0.0 {
            self.change_view(ViewportChange::KeyPan, |viewport| viewport.pan(dx, dy));
        }

        if self.scheduler.decide(self.interaction.snapshot()) == RenderDecision::Full {
            self.issue(ResolutionTier::Full);
        }

        if let Some(fps) = self.stats.record_tick(now) {
            self.event_sink.emit(ExplorerEvent::Stats {
                fps,
                zoom: self.viewport.zoom(),
                offset_x: self.viewport.offset_x(),
                offset_y: self.viewport.offset_y(),
            });
        }
    }

    /// Renders the current view and presents the frame. Degenerate requests
    /// are rejected before a generation is assigned.
    pub fn render(&mut self, request: RenderRequest) -> Result<u64, RenderError> {
        let tier = request.resolution_tier;
        let grid = request.grid().inspect_err(|err| {
            self.event_sink.emit(ExplorerEvent::RenderFailed {
                tier,
                message: err.to_string(),
            });
        })?;

        self.generation += 1;
        let generation = self.generation;
        let view = self.viewport.state();
        let max_iterations = self.policy.max_iterations(view.zoom());

        self.event_sink.emit(ExplorerEvent::RenderStarted {
            tier,
            generation,
            width: grid.width(),
            height: grid.height(),
            max_iterations,
            zoom: view.zoom(),
            offset_x: view.offset_x(),
            offset_y: view.offset_y(),
        });

        let start = Instant::now();

        match render_view(view, self.reference_grid, grid, max_iterations) {
            Ok(pixel_buffer) => {
                let render_duration = start.elapsed();

                self.event_sink.emit(ExplorerEvent::RenderDone {
                    tier,
                    generation,
                    duration: render_duration,
                });
                self.presenter_port.present(RenderEvent::Frame(FrameData {
                    generation,
                    tier,
                    max_iterations,
                    pixel_buffer,
                    render_duration,
                }));

                Ok(generation)
            }
            Err(err) => {
                let message = err.to_string();

                self.event_sink.emit(ExplorerEvent::RenderFailed {
                    tier,
                    message: message.clone(),
                });
                self.presenter_port.present(RenderEvent::Error(RenderFailure {
                    generation,
                    tier,
                    message,
                }));

                Err(err)
            }
        }
    }

    fn issue(&mut self, tier: ResolutionTier) {
        let result = self.render(self.request_for(tier));

        // a rejected request leaves the scheduler where it was; a failed render
        // still counts so a broken full render is not retried every tick
        if matches!(result, Err(RenderError::DegenerateRequest(_))) {
            return;
        }

        match tier {
            ResolutionTier::Preview => self.scheduler.preview_issued(),
            ResolutionTier::Full => self.scheduler.full_issued(),
        }
    }

    fn handle_key_action(&mut self, key: ExplorerKey) {
        let centre = ScreenPosition::new(
            f64::from(self.config.render_width) / 2.0,
            f64::from(self.config.render_height) / 2.0,
        );

        match key {
            ExplorerKey::ZoomIn => self.zoom_in_at(centre),
            ExplorerKey::ZoomOut => self.zoom_out_at(centre),
            ExplorerKey::Reset => self.change_view(ViewportChange::Reset, |viewport| {
                viewport.reset();
                Ok(())
            }),
            ExplorerKey::Help => self.event_sink.emit(ExplorerEvent::HelpRequested),
            _ => {}
        }
    }

    fn zoom_in_at(&mut self, anchor: ScreenPosition) {
        let factor = self.config.zoom_factor;
        self.change_view(ViewportChange::ZoomIn, |viewport| {
            viewport.zoom_at(anchor.x, anchor.y, factor)
        });
    }

    fn zoom_out_at(&mut self, anchor: ScreenPosition) {
        let factor = 1.0 / self.config.zoom_factor;
        self.change_view(ViewportChange::ZoomOut, |viewport| {
            viewport.zoom_at(anchor.x, anchor.y, factor)
        });
    }

    fn change_view<F>(&mut self, change: ViewportChange, mutate: F)
    where
        F: FnOnce(&mut Viewport) -> Result<(), ViewportError>,
    {
        if let Err(err) = mutate(&mut self.viewport) {
            self.event_sink.emit(ExplorerEvent::ViewportRejected {
                change,
                message: err.to_string(),
            });
            return;
        }

        self.event_sink.emit(ExplorerEvent::ViewportChanged {
            change,
            zoom: self.viewport.zoom(),
            offset_x: self.viewport.offset_x(),
            offset_y: self.viewport.offset_y(),
        });

        self.issue(ResolutionTier::Preview);
    }
}
