use std::marker::PhantomData;
use std::sync::Arc;
use std::time::{Duration, Instant};

use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoopBuilder};
use winit::window::{Window, WindowBuilder};

use crate::controllers::interactive::controller::{InteractiveController, LoopControl};
use crate::controllers::interactive::events::explorer_event::ExplorerEvent;
use crate::controllers::interactive::ports::event_sink::EventSink;
use crate::core::fractals::mandelbrot::mandelbrot_config::{ConfigError, MandelbrotConfig};
use crate::input::gui::app::{
    events::gui::GuiEvent, gui_app::GuiApp, ports::presenter::GuiPresenterPort,
};
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: MandelbrotConfig,
    event_sink: Arc<dyn EventSink>,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(
        presenter_factory: F,
        config: MandelbrotConfig,
        event_sink: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            presenter_factory,
            config,
            event_sink,
            _phantom: PhantomData,
        }
    }

    /// Opens the window and runs until it is closed.
    pub fn execute(&self) -> Result<(), ConfigError> {
        let resolved = self.config.resolve()?;

        let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event()
            .build()
            .expect("Failed to create event loop");

        let event_loop_proxy = event_loop.create_proxy();

        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Mandelbrot Explorer")
                .with_inner_size(LogicalSize::new(
                    self.config.window_width,
                    self.config.window_height,
                ))
                .with_min_inner_size(LogicalSize::new(200.0, 150.0))
                .build(&event_loop)
                .expect("Failed to create window"),
        ));

        let presenter: P =
            self.presenter_factory
                .build(window, event_loop_proxy, resolved.reference_grid);
        let controller = InteractiveController::new(
            self.config.clone(),
            presenter.share_adapter(),
            Arc::clone(&self.event_sink),
        )?;
        let mut app = GuiApp::new(window, &event_loop, presenter, controller);

        // controls are listed once at start-up
        self.event_sink.emit(ExplorerEvent::HelpRequested);

        let tick_period = Duration::from_secs(1) / self.config.frames_per_second;
        let mut next_tick = Instant::now();
        let mut redraw_pending = true;

        event_loop
            .run(move |event, elwt| match event {
                Event::UserEvent(GuiEvent::Wake) => {
                    redraw_pending = true;
                }
                Event::WindowEvent {
                    ref event,
                    window_id,
                } if window_id == window.id() => {
                    let (egui_consumed, egui_repaint) = app.handle_window_event(window, event);

                    if egui_repaint {
                        redraw_pending = true;
                    }

                    if app.handle_input(event, egui_consumed) == LoopControl::Exit {
                        elwt.exit();
                        return;
                    }

                    match event {
                        WindowEvent::RedrawRequested => {
                            redraw_pending = false;

                            let egui_output = app.update_ui(window);

                            app.egui_state.handle_platform_output(
                                window,
                                egui_output.platform_output.clone(),
                            );

                            if egui_output
                                .viewport_output
                                .values()
                                .any(|v| v.repaint_delay.is_zero())
                            {
                                redraw_pending = true;
                            }

                            if let Err(err) = app.render(egui_output) {
                                tracing::error!(%err, "render error");
                                elwt.exit();
                            }
                        }
                        WindowEvent::Resized(size) => {
                            app.resize(size.width, size.height);
                            redraw_pending = true;
                        }
                        WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                            app.scale_factor = *scale_factor;
                            app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                            let size = window.inner_size();
                            app.resize(size.width, size.height);
                            redraw_pending = true;
                        }
                        _ => {}
                    }
                }
                Event::AboutToWait => {
                    let now = Instant::now();

                    if now >= next_tick {
                        app.tick(now);
                        next_tick = now + tick_period;
                        // the overlay shows live stats
                        redraw_pending = true;
                    }

                    elwt.set_control_flow(ControlFlow::WaitUntil(next_tick));

                    if redraw_pending {
                        window.request_redraw();
                    }
                }
                _ => {}
            })
            .expect("Event loop error");

        Ok(())
    }
}
