use std::time::Instant;

use egui::Context;
use egui_winit::State as EguiWinitState;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::Window;

use crate::controllers::interactive::controller::{InteractiveController, LoopControl};
use crate::controllers::interactive::data::input_event::{ExplorerKey, InputEvent};
use crate::controllers::interactive::events::explorer_event::CONTROLS_HELP;
use crate::core::data::point::ScreenPosition;
use crate::input::gui::app::events::gui::GuiEvent;
use crate::input::gui::app::key_map::{explorer_key, pointer_button};
use crate::input::gui::app::ports::presenter::GuiPresenterPort;

pub struct GuiApp<T: GuiPresenterPort> {
    pub scale_factor: f64,
    presenter: T,
    pub controller: InteractiveController,
    cursor: ScreenPosition,
    show_help: bool,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<GuiEvent>,
        presenter: T,
        controller: InteractiveController,
    ) -> Self {
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        Self {
            scale_factor,
            presenter,
            controller,
            cursor: ScreenPosition::default(),
            show_help: false,
            egui_ctx,
            egui_state,
        }
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        self.presenter.render(egui_output, &self.egui_ctx)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.presenter.resize(width, height);
    }

    pub fn tick(&mut self, now: Instant) {
        self.controller.tick(now);
    }

    /// Forwards a window event to egui. Returns `(consumed, repaint)`.
    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }

    /// Translates a native event and feeds it to the controller. Presses that
    /// egui consumed are dropped; releases always go through so held state
    /// never sticks.
    pub fn handle_input(&mut self, event: &WindowEvent, egui_consumed: bool) -> LoopControl {
        let Some(input) = self.translate(event, egui_consumed) else {
            return LoopControl::Continue;
        };

        if input == (InputEvent::KeyPressed { key: ExplorerKey::Help }) {
            self.show_help = !self.show_help;
        }

        self.controller.handle_event(input)
    }

    fn translate(&mut self, event: &WindowEvent, egui_consumed: bool) -> Option<InputEvent> {
        match event {
            WindowEvent::CloseRequested => Some(InputEvent::CloseRequested),
            // winit sends no releases for keys or buttons held while unfocused
            WindowEvent::Focused(false) => Some(InputEvent::FocusLost),
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = self.presenter.window_to_reference(position.x, position.y);
                Some(InputEvent::PointerMoved {
                    position: self.cursor,
                })
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = pointer_button(*button)?;
                match state {
                    ElementState::Pressed if egui_consumed => None,
                    ElementState::Pressed => Some(InputEvent::PointerPressed {
                        button,
                        position: self.cursor,
                    }),
                    ElementState::Released => Some(InputEvent::PointerReleased {
                        button,
                        position: self.cursor,
                    }),
                }
            }
            WindowEvent::MouseWheel { delta, .. } if !egui_consumed => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => f64::from(*y),
                    MouseScrollDelta::PixelDelta(position) => position.y,
                };
                Some(InputEvent::Scrolled {
                    delta,
                    position: self.cursor,
                })
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return None;
                };
                let key = explorer_key(code)?;
                match event.state {
                    ElementState::Pressed if event.repeat || egui_consumed => None,
                    ElementState::Pressed => Some(InputEvent::KeyPressed { key }),
                    ElementState::Released => Some(InputEvent::KeyReleased { key }),
                }
            }
            _ => None,
        }
    }

    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let viewport = self.controller.viewport().state();
        let fps = self.controller.last_fps();
        let displayed = self.presenter.displayed_frame();
        let last_error = self.presenter.last_error().map(str::to_owned);
        let current_iterations = self.controller.current_max_iterations();
        let show_help = &mut self.show_help;

        self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Mandelbrot Explorer")
                .default_pos([10.0, 10.0])
                .default_size([240.0, 160.0])
                .resizable(false)
                .show(ctx, |ui| {
                    match fps {
                        Some(fps) => ui.label(format!("FPS: {fps:.1}")),
                        None => ui.label("FPS: -"),
                    };
                    ui.label(format!("Zoom: {:.2}", viewport.zoom()));
                    ui.label(format!(
                        "Iterations: {}",
                        displayed.map_or(current_iterations, |frame| frame.max_iterations)
                    ));
                    ui.label(format!(
                        "Offset: ({:.6}, {:.6})",
                        viewport.offset_x(),
                        viewport.offset_y()
                    ));
                    match displayed {
                        Some(frame) => ui.label(format!("Showing: {} #{}", frame.tier, frame.generation)),
                        None => ui.label("Showing: nothing yet"),
                    };

                    if let Some(message) = &last_error {
                        ui.separator();
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }

                    ui.separator();
                    ui.checkbox(show_help, "Show controls (H)");
                });

            if *show_help {
                egui::Window::new("Controls")
                    .default_pos([10.0, 200.0])
                    .resizable(false)
                    .show(ctx, |ui| {
                        for line in CONTROLS_HELP {
                            ui.label(*line);
                        }
                    });
            }
        })
    }
}
