use std::sync::Arc;

use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::wgpu;
use pixels::{Pixels, SurfaceTexture};
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

use crate::adapters::pixel_format::upscale_rgb_to_rgba;
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::point::ScreenPosition;
use crate::input::gui::app::events::gui::GuiEvent;
use crate::input::gui::app::ports::presenter::{DisplayedFrame, GuiPresenterPort};
use crate::presenters::pixels::adapter::PixelsAdapter;

/// Draws frames into a `pixels` framebuffer sized to the reference grid and
/// lets `pixels` scale it to the window.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    adapter: Arc<PixelsAdapter>,
    reference_grid: PixelGrid,
    surface_width: u32,
    surface_height: u32,
    displayed: Option<DisplayedFrame>,
    last_error: Option<String>,
}

impl PixelsPresenter {
    pub fn new(
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
        reference_grid: PixelGrid,
    ) -> Self {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        let pixels = Pixels::new(
            reference_grid.width(),
            reference_grid.height(),
            surface_texture,
        )
        .expect("Failed to create pixels surface");

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        let mut presenter = Self {
            pixels,
            egui_renderer,
            adapter: Arc::new(PixelsAdapter::new(event_loop_proxy)),
            reference_grid,
            surface_width: size.width,
            surface_height: size.height,
            displayed: None,
            last_error: None,
        };
        presenter.clear();

        presenter
    }

    fn clear(&mut self) {
        for pixel in self.pixels.frame_mut().chunks_exact_mut(4) {
            pixel.copy_from_slice(&[0, 0, 0, 255]);
        }
    }

    fn pull_latest(&mut self) {
        if let Some(frame) = self.adapter.take_frame() {
            let is_newer = self
                .displayed
                .is_none_or(|shown| frame.generation > shown.generation);

            if is_newer {
                self.draw_frame(&frame);
            }
        }

        if let Some(failure) = self.adapter.last_failure() {
            let is_current = self
                .displayed
                .is_none_or(|shown| failure.generation >= shown.generation);

            if is_current {
                self.last_error = Some(failure.message);
            }
        }
    }

    fn draw_frame(&mut self, frame: &FrameData) {
        let src_grid = frame.pixel_buffer.grid();

        upscale_rgb_to_rgba(
            frame.pixel_buffer.buffer(),
            src_grid.width(),
            src_grid.height(),
            self.pixels.frame_mut(),
            self.reference_grid.width(),
            self.reference_grid.height(),
        );

        self.displayed = Some(DisplayedFrame {
            generation: frame.generation,
            tier: frame.tier,
            max_iterations: frame.max_iterations,
        });
        self.last_error = None;
    }
}

impl GuiPresenterPort for PixelsPresenter {
    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort> {
        Arc::clone(&self.adapter) as Arc<dyn InteractiveControllerPresenterPort>
    }

    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        self.pull_latest();

        let surface_size = [self.surface_width, self.surface_height];

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: surface_size,
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            // keep the fractal underneath
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer
                    .render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.surface_width = width;
        self.surface_height = height;

        if width == 0 || height == 0 {
            return;
        }

        // the buffer stays at the reference grid; only the surface follows the window
        if let Err(err) = self.pixels.resize_surface(width, height) {
            tracing::error!(%err, width, height, "failed to resize surface");
        }
    }

    fn window_to_reference(&self, x: f64, y: f64) -> ScreenPosition {
        // outside the letterboxed image the unclamped position is still a valid anchor
        let (px, py) = match self.pixels.window_pos_to_pixel((x as f32, y as f32)) {
            Ok((px, py)) => (px as f64, py as f64),
            Err((px, py)) => (px as f64, py as f64),
        };

        ScreenPosition::new(px, py)
    }

    fn displayed_frame(&self) -> Option<DisplayedFrame> {
        self.displayed
    }

    fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
