use std::sync::Arc;

use egui::Context as EguiContext;

use crate::controllers::interactive::data::render_request::ResolutionTier;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::data::point::ScreenPosition;

/// What the window currently shows.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DisplayedFrame {
    pub generation: u64,
    pub tier: ResolutionTier,
    pub max_iterations: u32,
}

pub trait GuiPresenterPort {
    /// Draws the newest presented frame plus the egui overlay.
    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error>;
    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort>;
    fn resize(&mut self, width: u32, height: u32);
    /// Maps a physical window position to reference-grid pixel units.
    fn window_to_reference(&self, x: f64, y: f64) -> ScreenPosition;
    fn displayed_frame(&self) -> Option<DisplayedFrame>;
    fn last_error(&self) -> Option<&str>;
}
