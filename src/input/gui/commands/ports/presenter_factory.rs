use winit::{event_loop::EventLoopProxy, window::Window};

use crate::core::data::pixel_grid::PixelGrid;
use crate::input::gui::app::{events::gui::GuiEvent, ports::presenter::GuiPresenterPort};

pub trait GuiPresenterFactoryPort<T: GuiPresenterPort> {
    /// Builds a presenter whose framebuffer is `reference_grid` sized.
    fn build(
        &self,
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
        reference_grid: PixelGrid,
    ) -> T;
}
