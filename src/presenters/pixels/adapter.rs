use winit::event_loop::EventLoopProxy;

use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::events::render::{RenderEvent, RenderFailure};
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::input::gui::app::events::gui::GuiEvent;
use crate::presenters::memory::latest_frame::LatestFramePresenter;

/// Controller-facing half of the pixels presenter. Keeps the newest frame and
/// wakes the event loop.
pub struct PixelsAdapter {
    latest: LatestFramePresenter,
    event_loop_proxy: EventLoopProxy<GuiEvent>,
}

impl InteractiveControllerPresenterPort for PixelsAdapter {
    fn present(&self, event: RenderEvent) {
        self.latest.present(event);
        let _ = self.event_loop_proxy.send_event(GuiEvent::Wake);
    }
}

impl PixelsAdapter {
    pub fn new(event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        Self {
            latest: LatestFramePresenter::new(),
            event_loop_proxy,
        }
    }

    pub fn take_frame(&self) -> Option<FrameData> {
        self.latest.take_frame()
    }

    pub fn last_failure(&self) -> Option<RenderFailure> {
        self.latest.failures().pop()
    }
}
