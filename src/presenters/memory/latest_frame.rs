use std::sync::Mutex;

use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::events::render::{RenderEvent, RenderFailure};
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;

#[derive(Debug, Default)]
struct Slot {
    frame: Option<FrameData>,
    failures: Vec<RenderFailure>,
    frames_presented: u64,
}

/// Keeps the newest frame in memory; used by headless hosts.
#[derive(Debug, Default)]
pub struct LatestFramePresenter {
    slot: Mutex<Slot>,
}

impl InteractiveControllerPresenterPort for LatestFramePresenter {
    fn present(&self, event: RenderEvent) {
        let Ok(mut slot) = self.slot.lock() else {
            return;
        };

        match event {
            RenderEvent::Frame(frame) => {
                slot.frames_presented += 1;

                let is_newer = slot
                    .frame
                    .as_ref()
                    .is_none_or(|current| frame.generation > current.generation);

                if is_newer {
                    slot.frame = Some(frame);
                }
            }
            RenderEvent::Error(failure) => slot.failures.push(failure),
        }
    }
}

impl LatestFramePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn take_frame(&self) -> Option<FrameData> {
        self.slot.lock().ok().and_then(|mut slot| slot.frame.take())
    }

    #[must_use]
    pub fn frames_presented(&self) -> u64 {
        self.slot.lock().map(|slot| slot.frames_presented).unwrap_or(0)
    }

    #[must_use]
    pub fn failures(&self) -> Vec<RenderFailure> {
        self.slot
            .lock()
            .map(|slot| slot.failures.clone())
            .unwrap_or_default()
    }
}
