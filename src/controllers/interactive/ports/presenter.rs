use crate::controllers::interactive::events::render::RenderEvent;

/// Receives every finished frame and every render failure.
///
/// Events arrive synchronously from `InteractiveController::render`, in
/// increasing generation order. Implementations decide which generation to
/// display; they must not block.
pub trait InteractiveControllerPresenterPort: Send + Sync {
    fn present(&self, event: RenderEvent);
}
