/// User events for the GUI event loop.
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// A frame or render failure was presented. The handler decides whether
    /// a redraw is needed.
    Wake,
}
