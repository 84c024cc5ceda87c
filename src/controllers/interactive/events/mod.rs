pub mod explorer_event;
pub mod render;
