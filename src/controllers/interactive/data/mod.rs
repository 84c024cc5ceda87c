pub mod frame_data;
pub mod input_event;
pub mod render_request;
