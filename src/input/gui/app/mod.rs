pub mod events;
pub mod gui_app;
pub mod key_map;
pub mod ports;
