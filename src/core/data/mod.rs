pub mod colour;
pub mod complex;
pub mod escape_field;
pub mod pixel_buffer;
pub mod pixel_grid;
pub mod point;
pub mod viewport;
