pub mod logging;
pub mod pixel_format;
