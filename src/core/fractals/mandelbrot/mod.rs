pub mod algorithm;
pub mod colour_map;
pub mod engine;
pub mod errors;
pub mod iteration_policy;
pub mod mandelbrot_config;
