pub mod generate_fractal_rayon;
pub mod generate_fractal_serial;
pub mod ports;
