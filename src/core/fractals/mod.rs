pub mod colour_maps;
pub mod escape_time;
pub mod julia;
pub mod mandelbrot;
