pub mod colour;
pub mod complex;
pub mod fractal_mode;
pub mod iteration_limit;
pub mod pixel_buffer;
pub mod pixel_grid;
pub mod point;
pub mod viewport;
pub mod zoom_gesture;
