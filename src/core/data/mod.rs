pub mod colour;
pub mod complex;
pub mod iteration_matrix;
pub mod palette;
pub mod pixel_buffer;
pub mod resolution;
pub mod view_state;
pub mod viewport;
