pub mod algorithm;
pub mod colour_map;
pub mod errors;
pub mod mandelbrot_config;
pub mod palette_cache;
