pub mod render;
pub mod scheduler;
