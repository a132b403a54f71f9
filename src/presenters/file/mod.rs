pub mod directory;
pub mod png;
