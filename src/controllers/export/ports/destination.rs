use std::path::PathBuf;

/// Picks where an export is written, typically by asking the user.
pub trait DestinationChooser {
    /// `None` cancels the export.
    fn choose(&self, suggested_name: &str) -> Option<PathBuf>;
}
