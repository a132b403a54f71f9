use std::path::PathBuf;

use crate::controllers::export::ports::destination::DestinationChooser;

/// Accepts the suggested file name inside a fixed directory.
pub struct DirectoryChooser {
    directory: PathBuf,
}

impl DestinationChooser for DirectoryChooser {
    fn choose(&self, suggested_name: &str) -> Option<PathBuf> {
        Some(self.directory.join(suggested_name))
    }
}

impl DirectoryChooser {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }
}
