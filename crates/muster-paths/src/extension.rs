//! File extension parsing and mutation.

use std::fmt;

/// A file extension, stored without its leading dot.
///
/// An empty name is the distinguishable "no extension" marker: appending or
/// changing to an empty extension leaves a path unchanged, so `""` and `"."`
/// inputs behave as no-ops at the [`crate::FilePath`] level.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileExtension {
    name: String,
}

impl FileExtension {
    /// Create an extension from text, trimming whitespace and stripping any
    /// leading dots (`".dat"` and `"dat"` are the same extension).
    pub fn new(name: &str) -> Self {
        Self {
            name: name.trim().trim_start_matches('.').to_string(),
        }
    }

    /// The extension text, without a leading dot.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True for the "no extension" marker.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

impl fmt::Display for FileExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for FileExtension {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
