//! The OS-backed filesystem.

use std::fs;
use std::path::Path;

use muster_paths::{DirectoryPath, FilePath};

use crate::filter::name_matches;
use crate::{DirectoryListing, FileSystem, SearchScope};

/// The real filesystem, queried through `std::fs`.
///
/// Listings are sorted by name for deterministic traversal order. Recursive
/// listings do not follow symlinked directories: the symlink itself is
/// listed as a directory, but its target is never entered, so a cyclic link
/// cannot loop the walk. I/O errors (permissions, races) demote to empty
/// listings with a warning.
#[derive(Debug, Default)]
pub struct OsFileSystem;

impl OsFileSystem {
    pub fn new() -> Self {
        Self
    }

    fn collect(&self, dir: &Path, filter: &str, scope: SearchScope, out: &mut DirectoryListing) {
        let reader = match fs::read_dir(dir) {
            Ok(reader) => reader,
            Err(error) => {
                tracing::warn!(path = %dir.display(), %error, "skipping unreadable directory");
                return;
            }
        };

        let mut entries: Vec<_> = reader.flatten().collect();
        entries.sort_by_key(|entry| entry.file_name());

        for entry in entries {
            let Ok(file_type) = entry.file_type() else {
                continue;
            };
            let name = entry.file_name().to_string_lossy().into_owned();
            let full = entry.path();
            let is_symlink = file_type.is_symlink();
            // A symlink's own type says "symlink"; what it points at decides
            // whether it lists as a directory.
            let is_dir = if is_symlink {
                full.is_dir()
            } else {
                file_type.is_dir()
            };

            if is_dir {
                if name_matches(filter, &name)
                    && let Ok(path) = DirectoryPath::new(&full.to_string_lossy())
                {
                    out.directories.push(path);
                }
                if scope == SearchScope::Recursive && !is_symlink {
                    self.collect(&full, filter, scope, out);
                }
            } else if name_matches(filter, &name)
                && let Ok(path) = FilePath::new(&full.to_string_lossy())
            {
                out.files.push(path);
            }
        }
    }
}

impl FileSystem for OsFileSystem {
    fn directory_exists(&self, path: &DirectoryPath) -> bool {
        Path::new(path.full_path()).is_dir()
    }

    fn file_exists(&self, path: &FilePath) -> bool {
        Path::new(path.full_path()).is_file()
    }

    fn list_entries(
        &self,
        path: &DirectoryPath,
        filter: &str,
        scope: SearchScope,
    ) -> DirectoryListing {
        let mut listing = DirectoryListing::default();
        if self.directory_exists(path) {
            self.collect(Path::new(path.full_path()), filter, scope, &mut listing);
        }
        listing
    }

    fn is_hidden(&self, path: &DirectoryPath) -> bool {
        let dot_named = path
            .segments()
            .last()
            .is_some_and(|name| name.trim_start_matches('/').starts_with('.'));
        dot_named || has_hidden_attribute(path)
    }
}

#[cfg(windows)]
fn has_hidden_attribute(path: &DirectoryPath) -> bool {
    use std::os::windows::fs::MetadataExt;
    const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;
    fs::metadata(path.full_path())
        .map(|meta| meta.file_attributes() & FILE_ATTRIBUTE_HIDDEN != 0)
        .unwrap_or(false)
}

#[cfg(not(windows))]
fn has_hidden_attribute(_path: &DirectoryPath) -> bool {
    false
}
