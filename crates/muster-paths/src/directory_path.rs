//! The directory path value type.

use std::fmt;

use crate::collapse::collapse;
use crate::path::{is_relative, join, normalize, segments};
use crate::relative::relative_between;
use crate::{FilePath, PathError};

/// An immutable, normalized directory path.
///
/// # Examples
/// ```
/// use muster_paths::{DirectoryPath, FilePath};
///
/// let dir = DirectoryPath::new("/Working").unwrap();
/// let file = FilePath::new("Foo/Bar.c").unwrap();
/// assert_eq!(dir.combine_with_file(&file).full_path(), "/Working/Foo/Bar.c");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DirectoryPath {
    full: String,
}

impl DirectoryPath {
    /// Construct a directory path from a raw string, normalizing separators
    /// and rejecting empty or whitespace-only input.
    pub fn new(path: &str) -> Result<Self, PathError> {
        Ok(Self {
            full: normalize(path)?,
        })
    }

    /// The current-directory value (the empty path, as produced by
    /// normalizing `./`).
    pub fn current() -> Self {
        Self { full: String::new() }
    }

    pub(crate) fn from_normalized(full: String) -> Self {
        Self { full }
    }

    pub fn full_path(&self) -> &str {
        &self.full
    }

    /// Path components, with the Unix root marker fused into the first
    /// segment for absolute paths.
    pub fn segments(&self) -> Vec<&str> {
        segments(&self.full)
    }

    pub fn is_relative(&self) -> bool {
        is_relative(&self.full)
    }

    pub fn is_absolute(&self) -> bool {
        !self.is_relative()
    }

    /// Combine with another directory path. An absolute argument wins;
    /// a relative one is appended.
    pub fn combine(&self, other: &DirectoryPath) -> DirectoryPath {
        if other.is_absolute() {
            other.clone()
        } else {
            DirectoryPath::from_normalized(join(&self.full, &other.full))
        }
    }

    /// Combine with a file path. An absolute argument wins; a relative one
    /// is appended.
    pub fn combine_with_file(&self, file: &FilePath) -> FilePath {
        if file.is_absolute() {
            file.clone()
        } else {
            FilePath::from_normalized(join(&self.full, file.full_path()))
        }
    }

    /// Resolve the path against an absolute base directory and collapse any
    /// `.`/`..` segments. An already absolute path is returned unchanged.
    pub fn make_absolute(&self, base: &DirectoryPath) -> Result<DirectoryPath, PathError> {
        if base.is_relative() {
            return Err(PathError::RelativeBase { kind: "directory" });
        }
        if self.is_relative() {
            base.combine(self).collapse()
        } else {
            Ok(self.clone())
        }
    }

    /// Resolve `.` and `..` segments.
    pub fn collapse(&self) -> Result<DirectoryPath, PathError> {
        Ok(DirectoryPath::from_normalized(collapse(&self.full)?))
    }

    /// The relative path from this directory to a target directory. Both
    /// endpoints must be absolute and share a root; resolves to `.` when
    /// they are equal.
    pub fn relative_path_to(&self, to: &DirectoryPath) -> Result<DirectoryPath, PathError> {
        Ok(DirectoryPath::from_normalized(relative_between(
            &self.full, &to.full,
        )?))
    }

    /// The relative path from this directory to a target file.
    pub fn relative_path_to_file(&self, to: &FilePath) -> Result<FilePath, PathError> {
        let relative = relative_between(&self.full, to.directory().full_path())?;
        Ok(FilePath::from_normalized(join(
            &relative,
            to.filename().full_path(),
        )))
    }
}

impl fmt::Display for DirectoryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full)
    }
}

impl AsRef<str> for DirectoryPath {
    fn as_ref(&self) -> &str {
        &self.full
    }
}
