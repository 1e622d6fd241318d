//! The file path value type.

use std::fmt;

use crate::collapse::collapse;
use crate::path::{is_relative, join, normalize, segments};
use crate::relative::relative_between;
use crate::{DirectoryPath, FileExtension, PathError};

/// An immutable, normalized file path.
///
/// # Examples
/// ```
/// use muster_paths::FilePath;
///
/// let path = FilePath::new("temp\\hello.txt").unwrap();
/// assert_eq!(path.full_path(), "temp/hello.txt");
/// assert_eq!(path.directory().full_path(), "temp");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilePath {
    full: String,
}

impl FilePath {
    /// Construct a file path from a raw string, normalizing separators and
    /// rejecting empty or whitespace-only input.
    pub fn new(path: &str) -> Result<Self, PathError> {
        Ok(Self {
            full: normalize(path)?,
        })
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

    /// Whether the filename carries an extension.
    pub fn has_extension(&self) -> bool {
        self.extension().is_some()
    }

    /// The filename's extension, or `None` when it has none. Dotfiles and
    /// names with only a trailing dot count as extensionless.
    pub fn extension(&self) -> Option<FileExtension> {
        let name = self.filename_str();
        match name.rfind('.') {
            Some(idx) if idx > 0 && idx + 1 < name.len() => {
                Some(FileExtension::new(&name[idx + 1..]))
            }
            _ => None,
        }
    }

    /// Replace the extension, or just append when there is none to replace.
    ///
    /// ```
    /// use muster_paths::{FileExtension, FilePath};
    ///
    /// let path = FilePath::new("temp/hello.txt").unwrap();
    /// assert_eq!(
    ///     path.change_extension(&FileExtension::new(".dat")).full_path(),
    ///     "temp/hello.dat"
    /// );
    /// ```
    pub fn change_extension(&self, extension: &FileExtension) -> FilePath {
        self.remove_extension().append_extension(extension)
    }

    /// Append an extension after the current filename. Appending the empty
    /// "no extension" marker returns the path unchanged.
    pub fn append_extension(&self, extension: &FileExtension) -> FilePath {
        if extension.is_empty() {
            self.clone()
        } else {
            FilePath::from_normalized(format!("{}.{}", self.full, extension.name()))
        }
    }

    /// Strip the extension, if any.
    pub fn remove_extension(&self) -> FilePath {
        let name = self.filename_str();
        match name.rfind('.') {
            Some(idx) if idx > 0 && idx + 1 < name.len() => {
                let cut = self.full.len() - (name.len() - idx);
                FilePath::from_normalized(self.full[..cut].to_string())
            }
            _ => self.clone(),
        }
    }

    /// The filename component.
    pub fn filename(&self) -> FilePath {
        FilePath::from_normalized(self.filename_str().to_string())
    }

    /// The filename component without its extension.
    pub fn filename_without_extension(&self) -> FilePath {
        self.filename().remove_extension()
    }

    /// The directory part of the path; empty for a bare filename.
    pub fn directory(&self) -> DirectoryPath {
        match self.full.rfind('/') {
            None | Some(0) => DirectoryPath::current(),
            Some(idx) => DirectoryPath::new(&self.full[..idx])
                .unwrap_or_else(|_| DirectoryPath::current()),
        }
    }

    /// Resolve the path against an absolute base directory and collapse any
    /// `.`/`..` segments. An already absolute path is returned unchanged.
    pub fn make_absolute(&self, base: &DirectoryPath) -> Result<FilePath, PathError> {
        if base.is_relative() {
            return Err(PathError::RelativeBase { kind: "file" });
        }
        if self.is_relative() {
            base.combine_with_file(self).collapse()
        } else {
            Ok(self.clone())
        }
    }

    /// Resolve `.` and `..` segments.
    pub fn collapse(&self) -> Result<FilePath, PathError> {
        Ok(FilePath::from_normalized(collapse(&self.full)?))
    }

    /// The relative path from this file's directory to a target directory.
    /// Both endpoints must be absolute and share a root.
    pub fn relative_path_to(&self, to: &DirectoryPath) -> Result<DirectoryPath, PathError> {
        if self.is_relative() {
            return Err(PathError::RelativeSource);
        }
        self.directory().relative_path_to(to)
    }

    /// The relative path from this file's directory to a target file.
    pub fn relative_path_to_file(&self, to: &FilePath) -> Result<FilePath, PathError> {
        if self.is_relative() {
            return Err(PathError::RelativeSource);
        }
        let relative = relative_between(self.directory().full_path(), to.directory().full_path())?;
        Ok(FilePath::from_normalized(join(
            &relative,
            to.filename_str(),
        )))
    }

    fn filename_str(&self) -> &str {
        self.full.rsplit('/').next().unwrap_or(&self.full)
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full)
    }
}

impl AsRef<str> for FilePath {
    fn as_ref(&self) -> &str {
        &self.full
    }
}
