//! muster-glob: Glob pattern compilation and filesystem traversal.
//!
//! Compiles wildcard path expressions (`src/**/*.c`) into a chain of typed
//! segment nodes, then walks that chain against a [`muster_vfs::FileSystem`],
//! producing every existing file or directory the pattern matches.
//!
//! Supported syntax: literal segments, `*` (any run within a segment), `?`
//! (one character), `**` (zero or more directory levels, including zero),
//! `.` and `..` navigation, Unix and drive roots. Brace expansion and
//! character classes are not supported.
//!
//! # Examples
//! ```
//! use muster_glob::{Globber, GlobberSettings};
//! use muster_paths::FilePath;
//! use muster_vfs::{FakeEnvironment, MemoryFileSystem};
//!
//! let environment = FakeEnvironment::unix();
//! let mut fs = MemoryFileSystem::for_environment(&environment);
//! fs.create_file(&FilePath::new("/Working/src/main.c").unwrap());
//!
//! let globber = Globber::new(&fs, &environment);
//! let results = globber
//!     .match_pattern("/Working/**/*.c", &GlobberSettings::default())
//!     .unwrap();
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].full_path(), "/Working/src/main.c");
//! ```

mod context;
mod globber;
mod node;
mod parser;
mod settings;
mod visitor;

pub use globber::Globber;
pub use settings::GlobberSettings;

use muster_paths::PathError;
use thiserror::Error;

/// Errors from pattern compilation and traversal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GlobError {
    #[error("UNC paths are not supported.")]
    UncNotSupported,
    #[error("Visiting a parent that is a recursive wildcard is not supported.")]
    RecursiveWildcardParent,
    #[error(transparent)]
    Path(#[from] PathError),
}
