//! muster-vfs: Filesystem capability interface and backends.
//!
//! Defines the minimal read-only contract the glob engine needs from a
//! backing store, plus two implementations:
//!
//! - **OsFileSystem**: the real, `std::fs`-backed filesystem
//! - **MemoryFileSystem**: a fully in-memory tree for tests and embedders
//!
//! Also provides the environment/platform provider ([`Environment`],
//! [`Platform`]) used for working-directory and case-sensitivity defaults,
//! with a fake counterpart for tests.
//!
//! Queries are synchronous and infallible: implementations treat missing
//! directories and I/O failures as empty listings. Callers that need to
//! distinguish "missing" from "empty" check existence first, which is
//! exactly what the glob engine does.

mod env;
mod filter;
mod local;
mod memory;

pub use env::{
    Environment, FakeEnvironment, Platform, PlatformFamily, SystemEnvironment, default_comparer,
};
pub use filter::name_matches;
pub use local::OsFileSystem;
pub use memory::MemoryFileSystem;

use muster_paths::{DirectoryPath, FilePath};

/// How far a directory listing reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    /// Direct children only.
    CurrentLevelOnly,
    /// The whole subtree. Symlinked directories are listed but not entered.
    Recursive,
}

/// The files and directories produced by [`FileSystem::list_entries`].
#[derive(Debug, Clone, Default)]
pub struct DirectoryListing {
    pub files: Vec<FilePath>,
    pub directories: Vec<DirectoryPath>,
}

impl DirectoryListing {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.directories.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len() + self.directories.len()
    }
}

/// Minimal read-only filesystem abstraction.
///
/// Implement this trait to adapt any backing store (the OS, an in-memory
/// tree, an archive) to the glob engine. All methods are total: a path
/// that does not exist simply reports `false` or an empty listing.
pub trait FileSystem {
    /// Check if a directory exists at the path.
    fn directory_exists(&self, path: &DirectoryPath) -> bool;

    /// Check if a regular file exists at the path.
    fn file_exists(&self, path: &FilePath) -> bool;

    /// List entries under a directory.
    ///
    /// `filter` is a name pattern (`*`/`?`/literal, see [`name_matches`])
    /// applied to each entry's final path component; `*` lists everything.
    fn list_entries(
        &self,
        path: &DirectoryPath,
        filter: &str,
        scope: SearchScope,
    ) -> DirectoryListing;

    /// Whether the directory is hidden (dot-prefixed, or carrying the
    /// hidden attribute where the backing store has one). Consulted by
    /// callers that opt into hiding; nothing in this crate prunes on it.
    fn is_hidden(&self, path: &DirectoryPath) -> bool;
}
