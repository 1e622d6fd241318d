//! Match configuration.

use muster_paths::{DirectoryPath, PathComparer};

/// Settings for one match call.
///
/// All three knobs are optional: the root defaults to the environment's
/// working directory, the predicate to "traverse everything", and the
/// comparer to the platform default.
///
/// # Examples
/// ```
/// use muster_glob::GlobberSettings;
/// use muster_paths::DirectoryPath;
///
/// let settings = GlobberSettings::new()
///     .with_root(DirectoryPath::new("/repo").unwrap())
///     .with_predicate(|dir| !dir.full_path().ends_with("/.git"));
/// ```
#[derive(Default)]
pub struct GlobberSettings<'a> {
    /// Base directory for relative patterns; defaults to the working
    /// directory.
    pub root: Option<DirectoryPath>,
    /// Pruning predicate: return `false` to exclude a directory and its
    /// whole subtree from traversal and results.
    pub predicate: Option<Box<dyn Fn(&DirectoryPath) -> bool + 'a>>,
    /// Case-sensitivity override for wildcard matching.
    pub comparer: Option<PathComparer>,
}

impl<'a> GlobberSettings<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(mut self, root: DirectoryPath) -> Self {
        self.root = Some(root);
        self
    }

    pub fn with_predicate(mut self, predicate: impl Fn(&DirectoryPath) -> bool + 'a) -> Self {
        self.predicate = Some(Box::new(predicate));
        self
    }

    pub fn with_comparer(mut self, comparer: PathComparer) -> Self {
        self.comparer = Some(comparer);
        self
    }
}

impl std::fmt::Debug for GlobberSettings<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlobberSettings")
            .field("root", &self.root)
            .field("predicate", &self.predicate.as_ref().map(|_| "..."))
            .field("comparer", &self.comparer)
            .finish()
    }
}
