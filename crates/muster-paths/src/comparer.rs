//! Configurable case-sensitive path equality and hashing.

use std::hash::{DefaultHasher, Hash, Hasher};

/// A path equality policy, configurable independently of the host OS.
///
/// Comparison and hashing operate on the normalized full path, folded to
/// lowercase when the comparer is case-insensitive, so hashing stays
/// consistent with equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathComparer {
    case_sensitive: bool,
}

impl PathComparer {
    pub fn new(case_sensitive: bool) -> Self {
        Self { case_sensitive }
    }

    /// The conventional default for a platform: case-sensitive on
    /// Unix-family systems, insensitive elsewhere.
    pub fn platform_default(unix_like: bool) -> Self {
        Self::new(unix_like)
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// The comparison key for a path: the full path itself, or its
    /// lowercase folding for a case-insensitive comparer.
    pub fn key(&self, full_path: &str) -> String {
        if self.case_sensitive {
            full_path.to_string()
        } else {
            full_path.to_lowercase()
        }
    }

    /// Compare two paths under this comparer's case rule.
    pub fn eq(&self, a: impl AsRef<str>, b: impl AsRef<str>) -> bool {
        let (a, b) = (a.as_ref(), b.as_ref());
        if self.case_sensitive {
            a == b
        } else {
            // Fold both sides the same way the hash does.
            a.to_lowercase() == b.to_lowercase()
        }
    }

    /// Compare two optional paths: two absent paths are equal, exactly one
    /// absent is unequal.
    pub fn eq_opt<T: AsRef<str>>(&self, a: Option<&T>, b: Option<&T>) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => self.eq(a, b),
            _ => false,
        }
    }

    /// Hash a path consistently with [`PathComparer::eq`].
    pub fn hash_code(&self, path: impl AsRef<str>) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.key(path.as_ref()).hash(&mut hasher);
        hasher.finish()
    }
}
