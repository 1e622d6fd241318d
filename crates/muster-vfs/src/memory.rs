//! A fully in-memory filesystem.

use muster_paths::{DirectoryPath, FilePath, PathComparer};

use crate::filter::name_matches;
use crate::{DirectoryListing, Environment, FileSystem, SearchScope, default_comparer};

/// An in-memory filesystem tree.
///
/// Lookups go through a [`PathComparer`], so a tree built for a Windows
/// environment resolves paths case-insensitively while preserving the
/// casing entries were created with. Creating a file or directory creates
/// any missing parents. Listings preserve insertion order.
///
/// # Examples
/// ```
/// use muster_paths::{DirectoryPath, FilePath};
/// use muster_vfs::{FakeEnvironment, FileSystem, MemoryFileSystem};
///
/// let mut fs = MemoryFileSystem::for_environment(&FakeEnvironment::unix());
/// fs.create_file(&FilePath::new("/Working/Foo/Bar.c").unwrap());
/// assert!(fs.directory_exists(&DirectoryPath::new("/Working/Foo").unwrap()));
/// ```
#[derive(Debug)]
pub struct MemoryFileSystem {
    comparer: PathComparer,
    root: Node,
}

#[derive(Debug)]
struct Node {
    /// Full normalized path, in created casing. Empty for the virtual root.
    full: String,
    is_dir: bool,
    hidden: bool,
    children: Vec<Node>,
}

impl Node {
    fn new(full: String, is_dir: bool) -> Self {
        Self {
            full,
            is_dir,
            hidden: false,
            children: Vec::new(),
        }
    }

    /// The final path component (`/` for the Unix root, `C:` for a drive).
    fn name(&self) -> &str {
        if self.full == "/" {
            return "/";
        }
        let trimmed = self.full.trim_end_matches('/');
        trimmed.rsplit('/').next().unwrap_or(trimmed)
    }
}

impl MemoryFileSystem {
    pub fn new(comparer: PathComparer) -> Self {
        Self {
            comparer,
            root: Node::new(String::new(), true),
        }
    }

    /// A tree using the environment's conventional case sensitivity.
    pub fn for_environment(environment: &dyn Environment) -> Self {
        Self::new(default_comparer(environment))
    }

    /// Create a file, creating missing parent directories.
    pub fn create_file(&mut self, path: &FilePath) {
        self.insert(path.full_path(), false);
    }

    /// Create a directory, creating missing parents.
    pub fn create_directory(&mut self, path: &DirectoryPath) {
        self.insert(path.full_path(), true);
    }

    /// Mark an existing directory as hidden.
    pub fn set_hidden(&mut self, path: &DirectoryPath) {
        let comparer = self.comparer;
        if let Some(node) = find_mut(&mut self.root, &comparer, path.full_path()) {
            node.hidden = true;
        }
    }

    fn insert(&mut self, full: &str, is_dir: bool) {
        let comparer = self.comparer;
        let parts = components(full);
        let mut node = &mut self.root;
        let count = parts.len();

        for (index, part) in parts.iter().enumerate() {
            let last = index + 1 == count;
            let position = node
                .children
                .iter()
                .position(|child| comparer.eq(child.name(), *part));
            let position = match position {
                Some(position) => position,
                None => {
                    let child_full = join_component(&node.full, part);
                    // Intermediate components are always directories.
                    node.children.push(Node::new(child_full, is_dir || !last));
                    node.children.len() - 1
                }
            };
            node = &mut node.children[position];
        }
    }

    fn find(&self, full: &str) -> Option<&Node> {
        let mut node = &self.root;
        for part in components(full) {
            node = node
                .children
                .iter()
                .find(|child| self.comparer.eq(child.name(), part))?;
        }
        Some(node)
    }

    fn collect(node: &Node, filter: &str, scope: SearchScope, out: &mut DirectoryListing) {
        for child in &node.children {
            if name_matches(filter, child.name()) {
                if child.is_dir {
                    if let Ok(path) = DirectoryPath::new(&child.full) {
                        out.directories.push(path);
                    }
                } else if let Ok(path) = FilePath::new(&child.full) {
                    out.files.push(path);
                }
            }
            if child.is_dir && scope == SearchScope::Recursive {
                Self::collect(child, filter, scope, out);
            }
        }
    }
}

fn find_mut<'a>(root: &'a mut Node, comparer: &PathComparer, full: &str) -> Option<&'a mut Node> {
    let mut node = root;
    for part in components(full) {
        node = node
            .children
            .iter_mut()
            .find(|child| comparer.eq(child.name(), part))?;
    }
    Some(node)
}

/// Tree components of a normalized path: the root marker (if any) followed
/// by the plain segments. The empty current-directory path maps to the
/// virtual root.
fn components(full: &str) -> Vec<&str> {
    if let Some(rest) = full.strip_prefix('/') {
        std::iter::once("/")
            .chain(rest.split('/').filter(|s| !s.is_empty()))
            .collect()
    } else {
        full.split('/').filter(|s| !s.is_empty() && *s != ".").collect()
    }
}

fn join_component(parent_full: &str, name: &str) -> String {
    if parent_full.is_empty() {
        if name == "/" {
            return "/".to_string();
        }
        // A drive root keeps its separator so children join cleanly.
        if name.len() == 2 && name.ends_with(':') {
            return format!("{name}/");
        }
        return name.to_string();
    }
    if parent_full.ends_with('/') {
        format!("{parent_full}{name}")
    } else {
        format!("{parent_full}/{name}")
    }
}

impl FileSystem for MemoryFileSystem {
    fn directory_exists(&self, path: &DirectoryPath) -> bool {
        self.find(path.full_path()).is_some_and(|node| node.is_dir)
    }

    fn file_exists(&self, path: &FilePath) -> bool {
        self.find(path.full_path()).is_some_and(|node| !node.is_dir)
    }

    fn list_entries(
        &self,
        path: &DirectoryPath,
        filter: &str,
        scope: SearchScope,
    ) -> DirectoryListing {
        let mut listing = DirectoryListing::default();
        if let Some(node) = self.find(path.full_path()).filter(|node| node.is_dir) {
            Self::collect(node, filter, scope, &mut listing);
        }
        listing
    }

    fn is_hidden(&self, path: &DirectoryPath) -> bool {
        self.find(path.full_path()).is_some_and(|node| node.hidden)
    }
}
