//! Per-match traversal state.

use muster_paths::{AnyPath, DirectoryPath, PathComparer};

/// The mutable state of one `match_pattern` call: the segment stack that
/// defines the directory currently being examined, the resolved base
/// directory for relative anchoring, the accumulated results, and the
/// pruning predicate. One instance per call, discarded afterwards.
pub(crate) struct GlobVisitorContext<'a> {
    stack: Vec<String>,
    path: DirectoryPath,
    root: DirectoryPath,
    results: Vec<AnyPath>,
    predicate: Option<&'a dyn Fn(&DirectoryPath) -> bool>,
    comparer: PathComparer,
}

impl<'a> GlobVisitorContext<'a> {
    pub(crate) fn new(
        root: DirectoryPath,
        predicate: Option<&'a dyn Fn(&DirectoryPath) -> bool>,
        comparer: PathComparer,
    ) -> Self {
        Self {
            stack: Vec::new(),
            path: DirectoryPath::current(),
            root,
            results: Vec::new(),
            predicate,
            comparer,
        }
    }

    /// The directory currently being examined.
    pub(crate) fn path(&self) -> &DirectoryPath {
        &self.path
    }

    /// The resolved base directory for relative patterns.
    pub(crate) fn root(&self) -> &DirectoryPath {
        &self.root
    }

    pub(crate) fn comparer(&self) -> &PathComparer {
        &self.comparer
    }

    /// Push a stack entry. An entry may span several components (recursive
    /// wildcard tails push their whole relative tail at once).
    pub(crate) fn push(&mut self, part: String) {
        self.stack.push(part);
        self.path = self.generate_full_path();
    }

    /// Pop the most recent stack entry, returning it so callers that need
    /// to restore the stack (parent navigation) can push it back.
    pub(crate) fn pop(&mut self) -> Option<String> {
        let last = self.stack.pop();
        self.path = self.generate_full_path();
        last
    }

    pub(crate) fn add_result(&mut self, path: AnyPath) {
        self.results.push(path);
    }

    pub(crate) fn into_results(self) -> Vec<AnyPath> {
        self.results
    }

    /// Whether the pruning predicate allows a directory. No predicate means
    /// everything is allowed.
    pub(crate) fn should_traverse(&self, directory: &DirectoryPath) -> bool {
        self.predicate.is_none_or(|predicate| predicate(directory))
    }

    fn generate_full_path(&self) -> DirectoryPath {
        let joined = self.stack.join("/");
        if joined.trim().is_empty() {
            DirectoryPath::current()
        } else {
            DirectoryPath::new(&joined).unwrap_or_else(|_| DirectoryPath::current())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> GlobVisitorContext<'static> {
        GlobVisitorContext::new(
            DirectoryPath::new("/Working").unwrap(),
            None,
            PathComparer::new(true),
        )
    }

    #[test]
    fn the_stack_derives_the_current_path() {
        let mut ctx = context();
        assert_eq!(ctx.path().full_path(), "");

        ctx.push(String::new());
        ctx.push("Working".to_string());
        assert_eq!(ctx.path().full_path(), "/Working");

        ctx.push("Foo/Bar".to_string());
        assert_eq!(ctx.path().full_path(), "/Working/Foo/Bar");

        assert_eq!(ctx.pop().as_deref(), Some("Foo/Bar"));
        assert_eq!(ctx.path().full_path(), "/Working");
    }

    #[test]
    fn drive_roots_join_cleanly() {
        let mut ctx = context();
        ctx.push("C:".to_string());
        assert_eq!(ctx.path().full_path(), "C:/");
        ctx.push("Working".to_string());
        assert_eq!(ctx.path().full_path(), "C:/Working");
    }

    #[test]
    fn popping_an_empty_stack_is_harmless() {
        let mut ctx = context();
        assert_eq!(ctx.pop(), None);
        assert_eq!(ctx.path().full_path(), "");
    }

    #[test]
    fn predicates_gate_traversal() {
        let deny = |dir: &DirectoryPath| dir.full_path() != "/Working/Bar";
        let ctx = GlobVisitorContext::new(
            DirectoryPath::new("/Working").unwrap(),
            Some(&deny),
            PathComparer::new(true),
        );
        assert!(ctx.should_traverse(&DirectoryPath::new("/Working/Foo").unwrap()));
        assert!(!ctx.should_traverse(&DirectoryPath::new("/Working/Bar").unwrap()));
    }
}
