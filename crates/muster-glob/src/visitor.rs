//! The traversal engine: interprets a node chain against a filesystem.

use std::collections::HashMap;

use muster_paths::{AnyPath, DirectoryPath, FilePath};
use muster_vfs::{FileSystem, SearchScope};

use crate::GlobError;
use crate::context::GlobVisitorContext;
use crate::node::{GlobNode, SegmentPattern};

/// Walks a compiled pattern depth-first, querying the filesystem at each
/// node and pushing/popping path segments on the context stack. Every exit
/// path restores the stack to its prior depth, so sibling branches always
/// start from the same directory.
pub(crate) struct GlobVisitor<'a> {
    file_system: &'a dyn FileSystem,
}

impl<'a> GlobVisitor<'a> {
    pub(crate) fn new(file_system: &'a dyn FileSystem) -> Self {
        Self { file_system }
    }

    pub(crate) fn walk(
        &self,
        node: &GlobNode,
        ctx: &mut GlobVisitorContext<'_>,
    ) -> Result<(), GlobError> {
        match node {
            GlobNode::UnixRoot { next } => {
                ctx.push(String::new());
                self.descend(next, ctx)?;
                ctx.pop();
            }
            GlobNode::WindowsRoot { drive, next } => {
                ctx.push(format!("{drive}:"));
                self.descend(next, ctx)?;
                ctx.pop();
            }
            GlobNode::RelativeRoot { next } => {
                let segments: Vec<String> =
                    ctx.root().segments().iter().map(|s| s.to_string()).collect();
                let pushed = segments.len();
                for segment in segments {
                    ctx.push(segment);
                }
                self.descend(next, ctx)?;
                for _ in 0..pushed {
                    ctx.pop();
                }
            }
            GlobNode::Segment { pattern, next } => match pattern {
                SegmentPattern::Literal(name) => self.visit_literal(name, next, ctx)?,
                SegmentPattern::Wildcard(_) => self.visit_wildcard(pattern, next, ctx)?,
            },
            GlobNode::RecursiveWildcard { next } => self.visit_recursive(next, ctx)?,
            GlobNode::Parent { next } => {
                // Back up one level, then restore the entry so push/pop
                // stays balanced for sibling branches.
                let Some(last) = ctx.pop() else {
                    return Ok(());
                };
                self.descend(next, ctx)?;
                ctx.push(last);
            }
            GlobNode::Current { next } => self.descend(next, ctx)?,
        }
        Ok(())
    }

    /// Continue into `next`. A chain ending here records the current
    /// directory if it exists.
    fn descend(
        &self,
        next: &Option<Box<GlobNode>>,
        ctx: &mut GlobVisitorContext<'_>,
    ) -> Result<(), GlobError> {
        match next {
            Some(node) => self.walk(node, ctx),
            None => {
                let directory = ctx.path().clone();
                if self.file_system.directory_exists(&directory) && ctx.should_traverse(&directory)
                {
                    ctx.add_result(AnyPath::Directory(directory));
                }
                Ok(())
            }
        }
    }

    fn visit_literal(
        &self,
        name: &str,
        next: &Option<Box<GlobNode>>,
        ctx: &mut GlobVisitorContext<'_>,
    ) -> Result<(), GlobError> {
        // The segment names a directory until proven otherwise; only a
        // terminal segment falls back to a file lookup. The probe path is
        // derived through the stack so root markers join correctly.
        ctx.push(name.to_string());
        let directory = ctx.path().clone();
        ctx.pop();
        let exists = self.file_system.directory_exists(&directory);
        if exists && !ctx.should_traverse(&directory) {
            tracing::trace!(path = %directory, "pruned");
            return Ok(());
        }

        match next {
            None => {
                if exists {
                    ctx.add_result(AnyPath::Directory(directory));
                } else {
                    let file = FilePath::new(directory.full_path())?;
                    if self.file_system.file_exists(&file) {
                        ctx.add_result(AnyPath::File(file));
                    }
                }
            }
            Some(node) => {
                ctx.push(name.to_string());
                self.walk(node, ctx)?;
                ctx.pop();
            }
        }
        Ok(())
    }

    fn visit_wildcard(
        &self,
        pattern: &SegmentPattern,
        next: &Option<Box<GlobNode>>,
        ctx: &mut GlobVisitorContext<'_>,
    ) -> Result<(), GlobError> {
        let directory = ctx.path().clone();
        if !self.file_system.directory_exists(&directory) {
            return Ok(());
        }

        for candidate in self.find_candidates(&directory, pattern, ctx, SearchScope::CurrentLevelOnly) {
            ctx.push(tail_of(&directory, candidate.full_path()));
            match next {
                Some(node) => self.walk(node, ctx)?,
                None => ctx.add_result(candidate),
            }
            ctx.pop();
        }
        Ok(())
    }

    fn visit_recursive(
        &self,
        next: &Option<Box<GlobNode>>,
        ctx: &mut GlobVisitorContext<'_>,
    ) -> Result<(), GlobError> {
        if matches!(next.as_deref(), Some(GlobNode::Parent { .. })) {
            return Err(GlobError::RecursiveWildcardParent);
        }

        let directory = ctx.path().clone();
        if !self.file_system.directory_exists(&directory) {
            return Ok(());
        }

        // The current directory itself matches zero levels; every directory
        // below it whose whole ancestor chain survives the predicate
        // matches one or more.
        let mut tails: Vec<Option<String>> = vec![None];
        let listing = self
            .file_system
            .list_entries(&directory, "*", SearchScope::Recursive);
        let mut pruned: HashMap<String, bool> = HashMap::new();
        for candidate in &listing.directories {
            if self.chain_allowed(&directory, candidate, ctx, &mut pruned)? {
                tails.push(Some(tail_of(&directory, candidate.full_path())));
            } else {
                tracing::trace!(path = %candidate, "pruned subtree");
            }
        }

        for tail in tails {
            let pushed = match tail {
                Some(tail) => {
                    ctx.push(tail);
                    true
                }
                None => false,
            };
            match next {
                Some(node) => self.walk(node, ctx)?,
                None => ctx.add_result(AnyPath::Directory(ctx.path().clone())),
            }
            if pushed {
                ctx.pop();
            }
        }
        Ok(())
    }

    /// Entries of `directory` whose final component matches the pattern.
    /// Matching directories must also survive the pruning predicate;
    /// directories come before files, mirroring listing order.
    fn find_candidates(
        &self,
        directory: &DirectoryPath,
        pattern: &SegmentPattern,
        ctx: &GlobVisitorContext<'_>,
        scope: SearchScope,
    ) -> Vec<AnyPath> {
        let listing = self.file_system.list_entries(directory, "*", scope);
        let mut candidates = Vec::with_capacity(listing.len());

        for dir in listing.directories {
            if pattern.is_match(last_component(dir.full_path()), ctx.comparer())
                && ctx.should_traverse(&dir)
            {
                candidates.push(AnyPath::Directory(dir));
            }
        }
        for file in listing.files {
            if pattern.is_match(last_component(file.full_path()), ctx.comparer()) {
                candidates.push(AnyPath::File(file));
            }
        }
        candidates
    }

    /// Whether every directory from `base` (exclusive) down to `candidate`
    /// (inclusive) passes the pruning predicate. Verdicts are memoized per
    /// directory so shared prefixes are only asked once.
    fn chain_allowed(
        &self,
        base: &DirectoryPath,
        candidate: &DirectoryPath,
        ctx: &GlobVisitorContext<'_>,
        memo: &mut HashMap<String, bool>,
    ) -> Result<bool, GlobError> {
        let tail = tail_of(base, candidate.full_path());
        let mut prefix = base.full_path().trim_end_matches('/').to_string();

        for component in tail.split('/') {
            prefix.push('/');
            prefix.push_str(component);
            if let Some(&allowed) = memo.get(&prefix) {
                if !allowed {
                    return Ok(false);
                }
                continue;
            }
            let directory = DirectoryPath::new(&prefix)?;
            let allowed = ctx.should_traverse(&directory);
            memo.insert(prefix.clone(), allowed);
            if !allowed {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// The stack entry for a candidate found under `base`: everything after the
/// base prefix, with no leading separator. Computed by length, so listings
/// whose stored casing differs from the queried base still slice cleanly.
fn tail_of(base: &DirectoryPath, full: &str) -> String {
    let base = base.full_path();
    let start = if base.is_empty() {
        1
    } else if base.ends_with('/') {
        base.len()
    } else {
        base.len() + 1
    };
    full.get(start..).unwrap_or("").to_string()
}

fn last_component(full: &str) -> &str {
    full.rsplit('/').next().unwrap_or(full)
}
