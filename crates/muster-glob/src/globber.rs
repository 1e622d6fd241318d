//! The matching entry point.

use muster_paths::AnyPath;
use muster_vfs::{Environment, FileSystem, default_comparer};

use crate::context::GlobVisitorContext;
use crate::parser::parse;
use crate::settings::GlobberSettings;
use crate::visitor::GlobVisitor;
use crate::GlobError;

/// Matches glob patterns against a filesystem.
///
/// Stateless apart from its two collaborators; each call owns its own
/// traversal context, so one globber can serve concurrent calls as long as
/// the filesystem supports concurrent reads.
pub struct Globber<'a> {
    file_system: &'a dyn FileSystem,
    environment: &'a dyn Environment,
}

impl<'a> Globber<'a> {
    pub fn new(file_system: &'a dyn FileSystem, environment: &'a dyn Environment) -> Self {
        Self {
            file_system,
            environment,
        }
    }

    /// Return every existing path matching the pattern, in traversal order.
    ///
    /// An empty pattern yields no results; a pattern matching nothing that
    /// exists yields no results and no error. Results are not deduplicated:
    /// a pattern whose branches can reach the same path more than once
    /// reports it once per branch.
    #[tracing::instrument(level = "debug", skip(self, settings), fields(pattern = %pattern))]
    pub fn match_pattern(
        &self,
        pattern: &str,
        settings: &GlobberSettings<'_>,
    ) -> Result<Vec<AnyPath>, GlobError> {
        let Some(chain) = parse(pattern, self.environment)? else {
            return Ok(Vec::new());
        };

        let working_directory = self.environment.working_directory();
        let root = settings
            .root
            .clone()
            .unwrap_or_else(|| working_directory.clone())
            .make_absolute(&working_directory)?;
        let comparer = settings
            .comparer
            .unwrap_or_else(|| default_comparer(self.environment));

        let mut context = GlobVisitorContext::new(root, settings.predicate.as_deref(), comparer);
        GlobVisitor::new(self.file_system).walk(&chain, &mut context)?;

        let results = context.into_results();
        tracing::debug!(count = results.len(), "match complete");
        Ok(results)
    }
}
