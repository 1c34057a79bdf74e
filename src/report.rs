//! Progress reporting for the scaffold pass.
//!
//! Narration is emitted through the [`Reporter`] trait rather than
//! written to the console directly, so library callers can swap in a
//! silent or recording sink and tests can assert on the exact event
//! sequence.

use crate::domain::Slug;

/// Sink for per-entry progress notices during a scaffold pass.
pub trait Reporter {
    /// A category's entries are about to be processed.
    fn category_started(&mut self, name: &str, entries: usize);

    /// An entry directory was created with both artifacts.
    fn entry_created(&mut self, slug: &Slug);

    /// An entry directory already existed and was left untouched.
    fn entry_skipped(&mut self, slug: &Slug);
}

/// A [`Reporter`] that discards all notices.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn category_started(&mut self, _name: &str, _entries: usize) {}

    fn entry_created(&mut self, _slug: &Slug) {}

    fn entry_skipped(&mut self, _slug: &Slug) {}
}

/// Aggregate counts returned by a scaffold pass.
///
/// `created + skipped == total` holds for every successful pass. The
/// per-category counts are recomputed from the taxonomy, independent of
/// what was created or skipped, and preserve taxonomy order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Number of entries in the taxonomy.
    pub total: usize,
    /// Entries created by this pass.
    pub created: usize,
    /// Entries skipped because their directory already existed.
    pub skipped: usize,
    /// Per-category entry counts, in taxonomy order.
    pub categories: Vec<(String, usize)>,
}
