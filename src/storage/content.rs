//! A filesystem backed store of condition content.
//!
//! The [`ContentStore`] owns the scaffold pass: one deterministic
//! traversal over a [`Taxonomy`], creating a slug-named directory with
//! both artifacts for every entry that does not exist yet. Pre-existing
//! entry directories are never touched; their presence is the sole
//! existence signal, file contents are not inspected.

use std::{
    collections::HashSet,
    fs, io,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

use crate::{
    domain::{Config, ConditionMetadata, Entry, Slug},
    report::{Reporter, Summary},
    storage::document,
    taxonomy::{DuplicateSlug, Taxonomy},
};

/// File name of the structured metadata record within an entry directory.
pub const METADATA_FILE: &str = "metadata.json";

/// File name of the templated document within an entry directory.
pub const DOCUMENT_FILE: &str = "index.mdx";

/// A filesystem backed store of condition content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentStore {
    /// The root under which per-entry directories are created.
    root: PathBuf,
}

impl ContentStore {
    /// Opens a store at the given destination root.
    ///
    /// The root does not need to exist yet; it is created (with
    /// intermediate directories) by [`Self::scaffold`].
    #[must_use]
    pub const fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// The destination root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The directory an entry with the given slug lives in.
    #[must_use]
    pub fn entry_dir(&self, slug: &Slug) -> PathBuf {
        self.root.join(slug.as_str())
    }

    /// Runs one scaffold pass over the taxonomy.
    ///
    /// Entries whose directory already exists are counted as skipped and
    /// left completely untouched. For every other entry the directory is
    /// created and both artifacts are written; the entry counts as
    /// created only once both writes have succeeded.
    ///
    /// Progress notices are emitted through `reporter` as the pass runs.
    ///
    /// # Errors
    ///
    /// Fails before any write with [`ScaffoldError::Duplicate`] if two
    /// taxonomy entries share a slug. Fails with [`ScaffoldError::Io`] if
    /// the root cannot be created or any directory or file write fails;
    /// the pass halts at the failing entry with no rollback.
    pub fn scaffold(
        &self,
        taxonomy: &Taxonomy,
        config: &Config,
        reporter: &mut dyn Reporter,
    ) -> Result<Summary, ScaffoldError> {
        taxonomy.check_unique_slugs()?;

        fs::create_dir_all(&self.root)?;

        let mut total = 0;
        let mut created = 0;
        let mut skipped = 0;

        for category in taxonomy.categories() {
            reporter.category_started(&category.name, category.entries.len());

            for entry in &category.entries {
                total += 1;

                if self.entry_dir(&entry.slug).exists() {
                    skipped += 1;
                    reporter.entry_skipped(&entry.slug);
                    continue;
                }

                self.write_entry(entry, &category.name, config)?;
                created += 1;
                reporter.entry_created(&entry.slug);
            }
        }

        tracing::info!(total, created, skipped, "scaffold pass complete");

        Ok(Summary {
            total,
            created,
            skipped,
            categories: taxonomy.category_counts(),
        })
    }

    /// Creates the entry directory and writes both artifacts into it.
    fn write_entry(&self, entry: &Entry, category: &str, config: &Config) -> io::Result<()> {
        let dir = self.entry_dir(&entry.slug);
        fs::create_dir_all(&dir)?;

        let metadata = ConditionMetadata::new(entry, category, config);
        let mut record =
            serde_json::to_string_pretty(&metadata).expect("metadata serialization cannot fail");
        record.push('\n');
        fs::write(dir.join(METADATA_FILE), record)?;

        fs::write(
            dir.join(DOCUMENT_FILE),
            document::body(&entry.title, category),
        )?;

        tracing::debug!(slug = %entry.slug, "created entry");
        Ok(())
    }

    /// Classifies every taxonomy entry against the destination tree
    /// without mutating anything.
    ///
    /// Directories under the root that match no taxonomy slug are
    /// reported as strays.
    #[must_use]
    pub fn census(&self, taxonomy: &Taxonomy) -> Census {
        let mut census = Census::default();

        for category in taxonomy.categories() {
            for entry in &category.entries {
                let dir = self.entry_dir(&entry.slug);
                if !dir.exists() {
                    census.missing.push(entry.slug.clone());
                } else if dir.join(METADATA_FILE).is_file() && dir.join(DOCUMENT_FILE).is_file() {
                    census.complete.push(entry.slug.clone());
                } else {
                    census.partial.push(entry.slug.clone());
                }
            }
        }

        let known: HashSet<&str> = taxonomy
            .categories()
            .iter()
            .flat_map(|c| c.entries.iter().map(|e| e.slug.as_str()))
            .collect();

        census.strays = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|dir_entry| dir_entry.file_type().is_dir())
            .map(|dir_entry| dir_entry.file_name().to_string_lossy().into_owned())
            .filter(|name| !known.contains(name.as_str()))
            .collect();
        census.strays.sort_unstable();

        census
    }
}

/// The state of the destination tree relative to a taxonomy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Census {
    /// Entries whose directory holds both artifacts.
    pub complete: Vec<Slug>,
    /// Entries whose directory exists but is missing an artifact.
    ///
    /// Partial entries violate the two-artifact contract of the
    /// downstream rendering pipeline and need manual attention; the
    /// scaffolder will not repair them.
    pub partial: Vec<Slug>,
    /// Entries with no directory yet.
    pub missing: Vec<Slug>,
    /// Directory names under the root that match no taxonomy entry.
    pub strays: Vec<String>,
}

/// Errors that can occur during a scaffold pass.
#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    /// Two taxonomy entries share a slug. Detected before any write.
    #[error(transparent)]
    Duplicate(#[from] DuplicateSlug),

    /// A directory or file could not be created or written.
    #[error("failed to write condition content: {0}")]
    Io(#[from] io::Error),
}
