//! The fixed category → entries table driving generation.
//!
//! A taxonomy is an ordered list of named categories, each holding an
//! ordered list of [`Entry`] descriptors. Order is preserved for
//! deterministic reporting only; it carries no other meaning.

use std::collections::HashMap;

use crate::domain::{Entry, Slug};

mod dsm5;
pub use dsm5::dsm5;

/// A named group of taxonomy entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Display name of the category.
    pub name: String,
    /// Entries in this category, in reporting order.
    pub entries: Vec<Entry>,
}

/// An ordered collection of categories, passed to the scaffolder as an
/// explicit parameter (never implicit global state).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Taxonomy {
    categories: Vec<Category>,
}

impl Taxonomy {
    /// Creates a taxonomy from an ordered list of categories.
    #[must_use]
    pub const fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// The categories in reporting order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Total number of entries across all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.entries.len()).sum()
    }

    /// Whether the taxonomy contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Per-category entry counts, in taxonomy order.
    ///
    /// Recomputed from the table itself, independent of what exists on
    /// disk.
    #[must_use]
    pub fn category_counts(&self) -> Vec<(String, usize)> {
        self.categories
            .iter()
            .map(|c| (c.name.clone(), c.entries.len()))
            .collect()
    }

    /// Checks that every slug is unique across the whole taxonomy.
    ///
    /// A duplicate slug is a data-definition bug: left undetected it would
    /// be silently reported as "skipped" by the scaffolder, because the
    /// first occurrence creates the directory the second one then finds.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateSlug`] naming the slug and the two categories
    /// that define it.
    pub fn check_unique_slugs(&self) -> Result<(), DuplicateSlug> {
        let mut seen: HashMap<&str, &str> = HashMap::new();

        for category in &self.categories {
            for entry in &category.entries {
                if let Some(first) = seen.insert(entry.slug.as_str(), &category.name) {
                    return Err(DuplicateSlug {
                        slug: entry.slug.clone(),
                        first: first.to_string(),
                        second: category.name.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Error returned when two taxonomy entries share a slug.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("duplicate slug '{slug}' defined under '{first}' and '{second}'")]
pub struct DuplicateSlug {
    /// The offending slug.
    pub slug: Slug,
    /// Category of the first occurrence.
    pub first: String,
    /// Category of the second occurrence.
    pub second: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str, slugs: &[&str]) -> Category {
        Category {
            name: name.to_string(),
            entries: slugs
                .iter()
                .map(|slug| Entry::new(slug, "Title", "F00"))
                .collect(),
        }
    }

    #[test]
    fn len_is_sum_of_category_counts() {
        let taxonomy = Taxonomy::new(vec![
            category("A", &["one", "two"]),
            category("B", &["three"]),
        ]);

        assert_eq!(taxonomy.len(), 3);
        assert_eq!(
            taxonomy.category_counts(),
            [("A".to_string(), 2), ("B".to_string(), 1)]
        );
    }

    #[test]
    fn unique_slugs_pass_validation() {
        let taxonomy = Taxonomy::new(vec![
            category("A", &["one", "two"]),
            category("B", &["three"]),
        ]);

        assert!(taxonomy.check_unique_slugs().is_ok());
    }

    #[test]
    fn duplicate_slug_across_categories_is_reported() {
        let taxonomy = Taxonomy::new(vec![
            category("A", &["one", "two"]),
            category("B", &["two"]),
        ]);

        let error = taxonomy.check_unique_slugs().unwrap_err();
        assert_eq!(error.slug.as_str(), "two");
        assert_eq!(error.first, "A");
        assert_eq!(error.second, "B");
    }

    #[test]
    fn duplicate_slug_within_a_category_is_reported() {
        let taxonomy = Taxonomy::new(vec![category("A", &["one", "one"])]);

        let error = taxonomy.check_unique_slugs().unwrap_err();
        assert_eq!(error.first, "A");
        assert_eq!(error.second, "A");
    }

    #[test]
    fn builtin_table_is_well_formed() {
        let taxonomy = dsm5();

        assert_eq!(taxonomy.categories().len(), 20);
        assert!(taxonomy.check_unique_slugs().is_ok());

        let counted: usize = taxonomy
            .category_counts()
            .iter()
            .map(|(_, count)| count)
            .sum();
        assert_eq!(counted, taxonomy.len());
    }

    #[test]
    fn builtin_table_contains_known_entry() {
        let taxonomy = dsm5();

        let anxiety = taxonomy
            .categories()
            .iter()
            .find(|c| c.name == "Anxiety Disorders")
            .expect("category should exist");

        let panic = anxiety
            .entries
            .iter()
            .find(|e| e.slug.as_str() == "panic-disorder")
            .expect("entry should exist");

        assert_eq!(panic.title, "Panic Disorder");
        assert_eq!(panic.icd10, "F41.0");
    }
}
