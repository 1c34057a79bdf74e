use super::Slug;

/// A single taxonomy entry: one condition to scaffold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Path-safe identifier, used as the entry's directory name.
    pub slug: Slug,
    /// Human-readable condition name.
    pub title: String,
    /// ICD-10 reference: a single code, a range, or the literal `Variable`.
    pub icd10: String,
}

impl Entry {
    /// Convenience constructor used by the built-in table and tests.
    ///
    /// # Panics
    ///
    /// Panics if `slug` is not a valid [`Slug`].
    #[must_use]
    pub fn new(slug: &str, title: &str, icd10: &str) -> Self {
        Self {
            slug: slug.parse().expect("entry slug must be valid"),
            title: title.to_string(),
            icd10: icd10.to_string(),
        }
    }
}
