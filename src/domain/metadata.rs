use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Config, Entry, Slug};

/// The structured metadata record written alongside each condition
/// document.
///
/// Serialized to `metadata.json` with stable key order (declaration
/// order), camelCase names, and non-ASCII characters emitted literally.
/// The downstream rendering pipeline consumes this record, so the field
/// set is a contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionMetadata {
    /// Path-safe identifier, identical to the directory name.
    pub slug: Slug,
    /// Human-readable condition name.
    pub title: String,
    /// Generated one-line description of the page.
    pub description: String,
    /// Review provenance for the content.
    pub editorial: Editorial,
    /// BCP 47 locale tag for the content.
    pub locale: String,
    /// Which audiences the content applies to.
    pub audience_level: AudienceLevel,
    /// Generated public-facing summary paragraph.
    pub public_summary: String,
    /// Name of the owning taxonomy category.
    pub category: String,
    /// Derived search tags.
    pub tags: Vec<String>,
    /// Slugs of related conditions. Empty until curated.
    pub related_conditions: Vec<Slug>,
    /// ICD-10 reference carried over from the taxonomy entry.
    pub icd10: String,
}

impl ConditionMetadata {
    /// Builds the metadata record for a taxonomy entry.
    ///
    /// The description, public summary and tags are derived from the
    /// entry's title, slug and owning category; the editorial block and
    /// locale come from the configuration.
    #[must_use]
    pub fn new(entry: &Entry, category: &str, config: &Config) -> Self {
        let title = &entry.title;

        Self {
            slug: entry.slug.clone(),
            title: title.clone(),
            description: format!(
                "A comprehensive guide to {title}, including diagnosis, management, and clinical \
                 considerations based on DSM-5 criteria."
            ),
            editorial: Editorial {
                last_reviewed: config.last_reviewed,
                reviewer: config.reviewer.clone(),
                evidence_strength: config.evidence_strength.clone(),
                evidence_level: config.evidence_level.clone(),
                version: config.record_version,
            },
            locale: config.locale.clone(),
            audience_level: AudienceLevel::default(),
            public_summary: format!(
                "{title} is a mental health condition classified in the DSM-5 under {category}. \
                 This content provides educational information based on current clinical \
                 guidelines and is not a substitute for professional medical advice."
            ),
            category: category.to_string(),
            tags: vec![entry.slug.replace('-', " "), category.to_lowercase()],
            related_conditions: Vec::new(),
            icd10: entry.icd10.clone(),
        }
    }
}

/// Review provenance stored in each metadata record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Editorial {
    /// Date the content was last clinically reviewed.
    pub last_reviewed: NaiveDate,
    /// Identity of the reviewing clinician.
    pub reviewer: Reviewer,
    /// Strength-of-evidence tag (e.g. `guideline`).
    pub evidence_strength: String,
    /// Evidence level tag (e.g. `A`).
    pub evidence_level: String,
    /// Version integer, incremented on editorial revisions.
    pub version: u32,
}

/// The reviewing clinician recorded in the editorial block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reviewer {
    /// Display name.
    pub name: String,
    /// Clinical role.
    pub role: String,
    /// Post-nominal credentials.
    pub credentials: Vec<String>,
}

/// Audience-applicability flags for a condition page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudienceLevel {
    /// Suitable for the general public.
    pub public: bool,
    /// Suitable for medical students.
    pub student: bool,
    /// Suitable for clinicians.
    pub clinician: bool,
}

impl Default for AudienceLevel {
    /// Scaffolded pages apply to every audience until curated otherwise.
    fn default() -> Self {
        Self {
            public: true,
            student: true,
            clinician: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panic_disorder() -> Entry {
        Entry::new("panic-disorder", "Panic Disorder", "F41.0")
    }

    #[test]
    fn propagates_entry_fields() {
        let metadata =
            ConditionMetadata::new(&panic_disorder(), "Anxiety Disorders", &Config::default());

        assert_eq!(metadata.slug.as_str(), "panic-disorder");
        assert_eq!(metadata.title, "Panic Disorder");
        assert_eq!(metadata.category, "Anxiety Disorders");
        assert_eq!(metadata.icd10, "F41.0");
        assert!(metadata.related_conditions.is_empty());
    }

    #[test]
    fn derives_tags_from_slug_and_category() {
        let metadata =
            ConditionMetadata::new(&panic_disorder(), "Anxiety Disorders", &Config::default());

        assert_eq!(metadata.tags, ["panic disorder", "anxiety disorders"]);
    }

    #[test]
    fn generated_prose_mentions_title_and_category() {
        let metadata =
            ConditionMetadata::new(&panic_disorder(), "Anxiety Disorders", &Config::default());

        assert!(metadata.description.starts_with("A comprehensive guide to Panic Disorder"));
        assert!(metadata
            .public_summary
            .contains("classified in the DSM-5 under Anxiety Disorders"));
    }

    #[test]
    fn serializes_with_stable_key_order() {
        let metadata =
            ConditionMetadata::new(&panic_disorder(), "Anxiety Disorders", &Config::default());

        let expected = r#"{
  "slug": "panic-disorder",
  "title": "Panic Disorder",
  "description": "A comprehensive guide to Panic Disorder, including diagnosis, management, and clinical considerations based on DSM-5 criteria.",
  "editorial": {
    "lastReviewed": "2024-01-15",
    "reviewer": {
      "name": "Dr. Clinical Editor",
      "role": "Consultant Psychiatrist",
      "credentials": [
        "MBBS",
        "MRCPsych",
        "MD"
      ]
    },
    "evidenceStrength": "guideline",
    "evidenceLevel": "A",
    "version": 1
  },
  "locale": "en",
  "audienceLevel": {
    "public": true,
    "student": true,
    "clinician": true
  },
  "publicSummary": "Panic Disorder is a mental health condition classified in the DSM-5 under Anxiety Disorders. This content provides educational information based on current clinical guidelines and is not a substitute for professional medical advice.",
  "category": "Anxiety Disorders",
  "tags": [
    "panic disorder",
    "anxiety disorders"
  ],
  "relatedConditions": [],
  "icd10": "F41.0"
}"#;

        let actual = serde_json::to_string_pretty(&metadata).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn round_trips_through_json() {
        let metadata =
            ConditionMetadata::new(&panic_disorder(), "Anxiety Disorders", &Config::default());

        let json = serde_json::to_string(&metadata).unwrap();
        let parsed: ConditionMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, metadata);
    }
}
