use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Reviewer;

/// Configuration for content scaffolding.
///
/// Holds the editorial constants stamped into every generated metadata
/// record, and the locale tag. All fields have defaults matching the
/// current editorial policy, so a missing config file is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// BCP 47 locale tag for generated content.
    pub locale: String,

    /// Review date recorded in each metadata record.
    pub last_reviewed: NaiveDate,

    /// Reviewing clinician recorded in each metadata record.
    pub reviewer: Reviewer,

    /// Strength-of-evidence tag (e.g. `guideline`).
    pub evidence_strength: String,

    /// Evidence level tag (e.g. `A`).
    pub evidence_level: String,

    /// Version integer stamped into each record's editorial block.
    pub record_version: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            last_reviewed: default_last_reviewed(),
            reviewer: default_reviewer(),
            evidence_strength: default_evidence_strength(),
            evidence_level: default_evidence_level(),
            record_version: default_record_version(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content
    /// is invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML
    /// or if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_last_reviewed() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid calendar date")
}

fn default_reviewer() -> Reviewer {
    Reviewer {
        name: "Dr. Clinical Editor".to_string(),
        role: "Consultant Psychiatrist".to_string(),
        credentials: vec![
            "MBBS".to_string(),
            "MRCPsych".to_string(),
            "MD".to_string(),
        ],
    }
}

fn default_evidence_strength() -> String {
    "guideline".to_string()
}

fn default_evidence_level() -> String {
    "A".to_string()
}

const fn default_record_version() -> u32 {
    1
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the
/// domain type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_locale")]
        locale: String,

        #[serde(default = "default_last_reviewed")]
        last_reviewed: NaiveDate,

        #[serde(default = "default_reviewer")]
        reviewer: Reviewer,

        #[serde(default = "default_evidence_strength")]
        evidence_strength: String,

        #[serde(default = "default_evidence_level")]
        evidence_level: String,

        #[serde(default = "default_record_version")]
        record_version: u32,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                locale,
                last_reviewed,
                reviewer,
                evidence_strength,
                evidence_level,
                record_version,
            } => Self {
                locale,
                last_reviewed,
                reviewer,
                evidence_strength,
                evidence_level,
                record_version,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            locale: config.locale,
            last_reviewed: config.last_reviewed,
            reviewer: config.reviewer,
            evidence_strength: config.evidence_strength,
            evidence_level: config.evidence_level,
            record_version: config.record_version,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_reads_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            b"_version = \"1\"\nlocale = \"en-GB\"\nlast_reviewed = \"2025-06-01\"\nevidence_level = \"B\"\n",
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.locale, "en-GB");
        assert_eq!(
            config.last_reviewed,
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
        );
        assert_eq!(config.evidence_level, "B");
        // Unspecified fields fall back to defaults.
        assert_eq!(config.evidence_strength, "guideline");
        assert_eq!(config.reviewer.name, "Dr. Clinical Editor");
    }

    #[test]
    fn load_missing_file_returns_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");

        let error = Config::load(&missing).unwrap_err();
        assert!(error.starts_with("Failed to read config file:"));
    }

    #[test]
    fn load_invalid_toml_returns_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\nlast_reviewed = \"not a date\"\n")
            .unwrap();

        let error = Config::load(file.path()).unwrap_err();
        assert!(error.starts_with("Failed to parse config file:"));
    }

    #[test]
    fn version_only_file_returns_default() {
        let expected = Config::default();
        let actual: Config = toml::from_str(r#"_version = "1""#).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn save_and_load_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("scaffold.toml");

        let config = Config {
            locale: "en-US".to_string(),
            record_version: 2,
            ..Config::default()
        };
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }
}
