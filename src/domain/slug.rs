use std::{fmt, ops::Deref, str::FromStr};

use non_empty_string::NonEmptyString;
use serde::{Deserialize, Serialize};

/// A unique, path-safe identifier for a taxonomy entry.
///
/// A slug names the entry's directory on disk, so it is restricted to
/// lowercase ASCII alphanumeric segments separated by single hyphens
/// (e.g. `panic-disorder`). Slugs are never empty and never start or end
/// with a hyphen.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(NonEmptyString);

impl Slug {
    /// Creates a new `Slug` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`SlugError`] if the string is empty, contains characters
    /// other than lowercase ASCII letters, digits and hyphens, or has an
    /// empty hyphen-separated segment (leading, trailing or doubled
    /// hyphens).
    pub fn new(s: String) -> Result<Self, SlugError> {
        let segments_valid = s.split('-').all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        });

        if s.is_empty() || !segments_valid {
            return Err(SlugError(s));
        }

        let inner = NonEmptyString::new(s).expect("emptiness is checked above");
        Ok(Self(inner))
    }

    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<String> for Slug {
    type Error = SlugError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Slug {
    type Error = SlugError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value.to_string())
    }
}

impl FromStr for Slug {
    type Err = SlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0.as_str().to_owned()
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl Deref for Slug {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.as_str()
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a string is not a valid slug.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error(
    "invalid slug '{0}': must be lowercase ASCII alphanumeric segments separated by single hyphens"
)]
pub struct SlugError(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_simple_and_hyphenated_slugs() {
        for valid in ["adhd", "panic-disorder", "bipolar-i-disorder"] {
            let slug: Slug = valid.parse().expect("slug should parse");
            assert_eq!(slug.as_str(), valid);
        }
    }

    #[test]
    fn rejects_malformed_slugs() {
        for invalid in [
            "",
            "Panic-Disorder",
            "panic disorder",
            "panic_disorder",
            "panic--disorder",
            "-panic",
            "panic-",
            "pänic",
        ] {
            assert!(invalid.parse::<Slug>().is_err(), "accepted '{invalid}'");
        }
    }

    #[test]
    fn display_round_trips() {
        let slug: Slug = "social-anxiety-disorder".parse().unwrap();
        assert_eq!(slug.to_string(), "social-anxiety-disorder");
    }

    #[test]
    fn serde_uses_string_representation() {
        let slug: Slug = "ptsd".parse().unwrap();
        assert_eq!(serde_json::to_string(&slug).unwrap(), "\"ptsd\"");

        let parsed: Slug = serde_json::from_str("\"ptsd\"").unwrap();
        assert_eq!(parsed, slug);

        assert!(serde_json::from_str::<Slug>("\"Not A Slug\"").is_err());
    }
}
