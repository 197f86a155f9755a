//! Parsed `category/subtype` content type labels.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fmt;
use std::str::FromStr;

use crate::error::SniffError;

/// A sniffed MIME type split into its two parts.
///
/// Both parts are lower-cased and any parameters (`; charset=...`) are
/// dropped when parsing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentType {
    category: String,
    subtype: String,
}

impl ContentType {
    /// The fallback label for unrecognized binary content.
    #[must_use]
    pub fn octet_stream() -> Self {
        Self {
            category: "application".to_string(),
            subtype: "octet-stream".to_string(),
        }
    }

    /// The label for content without binary control bytes.
    #[must_use]
    pub fn text_plain() -> Self {
        Self {
            category: "text".to_string(),
            subtype: "plain".to_string(),
        }
    }

    /// The part before the slash, e.g. `image`.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// The part after the slash, e.g. `png`. Used as the output extension.
    #[must_use]
    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    /// Whether no signature matched.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.category == "application" && self.subtype == "octet-stream"
    }
}

impl FromStr for ContentType {
    type Err = SniffError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let essence = label.split(';').next().unwrap_or("").trim().to_lowercase();

        let Some((category, subtype)) = essence.split_once('/') else {
            return Err(SniffError::MalformedLabel(label.to_string()));
        };

        if category.is_empty() || subtype.is_empty() || subtype.contains('/') {
            return Err(SniffError::MalformedLabel(label.to_string()));
        }

        Ok(Self {
            category: category.to_string(),
            subtype: subtype.to_string(),
        })
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.category, self.subtype)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_label() {
        let ct: ContentType = "image/png".parse().unwrap();
        assert_eq!(ct.category(), "image");
        assert_eq!(ct.subtype(), "png");
        assert!(!ct.is_unknown());
    }

    #[test]
    fn test_parse_strips_parameters_and_case() {
        let ct: ContentType = "Text/HTML; charset=utf-8".parse().unwrap();
        assert_eq!(ct.to_string(), "text/html");
        assert_eq!(ct.subtype(), "html");
    }

    #[test]
    fn test_octet_stream_is_unknown() {
        let ct: ContentType = "application/octet-stream".parse().unwrap();
        assert!(ct.is_unknown());
        assert_eq!(ct.subtype(), "octet-stream");
    }

    #[test]
    fn test_malformed_labels_rejected() {
        assert!(matches!(
            "png".parse::<ContentType>(),
            Err(SniffError::MalformedLabel(_))
        ));
        assert!("image/".parse::<ContentType>().is_err());
        assert!("a/b/c".parse::<ContentType>().is_err());
    }
}
