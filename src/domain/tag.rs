use crate::error::{Result, SemrelError};
use semver::Version;

const PLACEHOLDER: &str = "{version}";

/// Version tag naming pattern (e.g., "v{version}", "release-{version}")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPattern {
    prefix: String,
    suffix: String,
}

impl TagPattern {
    /// Create a tag pattern; it must contain the `{version}` placeholder exactly once
    pub fn new(pattern: &str) -> Result<Self> {
        let mut pieces = pattern.split(PLACEHOLDER);
        match (pieces.next(), pieces.next(), pieces.next()) {
            (Some(prefix), Some(suffix), None) => Ok(TagPattern {
                prefix: prefix.to_string(),
                suffix: suffix.to_string(),
            }),
            _ => Err(SemrelError::config(format!(
                "Tag pattern '{}' must contain {} exactly once",
                pattern, PLACEHOLDER
            ))),
        }
    }

    /// Format a version according to pattern
    /// Example: pattern="v{version}", version=1.2.3 -> "v1.2.3"
    pub fn format(&self, version: &Version) -> String {
        format!("{}{}{}", self.prefix, version, self.suffix)
    }

    /// Extract the version from a tag following this pattern
    ///
    /// Returns `None` for tags that do not follow the pattern or whose
    /// version part is not a valid semantic version.
    pub fn extract(&self, tag: &str) -> Option<Version> {
        let version = tag
            .strip_prefix(self.prefix.as_str())?
            .strip_suffix(self.suffix.as_str())?;
        Version::parse(version).ok()
    }
}

impl Default for TagPattern {
    fn default() -> Self {
        TagPattern {
            prefix: "v".to_string(),
            suffix: String::new(),
        }
    }
}
