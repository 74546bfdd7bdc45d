//! Pre-release label handling
//!
//! Release channels label their versions as `<channel>.<counter>` (e.g. `beta.3`).
//! See https://semver.org/#spec-item-9 for the general pre-release grammar.

use crate::error::{Result, SemrelError};
use semver::Prerelease;
use std::fmt;

/// A channel pre-release label with its counter
///
/// # Examples
/// - "beta.3" -> PrereleaseLabel { channel: "beta", counter: 3 }
/// - "rc.0" -> PrereleaseLabel { channel: "rc", counter: 0 }
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrereleaseLabel {
    pub channel: String,
    pub counter: u64,
}

impl PrereleaseLabel {
    pub fn new(channel: impl Into<String>, counter: u64) -> Self {
        PrereleaseLabel {
            channel: channel.into(),
            counter,
        }
    }

    /// The first label of a fresh sequence on `channel` (`<channel>.0`)
    pub fn fresh(channel: impl Into<String>) -> Self {
        PrereleaseLabel::new(channel, 0)
    }

    /// Parse a label of exactly the form `<channel>.<counter>`
    ///
    /// # Returns
    /// * `Ok(PrereleaseLabel)` - Parsed label
    /// * `Err` - If the label has other than two dot-separated parts, or the
    ///   counter is not a non-negative integer
    pub fn parse(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 2 || parts[0].is_empty() {
            return Err(SemrelError::version(format!(
                "Unexpected pre-release label: '{}' - expected <channel>.<counter>",
                s
            )));
        }

        let counter = parts[1].parse::<u64>().map_err(|_| {
            SemrelError::version(format!("Invalid pre-release counter: '{}'", parts[1]))
        })?;

        Ok(PrereleaseLabel::new(parts[0], counter))
    }

    /// Channel name of an existing label: everything before the first dot
    pub fn channel_of(pre: &Prerelease) -> &str {
        pre.as_str().split('.').next().unwrap_or_default()
    }

    /// The next label on the same channel, `None` once the counter is exhausted
    pub fn increment(&self) -> Option<Self> {
        let counter = self.counter.checked_add(1)?;
        Some(PrereleaseLabel {
            channel: self.channel.clone(),
            counter,
        })
    }

    /// Convert into a semver pre-release identifier
    pub fn to_prerelease(&self) -> Result<Prerelease> {
        Ok(Prerelease::new(&self.to_string())?)
    }
}

impl fmt::Display for PrereleaseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.channel, self.counter)
    }
}
