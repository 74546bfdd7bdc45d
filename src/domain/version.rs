use crate::error::Result;
use semver::{Prerelease, Version};
use std::fmt;

/// Version impact of a single commit, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    None,
    Patch,
    Minor,
    Major,
}

impl Severity {
    /// All severities in bump priority order (major first)
    pub const PRIORITY: [Severity; 4] = [
        Severity::Major,
        Severity::Minor,
        Severity::Patch,
        Severity::None,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Major => "major",
            Severity::Minor => "minor",
            Severity::Patch => "patch",
            Severity::None => "none",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a version, accepting an optional `v`/`V` prefix (e.g. "v1.2.3-beta.1")
pub fn parse_version(input: &str) -> Result<Version> {
    let clean = input.trim().trim_start_matches(['v', 'V']);
    Ok(Version::parse(clean)?)
}

/// Apply a stable increment for the given severity.
///
/// - **Major**: major += 1, minor = 0, patch = 0
/// - **Minor**: minor += 1, patch = 0
/// - **Patch**: patch += 1, unless the version is a pre-release, in which
///   case the pre-release label is dropped and the triple is kept
///   (`1.2.0-rc.1` -> `1.2.0`)
/// - **None**: unchanged
///
/// Pre-release labels are cleared on every increment; build metadata is kept.
pub fn bump(version: &Version, severity: Severity) -> Version {
    let mut next = version.clone();
    match severity {
        Severity::Major => {
            next.major += 1;
            next.minor = 0;
            next.patch = 0;
        }
        Severity::Minor => {
            next.minor += 1;
            next.patch = 0;
        }
        Severity::Patch => {
            if version.pre.is_empty() {
                next.patch += 1;
            }
        }
        Severity::None => return next,
    }
    next.pre = Prerelease::EMPTY;
    next
}
