use std::fmt;

/// Release channel policy selected for a branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Channel {
    /// Alpha pre-release, published as a draft
    Alpha,
    /// Beta pre-release, published as a draft
    Beta,
    /// Release candidate: pre-release label, but not a draft
    ReleaseCandidate,
    /// Stable release
    Release,
    /// A name no policy is registered for
    Unrecognized(String),
}

impl Channel {
    /// Resolve a channel from its configured name. Unknown names are kept as
    /// [`Channel::Unrecognized`] rather than rejected.
    pub fn from_name(name: &str) -> Self {
        match name {
            "alpha" => Channel::Alpha,
            "beta" => Channel::Beta,
            "rc" => Channel::ReleaseCandidate,
            "release" => Channel::Release,
            other => Channel::Unrecognized(other.to_string()),
        }
    }

    /// Name used in pre-release labels, for channels that produce them
    pub fn prerelease_name(&self) -> Option<&'static str> {
        match self {
            Channel::Alpha => Some("alpha"),
            Channel::Beta => Some("beta"),
            Channel::ReleaseCandidate => Some("rc"),
            Channel::Release | Channel::Unrecognized(_) => None,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Alpha => write!(f, "alpha"),
            Channel::Beta => write!(f, "beta"),
            Channel::ReleaseCandidate => write!(f, "rc"),
            Channel::Release => write!(f, "release"),
            Channel::Unrecognized(name) => write!(f, "{}", name),
        }
    }
}
