use std::sync::Arc;

use semver::Version;

use crate::domain::{bump, BucketedCommits, Channel, PrereleaseLabel};
use crate::error::Result;
use crate::events::{default_observer, Observer, ReleaseEvent};

/// Outcome of a version calculation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextVersion {
    pub version: Version,
    /// Whether the release should be published as a draft
    pub draft: bool,
}

impl NextVersion {
    fn unchanged(version: &Version) -> Self {
        NextVersion {
            version: version.clone(),
            draft: false,
        }
    }
}

/// Turns classified commits and a channel policy into the next version
pub struct Calculator {
    observer: Arc<dyn Observer>,
}

impl Calculator {
    pub fn new() -> Self {
        Calculator {
            observer: default_observer(),
        }
    }

    /// Report pre-release resets to `observer` instead of `tracing`
    pub fn with_observer(mut self, observer: Arc<dyn Observer>) -> Self {
        self.observer = observer;
        self
    }

    /// Advance the pre-release counter of `version` on `channel`.
    ///
    /// A version without a label, or labelled for another channel, starts a
    /// fresh `<channel>.0` sequence. A label of the right channel that cannot
    /// be parsed as `<channel>.<counter>`, or whose counter cannot be advanced,
    /// also restarts at `<channel>.0`, and the reset is reported to the observer.
    pub fn inc_prerelease(&self, channel: &str, version: &Version) -> Result<Version> {
        let label = if version.pre.is_empty()
            || PrereleaseLabel::channel_of(&version.pre) != channel
        {
            PrereleaseLabel::fresh(channel)
        } else {
            let advanced = PrereleaseLabel::parse(version.pre.as_str())
                .ok()
                .and_then(|current| current.increment());
            match advanced {
                Some(next) => next,
                None => {
                    self.observer.notify(&ReleaseEvent::PrereleaseReset {
                        label: version.pre.to_string(),
                        channel: channel.to_string(),
                    });
                    PrereleaseLabel::fresh(channel)
                }
            }
        };

        let mut next = version.clone();
        next.pre = label.to_prerelease()?;
        Ok(next)
    }

    /// Compute the next version for `channel`.
    ///
    /// - `alpha`/`beta`: any major, minor or patch commit advances the
    ///   pre-release counter; the result is a draft.
    /// - `rc`: same increment, not a draft.
    /// - `release`: the most severe non-empty bucket decides the increment,
    ///   except on a first release, where `last` is kept as is.
    /// - anything else: `last` unchanged.
    ///
    /// Without qualifying commits the version is unchanged and not a draft.
    pub fn calculate(
        &self,
        commits: &BucketedCommits,
        last: &Version,
        channel: &Channel,
        first_release: bool,
    ) -> Result<NextVersion> {
        match channel {
            Channel::Alpha | Channel::Beta | Channel::ReleaseCandidate => {
                let name = match channel.prerelease_name() {
                    Some(name) if commits.has_release_changes() => name,
                    _ => return Ok(NextVersion::unchanged(last)),
                };
                Ok(NextVersion {
                    version: self.inc_prerelease(name, last)?,
                    draft: *channel != Channel::ReleaseCandidate,
                })
            }
            Channel::Release => {
                if first_release {
                    return Ok(NextVersion::unchanged(last));
                }
                let version = match commits.highest() {
                    Some(severity) => bump(last, severity),
                    None => last.clone(),
                };
                Ok(NextVersion {
                    version,
                    draft: false,
                })
            }
            Channel::Unrecognized(_) => Ok(NextVersion::unchanged(last)),
        }
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
