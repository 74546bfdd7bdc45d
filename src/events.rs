//! Observable release-engine events
//!
//! The analyzer and calculator never log directly; they report
//! [`ReleaseEvent`]s to an injected [`Observer`]. [`TracingObserver`] forwards
//! them to `tracing`, [`RecordingObserver`] keeps them in memory.

use std::fmt;
use std::sync::{Arc, Mutex};

use semver::Version;

/// Why a commit was excluded from classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropReason {
    /// First line does not follow the grammar's structure
    NoMatch,
    /// Type token has no rule in the active rule table
    UnknownType(String),
}

/// Non-fatal occurrences worth reporting to an operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseEvent {
    /// A commit was left out of every bucket
    CommitDropped { hash: String, reason: DropReason },
    /// A pre-release label could not be continued and restarted at `<channel>.0`
    PrereleaseReset { label: String, channel: String },
    /// The branch maps to no release channel, nothing is released
    ChannelNotConfigured { branch: String },
    /// A next version was computed
    VersionCalculated {
        previous: Version,
        next: Version,
        draft: bool,
    },
}

impl fmt::Display for ReleaseEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseEvent::CommitDropped { hash, reason } => {
                let short_hash = hash.get(..7).unwrap_or(hash);
                match reason {
                    DropReason::NoMatch => {
                        write!(f, "Skipping commit {}: not a recognized format", short_hash)
                    }
                    DropReason::UnknownType(token) => write!(
                        f,
                        "Skipping commit {}: unknown commit type '{}'",
                        short_hash, token
                    ),
                }
            }
            ReleaseEvent::PrereleaseReset { label, channel } => write!(
                f,
                "Could not continue pre-release '{}', starting again at {}.0",
                label, channel
            ),
            ReleaseEvent::ChannelNotConfigured { branch } => {
                write!(f, "No release channel configured for branch '{}'", branch)
            }
            ReleaseEvent::VersionCalculated {
                previous,
                next,
                draft,
            } => {
                write!(f, "New version {} -> {}", previous, next)?;
                if *draft {
                    write!(f, " (draft)")?;
                }
                Ok(())
            }
        }
    }
}

/// Receiver of release-engine events
pub trait Observer: Send + Sync {
    fn notify(&self, event: &ReleaseEvent);
}

/// Forwards events to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn notify(&self, event: &ReleaseEvent) {
        match event {
            ReleaseEvent::CommitDropped { hash, .. } => {
                tracing::debug!(commit = %hash, "{}", event)
            }
            ReleaseEvent::PrereleaseReset { .. } => tracing::warn!("{}", event),
            ReleaseEvent::ChannelNotConfigured { .. } => tracing::debug!("{}", event),
            ReleaseEvent::VersionCalculated { .. } => tracing::info!("{}", event),
        }
    }
}

/// Keeps every event it receives, in order
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<ReleaseEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events received so far
    pub fn events(&self) -> Vec<ReleaseEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Observer for RecordingObserver {
    fn notify(&self, event: &ReleaseEvent) {
        let mut events = match self.events.lock() {
            Ok(events) => events,
            Err(poisoned) => poisoned.into_inner(),
        };
        events.push(event.clone());
    }
}

/// Default observer used when none is injected
pub fn default_observer() -> Arc<dyn Observer> {
    Arc::new(TracingObserver)
}
