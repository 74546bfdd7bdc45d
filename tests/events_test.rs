use std::sync::Arc;

use git_semrel::analyzer::CommitAnalyzer;
use git_semrel::calculator::Calculator;
use git_semrel::config::ReleaseConfig;
use git_semrel::domain::{BuildContext, Commit};
use git_semrel::events::{DropReason, RecordingObserver, ReleaseEvent};
use git_semrel::git::MockRepository;
use git_semrel::SemanticRelease;
use semver::Version;

// ============================================================================
// ReleaseEvent Display Tests
// ============================================================================

#[test]
fn test_commit_dropped_display_shortens_hash() {
    let event = ReleaseEvent::CommitDropped {
        hash: "abc1234def5678".to_string(),
        reason: DropReason::NoMatch,
    };

    let display_msg = event.to_string();
    assert!(
        display_msg.contains("abc1234") && !display_msg.contains("abc1234d"),
        "Message should contain shortened commit hash 'abc1234', got: {}",
        display_msg
    );
}

#[test]
fn test_unknown_type_display_names_token() {
    let event = ReleaseEvent::CommitDropped {
        hash: "abc".to_string(),
        reason: DropReason::UnknownType("wip".to_string()),
    };

    let display_msg = event.to_string();
    assert!(
        display_msg.contains("'wip'"),
        "Message should name the unknown type, got: {}",
        display_msg
    );
}

#[test]
fn test_prerelease_reset_display() {
    let event = ReleaseEvent::PrereleaseReset {
        label: "beta.x".to_string(),
        channel: "beta".to_string(),
    };
    assert_eq!(
        event.to_string(),
        "Could not continue pre-release 'beta.x', starting again at beta.0"
    );
}

#[test]
fn test_version_calculated_display_marks_draft() {
    let event = ReleaseEvent::VersionCalculated {
        previous: Version::new(1, 0, 0),
        next: Version::parse("1.0.0-alpha.0").unwrap(),
        draft: true,
    };
    assert_eq!(event.to_string(), "New version 1.0.0 -> 1.0.0-alpha.0 (draft)");
}

// ============================================================================
// Events reported by the engine
// ============================================================================

#[test]
fn test_analyzer_reports_each_drop() {
    let observer = Arc::new(RecordingObserver::new());
    let analyzer = CommitAnalyzer::new("conventional")
        .unwrap()
        .with_observer(observer.clone());

    let buckets = analyzer.analyze(&[
        Commit::new("Merge pull request #4", "me", "1111111111"),
        Commit::new("wip: half done\n\nBREAKING CHANGE: maybe", "me", "2222222222"),
        Commit::new("fix: real fix", "me", "3333333333"),
    ]);

    assert_eq!(buckets.dropped, 2);
    assert_eq!(buckets.len(), 1);
    assert_eq!(
        observer.events(),
        vec![
            ReleaseEvent::CommitDropped {
                hash: "1111111111".to_string(),
                reason: DropReason::NoMatch,
            },
            ReleaseEvent::CommitDropped {
                hash: "2222222222".to_string(),
                reason: DropReason::UnknownType("wip".to_string()),
            },
        ]
    );
}

#[test]
fn test_calculator_reports_prerelease_reset() {
    let observer = Arc::new(RecordingObserver::new());
    let calculator = Calculator::new().with_observer(observer.clone());

    let version = Version::parse("1.0.0-beta.x.1").unwrap();
    let next = calculator.inc_prerelease("beta", &version).unwrap();

    assert_eq!(next, Version::parse("1.0.0-beta.0").unwrap());
    assert_eq!(
        observer.events(),
        vec![ReleaseEvent::PrereleaseReset {
            label: "beta.x.1".to_string(),
            channel: "beta".to_string(),
        }]
    );
}

#[test]
fn test_channel_switch_is_not_a_reset() {
    let observer = Arc::new(RecordingObserver::new());
    let calculator = Calculator::new().with_observer(observer.clone());

    let version = Version::parse("1.0.0-alpha.7").unwrap();
    let next = calculator.inc_prerelease("beta", &version).unwrap();

    assert_eq!(next, Version::parse("1.0.0-beta.0").unwrap());
    assert!(observer.events().is_empty());
}

#[test]
fn test_release_reports_calculation() {
    let observer = Arc::new(RecordingObserver::new());
    let mut repo = MockRepository::new();
    repo.add_commit(Commit::new("feat: a", "me", "1000000000"));
    repo.add_tag("v1.2.3", "1000000000");
    repo.add_commit(Commit::new("fix: b", "me", "2000000000"));

    let release =
        SemanticRelease::new(ReleaseConfig::default(), repo, observer.clone()).unwrap();
    release
        .next_version(&BuildContext::new("main", "2000000000"))
        .unwrap();

    assert_eq!(
        observer.events(),
        vec![ReleaseEvent::VersionCalculated {
            previous: Version::new(1, 2, 3),
            next: Version::new(1, 2, 4),
            draft: false,
        }]
    );
}
