//! Main workflow orchestration logic
//!
//! Keeps CLI argument parsing apart from the release workflow. The `*_with`
//! functions take an already opened repository and a loaded configuration so
//! they can be driven by tests without a real git checkout.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::config::{load_project_config, ReleaseConfig};
use crate::domain::{BuildContext, ReleaseDecision};
use crate::events::default_observer;
use crate::git::{Git2Repository, Repository};
use crate::release::SemanticRelease;

/// Arguments for the release workflow
///
/// Mirrors the CLI flags without depending on clap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkflowArgs {
    /// Path to custom config file
    pub config_path: Option<PathBuf>,

    /// Path inside the repository
    pub repo_path: PathBuf,

    /// Branch being built; defaults to the checked out branch
    pub branch: Option<String>,

    /// Commit being built; defaults to HEAD
    pub commit: Option<String>,

    pub pull_request: bool,
}

/// Result of computing the next release
#[derive(Debug, Clone, PartialEq)]
pub struct NextVersionOutcome {
    pub decision: ReleaseDecision,

    /// Tag the next version would be published under
    pub tag: String,

    /// Whether the build may publish (not a pull request, channel configured)
    pub should_release: bool,
}

impl NextVersionOutcome {
    /// A release should be published for this build
    pub fn publishable(&self) -> bool {
        self.should_release && self.decision.requires_release()
    }
}

/// Fill in branch and commit from the repository when not given explicitly
pub fn resolve_build_context<R: Repository>(
    repository: &R,
    args: &WorkflowArgs,
) -> Result<BuildContext> {
    let branch = match &args.branch {
        Some(branch) => branch.clone(),
        None => repository
            .current_branch()
            .context("Cannot determine the branch, pass --branch")?,
    };
    let commit = match &args.commit {
        Some(commit) => commit.clone(),
        None => repository
            .head_hash()
            .context("Cannot determine the commit, pass --commit")?,
    };

    Ok(BuildContext::new(branch, commit).pull_request(args.pull_request))
}

/// Compute the next version against an opened repository
pub fn next_version_with<R: Repository>(
    config: ReleaseConfig,
    repository: R,
    args: &WorkflowArgs,
) -> Result<NextVersionOutcome> {
    let context = resolve_build_context(&repository, args)?;
    let release = SemanticRelease::new(config, repository, default_observer())
        .context("Invalid release configuration")?;

    next_version_for(&release, &context)
}

fn next_version_for<R: Repository>(
    release: &SemanticRelease<R>,
    context: &BuildContext,
) -> Result<NextVersionOutcome> {
    let decision = release
        .next_version(context)
        .with_context(|| format!("Failed to compute next version for '{}'", context.branch))?;
    let tag = release.next_tag(&decision);

    Ok(NextVersionOutcome {
        should_release: release.should_release(context),
        tag,
        decision,
    })
}

/// Render the changelog of the next release against an opened repository
pub fn changelog_with<R: Repository>(
    config: ReleaseConfig,
    repository: R,
    args: &WorkflowArgs,
    timestamp: DateTime<Utc>,
) -> Result<(NextVersionOutcome, String)> {
    let context = resolve_build_context(&repository, args)?;
    let release = SemanticRelease::new(config, repository, default_observer())
        .context("Invalid release configuration")?;

    let outcome = next_version_for(&release, &context)?;
    let changelog = release.changelog(&outcome.decision, timestamp);
    Ok((outcome, changelog))
}

/// Open the repository, then load the configuration found in its working tree
fn open(args: &WorkflowArgs) -> Result<(ReleaseConfig, Git2Repository)> {
    let repository = Git2Repository::open(&args.repo_path).with_context(|| {
        format!("No git repository found at {}", args.repo_path.display())
    })?;
    let project_dir = repository.workdir().unwrap_or(args.repo_path.as_path());
    let config = load_project_config(args.config_path.as_deref(), project_dir)
        .context("Error loading config")?;
    Ok((config, repository))
}

/// `git-semrel next`
pub fn run_next_version(args: &WorkflowArgs) -> Result<NextVersionOutcome> {
    let (config, repository) = open(args)?;
    next_version_with(config, repository, args)
}

/// `git-semrel changelog`
///
/// Writes the changelog to `output` when given and returns it either way.
pub fn run_changelog(args: &WorkflowArgs, output: Option<&Path>) -> Result<String> {
    let (config, repository) = open(args)?;
    let (_, changelog) = changelog_with(config, repository, args, Utc::now())?;

    if let Some(path) = output {
        std::fs::write(path, &changelog)
            .with_context(|| format!("Failed to write changelog to {}", path.display()))?;
    }

    Ok(changelog)
}

