//! Command-line interface definition

pub mod orchestration;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use orchestration::WorkflowArgs;

#[derive(Debug, Parser)]
#[command(
    name = "git-semrel",
    version,
    about = "Compute the next semantic version and changelog from conventional commits"
)]
pub struct Cli {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        default_value = ".",
        help = "Path inside the git repository"
    )]
    pub repo: PathBuf,

    #[arg(short, long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the next version for a build
    Next(BuildArgs),

    /// Render the changelog of the next release
    Changelog {
        #[command(flatten)]
        build: BuildArgs,

        #[arg(short, long, help = "Write the changelog to FILE instead of stdout")]
        output: Option<PathBuf>,
    },
}

/// Describes the build a release is computed for
#[derive(Debug, Clone, Default, Args)]
pub struct BuildArgs {
    #[arg(long, env = "SEMREL_BRANCH", help = "Branch being built [default: current branch]")]
    pub branch: Option<String>,

    #[arg(long, env = "SEMREL_COMMIT", help = "Commit being built [default: HEAD]")]
    pub commit: Option<String>,

    #[arg(long, help = "The build is for a pull request")]
    pub pull_request: bool,
}

impl Cli {
    pub fn workflow_args(&self) -> WorkflowArgs {
        let build = match &self.command {
            Command::Next(build) => build,
            Command::Changelog { build, .. } => build,
        };

        WorkflowArgs {
            config_path: self.config.clone(),
            repo_path: self.repo.clone(),
            branch: build.branch.clone(),
            commit: build.commit.clone(),
            pull_request: build.pull_request,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_next() {
        let cli = Cli::try_parse_from([
            "git-semrel",
            "--verbose",
            "next",
            "--branch",
            "beta",
            "--commit",
            "abc1234",
            "--pull-request",
        ])
        .unwrap();

        assert!(cli.verbose);
        let args = cli.workflow_args();
        assert_eq!(args.branch.as_deref(), Some("beta"));
        assert_eq!(args.commit.as_deref(), Some("abc1234"));
        assert!(args.pull_request);
        assert_eq!(args.repo_path, PathBuf::from("."));
    }

    #[test]
    fn test_parse_changelog_with_output() {
        let cli = Cli::try_parse_from([
            "git-semrel",
            "changelog",
            "--output",
            "CHANGELOG.md",
            "--config",
            "semrel.toml",
        ])
        .unwrap();

        match &cli.command {
            Command::Changelog { output, .. } => {
                assert_eq!(output.as_deref(), Some(std::path::Path::new("CHANGELOG.md")))
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.config, Some(PathBuf::from("semrel.toml")));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["git-semrel"]).is_err());
    }
}
