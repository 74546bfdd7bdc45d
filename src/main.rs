use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use git_semrel::cli::orchestration::{run_changelog, run_next_version, NextVersionOutcome};
use git_semrel::cli::{Cli, Command};
use git_semrel::ui;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

/// Console logging controlled by RUST_LOG (default: warn, or debug with --verbose)
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let args = cli.workflow_args();

    match &cli.command {
        Command::Next(_) => {
            let outcome = run_next_version(&args)?;
            report(&outcome);
            println!("{}", outcome.decision.next.version);
        }
        Command::Changelog { output, .. } => {
            let changelog = run_changelog(&args, output.as_deref())?;
            match output {
                Some(path) => {
                    ui::display_success(&format!("Changelog written to {}", path.display()))
                }
                None => print!("{}", changelog),
            }
        }
    }

    Ok(())
}

fn report(outcome: &NextVersionOutcome) {
    ui::display_decision(&outcome.decision, &outcome.tag);

    if outcome.decision.commits.dropped > 0 {
        ui::display_warning(&format!(
            "{} commit(s) did not follow the commit format and were skipped",
            outcome.decision.commits.dropped
        ));
    }

    if !outcome.should_release {
        ui::display_status(&format!(
            "Builds of '{}' do not publish releases (pull request or no release channel)",
            outcome.decision.branch
        ));
    } else if outcome.publishable() {
        ui::display_success(&format!("Release {} should be published", outcome.tag));
    } else {
        ui::display_status("No release needed, version unchanged");
    }
}
