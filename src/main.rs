use std::process;

use git_commit_ai::cli::orchestration::{run_commit_workflow, CommitWorkflowArgs};
use git_commit_ai::cli::Args;
use git_commit_ai::ui;
use git_commit_ai::workflow::Outcome;

#[tokio::main]
async fn main() {
    // Logs go to stderr so they never mix with the prompts
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse_normalized();

    // Ctrl-C is a cancellation, not a failure
    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            ui::display_status("Commit cancelled, nothing was committed");
            process::exit(0);
        }
    });

    match run_commit_workflow(CommitWorkflowArgs::from(&args)).await {
        Ok(Outcome::Committed { .. }) | Ok(Outcome::Aborted) => {}
        Err(e) => {
            ui::display_error(&e.to_string());

            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("  Caused by: {}", err);
                source = err.source();
            }

            process::exit(1);
        }
    }
}
