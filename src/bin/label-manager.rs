use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::Instrument;
use tracing_subscriber::EnvFilter;

use label_manager::config::{ManagerConfig, DEFAULT_AUTOMATION_USER};
use label_manager::github::webhook::parse_issue_comment_event;
use label_manager::github::{GithubRepositoryClient, GithubToken};
use label_manager::manager::{manage_labels, LabelCatalog};

/// Adds and removes PR labels based on the content of PR comments.
#[derive(clap::Parser)]
struct Opts {
    /// Token used to add and remove labels.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    github_token: String,

    /// Path to the JSON payload of the event that triggered the run.
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    event_path: PathBuf,

    /// Name of the event that triggered the run. Only `issue_comment` events are handled.
    #[arg(long, env = "GITHUB_EVENT_NAME", default_value = "issue_comment")]
    event_name: String,

    /// Base URL of the GitHub API, e.g. for GitHub Enterprise.
    #[arg(long, env = "GITHUB_API_URL")]
    api_url: Option<String>,

    /// Login of the bot that posts the PR linter comments.
    #[arg(long, env = "AUTOMATION_USER", default_value = DEFAULT_AUTOMATION_USER)]
    automation_user: String,
}

fn try_main(opts: Opts) -> anyhow::Result<()> {
    if opts.event_name != "issue_comment" {
        tracing::warn!("Ignoring unsupported event {}", opts.event_name);
        return Ok(());
    }

    let config = ManagerConfig {
        automation_user: opts.automation_user,
    };
    let body = std::fs::read(&opts.event_path)
        .with_context(|| format!("Cannot read event payload {}", opts.event_path.display()))?;
    let Some(event) = parse_issue_comment_event(&body, &config)? else {
        tracing::info!("Event does not concern labels of a pull request");
        return Ok(());
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Cannot build tokio runtime")?;

    let token = GithubToken::new(opts.github_token);
    let api_url = opts.api_url;
    let span = tracing::info_span!(
        "comment",
        repo = %event.pr.repository,
        pr = %event.pr.number,
        action = %event.comment.action
    );
    runtime.block_on(
        async move {
            let client = GithubRepositoryClient::new(
                &token,
                api_url.as_deref(),
                event.pr.repository.clone(),
            )?;
            let catalog = LabelCatalog::default();
            let collector = manage_labels(&client, &event.pr, &event.comment, &catalog).await?;
            collector.print_updates();
            Ok::<(), anyhow::Error>(())
        }
        .instrument(span),
    )
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let opts = Opts::parse();
    if let Err(error) = try_main(opts) {
        eprintln!("Error: {error:?}");
        std::process::exit(1);
    }
}
