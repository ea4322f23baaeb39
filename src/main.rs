//! Robots-Checker main entry point
//!
//! Command-line front end for the robots.txt analysis form. It fills the
//! form the way a visitor would, submits it, and writes the rendered
//! results as HTML.

use anyhow::Context;
use clap::Parser;
use robots_checker::config::{load_config_or_default, Config};
use robots_checker::render::{page, BufferedResultsArea};
use robots_checker::{FormController, FormState, HttpAnalysisClient};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Robots-Checker: test paths against a site's robots.txt
///
/// Sends a robots.txt (fetched from a URL or read from a file) together
/// with user-agents and test paths to the analysis service, then renders
/// the verdict as HTML.
#[derive(Parser, Debug)]
#[command(name = "robots-checker")]
#[command(version = "1.0.0")]
#[command(about = "Check paths against a robots.txt", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Site or robots.txt URL (completed to /robots.txt if needed)
    #[arg(long, conflicts_with = "content_file")]
    url: Option<String>,

    /// File holding robots.txt content to analyze instead of a URL
    #[arg(long, value_name = "FILE")]
    content_file: Option<PathBuf>,

    /// User-agent to evaluate (repeatable; defaults come from config)
    #[arg(short = 'a', long = "user-agent", value_name = "AGENT")]
    user_agents: Vec<String>,

    /// Path to test (repeatable)
    #[arg(short = 'p', long = "path", value_name = "PATH")]
    paths: Vec<String>,

    /// File with one test path per line
    #[arg(long, value_name = "FILE")]
    paths_file: Option<PathBuf>,

    /// Write HTML here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Emit a standalone HTML page rather than a fragment
    #[arg(long)]
    page: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    if let Some(path) = &cli.config {
        tracing::info!("Loading configuration from: {}", path.display());
    }
    let (config, hash) = load_config_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;
    match hash {
        Some(hash) => tracing::info!("Configuration loaded successfully (hash: {})", hash),
        None => tracing::debug!("No configuration file given, using defaults"),
    }

    let form = fill_form(&cli, &config)?;

    let client = HttpAnalysisClient::new(&config.api).context("Failed to build HTTP client")?;
    tracing::info!("Submitting to {}", client.endpoint());

    let mut controller = FormController::new(client, BufferedResultsArea::new());
    let outcome = controller.submit(&form).await;
    let (_, area) = controller.into_parts();

    let html = if cli.page {
        page(area.html())
    } else {
        area.html().to_string()
    };

    match &cli.output {
        Some(path) => {
            std::fs::write(path, html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Results written to {}", path.display());
        }
        None => print!("{}", html),
    }

    if outcome.is_error() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("robots_checker=info,warn"),
            1 => EnvFilter::new("robots_checker=debug,info"),
            2 => EnvFilter::new("robots_checker=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    // Logs go to stderr so stdout stays clean HTML
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Replays the command-line inputs as form events
fn fill_form(cli: &Cli, config: &Config) -> anyhow::Result<FormState> {
    let mut form = FormState::from_config(&config.form);

    if let Some(url) = &cli.url {
        form.edit_url(url.as_str());
        form.blur_url();
    }

    if let Some(path) = &cli.content_file {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        form.edit_content(content);
    }

    if !cli.user_agents.is_empty() {
        let select = form.user_agents_mut();
        select.clear();
        for agent in &cli.user_agents {
            select.select(agent)?;
        }
    }

    let mut paths = cli.paths.clone();
    if let Some(path) = &cli.paths_file {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        paths.extend(content.lines().map(str::to_string));
    }
    form.set_test_paths(paths.join("\n"));

    Ok(form)
}
