//! CLI for bootstrapping translation repositories.
//!
//! For each language, makes sure the translated repository exists on GitHub
//! and is cloned next to the original under the configured repository root.

use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use translation_repo_init::{
    load_languages, validate_language, InitConfig, LanguageInfo, Published, RunSummary, Runner,
    RunnerConfig, RunnerError,
};

/// Translation Repo Init - Create and clone per-language translation repositories.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the tool configuration.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// GitHub Personal Access Token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Path to a languages file with `[[language]]` entries.
    #[arg(long, conflicts_with = "code")]
    languages: Option<PathBuf>,

    /// Code of a single language to bootstrap.
    #[arg(long, requires = "name", required_unless_present = "languages")]
    code: Option<String>,

    /// Display name of the single language.
    #[arg(long, requires = "code")]
    name: Option<String>,

    /// `true`, `false` or a homepage URL for the single language.
    #[arg(long, default_value = "false", conflicts_with = "languages")]
    published: Published,

    /// Preview what would happen without creating or cloning anything.
    #[arg(long)]
    dry_run: bool,

    /// Maximum number of languages processed at once.
    #[arg(long, default_value_t = 1)]
    concurrency: usize,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // octocrab talks TLS through rustls
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);

            if summary.has_failures() {
                ExitCode::from(1)
            } else {
                ExitCode::from(0)
            }
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let init = InitConfig::load(&args.config, args.token)?;
    let languages = match (&args.languages, args.code, args.name) {
        (Some(path), _, _) => load_languages(path)?,
        (None, Some(code), Some(name)) => {
            let language = LanguageInfo::new(code, name, args.published);
            validate_language(&language, Path::new("--code"))?;
            vec![language]
        }
        // clap enforces either --languages or --code with --name
        (None, _, _) => Vec::new(),
    };

    let config = RunnerConfig::new(init, args.dry_run, args.concurrency);
    let runner = Runner::new(config)?;
    Ok(runner.run(&languages).await)
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    print!("{}", format_summary(summary));
}

/// Formats the final run summary.
fn format_summary(summary: &RunSummary) -> String {
    let mut out = String::from("\nSummary:\n");
    let mode = if summary.dry_run { "Dry Run" } else { "Live" };
    out.push_str(&format!("  Mode: {mode}\n"));
    out.push_str(&format!(
        "  Languages processed: {}\n",
        summary.languages_processed
    ));

    let (present, cloned, created) = if summary.dry_run {
        out.push_str(&format!(
            "  Would clone original first: {}\n",
            summary.original_clones
        ));
        ("Would skip", "Would clone existing", "Would create")
    } else {
        ("Already present", "Cloned existing", "Created")
    };
    out.push_str(&format!("  {present}: {}\n", summary.already_present));
    out.push_str(&format!("  {cloned}: {}\n", summary.cloned_existing));
    out.push_str(&format!("  {created}: {}\n", summary.created));
    out.push_str(&format!("  Failed: {}\n", summary.failed));
    out
}
