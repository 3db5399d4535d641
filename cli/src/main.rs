use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use larder_core::autofill::{find_hint, MAX_CANDIDATES};
use larder_core::{AutofillConfig, AutofillResolver};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "larder")]
#[command(about = "Larder CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a recipe name and print the auto-fill draft as JSON
    Autofill {
        /// Free-text recipe name
        name: String,
        /// Search candidates to inspect (overrides LARDER_AUTOFILL_CANDIDATES)
        #[arg(long)]
        candidates: Option<usize>,
        /// Per-request timeout in milliseconds (overrides LARDER_AUTOFILL_TIMEOUT_MS)
        #[arg(long)]
        timeout_ms: Option<u64>,
        /// Exit non-zero when no draft could be built
        #[arg(long)]
        strict: bool,
    },
    /// Print the ingredient hint that would narrow a search, if any
    Hint {
        /// Free-text recipe name
        name: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Autofill {
            name,
            candidates,
            timeout_ms,
            strict,
        } => {
            autofill(&name, candidates, timeout_ms, strict).await?;
        }
        Commands::Hint { name } => match find_hint(&name) {
            Some(hint) => println!("{}", hint),
            None => println!("(no hint)"),
        },
    }

    Ok(())
}

async fn autofill(
    name: &str,
    candidates: Option<usize>,
    timeout_ms: Option<u64>,
    strict: bool,
) -> Result<()> {
    let mut config = AutofillConfig::from_env()?;
    if let Some(n) = candidates {
        config.candidates = n.clamp(1, MAX_CANDIDATES);
    }
    if let Some(ms) = timeout_ms {
        config.timeout = Duration::from_millis(ms);
    }

    tracing::debug!(
        name,
        candidates = config.candidates,
        base_url = %config.base_url,
        "resolving auto-fill draft"
    );

    let resolver =
        AutofillResolver::from_config(config).context("Failed to build HTTP client")?;
    if !resolver.is_enabled() {
        eprintln!("warning: SPOONACULAR_API_KEY is not set");
    }

    let draft = resolver.resolve(name).await;
    println!("{}", serde_json::to_string_pretty(&draft)?);

    if strict && !draft.success {
        bail!("no auto-fill data found for {:?}", name);
    }

    Ok(())
}
