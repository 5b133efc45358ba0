// Random champion picker entry point.
//
// Startup sequence:
// 1. Parse command-line flags
// 2. Load config (copying defaults on first run)
// 3. Initialize tracing (log to file, not terminal)
// 4. Open the INI store, creating it if absent
// 5. Build the op.gg source and the RNG
// 6. Run the session loop; any session error exits with status 1

mod config;
mod console;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use lanepick_core::{IniStore, Session};
use lanepick_opgg::OpggClient;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{error, info};

use crate::console::StdConsole;

#[derive(Parser)]
#[command(name = "lanepick")]
#[command(about = "Pick a random champion you own for the role you're playing")]
struct Cli {
    /// Directory holding config/ and defaults/ (defaults to the current directory)
    #[arg(long)]
    base_dir: Option<PathBuf>,
    /// Store file for unowned champions and pick stats (overrides config)
    #[arg(long)]
    store: Option<PathBuf>,
    /// RNG seed for reproducible draws (overrides config)
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // 1. Flags
    let cli = Cli::parse();
    let base_dir = match cli.base_dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("failed to resolve current directory")?,
    };

    // 2. Config
    let mut config = config::load_config(&base_dir).context("failed to load configuration")?;
    if let Some(store) = cli.store {
        config.store.path = store;
    }
    if let Some(seed) = cli.seed {
        config.draw.seed = Some(seed);
    }

    // 3. Tracing
    init_tracing(&config.logging.dir)?;
    info!("lanepick starting up");

    // 4. Store
    let store = IniStore::open(&config.store.path).with_context(|| {
        format!("failed to open store at {}", config.store.path.display())
    })?;
    info!(path = %config.store.path.display(), "store opened");

    // 5. Source and RNG
    let source = OpggClient::new(config.source.url.clone(), &config.source.user_agent)
        .context("failed to build HTTP client")?;
    let rng = match config.draw.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    // 6. Session
    let mut session = Session::new(store, source, StdConsole::stdio(), rng)
        .with_max_attempts(config.prompt.max_attempts);
    if let Err(e) = session.run().await {
        error!("session ended: {e}");
        println!("\n{}", e.exit_message());
        std::process::exit(1);
    }

    info!("lanepick shut down cleanly");
    Ok(())
}

/// Initialize tracing to log to a file (the terminal carries the prompts).
fn init_tracing(log_dir: &std::path::Path) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;
    let log_file = std::fs::File::create(log_dir.join("lanepick.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("lanepick=info,lanepick_core=info,lanepick_opgg=info,warn")
        }))
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
