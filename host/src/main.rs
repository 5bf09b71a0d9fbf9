use std::io;
use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use startup_core::GameConfig;
use startup_host::config::load_config;
use startup_host::game::run;
use tracing::info;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(about = "Sink every startup on the grid in as few guesses as you can")]
struct Args {
    /// Path to a JSON game config (grid width, startups, attempt ceiling, par)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RNG seed, for replaying the same placement
    #[arg(long)]
    seed: Option<u64>,

    /// Grid width, overriding the config
    #[arg(short, long)]
    width: Option<usize>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => GameConfig::default(),
    };
    if let Some(width) = args.width {
        config.width = width;
    }
    config.validate()?;

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let rng = StdRng::seed_from_u64(seed);

    let stdin = io::stdin();
    run(&config, rng, &mut stdin.lock(), &mut io::stdout())?;
    Ok(())
}

// Logs go to stderr so they never interleave with the game prompts.
fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(io::stderr),
        )
        .with(filter)
        .init();
}
