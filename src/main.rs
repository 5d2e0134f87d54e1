#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use bulls_and_cows::{init_logging, CliPlayer, ConsoleDisplay, FileStore, Session, DEFAULT_SCORE_FILE};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::path::PathBuf;

/// Guess the hidden 4-digit number. Bulls are right digits in the right
/// place, cows are right digits in the wrong place.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// File holding the top completion times.
    #[arg(long, default_value = DEFAULT_SCORE_FILE)]
    scores: PathBuf,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut session = Session::new(FileStore::new(&cli.scores));
    let mut display = ConsoleDisplay::stdout();
    let mut player = CliPlayer::stdio();

    let summaries = session.run(&mut player, &mut rng, &mut display)?;
    log::info!("Session over after {} won rounds", summaries.len());
    Ok(())
}
