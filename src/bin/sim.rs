use bulls_and_cows::{init_logging, AiPlayer, MemoryStore, QuietDisplay, Session};
use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Let the solver play headless rounds and print a JSON summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    rounds: u32,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let mut secret_rng = SmallRng::seed_from_u64(args.seed);
    let solver_rng = SmallRng::seed_from_u64(args.seed.wrapping_add(1));
    let mut player = AiPlayer::new(solver_rng, args.rounds);
    let mut session = Session::new(MemoryStore::new());

    let summaries = session.run(&mut player, &mut secret_rng, &mut QuietDisplay)?;
    let mean_attempts = summaries.iter().map(|s| s.attempts as f64).sum::<f64>()
        / summaries.len().max(1) as f64;

    let result = json!({
        "rounds": summaries,
        "mean_attempts": mean_attempts,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
