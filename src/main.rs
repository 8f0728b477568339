#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use seabattle::{init_logging, random_fleet, Battleship, DEMO_FLEET};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Place the built-in fleet and fire a scripted volley.
    Demo,
    /// Generate a random rule-satisfying fleet and print it.
    Random {
        #[arg(long, help = "Fix RNG seed for reproducible layouts (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo => {
            let mut board = Battleship::new(DEMO_FLEET)?;
            for shot in [(0, 0), (0, 1), (0, 2), (0, 3), (9, 9)] {
                let result = board.fire(shot);
                log::info!("fire at {:?}: {}", shot, result);
            }
            board.print_field();
        }
        Commands::Random { seed } => {
            let mut rng = match seed {
                Some(s) => SmallRng::seed_from_u64(s),
                None => SmallRng::from_rng(&mut rand::rng()),
            };
            let fleet = random_fleet(&mut rng)?;
            for (start, end) in fleet {
                log::debug!("placed ship {:?} - {:?}", start, end);
            }
            let board = Battleship::new(fleet)?;
            board.print_field();
        }
    }
    Ok(())
}
