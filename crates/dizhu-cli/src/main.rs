use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use dizhu_bot::{Agent, GreedyAgent, RandomAgent};
use dizhu_cli::table;
use dizhu_core::game::session::Session;
use dizhu_core::model::score::multiplier;

/// Console table for Dou Dizhu.
#[derive(Debug, Parser)]
#[command(name = "mddizhu", author, version, about = "Dou Dizhu card table")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play one game as the landlord against two bot farmers.
    Play {
        /// Seed for a reproducible deal.
        #[arg(long, value_name = "SEED")]
        seed: Option<u64>,

        /// Bot kind for both farmer seats.
        #[arg(long, value_enum, default_value = "greedy")]
        farmers: AgentKind,
    },
    /// Run bot-vs-bot games and print the session tallies.
    Sim {
        /// Number of games to play.
        #[arg(long, default_value_t = 10, value_name = "COUNT")]
        games: u32,

        /// Seed for a reproducible session.
        #[arg(long, value_name = "SEED")]
        seed: Option<u64>,

        /// Bot kind for the landlord seat.
        #[arg(long, value_enum, default_value = "greedy")]
        landlord: AgentKind,

        /// Bot kind for both farmer seats.
        #[arg(long, value_enum, default_value = "greedy")]
        farmers: AgentKind,

        /// Suppress per-move output.
        #[arg(long)]
        quiet: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AgentKind {
    Greedy,
    Random,
}

fn build_agent(kind: AgentKind, seed: u64) -> Box<dyn Agent> {
    match kind {
        AgentKind::Greedy => Box::new(GreedyAgent::new()),
        AgentKind::Random => Box::new(RandomAgent::new(seed)),
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Command::Play { seed, farmers } => {
            let mut session = match seed {
                Some(seed) => Session::with_seed(seed)?,
                None => Session::new()?,
            };
            println!("session seed {}", session.seed());

            let seed = session.seed();
            let mut bots = [build_agent(farmers, seed ^ 1), build_agent(farmers, seed ^ 2)];
            let winner = table::run_interactive(&mut session, &mut bots)?;
            println!(
                "{winner} side wins (x{})",
                multiplier(session.game().bomb_count())
            );

            session.settle_and_start_next()?;
            table::print_tallies(&session);
        }
        Command::Sim {
            games,
            seed,
            landlord,
            farmers,
            quiet,
        } => {
            let mut session = match seed {
                Some(seed) => Session::with_seed(seed)?,
                None => Session::new()?,
            };
            println!("session seed {}", session.seed());

            let seed = session.seed();
            let mut agents = [
                build_agent(landlord, seed ^ 1),
                build_agent(farmers, seed ^ 2),
                build_agent(farmers, seed ^ 3),
            ];
            table::run_games(&mut session, &mut agents, games, !quiet)?;
            table::print_tallies(&session);
        }
    }

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
