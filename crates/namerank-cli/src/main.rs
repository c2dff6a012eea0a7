use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use namerank_core::{Scorer, ScoringWeights};
use std::path::PathBuf;
use std::process;
use tracing::{error, info, warn};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, default_value = "data/first_names")]
    first_names: PathBuf,

    #[arg(global = true, short, long)]
    last_names: Option<PathBuf>,

    #[arg(global = true, long)]
    weights: Option<PathBuf>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Score(cmd::score::ScoreArgs),
    Compare(cmd::compare::CompareArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    if cli.debug {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }

    let (cli_weights_ref, sub_matches) = match &cli.command {
        Commands::Score(args) => (&args.weights, matches.subcommand_matches("score").unwrap()),
        Commands::Compare(args) => (
            &args.weights,
            matches.subcommand_matches("compare").unwrap(),
        ),
    };

    let mut weights = if let Some(path) = &cli.weights {
        info!("Loading weights from {:?}", path);
        ScoringWeights::load_from_file(path).unwrap_or_else(|e| {
            error!("Failed to load weights: {}", e);
            process::exit(1);
        })
    } else {
        ScoringWeights::default()
    };
    weights.merge_from_cli(cli_weights_ref, sub_matches);

    if cli.last_names.is_none() {
        warn!("No surname source given; falling back to census data");
    }

    info!("📚 Loading name tables from {:?}", cli.first_names);
    let scorer = match Scorer::new(&cli.first_names, cli.last_names.as_ref(), Some(weights)) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to initialize scorer: {}", e);
            process::exit(1);
        }
    };

    match cli.command {
        Commands::Score(args) => cmd::score::run(args, &scorer),
        Commands::Compare(args) => {
            if let Err(e) = cmd::compare::run(args, &scorer) {
                error!("{}", e);
                process::exit(1);
            }
        }
    }
}
