use crate::reports;
use clap::Args;
use namerank_core::{Scorer, ScoringWeights};

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub weights: ScoringWeights,

    /// First name to score.
    #[arg(long)]
    pub first: Option<String>,

    /// Last name to score.
    #[arg(long)]
    pub last: Option<String>,

    /// Show the per-component breakdown.
    #[arg(short, long, default_value_t = false)]
    pub breakdown: bool,
}

pub fn run(args: ScoreArgs, scorer: &Scorer) {
    let first = args.first.as_deref().unwrap_or("");
    let last = args.last.as_deref().unwrap_or("");

    if first.trim().is_empty() && last.trim().is_empty() {
        println!("Nothing to score: pass --first and/or --last.");
        return;
    }

    if args.breakdown {
        if !first.trim().is_empty() {
            reports::print_breakdown(first, &scorer.first_name_components(first), &scorer.weights);
        }
        if !last.trim().is_empty() {
            reports::print_breakdown(last, &scorer.last_name_components(last), &scorer.weights);
        }
    }

    let (label, score) = if !first.trim().is_empty() && !last.trim().is_empty() {
        (
            format!("{} {}", first.trim(), last.trim()),
            scorer.score_full_name(first, last),
        )
    } else if !first.trim().is_empty() {
        (first.trim().to_string(), scorer.score_first_name(first))
    } else {
        (last.trim().to_string(), scorer.score_last_name(last))
    };

    println!("{}: {}/100", label, score);
}
