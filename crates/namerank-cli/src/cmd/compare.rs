use crate::reports;
use clap::Args;
use namerank_core::{NameQuery, NrResult, Scorer, ScoringWeights};
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    #[command(flatten)]
    pub weights: ScoringWeights,

    /// Entries to rank: either a bare first name, or "First,Last".
    #[arg(required = true)]
    pub entries: Vec<String>,

    /// Write the ranking to a CSV file as well.
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

pub fn run(args: CompareArgs, scorer: &Scorer) -> NrResult<()> {
    let queries: Vec<NameQuery> = args.entries.iter().map(|e| parse_entry(e)).collect();
    let ranked = scorer.compare(&queries);

    reports::print_ranking(&ranked);

    if let Some(path) = &args.csv {
        let mut wtr = csv::Writer::from_path(path)?;
        wtr.write_record(["Name", "Uniqueness Score"])?;
        for entry in &ranked {
            let score = entry.score.to_string();
            wtr.write_record([entry.label.as_str(), score.as_str()])?;
        }
        wtr.flush()?;
        println!("Wrote {} rows to {:?}", ranked.len(), path);
    }

    Ok(())
}

/// "First,Last" becomes a pair; anything else scores as a first name.
fn parse_entry(entry: &str) -> NameQuery {
    match entry.split_once(',') {
        Some((first, last)) => NameQuery::full(first.trim(), last.trim()),
        None => NameQuery::first(entry.trim()),
    }
}
