use crate::store::{AuthorReview, Store};
use namerank_core::{authors, Scorer};
use std::cmp::Ordering;
use std::path::Path;
use tracing::info;

/// Score an author gets when no plausible name could be extracted.
const INVALID_SCORE: f64 = -1.0;

pub struct ScoredAuthor {
    pub original: String,
    pub first: String,
    pub last: String,
    pub score: f64,
    pub review: AuthorReview,
}

pub struct PipelineSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
}

/// Score every distinct review author and write a ranked CSV: valid names
/// sorted by score descending, unextractable ones at the end with -1.
pub async fn score_authors(
    store: &Store,
    scorer: &Scorer,
    out_path: &Path,
) -> anyhow::Result<PipelineSummary> {
    let rows = store.author_reviews().await?;
    info!("Found {} unique author names to score", rows.len());

    let mut scored: Vec<ScoredAuthor> = rows.into_iter().map(|row| score_one(row, scorer)).collect();

    // Stable sort: invalid entries sink, everything else ranks by score.
    scored.sort_by(|a, b| {
        let a_invalid = a.score == INVALID_SCORE;
        let b_invalid = b.score == INVALID_SCORE;
        a_invalid
            .cmp(&b_invalid)
            .then(b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal))
    });

    write_csv(&scored, out_path)?;

    let invalid = scored.iter().filter(|s| s.score == INVALID_SCORE).count();
    let summary = PipelineSummary {
        total: scored.len(),
        valid: scored.len() - invalid,
        invalid,
    };
    info!(
        "Scored {} authors ({} valid, {} invalid) into {:?}",
        summary.total, summary.valid, summary.invalid, out_path
    );
    Ok(summary)
}

fn score_one(row: AuthorReview, scorer: &Scorer) -> ScoredAuthor {
    match authors::simplify(&row.author_name, scorer) {
        Some(name) => {
            let score = if name.last.is_empty() {
                // A lone first name carries half the signal of a full one.
                scorer.score_first_name(&name.first) / 2.0
            } else {
                scorer.score_full_name(&name.first, &name.last)
            };
            ScoredAuthor {
                original: row.author_name.clone(),
                first: name.first,
                last: name.last,
                score,
                review: row,
            }
        }
        None => ScoredAuthor {
            original: row.author_name.clone(),
            first: String::new(),
            last: String::new(),
            score: INVALID_SCORE,
            review: row,
        },
    }
}

fn write_csv(scored: &[ScoredAuthor], out_path: &Path) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(out_path)?;
    wtr.write_record([
        "Original Name",
        "First Name",
        "Last Name",
        "Uniqueness Score",
        "Rating",
        "Title",
        "Date",
        "Review ID",
        "App ID",
        "Body",
    ])?;

    for entry in scored {
        let score = entry.score.to_string();
        let rating = entry
            .review
            .rating
            .map(|r| r.to_string())
            .unwrap_or_default();
        wtr.write_record([
            entry.original.as_str(),
            entry.first.as_str(),
            entry.last.as_str(),
            score.as_str(),
            rating.as_str(),
            entry.review.title.as_deref().unwrap_or(""),
            entry.review.date.as_deref().unwrap_or(""),
            entry.review.review_id.as_deref().unwrap_or(""),
            entry.review.app_id.as_deref().unwrap_or(""),
            entry.review.body.as_deref().unwrap_or(""),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
