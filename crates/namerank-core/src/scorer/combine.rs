use crate::config::ScoringWeights;
use crate::util::round1;

/// Merge a first-name and a last-name total into one score.
///
/// Two common names damp quadratically toward a low combined score; any
/// other pair blends linearly with the first name favored. A flat bonus
/// applies when both sides are rare, and component scores above 50 feed an
/// exponential multiplier that pushes the result toward (but never past)
/// the ceiling. The result is rounded to one decimal.
pub fn combine_scores(first_score: f64, last_score: f64, w: &ScoringWeights) -> f64 {
    let mut combined =
        if first_score < w.common_combo_threshold && last_score < w.common_combo_threshold {
            (first_score * last_score) / w.common_combo_divisor
        } else {
            first_score * w.first_name_weight + last_score * w.last_name_weight
        };

    if first_score > w.rare_combo_threshold && last_score > w.rare_combo_threshold {
        combined += w.rare_combo_bonus;
    }

    // Each side contributes up to 2x; together the multiplier caps at 4.
    let mut multiplier = 1.0;
    for score in [first_score, last_score] {
        if score > 50.0 {
            multiplier *= ((score - 50.0) / 50.0).exp().clamp(1.0, 2.0);
        }
    }

    combined = combined.clamp(0.0, 100.0);
    if multiplier > 1.0 {
        combined = (combined * (1.0 + (multiplier - 1.0) * (100.0 - combined) / 100.0)).min(100.0);
    }

    round1(combined)
}
