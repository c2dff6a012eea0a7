use crate::config::ScoringWeights;
use crate::table::FrequencyTable;
use crate::types::ScoreComponents;
use crate::util::normalize_name;

/// The twelve most frequent English letters, by corpus frequency order.
const COMMON_LETTERS: &str = "etaoinshrdlu";

/// Characters that are ordinary in a personal name.
#[inline]
fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == ' ' || c == '-' || c == '\''
}

/// Score a single name against a frequency table.
///
/// The name is normalized (trim + per-token title case) for the lookup and
/// for the structural/letter components. Blank input produces all-zero
/// components; no input can make this fail.
pub fn score_name(name: &str, table: &FrequencyTable, w: &ScoringWeights) -> ScoreComponents {
    let normalized = normalize_name(name);
    if normalized.is_empty() {
        return ScoreComponents::default();
    }
    let chars: Vec<char> = normalized.chars().collect();

    let frequency = table.frequency(&normalized);
    let raw_frequency = if frequency == 0.0 {
        // Unseen name: start from the base score and reward letter pairs
        // the corpus has never produced.
        w.unknown_name_base_score + bigram_novelty(&chars, table) * w.bigram_rarity_multiplier
    } else {
        tier_score(frequency, w)
    };
    let frequency_score = raw_frequency / 100.0 * w.frequency_weight;

    let length_factor = (chars.len() as f64 / w.max_name_length).min(1.0);
    let unusual = chars.iter().filter(|&&c| !is_name_char(c)).count() as f64;
    let unusual_factor = (unusual / w.max_unusual_chars).min(1.0);
    let structural_score = w.structural_weight
        * (w.length_factor_weight * length_factor + w.unusual_chars_weight * unusual_factor);

    let common = chars
        .iter()
        .filter(|c| COMMON_LETTERS.contains(c.to_ascii_lowercase()))
        .count() as f64;
    let letter_uniqueness = w.letter_dist_weight * (1.0 - common / chars.len() as f64);

    let total_score = (frequency_score + structural_score + letter_uniqueness).clamp(0.0, 100.0);

    ScoreComponents {
        frequency_score,
        structural_score,
        letter_uniqueness,
        total_score,
    }
}

/// Piecewise-linear schedule over ascending frequency tiers. Within a tier
/// the bonus decays linearly as the frequency approaches the threshold;
/// past the last threshold the score fades to zero.
fn tier_score(frequency: f64, w: &ScoringWeights) -> f64 {
    if frequency < w.very_rare_threshold {
        w.very_rare_base_score + (1.0 - frequency / w.very_rare_threshold) * w.very_rare_bonus_max
    } else if frequency < w.uncommon_threshold {
        w.uncommon_base_score + (1.0 - frequency / w.uncommon_threshold) * w.uncommon_bonus_max
    } else if frequency < w.moderate_threshold {
        w.moderate_base_score + (1.0 - frequency / w.moderate_threshold) * w.moderate_bonus_max
    } else if frequency < w.common_threshold {
        w.common_base_score + (1.0 - frequency / w.common_threshold) * w.common_bonus_max
    } else {
        (w.very_common_max_score * (1.0 - frequency / w.very_common_scale_factor)).max(0.0)
    }
}

/// Fraction of the name's adjacent lowercase character pairs that occur
/// nowhere in the table's corpus. Names shorter than two characters have
/// no pairs and score 0.
fn bigram_novelty(chars: &[char], table: &FrequencyTable) -> f64 {
    if chars.len() < 2 {
        return 0.0;
    }
    let lower: Vec<char> = chars.iter().flat_map(|c| c.to_lowercase()).collect();
    let pairs = lower.len() - 1;
    let unknown = lower
        .windows(2)
        .filter(|p| !table.has_bigram(p[0], p[1]))
        .count();
    unknown as f64 / pairs as f64
}
