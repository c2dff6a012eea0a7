//! Heuristics for pulling a plausible first/last name pair out of a noisy
//! free-text author string (store handles, channel names, decorated names).
//! This is a text classifier with its own contract, deliberately separate
//! from the scoring engine.

use crate::scorer::Scorer;
use crate::types::NameKind;
use crate::util::normalize_name;

/// Tokens that mark a string as a handle, title, or brand rather than a
/// personal name.
const BLOCKED_TOKENS: &[&str] = &[
    "mr.", "mr", "sr.", "sr", "jr.", "jr", "dr.", "dr", "ms.", "ms", "mrs.", "mrs", "inc", "llc",
    "ltd", "co", "corp", "gaming", "official", "real", "the", "channel", "tv", "yt", "youtube",
    "video", "videos", "gram", "ig", "insta", "fb", "tweet", "tiktok", "live", "plays", "stream",
];

const REJECT_CHARS: &str = "@#$%^&*+=<>{}[]|/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimplifiedName {
    pub first: String,
    /// Empty when only a single usable token survived.
    pub last: String,
}

/// Whether a raw author string looks like an actual two-part human name.
pub fn is_plausible_name(name: &str) -> bool {
    if name.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }
    if name.chars().any(|c| REJECT_CHARS.contains(c)) {
        return false;
    }
    if name.contains('_') {
        return false;
    }

    let lower = name.to_lowercase();
    if lower
        .split_whitespace()
        .any(|token| BLOCKED_TOKENS.contains(&token))
    {
        return false;
    }

    let parts: Vec<&str> = name.split_whitespace().collect();
    if parts.len() < 2 {
        return false;
    }
    // Single-letter first or last tokens are initials, not names.
    if parts[0].chars().count() == 1 || parts[parts.len() - 1].chars().count() == 1 {
        return false;
    }

    true
}

/// Reduce an author string to a title-cased first/last pair.
///
/// Implausible strings get one salvage attempt: everything outside letters,
/// spaces, hyphens, and apostrophes is stripped and the remainder is
/// re-checked. The result is gated against the frequency tables — if
/// neither token is a known first or last name, the string is rejected. A
/// trailing initial ("John D.") falls back to the token before it.
pub fn simplify(author: &str, scorer: &Scorer) -> Option<SimplifiedName> {
    let mut candidate = author.to_string();

    if !is_plausible_name(&candidate) {
        candidate = salvage(author)?;
        if !is_plausible_name(&candidate) {
            return None;
        }
    }

    let tokens: Vec<String> = candidate
        .split_whitespace()
        .map(normalize_name)
        .collect();

    if tokens.len() == 1 {
        return Some(SimplifiedName {
            first: tokens[0].clone(),
            last: String::new(),
        });
    }

    let first = tokens[0].clone();
    let mut last = tokens[tokens.len() - 1].clone();

    if !scorer.name_exists(&first, NameKind::First) && !scorer.name_exists(&last, NameKind::Last) {
        return None;
    }

    let tail_len = last.chars().count();
    if tail_len == 1 || (tail_len == 2 && last.ends_with('.')) {
        last = if tokens.len() > 2 {
            tokens[tokens.len() - 2].clone()
        } else {
            String::new()
        };
    }

    Some(SimplifiedName { first, last })
}

/// Strip everything that cannot appear in a name and rejoin what is left.
fn salvage(author: &str) -> Option<String> {
    let pieces: Vec<&str> = author
        .split(|c: char| !(c.is_ascii_alphabetic() || c.is_whitespace() || c == '\'' || c == '-'))
        .flat_map(|piece| piece.split_whitespace())
        .filter(|piece| !piece.is_empty())
        .collect();

    if pieces.is_empty() {
        None
    } else {
        Some(pieces.join(" "))
    }
}
