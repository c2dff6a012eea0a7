use std::collections::{HashMap, HashSet};

/// Immutable name → count table with a precomputed total and the set of
/// every adjacent lowercase character pair occurring anywhere in the key
/// corpus (keys joined with spaces, boundary pairs included).
///
/// Built once by a loader, then published read-only; concurrent readers
/// need no synchronization. A `total` of zero is valid and routes every
/// lookup onto the unseen-name path.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
    total: u64,
    known_bigrams: HashSet<(char, char)>,
}

impl FrequencyTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Seal a count map into a published table. The total and the bigram
    /// set are fixed here; there is no mutation path afterwards.
    pub fn from_counts(counts: HashMap<String, u64>) -> Self {
        let total = counts.values().sum();
        let mut known_bigrams = HashSet::new();

        for name in counts.keys() {
            let lower: Vec<char> = name
                .chars()
                .flat_map(|c| c.to_lowercase())
                .collect();
            for pair in lower.windows(2) {
                known_bigrams.insert((pair[0], pair[1]));
            }
            // The corpus is conceptually the space-joined key list, so the
            // characters flanking each name pair with a space as well.
            if let (Some(&first), Some(&last)) = (lower.first(), lower.last()) {
                known_bigrams.insert((' ', first));
                known_bigrams.insert((last, ' '));
            }
        }

        Self {
            counts,
            total,
            known_bigrams,
        }
    }

    pub fn count(&self, normalized: &str) -> u64 {
        self.counts.get(normalized).copied().unwrap_or(0)
    }

    /// Relative frequency of a normalized name; 0 when the table is empty.
    pub fn frequency(&self, normalized: &str) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(normalized) as f64 / self.total as f64
    }

    pub fn contains(&self, normalized: &str) -> bool {
        self.counts.contains_key(normalized)
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn has_bigram(&self, a: char, b: char) -> bool {
        self.known_bigrams.contains(&(a, b))
    }
}
