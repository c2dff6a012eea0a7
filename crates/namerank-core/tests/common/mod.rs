#![allow(dead_code)]

use namerank_core::{FrequencyTable, Scorer};
use std::collections::HashMap;

pub fn build_table(entries: &[(&str, u64)]) -> FrequencyTable {
    let counts: HashMap<String, u64> = entries
        .iter()
        .map(|&(name, count)| (name.to_string(), count))
        .collect();
    FrequencyTable::from_counts(counts)
}

/// Fixture with exact known frequencies: John 0.02 and Smith 0.015, both
/// deep in the very-common tier.
pub fn fixture_scorer() -> Scorer {
    let first = build_table(&[("John", 20_000), ("Liam", 980_000)]);
    let last = build_table(&[("Smith", 15_000), ("Jones", 985_000)]);
    Scorer::from_tables(first, last, None)
}
