// src/tally/rank.rs
use super::SurnameTable;

/// (surname, total) pairs, most popular first. Equal totals are ordered by
/// surname so the output is stable across runs.
pub fn rank(table: &SurnameTable) -> Vec<(String, u64)> {
    let mut ranked: Vec<(String, u64)> = table
        .iter()
        .map(|(name, counts)| (name.to_string(), counts.total))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}
