//! Unit-cost Levenshtein distance and normalized similarity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Case-insensitive Levenshtein engine.
///
/// Costs are fixed at one per insert, delete or replace. Only a single row of
/// the DP table is kept, sized to the shorter input.
#[derive(Debug, Clone, Copy, Default)]
pub struct Levenshtein;

/// Distance and similarity of a string pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityReport {
    pub source: String,
    pub target: String,
    pub distance: usize,
    /// 1.0 means identical (ignoring case).
    pub similarity: f64,
}

impl Levenshtein {
    /// Edit distance between `a` and `b`, ignoring case.
    pub fn distance(a: &str, b: &str) -> usize {
        edit_distance(&fold(a), &fold(b))
    }

    /// Similarity in `[0, 1]`: `(longest - distance) / longest`.
    ///
    /// Two empty strings are identical and score `1.0`.
    pub fn similarity(a: &str, b: &str) -> f64 {
        let (a, b) = (fold(a), fold(b));
        normalize(edit_distance(&a, &b), a.len().max(b.len()))
    }

    /// Distance and similarity in one pass.
    pub fn report(a: &str, b: &str) -> SimilarityReport {
        let (folded_a, folded_b) = (fold(a), fold(b));
        let distance = edit_distance(&folded_a, &folded_b);

        SimilarityReport {
            source: a.to_string(),
            target: b.to_string(),
            distance,
            similarity: normalize(distance, folded_a.len().max(folded_b.len())),
        }
    }
}

impl fmt::Display for SimilarityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.3} is the similarity between \"{}\" and \"{}\"",
            self.similarity, self.source, self.target
        )
    }
}

/// Lowercased scalar values. Lengths are taken after folding, since
/// lowercasing can change the number of chars.
fn fold(s: &str) -> Vec<char> {
    s.to_lowercase().chars().collect()
}

fn normalize(distance: usize, longest: usize) -> f64 {
    if longest == 0 {
        return 1.0;
    }
    (longest - distance) as f64 / longest as f64
}

fn edit_distance(a: &[char], b: &[char]) -> usize {
    let (long, short) = if a.len() < b.len() { (b, a) } else { (a, b) };

    if short.is_empty() {
        return long.len();
    }

    let mut row: Vec<usize> = (0..=short.len()).collect();

    for (i, &lc) in long.iter().enumerate() {
        // row[j] of the previous row, before it gets overwritten
        let mut diagonal = row[0];
        row[0] = i + 1;

        for (j, &sc) in short.iter().enumerate() {
            let above = row[j + 1];
            let cell = if lc == sc {
                diagonal
            } else {
                diagonal.min(above).min(row[j]) + 1
            };
            diagonal = above;
            row[j + 1] = cell;
        }
    }

    row[short.len()]
}
