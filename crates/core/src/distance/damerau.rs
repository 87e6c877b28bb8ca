//! Weighted Damerau-Levenshtein distance.
//!
//! Full-table dynamic program in the Lowrance-Wagner formulation. Besides
//! insert, delete and replace, a cell may be reached by swapping a pair of
//! characters that appear in reverse order on the two sides, after deleting
//! whatever lies between them in the source and inserting whatever lies
//! between them in the target.
//!
//! Two running indices make the swap lookup O(1) per cell:
//!
//! - `last_row`: for each source character, the last row it occurred on.
//! - `last_match_col`: within the current row, the last column whose target
//!   character equals the row's source character.

use std::collections::HashMap;
use std::ops::{Index, IndexMut};

use super::CostModel;

/// Case-sensitive Damerau-Levenshtein engine parameterized by a [`CostModel`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DamerauLevenshtein {
    costs: CostModel,
}

impl DamerauLevenshtein {
    pub fn new(costs: CostModel) -> Self {
        Self { costs }
    }

    pub fn costs(&self) -> &CostModel {
        &self.costs
    }

    /// Minimum cost of turning `source` into `target`.
    ///
    /// Runs in O(len(source) * len(target)) time and space.
    pub fn distance(&self, source: &str, target: &str) -> u64 {
        let source: Vec<char> = source.chars().collect();
        let target: Vec<char> = target.chars().collect();

        let delete = u64::from(self.costs.delete());
        let insert = u64::from(self.costs.insert());
        let replace = u64::from(self.costs.replace());
        let transpose = u64::from(self.costs.transpose());

        if source.is_empty() {
            return target.len() as u64 * insert;
        }
        if target.is_empty() {
            return source.len() as u64 * delete;
        }

        let mut table = DistanceTable::new(source.len(), target.len(), delete, insert);
        let mut last_row: HashMap<char, usize> = HashMap::new();

        for (i, &sc) in source.iter().enumerate().map(|(i, c)| (i + 1, c)) {
            let mut last_match_col: Option<usize> = None;

            for (j, &tc) in target.iter().enumerate().map(|(j, c)| (j + 1, c)) {
                let swap_row = last_row.get(&tc).copied();
                let swap_col = last_match_col;

                let deleted = table[(i - 1, j)] + delete;
                let inserted = table[(i, j - 1)] + insert;
                let matched = if sc == tc {
                    last_match_col = Some(j);
                    table[(i - 1, j - 1)]
                } else {
                    table[(i - 1, j - 1)] + replace
                };

                let mut best = deleted.min(inserted).min(matched);

                if let (Some(k), Some(l)) = (swap_row, swap_col) {
                    let swapped = table[(k - 1, l - 1)]
                        + (i - k - 1) as u64 * delete
                        + (j - l - 1) as u64 * insert
                        + transpose;
                    best = best.min(swapped);
                }

                table[(i, j)] = best;
            }

            last_row.insert(sc, i);
        }

        table[(source.len(), target.len())]
    }
}

/// Prefix-distance memo: cell `(i, j)` holds the distance between the first
/// `i` source chars and the first `j` target chars.
struct DistanceTable {
    cols: usize,
    cells: Vec<u64>,
}

impl DistanceTable {
    fn new(source_len: usize, target_len: usize, delete: u64, insert: u64) -> Self {
        let cols = target_len + 1;
        let mut table = Self {
            cols,
            cells: vec![0; (source_len + 1) * cols],
        };

        for i in 1..=source_len {
            table[(i, 0)] = i as u64 * delete;
        }
        for j in 1..=target_len {
            table[(0, j)] = j as u64 * insert;
        }

        table
    }
}

impl Index<(usize, usize)> for DistanceTable {
    type Output = u64;

    fn index(&self, (i, j): (usize, usize)) -> &u64 {
        &self.cells[i * self.cols + j]
    }
}

impl IndexMut<(usize, usize)> for DistanceTable {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut u64 {
        &mut self.cells[i * self.cols + j]
    }
}
