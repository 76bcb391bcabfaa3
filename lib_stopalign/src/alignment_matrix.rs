use index::AlignmentMatrixIndex;
use itertools::iproduct;
use ndarray::Array2;

use crate::{
    alignment_configuration::AlignmentConfiguration, score::Score, traceback::AlignmentMove,
};

pub mod index;

/// The dynamic programming matrix of a Needleman-Wunsch alignment.
///
/// Row `i` corresponds to the prefix of length `i` of the first sequence,
/// column `j` to the prefix of length `j` of the second sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentMatrix {
    matrix: Array2<AlignmentMatrixEntry>,
    configuration: AlignmentConfiguration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentMatrixEntry {
    pub score: Score,
    /// The move that produced this entry.
    ///
    /// This is `None` only for the matrix origin at [0, 0].
    pub alignment_move: Option<AlignmentMove>,
}

impl AlignmentMatrix {
    pub fn new(
        configuration: AlignmentConfiguration,
        first_length: usize,
        second_length: usize,
    ) -> Self {
        Self {
            matrix: Array2::default((first_length + 1, second_length + 1)),
            configuration,
        }
    }

    pub fn configuration(&self) -> &AlignmentConfiguration {
        &self.configuration
    }

    /// The number of rows and columns of the matrix.
    pub fn dim(&self) -> (usize, usize) {
        self.matrix.dim()
    }

    pub fn entry(&self, index: AlignmentMatrixIndex) -> AlignmentMatrixEntry {
        self.matrix[index.cell()]
    }

    pub fn score(&self, first_index: usize, second_index: usize) -> Score {
        self.matrix[[first_index, second_index]].score
    }

    /// The index of the bottom-right cell, where the traceback starts.
    pub fn final_index(&self) -> AlignmentMatrixIndex {
        let (rows, columns) = self.matrix.dim();
        AlignmentMatrixIndex::new(rows - 1, columns - 1)
    }

    pub fn final_score(&self) -> Score {
        self.entry(self.final_index()).score
    }

    /// Fills the matrix and returns the optimal global alignment score.
    ///
    /// The closure `matches` decides whether two symbols are equal.
    /// Each entry remembers the move it was derived from, preferring diagonal over up over left on equal scores.
    pub fn align<First, Second>(
        &mut self,
        first: &[First],
        second: &[Second],
        mut matches: impl FnMut(&First, &Second) -> bool,
    ) -> Score {
        debug_assert_eq!(self.matrix.dim(), (first.len() + 1, second.len() + 1));

        self.initialise();
        for index in Self::inner_indices(self.matrix.dim()) {
            let entry = self.best_entry(index, first, second, &mut matches);
            self.matrix[index.cell()] = entry;
        }
        self.final_score()
    }

    /// Sets the origin and the gap-only entries of the first row and column.
    fn initialise(&mut self) {
        let (rows, columns) = self.matrix.dim();
        self.matrix[AlignmentMatrixIndex::ORIGIN.cell()] = AlignmentMatrixEntry {
            score: Score::ZERO,
            alignment_move: None,
        };

        for first_index in 1..rows {
            let index = AlignmentMatrixIndex::new(first_index, 0);
            self.matrix[index.cell()] = self.gap_entry(index, AlignmentMove::Up);
        }
        for second_index in 1..columns {
            let index = AlignmentMatrixIndex::new(0, second_index);
            self.matrix[index.cell()] = self.gap_entry(index, AlignmentMove::Left);
        }
    }

    /// The cells that have all three predecessors, column by column.
    fn inner_indices(
        (rows, columns): (usize, usize),
    ) -> impl Iterator<Item = AlignmentMatrixIndex> {
        iproduct!(1..columns, 1..rows).map(|(second_index, first_index)| {
            AlignmentMatrixIndex::new(first_index, second_index)
        })
    }

    fn best_entry<First, Second>(
        &self,
        index: AlignmentMatrixIndex,
        first: &[First],
        second: &[Second],
        matches: &mut impl FnMut(&First, &Second) -> bool,
    ) -> AlignmentMatrixEntry {
        let is_match = matches(&first[index.first_index - 1], &second[index.second_index - 1]);
        let diagonal = self.move_entry(index, AlignmentMove::Diagonal, is_match);

        // A later candidate replaces an earlier one only if it is strictly better.
        [AlignmentMove::Up, AlignmentMove::Left]
            .into_iter()
            .map(|alignment_move| self.gap_entry(index, alignment_move))
            .fold(diagonal, |best, entry| {
                if entry.score > best.score { entry } else { best }
            })
    }

    fn gap_entry(
        &self,
        index: AlignmentMatrixIndex,
        alignment_move: AlignmentMove,
    ) -> AlignmentMatrixEntry {
        debug_assert_ne!(alignment_move, AlignmentMove::Diagonal);
        self.move_entry(index, alignment_move, false)
    }

    fn move_entry(
        &self,
        index: AlignmentMatrixIndex,
        alignment_move: AlignmentMove,
        is_match: bool,
    ) -> AlignmentMatrixEntry {
        let predecessor = self.entry(index.predecessor(alignment_move));

        AlignmentMatrixEntry {
            score: predecessor.score + self.configuration.score(alignment_move, is_match),
            alignment_move: Some(alignment_move),
        }
    }

    #[cfg(test)]
    fn manual_debug_fill(&mut self, entries: impl IntoIterator<Item = AlignmentMatrixEntry>) {
        let mut entries = entries.into_iter();
        for index in Self::inner_indices(self.matrix.dim()) {
            self.matrix[index.cell()] = entries.next().unwrap();
        }
        assert!(entries.next().is_none());
    }
}

impl Default for AlignmentMatrixEntry {
    fn default() -> Self {
        Self {
            score: Score::MIN,
            alignment_move: None,
        }
    }
}

/// The number of characters needed to print `score`.
fn score_width(score: i64) -> usize {
    let digits = score
        .unsigned_abs()
        .checked_ilog10()
        .map_or(1, |log| log as usize + 1);
    digits + usize::from(score < 0)
}

impl core::fmt::Display for AlignmentMatrix {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let column_widths: Vec<_> = self
            .matrix
            .columns()
            .into_iter()
            .map(|column| {
                column
                    .iter()
                    .map(|entry| score_width(entry.score.as_i64()))
                    .max()
                    .unwrap_or(1)
            })
            .collect();

        for row in self.matrix.rows() {
            write!(f, "[ ")?;
            for (entry, width) in row.iter().zip(column_widths.iter().copied()) {
                let alignment_move = match entry.alignment_move {
                    None => "O",
                    Some(AlignmentMove::Diagonal) => "D",
                    Some(AlignmentMove::Up) => "U",
                    Some(AlignmentMove::Left) => "L",
                };
                write!(f, "{: >width$}{alignment_move} ", entry.score.as_i64())?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        alignment_configuration::AlignmentConfiguration,
        alignment_matrix::{AlignmentMatrixEntry, index::AlignmentMatrixIndex, score_width},
        traceback::AlignmentMove,
    };

    use super::AlignmentMatrix;

    fn align(first: &[u32], second: &[u32]) -> AlignmentMatrix {
        let mut matrix =
            AlignmentMatrix::new(AlignmentConfiguration::default(), first.len(), second.len());
        matrix.align(first, second, |a, b| a == b);
        matrix
    }

    #[test]
    fn test_simple_alignments() {
        let matrix = align(&[1, 2, 3], &[1, 3]);
        assert_eq!(matrix.final_score(), 1.into());

        let mut manual_matrix = matrix.clone();
        manual_matrix.manual_debug_fill(
            [
                (1, AlignmentMove::Diagonal),
                (0, AlignmentMove::Up),
                (-1, AlignmentMove::Up),
                (0, AlignmentMove::Left),
                (0, AlignmentMove::Diagonal),
                (1, AlignmentMove::Diagonal),
            ]
            .into_iter()
            .map(|(score, alignment_move)| AlignmentMatrixEntry {
                score: score.into(),
                alignment_move: Some(alignment_move),
            }),
        );
        assert_eq!(
            matrix, manual_matrix,
            "matrix:\n{matrix}\nmanual_matrix:\n{manual_matrix}"
        );

        let first = b"ACG";
        let second = b"ACCG";
        let mut matrix =
            AlignmentMatrix::new(AlignmentConfiguration::default(), first.len(), second.len());
        assert_eq!(matrix.align(first, second, |a, b| a == b), 2.into());

        let first = b"ACGCCCCCT";
        let second = b"ACCCCCGCT";
        let mut matrix =
            AlignmentMatrix::new(AlignmentConfiguration::default(), first.len(), second.len());
        assert_eq!(matrix.align(first, second, |a, b| a == b), 6.into());
    }

    #[test]
    fn test_edges() {
        let matrix = align(&[7, 8], &[7, 8, 9]);

        assert_eq!(
            matrix.entry(AlignmentMatrixIndex::new(0, 0)),
            AlignmentMatrixEntry {
                score: 0.into(),
                alignment_move: None,
            }
        );
        for first_index in 1..=2 {
            assert_eq!(matrix.score(first_index, 0), (-(first_index as i64)).into());
            assert_eq!(
                matrix
                    .entry(AlignmentMatrixIndex::new(first_index, 0))
                    .alignment_move,
                Some(AlignmentMove::Up)
            );
        }
        for second_index in 1..=3 {
            assert_eq!(
                matrix.score(0, second_index),
                (-(second_index as i64)).into()
            );
            assert_eq!(
                matrix
                    .entry(AlignmentMatrixIndex::new(0, second_index))
                    .alignment_move,
                Some(AlignmentMove::Left)
            );
        }
        assert_eq!(matrix.final_score(), 1.into());
    }

    #[test]
    fn test_empty_sequences() {
        let matrix = align(&[], &[1, 2]);
        assert_eq!(matrix.dim(), (1, 3));
        assert_eq!(matrix.final_score(), (-2).into());

        let matrix = align(&[], &[]);
        assert_eq!(matrix.dim(), (1, 1));
        assert_eq!(matrix.final_score(), 0.into());
    }

    #[test]
    fn test_custom_scores() {
        let configuration = AlignmentConfiguration {
            match_score: 2.into(),
            mismatch_score: (-3).into(),
            gap_score: (-2).into(),
            max_matrix_cells: None,
        };
        let first = [1, 2];
        let second = [1, 9, 2];
        let mut matrix = AlignmentMatrix::new(configuration, first.len(), second.len());
        // 1 - 2 against 1 9 2
        assert_eq!(matrix.align(&first, &second, |a, b| a == b), 2.into());
    }

    #[test]
    fn test_display() {
        let matrix = align(&[1], &[1]);
        assert_eq!(matrix.to_string(), "[  0O -1L ]\n[ -1U  1D ]\n");
    }

    #[test]
    fn test_score_width() {
        assert_eq!(score_width(0), 1);
        assert_eq!(score_width(9), 1);
        assert_eq!(score_width(-10), 3);
        assert_eq!(score_width(99_999_999_999), 11);
        assert_eq!(score_width(-100_000_000_000_000), 16);
        assert_eq!(score_width(i64::MIN), 20);
        assert_eq!(score_width(i64::MAX), 19);
    }
}
