use std::fmt::Display;

use crate::{
    aligned_sequence::{AlignedSequence, AlignedSymbol},
    alignment_configuration::AlignmentConfiguration,
    alignment_matrix::AlignmentMatrix,
    score::Score,
};

/// A single column of a pairwise alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlignmentMove {
    /// Consumes one symbol of each sequence.
    Diagonal,
    /// Consumes a symbol of the first sequence and pads the second sequence with a gap.
    Up,
    /// Consumes a symbol of the second sequence and pads the first sequence with a gap.
    Left,
}

impl AlignmentMove {
    /// The number of symbols this move consumes from the first and the second sequence.
    pub fn consumed(self) -> (usize, usize) {
        match self {
            Self::Diagonal => (1, 1),
            Self::Up => (1, 0),
            Self::Left => (0, 1),
        }
    }
}

/// The columns of a pairwise alignment, from the first column to the last.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alignment {
    moves: Vec<AlignmentMove>,
}

/// Walks the moves stored in a filled matrix back from the bottom-right cell to the origin.
///
/// Since the matrix resolves ties when it is filled, every consumer of the returned alignment
/// sees the same preference of diagonal over up over left.
pub fn traceback(matrix: &AlignmentMatrix) -> Alignment {
    let mut index = matrix.final_index();
    let mut moves = Vec::with_capacity(index.first_index + index.second_index);

    while let Some(alignment_move) = matrix.entry(index).alignment_move {
        moves.push(alignment_move);
        index = index.predecessor(alignment_move);
    }
    debug_assert!(index.is_origin());

    moves.reverse();
    Alignment { moves }
}

impl Alignment {
    pub fn moves(&self) -> &[AlignmentMove] {
        &self.moves
    }

    pub fn iter(&self) -> impl Iterator<Item = AlignmentMove> + '_ {
        self.moves.iter().copied()
    }

    /// The number of columns of the alignment.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The first sequence padded with gaps wherever the alignment moves left.
    pub fn gapped_first<Symbol: Clone>(&self, first: &[Symbol]) -> AlignedSequence<Symbol> {
        Self::gapped(
            first,
            self.iter()
                .map(|alignment_move| alignment_move != AlignmentMove::Left),
        )
    }

    /// The second sequence padded with gaps wherever the alignment moves up.
    pub fn gapped_second<Symbol: Clone>(&self, second: &[Symbol]) -> AlignedSequence<Symbol> {
        Self::gapped(
            second,
            self.iter()
                .map(|alignment_move| alignment_move != AlignmentMove::Up),
        )
    }

    fn gapped<Symbol: Clone>(
        sequence: &[Symbol],
        consumes: impl Iterator<Item = bool>,
    ) -> AlignedSequence<Symbol> {
        let mut symbols = sequence.iter();
        let result: AlignedSequence<_> = consumes
            .map(|consumes| match consumes.then(|| symbols.next()).flatten() {
                Some(symbol) => AlignedSymbol::Symbol(symbol.clone()),
                None => AlignedSymbol::Gap,
            })
            .collect();
        debug_assert!(symbols.next().is_none());
        result
    }

    /// The positions in the first sequence before which the alignment inserts a gap.
    ///
    /// A position is the number of symbols of the first sequence consumed before the gap.
    /// Positions are sorted ascendingly and repeat if multiple gaps are inserted at the same position.
    pub fn first_gap_positions(&self) -> Vec<usize> {
        let mut first_index = 0;
        let mut result = Vec::new();

        for alignment_move in self.iter() {
            match alignment_move {
                AlignmentMove::Diagonal | AlignmentMove::Up => first_index += 1,
                AlignmentMove::Left => result.push(first_index),
            }
        }

        result
    }

    /// Sums the score of each column.
    pub fn score<First, Second>(
        &self,
        first: &[First],
        second: &[Second],
        configuration: &AlignmentConfiguration,
        mut matches: impl FnMut(&First, &Second) -> bool,
    ) -> Score {
        let mut first = first.iter();
        let mut second = second.iter();

        self.iter()
            .map(|alignment_move| {
                let is_match = match alignment_move {
                    AlignmentMove::Diagonal => match (first.next(), second.next()) {
                        (Some(first), Some(second)) => matches(first, second),
                        _ => false,
                    },
                    AlignmentMove::Up => {
                        first.next();
                        false
                    }
                    AlignmentMove::Left => {
                        second.next();
                        false
                    }
                };
                configuration.score(alignment_move, is_match)
            })
            .sum()
    }
}

impl From<Vec<AlignmentMove>> for Alignment {
    fn from(moves: Vec<AlignmentMove>) -> Self {
        Self { moves }
    }
}

impl Display for AlignmentMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlignmentMove::Diagonal => write!(f, "D"),
            AlignmentMove::Up => write!(f, "U"),
            AlignmentMove::Left => write!(f, "L"),
        }
    }
}

/// Writes the alignment in a run-length encoded form, e.g. `1D1U1D`.
impl Display for Alignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut moves = self.iter().peekable();
        while let Some(alignment_move) = moves.next() {
            let mut multiplicity = 1;
            while moves.next_if_eq(&alignment_move).is_some() {
                multiplicity += 1;
            }
            write!(f, "{multiplicity}{alignment_move}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        aligned_sequence::AlignedSymbol::{Gap, Symbol},
        alignment_configuration::AlignmentConfiguration,
        alignment_matrix::AlignmentMatrix,
    };

    use super::{
        Alignment,
        AlignmentMove::{Diagonal, Left, Up},
        traceback,
    };

    fn align(first: &[u32], second: &[u32]) -> Alignment {
        let mut matrix =
            AlignmentMatrix::new(AlignmentConfiguration::default(), first.len(), second.len());
        matrix.align(first, second, |a, b| a == b);
        traceback(&matrix)
    }

    #[test]
    fn traceback_simple() {
        let alignment = align(&[1, 2, 3], &[1, 3]);
        assert_eq!(alignment.moves(), &[Diagonal, Up, Diagonal]);
        assert_eq!(alignment.to_string(), "1D1U1D");
        assert_eq!(
            alignment.gapped_first(&[1, 2, 3]).symbols(),
            &[Symbol(1), Symbol(2), Symbol(3)]
        );
        assert_eq!(
            alignment.gapped_second(&[1, 3]).symbols(),
            &[Symbol(1), Gap, Symbol(3)]
        );
        assert!(alignment.first_gap_positions().is_empty());
    }

    #[test]
    fn traceback_prefers_diagonal() {
        // Both `1 -` and `- 1` against `1 1` score zero.
        // The bottom-right cell takes the diagonal, so the gap ends up in front.
        let alignment = align(&[1], &[1, 1]);
        assert_eq!(alignment.moves(), &[Left, Diagonal]);
        assert_eq!(alignment.first_gap_positions(), vec![0]);

        // A mismatch scores better than two gaps.
        let alignment = align(&[1], &[2]);
        assert_eq!(alignment.moves(), &[Diagonal]);
    }

    #[test]
    fn traceback_prefers_up_over_left() {
        // With the default scores, the mismatch beats two gaps.
        let alignment = align(&[1, 2], &[1, 3]);
        assert_eq!(alignment.moves(), &[Diagonal, Diagonal]);

        let configuration = AlignmentConfiguration {
            mismatch_score: (-5).into(),
            ..Default::default()
        };
        let first = [1, 2];
        let second = [1, 3];
        let mut matrix = AlignmentMatrix::new(configuration, first.len(), second.len());
        matrix.align(&first, &second, |a, b| a == b);
        let alignment = traceback(&matrix);
        // From the bottom-right cell, up is preferred, so the left move comes first.
        assert_eq!(alignment.moves(), &[Diagonal, Left, Up]);
        assert_eq!(alignment.first_gap_positions(), vec![1]);
    }

    #[test]
    fn traceback_empty() {
        let alignment = align(&[], &[1, 2]);
        assert_eq!(alignment.moves(), &[Left, Left]);
        assert_eq!(alignment.first_gap_positions(), vec![0, 0]);
        assert_eq!(alignment.gapped_first::<u32>(&[]).symbols(), &[Gap, Gap]);
        assert_eq!(
            alignment.gapped_second(&[1, 2]).symbols(),
            &[Symbol(1), Symbol(2)]
        );

        let alignment = align(&[], &[]);
        assert!(alignment.is_empty());
    }

    #[test]
    fn column_score() {
        let configuration = AlignmentConfiguration::default();
        let alignment = Alignment::from(vec![Diagonal, Up, Diagonal, Left]);
        let score = alignment.score(&[1, 2, 3], &[1, 4, 5], &configuration, |a, b| a == b);
        assert_eq!(score, (1 - 1 - 1 - 1).into());
    }
}
