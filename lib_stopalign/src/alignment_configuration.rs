use crate::{
    error::{Error, Result},
    score::Score,
    traceback::AlignmentMove,
};

/// Scores of a linear-gap global alignment.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct AlignmentConfiguration {
    pub match_score: Score,
    pub mismatch_score: Score,
    pub gap_score: Score,

    /// The maximum amount of cells a single alignment matrix may have.
    ///
    /// If `None`, matrices are unbounded.
    pub max_matrix_cells: Option<usize>,
}

impl AlignmentConfiguration {
    /// The score of a single alignment column.
    ///
    /// `matches` is only considered for diagonal moves.
    pub fn score(&self, alignment_move: AlignmentMove, matches: bool) -> Score {
        match alignment_move {
            AlignmentMove::Diagonal => {
                if matches {
                    self.match_score
                } else {
                    self.mismatch_score
                }
            }
            AlignmentMove::Up | AlignmentMove::Left => self.gap_score,
        }
    }

    /// Returns an error if a matrix for sequences of the given lengths exceeds [`Self::max_matrix_cells`].
    pub fn check_matrix_size(&self, first_length: usize, second_length: usize) -> Result<()> {
        let Some(limit) = self.max_matrix_cells else {
            return Ok(());
        };

        let cells = (first_length + 1).saturating_mul(second_length + 1);
        if cells > limit {
            Err(Error::MatrixTooLarge {
                first_length,
                second_length,
                cells,
                limit,
            })
        } else {
            Ok(())
        }
    }
}

impl Default for AlignmentConfiguration {
    fn default() -> Self {
        Self {
            match_score: 1.into(),
            mismatch_score: (-1).into(),
            gap_score: (-1).into(),
            max_matrix_cells: None,
        }
    }
}
