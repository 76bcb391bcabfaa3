use log::trace;

use crate::{
    aligned_sequence::AlignedSequence,
    alignment_configuration::AlignmentConfiguration,
    alignment_matrix::AlignmentMatrix,
    error::Result,
    score::Score,
    traceback::{Alignment, traceback},
};

/// The result of a global pairwise alignment.
#[derive(Debug, Clone)]
pub struct PairwiseAlignment<First, Second = First> {
    /// The first sequence padded with gaps.
    pub aligned_first: AlignedSequence<First>,
    /// The second sequence padded with gaps, of the same length as `aligned_first`.
    pub aligned_second: AlignedSequence<Second>,
    /// The columns of the alignment.
    pub alignment: Alignment,
    /// The filled dynamic programming matrix the alignment was traced back from.
    pub matrix: AlignmentMatrix,
    /// The sum of the column scores of the alignment.
    pub score: Score,
}

/// Computes an optimal global alignment of two sequences, comparing symbols with `==`.
///
/// See [`pairwise_align_by`].
pub fn pairwise_align<Symbol: Clone + PartialEq>(
    first: &[Symbol],
    second: &[Symbol],
    configuration: &AlignmentConfiguration,
) -> Result<PairwiseAlignment<Symbol>> {
    pairwise_align_by(first, second, configuration, |a, b| a == b)
}

/// Computes an optimal global alignment of two sequences with the Needleman-Wunsch algorithm.
///
/// Among multiple optimal alignments, the one whose traceback prefers diagonal over up over left moves is returned.
/// Up moves consume the first sequence, left moves consume the second sequence.
///
/// Returns an error only if the alignment matrix would exceed [`AlignmentConfiguration::max_matrix_cells`].
pub fn pairwise_align_by<First: Clone, Second: Clone>(
    first: &[First],
    second: &[Second],
    configuration: &AlignmentConfiguration,
    mut matches: impl FnMut(&First, &Second) -> bool,
) -> Result<PairwiseAlignment<First, Second>> {
    configuration.check_matrix_size(first.len(), second.len())?;

    let mut matrix = AlignmentMatrix::new(configuration.clone(), first.len(), second.len());
    let matrix_score = matrix.align(first, second, &mut matches);
    trace!("Alignment matrix:\n{matrix}");

    let alignment = traceback(&matrix);
    let score = alignment.score(first, second, configuration, &mut matches);
    debug_assert_eq!(score, matrix_score);

    Ok(PairwiseAlignment {
        aligned_first: alignment.gapped_first(first),
        aligned_second: alignment.gapped_second(second),
        alignment,
        matrix,
        score,
    })
}
