use itertools::Itertools;
use log::{debug, trace};
use strong_type::StrongType;

use crate::{
    aligned_sequence::{AlignedSequence, AlignedSequenceSet, AlignedSymbol},
    alignment_configuration::AlignmentConfiguration,
    error::{Error, Result},
    pairwise::{PairwiseAlignment, pairwise_align, pairwise_align_by},
};

/// The position of a sequence in the input of [`progressive_align`].
#[derive(StrongType)]
#[strong_type(conversion)]
struct SequenceIndex(usize);

/// Aligns multiple sequences into a common column space.
///
/// The alignment is seeded with the best scoring pair of input sequences.
/// Then, the remaining sequence that aligns best against the consensus of the sequences aligned so far is added,
/// until no sequences remain.
/// Gaps that the new sequence requires in the consensus are inserted as gap columns into all previously aligned sequences.
///
/// Ties are broken in favour of the candidate encountered first:
/// seed pairs are enumerated in lexicographic order of their indices and remaining sequences in input order.
///
/// The returned aligned sequences are in the same order as the input sequences and all have the same length.
/// Returns [`Error::NoSequences`] if `sequences` is empty.
pub fn progressive_align<Symbol: Clone + PartialEq, Sequence: AsRef<[Symbol]>>(
    sequences: &[Sequence],
    configuration: &AlignmentConfiguration,
) -> Result<Vec<AlignedSequence<Symbol>>> {
    match sequences {
        [] => return Err(Error::NoSequences),
        [sequence] => {
            return Ok(vec![AlignedSequence::new_ungapped(
                sequence.as_ref().iter().cloned(),
            )]);
        }
        _ => {}
    }
    let sequence = move |index: SequenceIndex| sequences[usize::from(index)].as_ref();

    let (first, second, seed) = best_seed_pair(sequences.len(), configuration, sequence)?;
    debug!(
        "Seeding with sequences {} and {} at score {}",
        usize::from(first),
        usize::from(second),
        seed.score,
    );

    let mut aligned = AlignedSequenceSet::new(vec![seed.aligned_first, seed.aligned_second])?;
    let mut order = vec![first, second];
    let mut pool: Vec<_> = (0..sequences.len())
        .map(SequenceIndex::from)
        .filter(|index| *index != first && *index != second)
        .collect();

    while !pool.is_empty() {
        let consensus = aligned.consensus();
        trace!("Consensus: {} columns", consensus.len());

        let mut best: Option<(usize, PairwiseAlignment<AlignedSymbol<Symbol>, Symbol>)> = None;
        for (pool_position, &index) in pool.iter().enumerate() {
            let alignment = pairwise_align_by(
                consensus.symbols(),
                sequence(index),
                configuration,
                |consensus_symbol, symbol| consensus_symbol.symbol() == Some(symbol),
            )?;
            trace!(
                "Sequence {} scores {} against the consensus",
                usize::from(index),
                alignment.score,
            );

            if best
                .as_ref()
                .is_none_or(|(_, current)| alignment.score > current.score)
            {
                best = Some((pool_position, alignment));
            }
        }
        let Some((pool_position, alignment)) = best else {
            unreachable!("the pool is not empty")
        };

        let index = pool.remove(pool_position);
        let gap_positions = alignment.alignment.first_gap_positions();
        debug!(
            "Adding sequence {} at score {} with {} new gap columns",
            usize::from(index),
            alignment.score,
            gap_positions.len(),
        );

        aligned.insert_gap_columns(&gap_positions);
        aligned.push(alignment.aligned_second)?;
        order.push(index);
    }

    debug!("Aligned {} sequences to width {}", order.len(), aligned.width());
    let mut result: Vec<_> = order.into_iter().zip(aligned.into_sequences()).collect();
    result.sort_unstable_by_key(|(index, _)| usize::from(*index));
    Ok(result.into_iter().map(|(_, sequence)| sequence).collect())
}

/// Aligns all pairs of sequences and returns the first pair with the highest score.
fn best_seed_pair<'sequences, Symbol: Clone + PartialEq + 'sequences>(
    sequence_count: usize,
    configuration: &AlignmentConfiguration,
    sequence: impl Fn(SequenceIndex) -> &'sequences [Symbol],
) -> Result<(SequenceIndex, SequenceIndex, PairwiseAlignment<Symbol>)> {
    let mut best: Option<(SequenceIndex, SequenceIndex, PairwiseAlignment<Symbol>)> = None;

    for (first, second) in (0..sequence_count)
        .map(SequenceIndex::from)
        .tuple_combinations()
    {
        let alignment = pairwise_align(sequence(first), sequence(second), configuration)?;
        trace!(
            "Pair ({}, {}) scores {}",
            usize::from(first),
            usize::from(second),
            alignment.score,
        );

        if best
            .as_ref()
            .is_none_or(|(_, _, current)| alignment.score > current.score)
        {
            best = Some((first, second, alignment));
        }
    }

    best.ok_or(Error::NoSequences)
}
