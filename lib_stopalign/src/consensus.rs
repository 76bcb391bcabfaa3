use itertools::Itertools;

use crate::aligned_sequence::{AlignedSequence, AlignedSequenceSet, AlignedSymbol};

/// Computes the column-wise consensus of an aligned sequence set.
///
/// A column of the consensus holds a symbol if and only if all sequences hold that same symbol in the column.
/// Otherwise, the column is a gap.
pub fn sequences_consensus<Symbol: Clone + PartialEq>(
    aligned: &AlignedSequenceSet<Symbol>,
) -> AlignedSequence<Symbol> {
    (0..aligned.width())
        .map(|column| {
            match aligned
                .iter()
                .map(|sequence| &sequence[column])
                .all_equal_value()
            {
                Ok(symbol) => symbol.clone(),
                Err(_) => AlignedSymbol::Gap,
            }
        })
        .collect()
}
