use std::fmt::Display;

use crate::aligned_sequence::AlignedSequenceSet;

/// Summary numbers of a multiple alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlignmentStatistics {
    pub width: usize,
    pub sequence_count: usize,
    /// Columns in which all sequences hold the same symbol.
    pub conserved_columns: usize,
    /// Gaps summed over all sequences.
    pub gap_count: usize,
}

impl AlignmentStatistics {
    pub fn new<Symbol: Clone + PartialEq>(aligned: &AlignedSequenceSet<Symbol>) -> Self {
        Self {
            width: aligned.width(),
            sequence_count: aligned.sequence_count(),
            conserved_columns: aligned.consensus().iter().filter(|c| !c.is_gap()).count(),
            gap_count: aligned.iter().map(|sequence| sequence.gap_count()).sum(),
        }
    }
}

impl Display for AlignmentStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} sequences aligned to {} columns, {} conserved columns, {} gaps",
            self.sequence_count, self.width, self.conserved_columns, self.gap_count,
        )
    }
}
