use crate::traceback::AlignmentMove;

/// A cell of the alignment matrix, given by the number of consumed symbols of each sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentMatrixIndex {
    pub first_index: usize,
    pub second_index: usize,
}

impl AlignmentMatrixIndex {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(first_index: usize, second_index: usize) -> Self {
        Self {
            first_index,
            second_index,
        }
    }

    pub fn is_origin(self) -> bool {
        self == Self::ORIGIN
    }

    /// The cell from which `alignment_move` leads into this cell.
    pub fn predecessor(self, alignment_move: AlignmentMove) -> Self {
        let (first_step, second_step) = alignment_move.consumed();
        debug_assert!(self.first_index >= first_step && self.second_index >= second_step);

        Self::new(
            self.first_index - first_step,
            self.second_index - second_step,
        )
    }

    /// The index as accepted by `ndarray`.
    pub(super) fn cell(self) -> [usize; 2] {
        [self.first_index, self.second_index]
    }
}
