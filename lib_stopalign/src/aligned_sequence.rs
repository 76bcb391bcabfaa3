use std::{fmt::Display, ops::Index};

use itertools::Itertools;

use crate::{
    consensus::sequences_consensus,
    error::{Error, Result},
};

/// A column entry of an aligned sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlignedSymbol<Symbol> {
    Symbol(Symbol),
    /// The sequence has no symbol in this column.
    Gap,
}

/// A sequence of symbols and gaps.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct AlignedSequence<Symbol> {
    symbols: Vec<AlignedSymbol<Symbol>>,
}

/// A non-empty set of aligned sequences that all have the same length.
///
/// The common length is called the width of the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedSequenceSet<Symbol> {
    sequences: Vec<AlignedSequence<Symbol>>,
    width: usize,
}

impl<Symbol> AlignedSymbol<Symbol> {
    pub fn symbol(&self) -> Option<&Symbol> {
        match self {
            Self::Symbol(symbol) => Some(symbol),
            Self::Gap => None,
        }
    }

    pub fn into_symbol(self) -> Option<Symbol> {
        match self {
            Self::Symbol(symbol) => Some(symbol),
            Self::Gap => None,
        }
    }

    pub fn is_gap(&self) -> bool {
        matches!(self, Self::Gap)
    }
}

impl<Symbol> AlignedSequence<Symbol> {
    /// Creates an aligned sequence without gaps.
    pub fn new_ungapped(sequence: impl IntoIterator<Item = Symbol>) -> Self {
        sequence.into_iter().map(AlignedSymbol::Symbol).collect()
    }

    pub fn symbols(&self) -> &[AlignedSymbol<Symbol>] {
        &self.symbols
    }

    pub fn into_symbols(self) -> Vec<AlignedSymbol<Symbol>> {
        self.symbols
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AlignedSymbol<Symbol>> {
        self.symbols.iter()
    }

    /// The length including gaps.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn gap_count(&self) -> usize {
        self.symbols.iter().filter(|symbol| symbol.is_gap()).count()
    }

    /// Inserts a gap such that it ends up at the given position.
    pub fn insert_gap(&mut self, position: usize) {
        self.symbols.insert(position, AlignedSymbol::Gap);
    }

    /// Returns the symbols without gaps.
    pub fn strip_gaps(&self) -> Vec<Symbol>
    where
        Symbol: Clone,
    {
        self.symbols
            .iter()
            .filter_map(AlignedSymbol::symbol)
            .cloned()
            .collect()
    }

    pub fn into_stripped(self) -> Vec<Symbol> {
        self.symbols
            .into_iter()
            .filter_map(AlignedSymbol::into_symbol)
            .collect()
    }
}

impl<Symbol> AlignedSequenceSet<Symbol> {
    /// Returns an error if `sequences` is empty or its elements differ in length.
    pub fn new(sequences: Vec<AlignedSequence<Symbol>>) -> Result<Self> {
        let width = sequences
            .first()
            .ok_or(Error::EmptyAlignedSequenceSet)?
            .len();

        if let Some((index, sequence)) = sequences
            .iter()
            .enumerate()
            .find(|(_, sequence)| sequence.len() != width)
        {
            return Err(Error::AlignedLengthMismatch {
                index,
                expected: width,
                actual: sequence.len(),
            });
        }

        Ok(Self { sequences, width })
    }

    /// The common length of all sequences in the set.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn sequence_count(&self) -> usize {
        self.sequences.len()
    }

    pub fn sequences(&self) -> &[AlignedSequence<Symbol>] {
        &self.sequences
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AlignedSequence<Symbol>> {
        self.sequences.iter()
    }

    pub fn into_sequences(self) -> Vec<AlignedSequence<Symbol>> {
        self.sequences
    }

    /// Adds a sequence, returning an error if its length differs from the width of the set.
    pub fn push(&mut self, sequence: AlignedSequence<Symbol>) -> Result<()> {
        if sequence.len() != self.width {
            return Err(Error::AlignedLengthMismatch {
                index: self.sequences.len(),
                expected: self.width,
                actual: sequence.len(),
            });
        }

        self.sequences.push(sequence);
        Ok(())
    }

    /// Inserts a gap column into every sequence before each of the given columns.
    ///
    /// The positions refer to the columns before any insertion and must be sorted ascendingly.
    /// A position may repeat to insert multiple gap columns at the same place.
    pub fn insert_gap_columns(&mut self, positions: &[usize]) {
        debug_assert!(positions.is_sorted());
        debug_assert!(positions.iter().all(|position| *position <= self.width));

        // Going backwards keeps the remaining positions valid.
        for &position in positions.iter().rev() {
            for sequence in &mut self.sequences {
                sequence.insert_gap(position);
            }
        }
        self.width += positions.len();
    }

    /// See [`sequences_consensus`].
    pub fn consensus(&self) -> AlignedSequence<Symbol>
    where
        Symbol: Clone + PartialEq,
    {
        sequences_consensus(self)
    }
}

impl<Symbol> FromIterator<AlignedSymbol<Symbol>> for AlignedSequence<Symbol> {
    fn from_iter<T: IntoIterator<Item = AlignedSymbol<Symbol>>>(iter: T) -> Self {
        Self {
            symbols: iter.into_iter().collect(),
        }
    }
}

impl<Symbol> From<Vec<AlignedSymbol<Symbol>>> for AlignedSequence<Symbol> {
    fn from(symbols: Vec<AlignedSymbol<Symbol>>) -> Self {
        Self { symbols }
    }
}

impl<Symbol> Index<usize> for AlignedSequence<Symbol> {
    type Output = AlignedSymbol<Symbol>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.symbols[index]
    }
}

impl<'a, Symbol> IntoIterator for &'a AlignedSequence<Symbol> {
    type Item = &'a AlignedSymbol<Symbol>;
    type IntoIter = std::slice::Iter<'a, AlignedSymbol<Symbol>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<Symbol: Display> Display for AlignedSymbol<Symbol> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Symbol(symbol) => write!(f, "{symbol}"),
            Self::Gap => write!(f, "-"),
        }
    }
}

/// Writes the symbols separated by single spaces.
impl<Symbol: Display> Display for AlignedSequence<Symbol> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbols.iter().format(" "))
    }
}
