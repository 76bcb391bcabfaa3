use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("An IO error occurred: {0}.")]
    Io(#[from] std::io::Error),

    #[error("A parsing error of kind '{kind:?}' occurred when the remaining input was '{input}'.")]
    Parser {
        input: String,
        kind: nom::error::ErrorKind,
    },

    #[error("Parsing was unsuccessful due to incomplete input: {0:?}.")]
    ParserIncomplete(nom::Needed),

    #[error("A progressive alignment requires at least one sequence.")]
    NoSequences,

    #[error("An aligned sequence set requires at least one sequence.")]
    EmptyAlignedSequenceSet,

    #[error(
        "The aligned sequence at index {index} has length {actual}, but the aligned sequence set has width {expected}."
    )]
    AlignedLengthMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error(
        "Aligning sequences of lengths {first_length} and {second_length} requires {cells} matrix cells, but at most {limit} are allowed."
    )]
    MatrixTooLarge {
        first_length: usize,
        second_length: usize,
        cells: usize,
        limit: usize,
    },

    #[error("The route variant name '{0}' was encountered twice.")]
    DuplicateVariantName(String),
}

impl From<nom::Err<nom::error::Error<&str>>> for Error {
    fn from(error: nom::Err<nom::error::Error<&str>>) -> Self {
        match error {
            nom::Err::Incomplete(needed) => Self::ParserIncomplete(needed),
            nom::Err::Error(error) | nom::Err::Failure(error) => Self::Parser {
                input: error.input.to_string(),
                kind: error.code,
            },
        }
    }
}
