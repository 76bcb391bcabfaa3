//! Progressive multiple alignment of ordered symbol sequences, such as the stop sequences of route variants.
//!
//! [`pairwise::pairwise_align`] computes a global alignment of two sequences,
//! [`consensus::sequences_consensus`] reduces a set of aligned sequences to the columns they agree on, and
//! [`progressive::progressive_align`] combines both to align any number of sequences into a common column space.

pub mod aligned_sequence;
pub mod alignment_configuration;
pub mod alignment_matrix;
pub mod consensus;
pub mod error;
pub mod pairwise;
pub mod plain_text;
pub mod progressive;
pub mod route_variant;
pub mod score;
pub mod statistics;
pub mod traceback;
