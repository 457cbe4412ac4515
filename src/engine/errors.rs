//! Error types for network construction, inference, and storage.

use thiserror::Error;

/// Errors surfaced by the network model, the inference engines, and the
/// document storage layer.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in the future without breaking changes.
///
/// Two failure families deliberately do *not* appear here:
/// - a CPT row that is absent for some parent assignment is treated as an
///   implicit all-zero row during inference (see
///   [`BayesNet::missing_rows`](crate::engine::network::BayesNet::missing_rows)
///   for the strict view), and
/// - a query variable that is itself fixed by evidence produces a one-hot
///   posterior, never a conflict error.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum BayesError {
    /// Structural violation in the network definition.
    ///
    /// Raised for references to unknown variables (in parent lists, CPT
    /// rows, queries, or evidence keys), empty or duplicated domains,
    /// repeated parents, parent-tuple arity mismatches, and parent edges
    /// that would close a directed cycle.
    #[error("structural error: {0}")]
    Structural(String),

    /// A supplied CPT row is not a probability distribution.
    ///
    /// Raised when a row misses a domain value, names an unknown or
    /// duplicate one, contains a negative or non-finite entry, or does not
    /// sum to 1 within the 0.01 tolerance. The message carries the computed
    /// sum and the offending row key; the network is left unchanged.
    #[error("invalid distribution: {0}")]
    Distribution(String),

    /// Document serialization or deserialization failure.
    ///
    /// Raised for malformed JSON, malformed stringified tuple keys, and
    /// documents whose sections disagree with their own variable list.
    #[error("storage error: {0}")]
    Storage(String),
}
