//! Error types for handoff.

use thiserror::Error;

/// Main error type for chain construction.
///
/// Dispatch itself is infallible: a request that no reachable handler
/// recognizes resolves to `None`, which is a normal outcome rather than an
/// error. Only linking a chain can fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChainError {
    /// Linking was attempted with no handlers.
    #[error("cannot link an empty chain")]
    EmptyChain,

    /// The same handler object appears more than once in the chain.
    #[error("handler at position {0} appears earlier in the chain; linking it again would form a cycle")]
    WouldCycle(usize),
}

/// Result type alias using ChainError.
pub type Result<T> = std::result::Result<T, ChainError>;
