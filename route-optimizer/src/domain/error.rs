//! Domain error types.
//!
//! These errors represent route shape violations in the domain layer.
//! They are distinct from dataset I/O errors.

/// Domain-level errors for route validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Route has no segments
    #[error("route must have at least one segment")]
    EmptyRoute,

    /// Route starts with a transfer
    #[error("route must start with a ride")]
    LeadingTransfer,

    /// Route ends with a transfer
    #[error("route must end with a ride")]
    TrailingTransfer,

    /// Two transfers without a ride between them
    #[error("transfers at segments {0} and {1} are adjacent")]
    AdjacentTransfers(usize, usize),

    /// Two rides without a transfer between them
    #[error("rides at segments {0} and {1} are adjacent")]
    AdjacentRides(usize, usize),
}
