//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They
//! are distinct from I/O and parsing errors raised while loading records.

/// Domain-level validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A journey was built with fewer than two stations.
    #[error("route must contain at least two stations")]
    InvalidRoute {
        /// Number of stations that were supplied.
        stations: usize,
    },
}
