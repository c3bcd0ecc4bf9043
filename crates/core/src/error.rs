//! Domain-level error type shared across the workspace.

use crate::types::DbId;

/// Errors produced by domain logic and surfaced through the API layer.
///
/// The `api` crate maps each variant to an HTTP status in its
/// `IntoResponse` implementation.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An entity lookup by id found nothing.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Input failed domain validation (bad date, unknown badge key, ...).
    #[error("Validation error: {0}")]
    Validation(String),

    /// The operation conflicts with existing state.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// An invariant was violated or an unexpected internal state reached.
    #[error("Internal error: {0}")]
    Internal(String),
}
