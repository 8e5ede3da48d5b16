//! Common error types used across the workspace.
//!
//! Each layer produces one of the typed variants below and converts via
//! `#[from]`; `String` variants are not allowed. The HTTP adapter owns the
//! mapping from these variants to status codes.

/// Top-level error returned by application services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum DineHubError {
    /// A record or payload violated a domain invariant.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No record exists for the requested identifier.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// A record with the supplied identifier already exists.
    #[error(transparent)]
    Conflict(#[from] ConflictError),

    /// The storage backend failed in an unexpected way.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Domain invariant violations.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// A required text field was missing or empty.
    #[error("{field} must not be empty")]
    EmptyField {
        /// Name of the offending field.
        field: &'static str,
    },

    /// The email address is not of the form `local@domain`.
    #[error("email must be of the form local@domain")]
    MalformedEmail,

    /// A path or payload identifier was not a valid UUID.
    #[error("malformed identifier: {0}")]
    MalformedId(String),

    /// A dining location must seat at least one person.
    #[error("capacity must be greater than zero")]
    ZeroCapacity,

    /// A meal plan cost must be a finite, non-negative amount.
    #[error("cost must be a finite, non-negative amount")]
    InvalidCost,

    /// A meal plan validity window must not end before it starts.
    #[error("end date must not precede start date")]
    InvertedDateRange,
}

/// Lookup failure for a specific record.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Human-readable record kind, e.g. `"Person"`.
    pub entity: &'static str,
    /// The identifier that was looked up.
    pub id: String,
}

/// Creation attempted with an identifier that is already taken.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} already exists")]
pub struct ConflictError {
    /// Human-readable record kind, e.g. `"MealPlan"`.
    pub entity: &'static str,
    /// The identifier that collided.
    pub id: String,
}

/// Unexpected storage backend failure.
#[derive(Debug, thiserror::Error)]
#[error("storage failure: {0}")]
pub struct StorageError(pub String);
