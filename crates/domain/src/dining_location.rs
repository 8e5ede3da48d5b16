//! Dining location — a place to eat, with a seating capacity.

use serde::{Deserialize, Serialize};

use crate::error::{DineHubError, ValidationError};
use crate::id::DiningLocationId;
use crate::time::Timestamp;

/// A dining location record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningLocation {
    pub id: DiningLocationId,
    pub name: String,
    pub capacity: u32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl DiningLocation {
    /// Create a builder for constructing a [`DiningLocation`].
    #[must_use]
    pub fn builder() -> DiningLocationBuilder {
        DiningLocationBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DineHubError::Validation`] when `name` is empty or
    /// `capacity` is zero.
    pub fn validate(&self) -> Result<(), DineHubError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyField { field: "name" }.into());
        }
        if self.capacity == 0 {
            return Err(ValidationError::ZeroCapacity.into());
        }
        Ok(())
    }

    /// Merge a partial update into this record.
    pub fn apply(&mut self, patch: DiningLocationPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(capacity) = patch.capacity {
            self.capacity = capacity;
        }
        self.updated_at = crate::time::now();
    }
}

/// Partial update for a [`DiningLocation`]. Omitted fields are preserved.
#[derive(Debug, Clone, Default)]
pub struct DiningLocationPatch {
    pub name: Option<String>,
    pub capacity: Option<u32>,
}

/// Step-by-step builder for [`DiningLocation`].
#[derive(Debug, Default)]
pub struct DiningLocationBuilder {
    id: Option<DiningLocationId>,
    name: Option<String>,
    capacity: Option<u32>,
}

impl DiningLocationBuilder {
    #[must_use]
    pub fn id(mut self, id: DiningLocationId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn capacity(mut self, capacity: u32) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Consume the builder, validate, and return a [`DiningLocation`].
    ///
    /// # Errors
    ///
    /// Returns [`DineHubError::Validation`] if `name` is missing or empty,
    /// or `capacity` is missing or zero.
    pub fn build(self) -> Result<DiningLocation, DineHubError> {
        let now = crate::time::now();
        let location = DiningLocation {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            capacity: self.capacity.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };
        location.validate()?;
        Ok(location)
    }
}
