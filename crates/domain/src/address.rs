//! Address — a postal address.

use serde::{Deserialize, Serialize};

use crate::error::{DineHubError, ValidationError};
use crate::id::AddressId;
use crate::time::Timestamp;

/// A postal address record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub id: AddressId,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Address {
    /// Create a builder for constructing an [`Address`].
    #[must_use]
    pub fn builder() -> AddressBuilder {
        AddressBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DineHubError::Validation`] when any field is empty.
    pub fn validate(&self) -> Result<(), DineHubError> {
        for (field, value) in [
            ("street", &self.street),
            ("city", &self.city),
            ("state", &self.state),
            ("postal_code", &self.postal_code),
        ] {
            if value.is_empty() {
                return Err(ValidationError::EmptyField { field }.into());
            }
        }
        Ok(())
    }

    /// Merge a partial update into this record.
    pub fn apply(&mut self, patch: AddressPatch) {
        if let Some(street) = patch.street {
            self.street = street;
        }
        if let Some(city) = patch.city {
            self.city = city;
        }
        if let Some(state) = patch.state {
            self.state = state;
        }
        if let Some(postal_code) = patch.postal_code {
            self.postal_code = postal_code;
        }
        self.updated_at = crate::time::now();
    }
}

/// Partial update for an [`Address`]. Omitted fields are preserved.
#[derive(Debug, Clone, Default)]
pub struct AddressPatch {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
}

/// Step-by-step builder for [`Address`].
#[derive(Debug, Default)]
pub struct AddressBuilder {
    id: Option<AddressId>,
    street: Option<String>,
    city: Option<String>,
    state: Option<String>,
    postal_code: Option<String>,
}

impl AddressBuilder {
    #[must_use]
    pub fn id(mut self, id: AddressId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn street(mut self, street: impl Into<String>) -> Self {
        self.street = Some(street.into());
        self
    }

    #[must_use]
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    #[must_use]
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    #[must_use]
    pub fn postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    /// Consume the builder, validate, and return an [`Address`].
    ///
    /// # Errors
    ///
    /// Returns [`DineHubError::Validation`] if any field is missing or empty.
    pub fn build(self) -> Result<Address, DineHubError> {
        let now = crate::time::now();
        let address = Address {
            id: self.id.unwrap_or_default(),
            street: self.street.unwrap_or_default(),
            city: self.city.unwrap_or_default(),
            state: self.state.unwrap_or_default(),
            postal_code: self.postal_code.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };
        address.validate()?;
        Ok(address)
    }
}
