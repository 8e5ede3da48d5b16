//! Person — someone who holds meal plans and dines on campus.

use serde::{Deserialize, Serialize};

use crate::error::{DineHubError, ValidationError};
use crate::id::PersonId;
use crate::time::Timestamp;

/// A person record.
///
/// The identifier is assigned at creation and immutable afterwards;
/// `created_at` is set once while `updated_at` moves on every mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Person {
    /// Create a builder for constructing a [`Person`].
    #[must_use]
    pub fn builder() -> PersonBuilder {
        PersonBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DineHubError::Validation`] when a required field is empty
    /// or the email is not of the form `local@domain`.
    pub fn validate(&self) -> Result<(), DineHubError> {
        if self.first_name.is_empty() {
            return Err(ValidationError::EmptyField {
                field: "first_name",
            }
            .into());
        }
        if self.last_name.is_empty() {
            return Err(ValidationError::EmptyField { field: "last_name" }.into());
        }
        if self.email.is_empty() {
            return Err(ValidationError::EmptyField { field: "email" }.into());
        }
        match self.email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(ValidationError::MalformedEmail.into()),
        }
    }

    /// Merge a partial update into this record.
    ///
    /// The identifier and `created_at` are untouched; `updated_at` is bumped.
    pub fn apply(&mut self, patch: PersonPatch) {
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = Some(phone);
        }
        self.updated_at = crate::time::now();
    }
}

/// Partial update for a [`Person`]. Omitted fields are preserved.
#[derive(Debug, Clone, Default)]
pub struct PersonPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Step-by-step builder for [`Person`].
#[derive(Debug, Default)]
pub struct PersonBuilder {
    id: Option<PersonId>,
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
}

impl PersonBuilder {
    #[must_use]
    pub fn id(mut self, id: PersonId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    #[must_use]
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Consume the builder, validate, and return a [`Person`].
    ///
    /// Both timestamps are set to the current time.
    ///
    /// # Errors
    ///
    /// Returns [`DineHubError::Validation`] if a required field is missing,
    /// empty, or the email is malformed.
    pub fn build(self) -> Result<Person, DineHubError> {
        let now = crate::time::now();
        let person = Person {
            id: self.id.unwrap_or_default(),
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            phone: self.phone,
            created_at: now,
            updated_at: now,
        };
        person.validate()?;
        Ok(person)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_person() -> Person {
        Person::builder()
            .first_name("Alice")
            .last_name("Nguyen")
            .email("alice@example.edu")
            .build()
            .unwrap()
    }

    #[test]
    fn should_build_valid_person_when_required_fields_provided() {
        let person = valid_person();
        assert_eq!(person.first_name, "Alice");
        assert!(person.phone.is_none());
        assert_eq!(person.created_at, person.updated_at);
    }

    #[test]
    fn should_return_validation_error_when_first_name_is_empty() {
        let result = Person::builder()
            .last_name("Nguyen")
            .email("alice@example.edu")
            .build();
        assert!(matches!(
            result,
            Err(DineHubError::Validation(ValidationError::EmptyField {
                field: "first_name"
            }))
        ));
    }

    #[test]
    fn should_return_validation_error_when_email_has_no_domain() {
        let result = Person::builder()
            .first_name("Alice")
            .last_name("Nguyen")
            .email("alice@")
            .build();
        assert!(matches!(
            result,
            Err(DineHubError::Validation(ValidationError::MalformedEmail))
        ));
    }

    #[test]
    fn should_apply_patch_to_named_fields_only() {
        let mut person = valid_person();
        let id = person.id;
        let created_at = person.created_at;

        person.apply(PersonPatch {
            email: Some("a.nguyen@example.edu".to_string()),
            ..PersonPatch::default()
        });

        assert_eq!(person.id, id);
        assert_eq!(person.created_at, created_at);
        assert_eq!(person.first_name, "Alice");
        assert_eq!(person.email, "a.nguyen@example.edu");
        assert!(person.updated_at >= created_at);
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let person = valid_person();
        let json = serde_json::to_string(&person).unwrap();
        let parsed: Person = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, person.id);
        assert_eq!(parsed.email, person.email);
        assert_eq!(parsed.created_at, person.created_at);
    }
}
