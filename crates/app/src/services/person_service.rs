//! Person service — use-cases for managing persons.

use dinehub_domain::error::{DineHubError, NotFoundError};
use dinehub_domain::id::PersonId;
use dinehub_domain::person::{Person, PersonPatch};

use crate::ports::PersonRepository;

/// Application service for person CRUD operations.
pub struct PersonService<R> {
    repo: R,
}

impl<R: PersonRepository> PersonService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new person after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DineHubError::Validation`] if invariants fail,
    /// [`DineHubError::Conflict`] if the identifier is already taken, or a
    /// storage error propagated from the repository.
    pub async fn create_person(&self, person: Person) -> Result<Person, DineHubError> {
        person.validate()?;
        self.repo.create(person).await
    }

    /// Look up a person by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`DineHubError::NotFound`] when no person with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_person(&self, id: PersonId) -> Result<Person, DineHubError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Person",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all persons.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_persons(&self) -> Result<Vec<Person>, DineHubError> {
        self.repo.get_all().await
    }

    /// Merge a partial update into an existing person.
    ///
    /// The identifier is taken from the path, never from the payload, so it
    /// cannot change across updates.
    ///
    /// # Errors
    ///
    /// Returns [`DineHubError::NotFound`] when no person with `id` exists,
    /// [`DineHubError::Validation`] if the patched record violates
    /// invariants, or a storage error from the repository.
    pub async fn update_person(
        &self,
        id: PersonId,
        patch: PersonPatch,
    ) -> Result<Person, DineHubError> {
        let mut person = self.get_person(id).await?;
        person.apply(patch);
        person.validate()?;
        self.repo.update(person).await
    }

    /// Delete a person by id.
    ///
    /// # Errors
    ///
    /// Returns [`DineHubError::NotFound`] when no person with `id` exists,
    /// or a storage error propagated from the repository.
    pub async fn delete_person(&self, id: PersonId) -> Result<(), DineHubError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(NotFoundError {
                entity: "Person",
                id: id.to_string(),
            }
            .into())
        }
    }
}
