//! In-memory implementation of [`PersonRepository`].

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;

use dinehub_app::ports::PersonRepository;
use dinehub_domain::error::{ConflictError, DineHubError};
use dinehub_domain::id::PersonId;
use dinehub_domain::person::Person;

use crate::lock;

/// Mutex-guarded map of persons by id.
#[derive(Default)]
pub struct InMemoryPersonRepository {
    store: Mutex<HashMap<PersonId, Person>>,
}

impl InMemoryPersonRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PersonRepository for InMemoryPersonRepository {
    fn create(&self, person: Person) -> impl Future<Output = Result<Person, DineHubError>> + Send {
        let result = lock(&self.store).and_then(|mut store| {
            if store.contains_key(&person.id) {
                return Err(ConflictError {
                    entity: "Person",
                    id: person.id.to_string(),
                }
                .into());
            }
            store.insert(person.id, person.clone());
            Ok(person)
        });
        async move { result }
    }

    fn get_by_id(
        &self,
        id: PersonId,
    ) -> impl Future<Output = Result<Option<Person>, DineHubError>> + Send {
        let result = lock(&self.store).map(|store| store.get(&id).cloned());
        async move { result }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Person>, DineHubError>> + Send {
        let result = lock(&self.store).map(|store| store.values().cloned().collect());
        async move { result }
    }

    fn update(&self, person: Person) -> impl Future<Output = Result<Person, DineHubError>> + Send {
        let result = lock(&self.store).map(|mut store| {
            store.insert(person.id, person.clone());
            person
        });
        async move { result }
    }

    fn delete(&self, id: PersonId) -> impl Future<Output = Result<bool, DineHubError>> + Send {
        let result = lock(&self.store).map(|mut store| store.remove(&id).is_some());
        async move { result }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person() -> Person {
        Person::builder()
            .first_name("Alice")
            .last_name("Nguyen")
            .email("alice@example.edu")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_store_and_fetch_person() {
        let repo = InMemoryPersonRepository::new();
        let person = person();
        let id = person.id;

        repo.create(person).await.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.first_name, "Alice");
    }

    #[tokio::test]
    async fn should_reject_duplicate_id_on_create() {
        let repo = InMemoryPersonRepository::new();
        let person = person();
        repo.create(person.clone()).await.unwrap();

        let result = repo.create(person).await;
        assert!(matches!(result, Err(DineHubError::Conflict(_))));
    }

    #[tokio::test]
    async fn should_report_nothing_removed_for_unknown_id() {
        let repo = InMemoryPersonRepository::new();
        let removed = repo.delete(PersonId::new()).await.unwrap();
        assert!(!removed);
    }

    #[tokio::test]
    async fn should_remove_person_on_delete() {
        let repo = InMemoryPersonRepository::new();
        let person = person();
        let id = person.id;
        repo.create(person).await.unwrap();

        assert!(repo.delete(id).await.unwrap());
        assert!(repo.get_by_id(id).await.unwrap().is_none());
        assert!(repo.get_all().await.unwrap().is_empty());
    }
}
