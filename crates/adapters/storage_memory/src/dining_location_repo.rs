//! In-memory implementation of [`DiningLocationRepository`].

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;

use dinehub_app::ports::DiningLocationRepository;
use dinehub_domain::dining_location::DiningLocation;
use dinehub_domain::error::{ConflictError, DineHubError};
use dinehub_domain::id::DiningLocationId;

use crate::lock;

/// Mutex-guarded map of dining locations by id.
#[derive(Default)]
pub struct InMemoryDiningLocationRepository {
    store: Mutex<HashMap<DiningLocationId, DiningLocation>>,
}

impl InMemoryDiningLocationRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DiningLocationRepository for InMemoryDiningLocationRepository {
    fn create(
        &self,
        location: DiningLocation,
    ) -> impl Future<Output = Result<DiningLocation, DineHubError>> + Send {
        let result = lock(&self.store).and_then(|mut store| {
            if store.contains_key(&location.id) {
                return Err(ConflictError {
                    entity: "DiningLocation",
                    id: location.id.to_string(),
                }
                .into());
            }
            store.insert(location.id, location.clone());
            Ok(location)
        });
        async move { result }
    }

    fn get_by_id(
        &self,
        id: DiningLocationId,
    ) -> impl Future<Output = Result<Option<DiningLocation>, DineHubError>> + Send {
        let result = lock(&self.store).map(|store| store.get(&id).cloned());
        async move { result }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<DiningLocation>, DineHubError>> + Send {
        let result = lock(&self.store).map(|store| store.values().cloned().collect());
        async move { result }
    }

    fn update(
        &self,
        location: DiningLocation,
    ) -> impl Future<Output = Result<DiningLocation, DineHubError>> + Send {
        let result = lock(&self.store).map(|mut store| {
            store.insert(location.id, location.clone());
            location
        });
        async move { result }
    }

    fn delete(
        &self,
        id: DiningLocationId,
    ) -> impl Future<Output = Result<bool, DineHubError>> + Send {
        let result = lock(&self.store).map(|mut store| store.remove(&id).is_some());
        async move { result }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location() -> DiningLocation {
        DiningLocation::builder()
            .name("Grace Dodge")
            .capacity(200)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_store_and_fetch_dining_location() {
        let repo = InMemoryDiningLocationRepository::new();
        let location = location();
        let id = location.id;

        repo.create(location).await.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.capacity, 200);
    }

    #[tokio::test]
    async fn should_reject_duplicate_id_on_create() {
        let repo = InMemoryDiningLocationRepository::new();
        let location = location();
        repo.create(location.clone()).await.unwrap();

        let result = repo.create(location).await;
        assert!(matches!(result, Err(DineHubError::Conflict(_))));
    }

    #[tokio::test]
    async fn should_remove_location_on_delete() {
        let repo = InMemoryDiningLocationRepository::new();
        let location = location();
        let id = location.id;
        repo.create(location).await.unwrap();

        assert!(repo.delete(id).await.unwrap());
        assert!(!repo.delete(id).await.unwrap());
    }
}
