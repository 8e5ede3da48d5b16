//! Dining location service — use-cases for managing dining locations.

use dinehub_domain::dining_location::{DiningLocation, DiningLocationPatch};
use dinehub_domain::error::{DineHubError, NotFoundError};
use dinehub_domain::id::DiningLocationId;

use crate::ports::DiningLocationRepository;

/// Application service for dining location CRUD operations.
pub struct DiningLocationService<R> {
    repo: R,
}

impl<R: DiningLocationRepository> DiningLocationService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new dining location after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DineHubError::Validation`] if invariants fail,
    /// [`DineHubError::Conflict`] if the identifier is already taken, or a
    /// storage error propagated from the repository.
    pub async fn create_dining_location(
        &self,
        location: DiningLocation,
    ) -> Result<DiningLocation, DineHubError> {
        location.validate()?;
        self.repo.create(location).await
    }

    /// Look up a dining location by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`DineHubError::NotFound`] when no dining location with `id`
    /// exists, or a storage error from the repository.
    pub async fn get_dining_location(
        &self,
        id: DiningLocationId,
    ) -> Result<DiningLocation, DineHubError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "DiningLocation",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all dining locations.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_dining_locations(&self) -> Result<Vec<DiningLocation>, DineHubError> {
        self.repo.get_all().await
    }

    /// Merge a partial update into an existing dining location.
    ///
    /// # Errors
    ///
    /// Returns [`DineHubError::NotFound`] when no dining location with `id`
    /// exists, [`DineHubError::Validation`] if the patched record violates
    /// invariants, or a storage error from the repository.
    pub async fn update_dining_location(
        &self,
        id: DiningLocationId,
        patch: DiningLocationPatch,
    ) -> Result<DiningLocation, DineHubError> {
        let mut location = self.get_dining_location(id).await?;
        location.apply(patch);
        location.validate()?;
        self.repo.update(location).await
    }

    /// Delete a dining location by id.
    ///
    /// # Errors
    ///
    /// Returns [`DineHubError::NotFound`] when no dining location with `id`
    /// exists, or a storage error propagated from the repository.
    pub async fn delete_dining_location(&self, id: DiningLocationId) -> Result<(), DineHubError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(NotFoundError {
                entity: "DiningLocation",
                id: id.to_string(),
            }
            .into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dinehub_domain::error::ValidationError;
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryLocationRepo {
        store: Mutex<HashMap<DiningLocationId, DiningLocation>>,
    }

    impl DiningLocationRepository for InMemoryLocationRepo {
        fn create(
            &self,
            location: DiningLocation,
        ) -> impl Future<Output = Result<DiningLocation, DineHubError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.insert(location.id, location.clone());
            async { Ok(location) }
        }

        fn get_by_id(
            &self,
            id: DiningLocationId,
        ) -> impl Future<Output = Result<Option<DiningLocation>, DineHubError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.get(&id).cloned();
            async { Ok(result) }
        }

        fn get_all(
            &self,
        ) -> impl Future<Output = Result<Vec<DiningLocation>, DineHubError>> + Send {
            let store = self.store.lock().unwrap();
            let result: Vec<DiningLocation> = store.values().cloned().collect();
            async { Ok(result) }
        }

        fn update(
            &self,
            location: DiningLocation,
        ) -> impl Future<Output = Result<DiningLocation, DineHubError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.insert(location.id, location.clone());
            async { Ok(location) }
        }

        fn delete(
            &self,
            id: DiningLocationId,
        ) -> impl Future<Output = Result<bool, DineHubError>> + Send {
            let mut store = self.store.lock().unwrap();
            let removed = store.remove(&id).is_some();
            async move { Ok(removed) }
        }
    }

    fn make_service() -> DiningLocationService<InMemoryLocationRepo> {
        DiningLocationService::new(InMemoryLocationRepo::default())
    }

    fn valid_location() -> DiningLocation {
        DiningLocation::builder()
            .name("Grace Dodge")
            .capacity(200)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_and_fetch_dining_location() {
        let svc = make_service();
        let location = valid_location();
        let id = location.id;

        svc.create_dining_location(location).await.unwrap();

        let fetched = svc.get_dining_location(id).await.unwrap();
        assert_eq!(fetched.capacity, 200);
    }

    #[tokio::test]
    async fn should_reject_patch_that_zeroes_capacity() {
        let svc = make_service();
        let location = valid_location();
        let id = location.id;
        svc.create_dining_location(location).await.unwrap();

        let result = svc
            .update_dining_location(
                id,
                DiningLocationPatch {
                    capacity: Some(0),
                    ..DiningLocationPatch::default()
                },
            )
            .await;
        assert!(matches!(
            result,
            Err(DineHubError::Validation(ValidationError::ZeroCapacity))
        ));
    }

    #[tokio::test]
    async fn should_list_all_dining_locations() {
        let svc = make_service();
        svc.create_dining_location(valid_location()).await.unwrap();
        svc.create_dining_location(
            DiningLocation::builder()
                .name("John Jay")
                .capacity(350)
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

        let all = svc.list_dining_locations().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn should_delete_dining_location() {
        let svc = make_service();
        let location = valid_location();
        let id = location.id;
        svc.create_dining_location(location).await.unwrap();

        svc.delete_dining_location(id).await.unwrap();

        let result = svc.get_dining_location(id).await;
        assert!(matches!(result, Err(DineHubError::NotFound(_))));
    }
}
