//! Address service — use-cases for managing addresses.

use dinehub_domain::address::{Address, AddressPatch};
use dinehub_domain::error::{DineHubError, NotFoundError};
use dinehub_domain::id::AddressId;

use crate::ports::AddressRepository;

/// Application service for address CRUD operations.
pub struct AddressService<R> {
    repo: R,
}

impl<R: AddressRepository> AddressService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new address after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DineHubError::Validation`] if invariants fail,
    /// [`DineHubError::Conflict`] if the identifier is already taken, or a
    /// storage error propagated from the repository.
    pub async fn create_address(&self, address: Address) -> Result<Address, DineHubError> {
        address.validate()?;
        self.repo.create(address).await
    }

    /// Look up an address by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`DineHubError::NotFound`] when no address with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_address(&self, id: AddressId) -> Result<Address, DineHubError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Address",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all addresses.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_addresses(&self) -> Result<Vec<Address>, DineHubError> {
        self.repo.get_all().await
    }

    /// Merge a partial update into an existing address.
    ///
    /// # Errors
    ///
    /// Returns [`DineHubError::NotFound`] when no address with `id` exists,
    /// [`DineHubError::Validation`] if the patched record violates
    /// invariants, or a storage error from the repository.
    pub async fn update_address(
        &self,
        id: AddressId,
        patch: AddressPatch,
    ) -> Result<Address, DineHubError> {
        let mut address = self.get_address(id).await?;
        address.apply(patch);
        address.validate()?;
        self.repo.update(address).await
    }

    /// Delete an address by id.
    ///
    /// # Errors
    ///
    /// Returns [`DineHubError::NotFound`] when no address with `id` exists,
    /// or a storage error propagated from the repository.
    pub async fn delete_address(&self, id: AddressId) -> Result<(), DineHubError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(NotFoundError {
                entity: "Address",
                id: id.to_string(),
            }
            .into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryAddressRepo {
        store: Mutex<HashMap<AddressId, Address>>,
    }

    impl AddressRepository for InMemoryAddressRepo {
        fn create(
            &self,
            address: Address,
        ) -> impl Future<Output = Result<Address, DineHubError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.insert(address.id, address.clone());
            async { Ok(address) }
        }

        fn get_by_id(
            &self,
            id: AddressId,
        ) -> impl Future<Output = Result<Option<Address>, DineHubError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.get(&id).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Address>, DineHubError>> + Send {
            let store = self.store.lock().unwrap();
            let result: Vec<Address> = store.values().cloned().collect();
            async { Ok(result) }
        }

        fn update(
            &self,
            address: Address,
        ) -> impl Future<Output = Result<Address, DineHubError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.insert(address.id, address.clone());
            async { Ok(address) }
        }

        fn delete(&self, id: AddressId) -> impl Future<Output = Result<bool, DineHubError>> + Send {
            let mut store = self.store.lock().unwrap();
            let removed = store.remove(&id).is_some();
            async move { Ok(removed) }
        }
    }

    fn make_service() -> AddressService<InMemoryAddressRepo> {
        AddressService::new(InMemoryAddressRepo::default())
    }

    fn valid_address() -> Address {
        Address::builder()
            .street("2960 Broadway")
            .city("New York")
            .state("NY")
            .postal_code("10027")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_and_fetch_address() {
        let svc = make_service();
        let address = valid_address();
        let id = address.id;

        svc.create_address(address).await.unwrap();

        let fetched = svc.get_address(id).await.unwrap();
        assert_eq!(fetched.street, "2960 Broadway");
    }

    #[tokio::test]
    async fn should_return_not_found_when_address_missing() {
        let svc = make_service();
        let result = svc.get_address(AddressId::new()).await;
        assert!(matches!(result, Err(DineHubError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_patch_city_and_preserve_rest() {
        let svc = make_service();
        let address = valid_address();
        let id = address.id;
        svc.create_address(address).await.unwrap();

        let updated = svc
            .update_address(
                id,
                AddressPatch {
                    city: Some("Brooklyn".to_string()),
                    ..AddressPatch::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.city, "Brooklyn");
        assert_eq!(updated.state, "NY");
    }

    #[tokio::test]
    async fn should_delete_address_and_report_missing_afterwards() {
        let svc = make_service();
        let address = valid_address();
        let id = address.id;
        svc.create_address(address).await.unwrap();

        svc.delete_address(id).await.unwrap();

        let result = svc.delete_address(id).await;
        assert!(matches!(result, Err(DineHubError::NotFound(_))));
    }
}
