//! In-memory implementation of [`AddressRepository`].

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;

use dinehub_app::ports::AddressRepository;
use dinehub_domain::address::Address;
use dinehub_domain::error::{ConflictError, DineHubError};
use dinehub_domain::id::AddressId;

use crate::lock;

/// Mutex-guarded map of addresses by id.
#[derive(Default)]
pub struct InMemoryAddressRepository {
    store: Mutex<HashMap<AddressId, Address>>,
}

impl InMemoryAddressRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl AddressRepository for InMemoryAddressRepository {
    fn create(
        &self,
        address: Address,
    ) -> impl Future<Output = Result<Address, DineHubError>> + Send {
        let result = lock(&self.store).and_then(|mut store| {
            if store.contains_key(&address.id) {
                return Err(ConflictError {
                    entity: "Address",
                    id: address.id.to_string(),
                }
                .into());
            }
            store.insert(address.id, address.clone());
            Ok(address)
        });
        async move { result }
    }

    fn get_by_id(
        &self,
        id: AddressId,
    ) -> impl Future<Output = Result<Option<Address>, DineHubError>> + Send {
        let result = lock(&self.store).map(|store| store.get(&id).cloned());
        async move { result }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Address>, DineHubError>> + Send {
        let result = lock(&self.store).map(|store| store.values().cloned().collect());
        async move { result }
    }

    fn update(
        &self,
        address: Address,
    ) -> impl Future<Output = Result<Address, DineHubError>> + Send {
        let result = lock(&self.store).map(|mut store| {
            store.insert(address.id, address.clone());
            address
        });
        async move { result }
    }

    fn delete(&self, id: AddressId) -> impl Future<Output = Result<bool, DineHubError>> + Send {
        let result = lock(&self.store).map(|mut store| store.remove(&id).is_some());
        async move { result }
    }
}
