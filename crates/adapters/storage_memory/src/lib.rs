//! # dinehub-adapter-storage-memory
//!
//! In-memory persistence adapter.
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `dinehub-app::ports::storage`
//! - Hold each resource in a mutex-guarded `HashMap<Id, Record>`
//! - Enforce identifier uniqueness (`create` on a taken id is a conflict)
//!
//! Records live only as long as the process; there are no durability,
//! ordering, or transactional guarantees. Locks are held for the duration of
//! a single map operation and never across await points.
//!
//! ## Dependency rule
//! Depends on `dinehub-app` (for port traits) and `dinehub-domain` (for domain
//! types). The `app` and `domain` crates must never reference this adapter.

use std::sync::{Mutex, MutexGuard};

use dinehub_domain::error::{DineHubError, StorageError};

pub mod address_repo;
pub mod dining_location_repo;
pub mod meal_plan_repo;
pub mod person_repo;

pub use address_repo::InMemoryAddressRepository;
pub use dining_location_repo::InMemoryDiningLocationRepository;
pub use meal_plan_repo::InMemoryMealPlanRepository;
pub use person_repo::InMemoryPersonRepository;

/// Acquire a store lock, surfacing poisoning as a storage error.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, DineHubError> {
    mutex
        .lock()
        .map_err(|_| StorageError("store mutex poisoned".to_string()).into())
}
