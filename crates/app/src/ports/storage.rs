//! Storage port — repository traits for persistence.
//!
//! All four resources share the same five-operation shape. Methods return
//! `impl Future + Send` so implementations stay statically dispatched and
//! usable from multi-threaded executors.
//!
//! Conventions:
//! - `create` fails with [`DineHubError::Conflict`] when the identifier is
//!   already present.
//! - `get_by_id` returns `Ok(None)` for unknown identifiers; the service
//!   layer maps that to a not-found error.
//! - `update` assumes the caller has verified existence.
//! - `delete` reports whether a record was actually removed.
//! - `get_all` returns records in implementation-defined order.

use std::future::Future;

use dinehub_domain::address::Address;
use dinehub_domain::dining_location::DiningLocation;
use dinehub_domain::error::DineHubError;
use dinehub_domain::id::{AddressId, DiningLocationId, MealPlanId, PersonId};
use dinehub_domain::meal_plan::MealPlan;
use dinehub_domain::person::Person;

/// Persistence operations for [`Person`] records.
pub trait PersonRepository {
    fn create(&self, person: Person) -> impl Future<Output = Result<Person, DineHubError>> + Send;

    fn get_by_id(
        &self,
        id: PersonId,
    ) -> impl Future<Output = Result<Option<Person>, DineHubError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Person>, DineHubError>> + Send;

    fn update(&self, person: Person) -> impl Future<Output = Result<Person, DineHubError>> + Send;

    fn delete(&self, id: PersonId) -> impl Future<Output = Result<bool, DineHubError>> + Send;
}

/// Persistence operations for [`Address`] records.
pub trait AddressRepository {
    fn create(
        &self,
        address: Address,
    ) -> impl Future<Output = Result<Address, DineHubError>> + Send;

    fn get_by_id(
        &self,
        id: AddressId,
    ) -> impl Future<Output = Result<Option<Address>, DineHubError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Address>, DineHubError>> + Send;

    fn update(
        &self,
        address: Address,
    ) -> impl Future<Output = Result<Address, DineHubError>> + Send;

    fn delete(&self, id: AddressId) -> impl Future<Output = Result<bool, DineHubError>> + Send;
}

/// Persistence operations for [`MealPlan`] records.
pub trait MealPlanRepository {
    fn create(
        &self,
        plan: MealPlan,
    ) -> impl Future<Output = Result<MealPlan, DineHubError>> + Send;

    fn get_by_id(
        &self,
        id: MealPlanId,
    ) -> impl Future<Output = Result<Option<MealPlan>, DineHubError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<MealPlan>, DineHubError>> + Send;

    fn update(
        &self,
        plan: MealPlan,
    ) -> impl Future<Output = Result<MealPlan, DineHubError>> + Send;

    fn delete(&self, id: MealPlanId) -> impl Future<Output = Result<bool, DineHubError>> + Send;
}

/// Persistence operations for [`DiningLocation`] records.
pub trait DiningLocationRepository {
    fn create(
        &self,
        location: DiningLocation,
    ) -> impl Future<Output = Result<DiningLocation, DineHubError>> + Send;

    fn get_by_id(
        &self,
        id: DiningLocationId,
    ) -> impl Future<Output = Result<Option<DiningLocation>, DineHubError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<DiningLocation>, DineHubError>> + Send;

    fn update(
        &self,
        location: DiningLocation,
    ) -> impl Future<Output = Result<DiningLocation, DineHubError>> + Send;

    fn delete(
        &self,
        id: DiningLocationId,
    ) -> impl Future<Output = Result<bool, DineHubError>> + Send;
}
