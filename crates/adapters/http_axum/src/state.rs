//! Shared application state for axum handlers.

use std::sync::Arc;

use dinehub_app::ports::{
    AddressRepository, DiningLocationRepository, MealPlanRepository, PersonRepository,
};
use dinehub_app::services::address_service::AddressService;
use dinehub_app::services::dining_location_service::DiningLocationService;
use dinehub_app::services::meal_plan_service::MealPlanService;
use dinehub_app::services::person_service::PersonService;

/// Application state shared across all axum handlers.
///
/// Generic over the four repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<PR, AR, MR, DR> {
    /// Person CRUD service.
    pub person_service: Arc<PersonService<PR>>,
    /// Address CRUD service.
    pub address_service: Arc<AddressService<AR>>,
    /// Meal plan CRUD service.
    pub meal_plan_service: Arc<MealPlanService<MR>>,
    /// Dining location CRUD service.
    pub dining_location_service: Arc<DiningLocationService<DR>>,
}

impl<PR, AR, MR, DR> Clone for AppState<PR, AR, MR, DR> {
    fn clone(&self) -> Self {
        Self {
            person_service: Arc::clone(&self.person_service),
            address_service: Arc::clone(&self.address_service),
            meal_plan_service: Arc::clone(&self.meal_plan_service),
            dining_location_service: Arc::clone(&self.dining_location_service),
        }
    }
}

impl<PR, AR, MR, DR> AppState<PR, AR, MR, DR>
where
    PR: PersonRepository + Send + Sync + 'static,
    AR: AddressRepository + Send + Sync + 'static,
    MR: MealPlanRepository + Send + Sync + 'static,
    DR: DiningLocationRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        person_service: PersonService<PR>,
        address_service: AddressService<AR>,
        meal_plan_service: MealPlanService<MR>,
        dining_location_service: DiningLocationService<DR>,
    ) -> Self {
        Self {
            person_service: Arc::new(person_service),
            address_service: Arc::new(address_service),
            meal_plan_service: Arc::new(meal_plan_service),
            dining_location_service: Arc::new(dining_location_service),
        }
    }
}
