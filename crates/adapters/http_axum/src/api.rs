//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod addresses;
#[allow(clippy::missing_errors_doc)]
pub mod dining_locations;
#[allow(clippy::missing_errors_doc)]
pub mod meal_plans;
#[allow(clippy::missing_errors_doc)]
pub mod persons;

use std::str::FromStr;

use axum::Router;
use axum::routing::get;

use dinehub_app::ports::{
    AddressRepository, DiningLocationRepository, MealPlanRepository, PersonRepository,
};
use dinehub_domain::error::{DineHubError, ValidationError};

use crate::error::ApiError;
use crate::state::AppState;

/// Parse a path segment into a typed identifier.
///
/// A malformed UUID is a client error (400), not a routing miss.
pub(crate) fn parse_id<T: FromStr>(raw: &str) -> Result<T, ApiError> {
    T::from_str(raw).map_err(|_| {
        ApiError::from(DineHubError::Validation(ValidationError::MalformedId(
            raw.to_string(),
        )))
    })
}

/// Build the resource sub-router.
pub fn routes<PR, AR, MR, DR>() -> Router<AppState<PR, AR, MR, DR>>
where
    PR: PersonRepository + Send + Sync + 'static,
    AR: AddressRepository + Send + Sync + 'static,
    MR: MealPlanRepository + Send + Sync + 'static,
    DR: DiningLocationRepository + Send + Sync + 'static,
{
    Router::new()
        // Persons
        .route(
            "/person",
            get(persons::list::<PR, AR, MR, DR>).post(persons::create::<PR, AR, MR, DR>),
        )
        .route(
            "/person/{id}",
            get(persons::get::<PR, AR, MR, DR>)
                .put(persons::update::<PR, AR, MR, DR>)
                .delete(persons::delete::<PR, AR, MR, DR>),
        )
        // Addresses
        .route(
            "/address",
            get(addresses::list::<PR, AR, MR, DR>).post(addresses::create::<PR, AR, MR, DR>),
        )
        .route(
            "/address/{id}",
            get(addresses::get::<PR, AR, MR, DR>)
                .put(addresses::update::<PR, AR, MR, DR>)
                .delete(addresses::delete::<PR, AR, MR, DR>),
        )
        // Meal plans
        .route(
            "/meal-plan",
            get(meal_plans::list::<PR, AR, MR, DR>).post(meal_plans::create::<PR, AR, MR, DR>),
        )
        .route(
            "/meal-plan/{id}",
            get(meal_plans::get::<PR, AR, MR, DR>)
                .put(meal_plans::update::<PR, AR, MR, DR>)
                .delete(meal_plans::delete::<PR, AR, MR, DR>),
        )
        // Dining locations
        .route(
            "/dining-location",
            get(dining_locations::list::<PR, AR, MR, DR>)
                .post(dining_locations::create::<PR, AR, MR, DR>),
        )
        .route(
            "/dining-location/{id}",
            get(dining_locations::get::<PR, AR, MR, DR>)
                .put(dining_locations::update::<PR, AR, MR, DR>)
                .delete(dining_locations::delete::<PR, AR, MR, DR>),
        )
}
