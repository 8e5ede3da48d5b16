//! Application services — use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod address_service;
pub mod dining_location_service;
pub mod meal_plan_service;
pub mod person_service;
