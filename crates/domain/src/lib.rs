//! # dinehub-domain
//!
//! Pure domain model for the dinehub campus dining service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Persons** (people who hold meal plans and addresses)
//! - Define **Addresses** (postal addresses)
//! - Define **Meal Plans** (purchasable dining plans with a cost and an
//!   optional validity window)
//! - Define **Dining Locations** (places to eat, with a seating capacity)
//! - Contain all invariant enforcement and record-level validation
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod address;
pub mod dining_location;
pub mod meal_plan;
pub mod person;
