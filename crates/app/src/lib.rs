//! # dinehub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `PersonRepository` — CRUD for persons
//!   - `AddressRepository` — CRUD for addresses
//!   - `MealPlanRepository` — CRUD for meal plans
//!   - `DiningLocationRepository` — CRUD for dining locations
//! - Define **driving/inbound ports** as use-case structs:
//!   - `PersonService`, `AddressService`, `MealPlanService`,
//!     `DiningLocationService` — create, get, list, update, delete
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `dinehub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
