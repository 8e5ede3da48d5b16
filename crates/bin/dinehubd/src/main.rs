//! # dinehubd — dinehub daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (TOML file, env var overrides)
//! - Initialize the `tracing` subscriber
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve until a shutdown signal arrives
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

use dinehub_adapter_http_axum::router;
use dinehub_adapter_http_axum::state::AppState;
use dinehub_adapter_storage_memory::{
    InMemoryAddressRepository, InMemoryDiningLocationRepository, InMemoryMealPlanRepository,
    InMemoryPersonRepository,
};
use dinehub_app::services::address_service::AddressService;
use dinehub_app::services::dining_location_service::DiningLocationService;
use dinehub_app::services::meal_plan_service::MealPlanService;
use dinehub_app::services::person_service::PersonService;
use tracing_subscriber::EnvFilter;

mod config;

use config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Repositories
    let person_repo = InMemoryPersonRepository::new();
    let address_repo = InMemoryAddressRepository::new();
    let meal_plan_repo = InMemoryMealPlanRepository::new();
    let dining_location_repo = InMemoryDiningLocationRepository::new();

    // Services
    let person_service = PersonService::new(person_repo);
    let address_service = AddressService::new(address_repo);
    let meal_plan_service = MealPlanService::new(meal_plan_repo);
    let dining_location_service = DiningLocationService::new(dining_location_repo);

    // HTTP
    let state = AppState::new(
        person_service,
        address_service,
        meal_plan_service,
        dining_location_service,
    );
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, "dinehubd listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(err) => tracing::error!(error = %err, "failed to install shutdown handler"),
    }
}
