//! JSON REST handlers for addresses.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use dinehub_app::ports::{
    AddressRepository, DiningLocationRepository, MealPlanRepository, PersonRepository,
};
use dinehub_domain::address::{Address, AddressPatch};
use dinehub_domain::id::AddressId;

use crate::api::parse_id;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating an address.
///
/// The identifier is optional; when omitted the server assigns one.
#[derive(Deserialize)]
pub struct CreateAddressRequest {
    pub id: Option<AddressId>,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

/// Request body for updating an address.
///
/// Partial update; the identifier is taken from the path, not the body.
#[derive(Deserialize)]
pub struct UpdateAddressRequest {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Address>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<Address>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Address>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /address`
pub async fn list<PR, AR, MR, DR>(
    State(state): State<AppState<PR, AR, MR, DR>>,
) -> Result<ListResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
    AR: AddressRepository + Send + Sync + 'static,
    MR: MealPlanRepository + Send + Sync + 'static,
    DR: DiningLocationRepository + Send + Sync + 'static,
{
    let addresses = state.address_service.list_addresses().await?;
    Ok(ListResponse::Ok(Json(addresses)))
}

/// `GET /address/:id`
pub async fn get<PR, AR, MR, DR>(
    State(state): State<AppState<PR, AR, MR, DR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
    AR: AddressRepository + Send + Sync + 'static,
    MR: MealPlanRepository + Send + Sync + 'static,
    DR: DiningLocationRepository + Send + Sync + 'static,
{
    let address_id: AddressId = parse_id(&id)?;
    let address = state.address_service.get_address(address_id).await?;
    Ok(GetResponse::Ok(Json(address)))
}

/// `POST /address`
pub async fn create<PR, AR, MR, DR>(
    State(state): State<AppState<PR, AR, MR, DR>>,
    Json(req): Json<CreateAddressRequest>,
) -> Result<CreateResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
    AR: AddressRepository + Send + Sync + 'static,
    MR: MealPlanRepository + Send + Sync + 'static,
    DR: DiningLocationRepository + Send + Sync + 'static,
{
    let mut builder = Address::builder()
        .street(req.street)
        .city(req.city)
        .state(req.state)
        .postal_code(req.postal_code);
    if let Some(id) = req.id {
        builder = builder.id(id);
    }

    let address = builder.build()?;
    let created = state.address_service.create_address(address).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /address/:id`
pub async fn update<PR, AR, MR, DR>(
    State(state): State<AppState<PR, AR, MR, DR>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateAddressRequest>,
) -> Result<GetResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
    AR: AddressRepository + Send + Sync + 'static,
    MR: MealPlanRepository + Send + Sync + 'static,
    DR: DiningLocationRepository + Send + Sync + 'static,
{
    let address_id: AddressId = parse_id(&id)?;
    let patch = AddressPatch {
        street: req.street,
        city: req.city,
        state: req.state,
        postal_code: req.postal_code,
    };
    let updated = state
        .address_service
        .update_address(address_id, patch)
        .await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /address/:id`
pub async fn delete<PR, AR, MR, DR>(
    State(state): State<AppState<PR, AR, MR, DR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
    AR: AddressRepository + Send + Sync + 'static,
    MR: MealPlanRepository + Send + Sync + 'static,
    DR: DiningLocationRepository + Send + Sync + 'static,
{
    let address_id: AddressId = parse_id(&id)?;
    state.address_service.delete_address(address_id).await?;
    Ok(DeleteResponse::NoContent)
}
