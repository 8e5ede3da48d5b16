//! JSON REST handlers for dining locations.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use dinehub_app::ports::{
    AddressRepository, DiningLocationRepository, MealPlanRepository, PersonRepository,
};
use dinehub_domain::dining_location::{DiningLocation, DiningLocationPatch};
use dinehub_domain::id::DiningLocationId;

use crate::api::parse_id;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a dining location.
///
/// The identifier is optional; when omitted the server assigns one.
#[derive(Deserialize)]
pub struct CreateDiningLocationRequest {
    pub id: Option<DiningLocationId>,
    pub name: String,
    pub capacity: u32,
}

/// Request body for updating a dining location.
///
/// Partial update; the identifier is taken from the path, not the body.
#[derive(Deserialize)]
pub struct UpdateDiningLocationRequest {
    pub name: Option<String>,
    pub capacity: Option<u32>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<DiningLocation>>),
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
    Ok(Json<DiningLocation>),
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
    Created(Json<DiningLocation>),
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

/// `GET /dining-location`
pub async fn list<PR, AR, MR, DR>(
    State(state): State<AppState<PR, AR, MR, DR>>,
) -> Result<ListResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
    AR: AddressRepository + Send + Sync + 'static,
    MR: MealPlanRepository + Send + Sync + 'static,
    DR: DiningLocationRepository + Send + Sync + 'static,
{
    let locations = state
        .dining_location_service
        .list_dining_locations()
        .await?;
    Ok(ListResponse::Ok(Json(locations)))
}

/// `GET /dining-location/:id`
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
    let location_id: DiningLocationId = parse_id(&id)?;
    let location = state
        .dining_location_service
        .get_dining_location(location_id)
        .await?;
    Ok(GetResponse::Ok(Json(location)))
}

/// `POST /dining-location`
pub async fn create<PR, AR, MR, DR>(
    State(state): State<AppState<PR, AR, MR, DR>>,
    Json(req): Json<CreateDiningLocationRequest>,
) -> Result<CreateResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
    AR: AddressRepository + Send + Sync + 'static,
    MR: MealPlanRepository + Send + Sync + 'static,
    DR: DiningLocationRepository + Send + Sync + 'static,
{
    let mut builder = DiningLocation::builder()
        .name(req.name)
        .capacity(req.capacity);
    if let Some(id) = req.id {
        builder = builder.id(id);
    }

    let location = builder.build()?;
    let created = state
        .dining_location_service
        .create_dining_location(location)
        .await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /dining-location/:id`
pub async fn update<PR, AR, MR, DR>(
    State(state): State<AppState<PR, AR, MR, DR>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateDiningLocationRequest>,
) -> Result<GetResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
    AR: AddressRepository + Send + Sync + 'static,
    MR: MealPlanRepository + Send + Sync + 'static,
    DR: DiningLocationRepository + Send + Sync + 'static,
{
    let location_id: DiningLocationId = parse_id(&id)?;
    let patch = DiningLocationPatch {
        name: req.name,
        capacity: req.capacity,
    };
    let updated = state
        .dining_location_service
        .update_dining_location(location_id, patch)
        .await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /dining-location/:id`
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
    let location_id: DiningLocationId = parse_id(&id)?;
    state
        .dining_location_service
        .delete_dining_location(location_id)
        .await?;
    Ok(DeleteResponse::NoContent)
}
