//! JSON REST handlers for persons.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use dinehub_app::ports::{
    AddressRepository, DiningLocationRepository, MealPlanRepository, PersonRepository,
};
use dinehub_domain::id::PersonId;
use dinehub_domain::person::{Person, PersonPatch};

use crate::api::parse_id;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a person.
///
/// The identifier is optional; when omitted the server assigns one.
#[derive(Deserialize)]
pub struct CreatePersonRequest {
    pub id: Option<PersonId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
}

/// Request body for updating a person.
///
/// Partial update; the identifier is taken from the path, not the body.
#[derive(Deserialize)]
pub struct UpdatePersonRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Person>>),
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
    Ok(Json<Person>),
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
    Created(Json<Person>),
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

/// `GET /person`
pub async fn list<PR, AR, MR, DR>(
    State(state): State<AppState<PR, AR, MR, DR>>,
) -> Result<ListResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
    AR: AddressRepository + Send + Sync + 'static,
    MR: MealPlanRepository + Send + Sync + 'static,
    DR: DiningLocationRepository + Send + Sync + 'static,
{
    let persons = state.person_service.list_persons().await?;
    Ok(ListResponse::Ok(Json(persons)))
}

/// `GET /person/:id`
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
    let person_id: PersonId = parse_id(&id)?;
    let person = state.person_service.get_person(person_id).await?;
    Ok(GetResponse::Ok(Json(person)))
}

/// `POST /person`
pub async fn create<PR, AR, MR, DR>(
    State(state): State<AppState<PR, AR, MR, DR>>,
    Json(req): Json<CreatePersonRequest>,
) -> Result<CreateResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
    AR: AddressRepository + Send + Sync + 'static,
    MR: MealPlanRepository + Send + Sync + 'static,
    DR: DiningLocationRepository + Send + Sync + 'static,
{
    let mut builder = Person::builder()
        .first_name(req.first_name)
        .last_name(req.last_name)
        .email(req.email);
    if let Some(id) = req.id {
        builder = builder.id(id);
    }
    if let Some(phone) = req.phone {
        builder = builder.phone(phone);
    }

    let person = builder.build()?;
    let created = state.person_service.create_person(person).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /person/:id`
pub async fn update<PR, AR, MR, DR>(
    State(state): State<AppState<PR, AR, MR, DR>>,
    Path(id): Path<String>,
    Json(req): Json<UpdatePersonRequest>,
) -> Result<GetResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
    AR: AddressRepository + Send + Sync + 'static,
    MR: MealPlanRepository + Send + Sync + 'static,
    DR: DiningLocationRepository + Send + Sync + 'static,
{
    let person_id: PersonId = parse_id(&id)?;
    let patch = PersonPatch {
        first_name: req.first_name,
        last_name: req.last_name,
        email: req.email,
        phone: req.phone,
    };
    let updated = state.person_service.update_person(person_id, patch).await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /person/:id`
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
    let person_id: PersonId = parse_id(&id)?;
    state.person_service.delete_person(person_id).await?;
    Ok(DeleteResponse::NoContent)
}
