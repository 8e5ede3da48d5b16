//! JSON REST handlers for meal plans.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use dinehub_app::ports::{
    AddressRepository, DiningLocationRepository, MealPlanRepository, PersonRepository,
};
use dinehub_domain::id::MealPlanId;
use dinehub_domain::meal_plan::{MealPlan, MealPlanPatch};
use dinehub_domain::time::Timestamp;

use crate::api::parse_id;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a meal plan.
///
/// The identifier is optional; when omitted the server assigns one.
#[derive(Deserialize)]
pub struct CreateMealPlanRequest {
    pub id: Option<MealPlanId>,
    pub name: String,
    #[serde(rename = "type")]
    pub plan_type: String,
    pub cost: f64,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
}

/// Request body for updating a meal plan.
///
/// Partial update; the identifier is taken from the path, not the body.
#[derive(Deserialize)]
pub struct UpdateMealPlanRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub plan_type: Option<String>,
    pub cost: Option<f64>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<MealPlan>>),
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
    Ok(Json<MealPlan>),
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
    Created(Json<MealPlan>),
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

/// `GET /meal-plan`
pub async fn list<PR, AR, MR, DR>(
    State(state): State<AppState<PR, AR, MR, DR>>,
) -> Result<ListResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
    AR: AddressRepository + Send + Sync + 'static,
    MR: MealPlanRepository + Send + Sync + 'static,
    DR: DiningLocationRepository + Send + Sync + 'static,
{
    let plans = state.meal_plan_service.list_meal_plans().await?;
    Ok(ListResponse::Ok(Json(plans)))
}

/// `GET /meal-plan/:id`
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
    let plan_id: MealPlanId = parse_id(&id)?;
    let plan = state.meal_plan_service.get_meal_plan(plan_id).await?;
    Ok(GetResponse::Ok(Json(plan)))
}

/// `POST /meal-plan`
pub async fn create<PR, AR, MR, DR>(
    State(state): State<AppState<PR, AR, MR, DR>>,
    Json(req): Json<CreateMealPlanRequest>,
) -> Result<CreateResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
    AR: AddressRepository + Send + Sync + 'static,
    MR: MealPlanRepository + Send + Sync + 'static,
    DR: DiningLocationRepository + Send + Sync + 'static,
{
    let mut builder = MealPlan::builder()
        .name(req.name)
        .plan_type(req.plan_type)
        .cost(req.cost);
    if let Some(id) = req.id {
        builder = builder.id(id);
    }
    if let Some(start_date) = req.start_date {
        builder = builder.start_date(start_date);
    }
    if let Some(end_date) = req.end_date {
        builder = builder.end_date(end_date);
    }

    let plan = builder.build()?;
    let created = state.meal_plan_service.create_meal_plan(plan).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /meal-plan/:id`
pub async fn update<PR, AR, MR, DR>(
    State(state): State<AppState<PR, AR, MR, DR>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateMealPlanRequest>,
) -> Result<GetResponse, ApiError>
where
    PR: PersonRepository + Send + Sync + 'static,
    AR: AddressRepository + Send + Sync + 'static,
    MR: MealPlanRepository + Send + Sync + 'static,
    DR: DiningLocationRepository + Send + Sync + 'static,
{
    let plan_id: MealPlanId = parse_id(&id)?;
    let patch = MealPlanPatch {
        name: req.name,
        plan_type: req.plan_type,
        cost: req.cost,
        start_date: req.start_date,
        end_date: req.end_date,
    };
    let updated = state
        .meal_plan_service
        .update_meal_plan(plan_id, patch)
        .await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /meal-plan/:id`
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
    let plan_id: MealPlanId = parse_id(&id)?;
    state.meal_plan_service.delete_meal_plan(plan_id).await?;
    Ok(DeleteResponse::NoContent)
}
