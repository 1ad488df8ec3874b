use axum::{
    extract::{Path, Query, State},
    middleware,
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::request_controller::RequestController;
use crate::dto::common::ApiResponse;
use crate::dto::request_dto::{
    CreateRequestRequest, MechanicJobsFilter, QuickCreateRequest, RequestResponse,
    UpdateRequestRequest,
};
use crate::middleware::auth::{auth_middleware, AuthenticatedAccount};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_request_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(create_request))
        .route("/quick", post(quick_create_request))
        .route("/mine", get(list_my_requests))
        .route("/pool", get(pending_pool))
        .route("/jobs", get(mechanic_jobs))
        .route("/:id", get(get_request))
        .route("/:id", put(update_request))
        .route("/:id", delete(cancel_request))
        .route("/:id/accept", post(accept_request))
        .route("/:id/reject", post(reject_request))
        .route("/:id/complete", post(complete_request))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn create_request(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedAccount>,
    Json(request): Json<CreateRequestRequest>,
) -> Result<Json<ApiResponse<RequestResponse>>, AppError> {
    let controller = RequestController::new(state.pool.clone());
    let response = controller.create(actor, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Service request created".to_string(),
    )))
}

async fn quick_create_request(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedAccount>,
    Json(request): Json<QuickCreateRequest>,
) -> Result<Json<ApiResponse<RequestResponse>>, AppError> {
    let controller = RequestController::new(state.pool.clone());
    let response = controller.quick_create(actor, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Service request created".to_string(),
    )))
}

async fn list_my_requests(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedAccount>,
) -> Result<Json<Vec<RequestResponse>>, AppError> {
    let controller = RequestController::new(state.pool.clone());
    let response = controller.list_mine(actor).await?;
    Ok(Json(response))
}

async fn pending_pool(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedAccount>,
) -> Result<Json<Vec<RequestResponse>>, AppError> {
    let controller = RequestController::new(state.pool.clone());
    let response = controller.pending_pool(actor).await?;
    Ok(Json(response))
}

async fn mechanic_jobs(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedAccount>,
    Query(filter): Query<MechanicJobsFilter>,
) -> Result<Json<Vec<RequestResponse>>, AppError> {
    let controller = RequestController::new(state.pool.clone());
    let response = controller.mechanic_jobs(actor, filter.status).await?;
    Ok(Json(response))
}

async fn get_request(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedAccount>,
    Path(id): Path<Uuid>,
) -> Result<Json<RequestResponse>, AppError> {
    let controller = RequestController::new(state.pool.clone());
    let response = controller.get(actor, id).await?;
    Ok(Json(response))
}

async fn update_request(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedAccount>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateRequestRequest>,
) -> Result<Json<ApiResponse<RequestResponse>>, AppError> {
    let controller = RequestController::new(state.pool.clone());
    let response = controller.update(actor, id, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Service request updated".to_string(),
    )))
}

async fn cancel_request(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedAccount>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = RequestController::new(state.pool.clone());
    controller.cancel(actor, id).await?;
    Ok(Json(ApiResponse::message_only(
        "Service request cancelled".to_string(),
    )))
}

async fn accept_request(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedAccount>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<RequestResponse>>, AppError> {
    let controller = RequestController::new(state.pool.clone());
    let response = controller.accept(actor, id).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Request accepted".to_string(),
    )))
}

async fn reject_request(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedAccount>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<RequestResponse>>, AppError> {
    let controller = RequestController::new(state.pool.clone());
    let response = controller.reject(actor, id).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Request rejected".to_string(),
    )))
}

async fn complete_request(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedAccount>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<RequestResponse>>, AppError> {
    let controller = RequestController::new(state.pool.clone());
    let response = controller.complete(actor, id).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Request completed".to_string(),
    )))
}
