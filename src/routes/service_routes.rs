use axum::{
    extract::{Path, State},
    middleware,
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::mechanic_service_controller::MechanicServiceController;
use crate::dto::common::ApiResponse;
use crate::dto::service_dto::{CreateServiceRequest, ServiceResponse, UpdateServiceRequest};
use crate::middleware::auth::{auth_middleware, AuthenticatedAccount};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_service_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(create_service))
        .route("/", get(list_services))
        .route("/mine", get(list_my_services))
        .route("/:id", get(get_service))
        .route("/:id", put(update_service))
        .route("/:id", delete(delete_service))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn create_service(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedAccount>,
    Json(request): Json<CreateServiceRequest>,
) -> Result<Json<ApiResponse<ServiceResponse>>, AppError> {
    let controller = MechanicServiceController::new(state.pool.clone());
    let response = controller.create(actor, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Service published".to_string(),
    )))
}

async fn list_services(
    State(state): State<AppState>,
) -> Result<Json<Vec<ServiceResponse>>, AppError> {
    let controller = MechanicServiceController::new(state.pool.clone());
    let response = controller.list_all().await?;
    Ok(Json(response))
}

async fn list_my_services(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedAccount>,
) -> Result<Json<Vec<ServiceResponse>>, AppError> {
    let controller = MechanicServiceController::new(state.pool.clone());
    let response = controller.list_mine(actor).await?;
    Ok(Json(response))
}

async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ServiceResponse>, AppError> {
    let controller = MechanicServiceController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_service(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedAccount>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateServiceRequest>,
) -> Result<Json<ApiResponse<ServiceResponse>>, AppError> {
    let controller = MechanicServiceController::new(state.pool.clone());
    let response = controller.update(actor, id, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Service updated".to_string(),
    )))
}

async fn delete_service(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedAccount>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = MechanicServiceController::new(state.pool.clone());
    controller.delete(actor, id).await?;
    Ok(Json(ApiResponse::message_only("Service deleted".to_string())))
}
