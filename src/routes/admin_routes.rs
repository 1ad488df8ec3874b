//! Admin panel surface: its own auth microservice plus the dashboard reads
//! (global request list, per-state counts) and notification broadcasts.

use axum::{
    extract::State,
    middleware,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::auth_controller::AuthController;
use crate::controllers::notification_controller::NotificationController;
use crate::controllers::request_controller::RequestController;
use crate::dto::auth_dto::{AdminAuthResponse, LoginRequest, RegisterAdminRequest};
use crate::dto::common::ApiResponse;
use crate::dto::notification_dto::{CreateNotificationRequest, NotificationResponse};
use crate::dto::request_dto::RequestResponse;
use crate::middleware::auth::admin_auth_middleware;
use crate::services::request_directory::StateCounts;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_admin_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register_admin))
        .route("/auth/login", post(login_admin))
        .merge(
            Router::new()
                .route("/requests", get(list_all_requests))
                .route("/requests/counts", get(request_counts))
                .route("/notifications", post(broadcast_notification))
                .route("/notifications", get(list_all_notifications))
                .route_layer(middleware::from_fn_with_state(state, admin_auth_middleware)),
        )
}

fn auth_controller(state: &AppState) -> AuthController {
    AuthController::new(
        state.pool.clone(),
        &state.config.jwt_secret,
        state.config.jwt_expiration_hours,
    )
}

async fn register_admin(
    State(state): State<AppState>,
    Json(request): Json<RegisterAdminRequest>,
) -> Result<Json<AdminAuthResponse>, AppError> {
    let response = auth_controller(&state).register_admin(request).await?;
    Ok(Json(response))
}

async fn login_admin(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AdminAuthResponse>, AppError> {
    let response = auth_controller(&state).login_admin(request).await?;
    Ok(Json(response))
}

async fn list_all_requests(
    State(state): State<AppState>,
) -> Result<Json<Vec<RequestResponse>>, AppError> {
    let controller = RequestController::new(state.pool.clone());
    let response = controller.list_all().await?;
    Ok(Json(response))
}

async fn request_counts(State(state): State<AppState>) -> Result<Json<StateCounts>, AppError> {
    let controller = RequestController::new(state.pool.clone());
    let response = controller.counts().await?;
    Ok(Json(response))
}

async fn broadcast_notification(
    State(state): State<AppState>,
    Json(request): Json<CreateNotificationRequest>,
) -> Result<Json<ApiResponse<NotificationResponse>>, AppError> {
    let controller = NotificationController::new(state.pool.clone());
    let response = controller.broadcast(request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Notification broadcast".to_string(),
    )))
}

async fn list_all_notifications(
    State(state): State<AppState>,
) -> Result<Json<Vec<NotificationResponse>>, AppError> {
    let controller = NotificationController::new(state.pool.clone());
    let response = controller.list_all().await?;
    Ok(Json(response))
}
