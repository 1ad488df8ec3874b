use axum::{extract::State, middleware, routing::get, Extension, Json, Router};

use crate::controllers::notification_controller::NotificationController;
use crate::dto::notification_dto::NotificationResponse;
use crate::middleware::auth::{auth_middleware, AuthenticatedAccount};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_notification_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_notifications))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn list_notifications(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedAccount>,
) -> Result<Json<Vec<NotificationResponse>>, AppError> {
    let controller = NotificationController::new(state.pool.clone());
    let response = controller.list_for_me(actor).await?;
    Ok(Json(response))
}
