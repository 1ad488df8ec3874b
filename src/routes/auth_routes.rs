use axum::{
    extract::State,
    middleware,
    routing::{get, post},
    Extension, Json, Router,
};

use crate::controllers::auth_controller::AuthController;
use crate::dto::auth_dto::{AccountResponse, AuthResponse, LoginRequest, RegisterAccountRequest};
use crate::middleware::auth::{auth_middleware, AuthenticatedAccount};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_auth_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .merge(
            Router::new()
                .route("/me", get(me))
                .route_layer(middleware::from_fn_with_state(state, auth_middleware)),
        )
}

fn controller(state: &AppState) -> AuthController {
    AuthController::new(
        state.pool.clone(),
        &state.config.jwt_secret,
        state.config.jwt_expiration_hours,
    )
}

async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterAccountRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let response = controller(&state).register(request).await?;
    Ok(Json(response))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let response = controller(&state).login(request).await?;
    Ok(Json(response))
}

async fn me(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthenticatedAccount>,
) -> Result<Json<AccountResponse>, AppError> {
    let response = controller(&state).me(actor).await?;
    Ok(Json(response))
}
