use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use roadside_assist::config::EnvironmentConfig;
use roadside_assist::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use roadside_assist::state::AppState;
use roadside_assist::{database, routes};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = EnvironmentConfig::default();

    // Configure logging
    tracing_subscriber::fmt()
        .with_max_level(if config.is_production() {
            tracing::Level::INFO
        } else {
            tracing::Level::DEBUG
        })
        .init();

    info!("🔧 Roadside Assist - Vehicle Service Marketplace API");
    info!("====================================================");

    let pool = match database::create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error connecting to the database: {}", e);
            return Err(anyhow::anyhow!("Database error: {}", e));
        }
    };

    let cors = if config.allows_any_origin() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(config.cors_origins.clone())
    };

    let app_state = AppState::new(pool, config.clone());

    let app = Router::new()
        .route("/test", get(test_endpoint))
        .nest("/api/auth", routes::auth_routes::create_auth_router(app_state.clone()))
        .nest("/api/vehicle", routes::vehicle_routes::create_vehicle_router(app_state.clone()))
        .nest("/api/service", routes::service_routes::create_service_router(app_state.clone()))
        .nest("/api/request", routes::request_routes::create_request_router(app_state.clone()))
        .nest(
            "/api/notification",
            routes::notification_routes::create_notification_router(app_state.clone()),
        )
        .nest("/api/diagnosis", routes::diagnosis_routes::create_diagnosis_router())
        .nest("/admin", routes::admin_routes::create_admin_router(app_state.clone()))
        .layer(cors)
        .with_state(app_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("🌐 Server starting on http://{}", addr);
    info!("🔍 Available endpoints:");
    info!("   GET  /test - Health check");
    info!("🔑 Auth:");
    info!("   POST /api/auth/register - Register customer/mechanic");
    info!("   POST /api/auth/login - Login");
    info!("   GET  /api/auth/me - Current account");
    info!("🚗 Vehicles:");
    info!("   POST /api/vehicle - Add vehicle");
    info!("   GET  /api/vehicle - List own vehicles");
    info!("   GET  /api/vehicle/:id - Get vehicle");
    info!("   PUT  /api/vehicle/:id - Update vehicle");
    info!("   DELETE /api/vehicle/:id - Delete vehicle");
    info!("🔩 Mechanic services:");
    info!("   POST /api/service - Publish service");
    info!("   GET  /api/service - Browse services");
    info!("   GET  /api/service/mine - Own services");
    info!("📋 Service requests:");
    info!("   POST /api/request - Create request");
    info!("   POST /api/request/quick - Quick request from a listing");
    info!("   GET  /api/request/mine - Own request history");
    info!("   GET  /api/request/pool - Pending pool (mechanics)");
    info!("   GET  /api/request/jobs - Assigned jobs (mechanics)");
    info!("   POST /api/request/:id/accept - Accept");
    info!("   POST /api/request/:id/reject - Reject");
    info!("   POST /api/request/:id/complete - Complete");
    info!("   DELETE /api/request/:id - Cancel (pending only)");
    info!("🩺 Diagnosis:");
    info!("   POST /api/diagnosis - Fault estimate");
    info!("🔔 Notifications:");
    info!("   GET  /api/notification - Broadcasts for my role");
    info!("🛠️ Admin:");
    info!("   POST /admin/auth/register - Register admin");
    info!("   POST /admin/auth/login - Admin login");
    info!("   GET  /admin/requests - All requests");
    info!("   GET  /admin/requests/counts - Dashboard counts");
    info!("   POST /admin/notifications - Broadcast notification");

    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Server error: {}", e);
                anyhow::Error::from(e)
            })
    });

    if let Err(e) = server_handle.await? {
        error!("❌ Server terminated with error: {}", e);
    }

    info!("👋 Server stopped");
    Ok(())
}

/// Simple health endpoint
async fn test_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Roadside Assist API running",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Graceful shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Ctrl+C received, shutting down...");
        },
        _ = terminate => {
            info!("🛑 Terminate signal received, shutting down...");
        },
    }
}
