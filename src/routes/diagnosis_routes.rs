//! Fault-estimator endpoint
//!
//! Stateless and unauthenticated: the questionnaire flow in the apps calls
//! it before (or instead of) opening a request. The result is advisory.

use axum::{routing::post, Json, Router};

use crate::services::fault_estimator::{self, Diagnosis, SymptomInput};
use crate::state::AppState;

pub fn create_diagnosis_router() -> Router<AppState> {
    Router::new().route("/", post(diagnose))
}

async fn diagnose(Json(input): Json<SymptomInput>) -> Json<Diagnosis> {
    Json(fault_estimator::diagnose(&input))
}
