//! HTTP request handlers for the Faculty Qualification Evaluation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::evaluation::{build_timeline, evaluate_faculty};
use crate::models::{Activity, Contribution, EvaluationWindow, ExemptionGrant, FacultyProfile};

use super::request::{EvaluationRequest, TimelineRequest};
use super::response::{ApiError, ApiErrorResponse, EvaluationResponse, TimelineResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/evaluate", post(evaluate_handler))
        .route("/timeline", post(timeline_handler))
        .with_state(state)
}

/// Converts a JSON extraction rejection into an API error body.
fn rejection_to_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for POST /evaluate endpoint.
///
/// Accepts a faculty snapshot and returns the qualification verdict for
/// one window, with a full audit trace.
async fn evaluate_handler(
    State(state): State<AppState>,
    payload: Result<Json<EvaluationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing evaluation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(rejection, correlation_id);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Convert request types to domain types
    let profile: FacultyProfile = request.faculty.into();
    let grants: Vec<ExemptionGrant> = request.exemption_grants.into_iter().map(Into::into).collect();
    let contributions: Vec<Contribution> =
        request.contributions.into_iter().map(Into::into).collect();
    let activities: Vec<Activity> = request.activities.into_iter().map(Into::into).collect();

    let config = state.policy().requirements();

    // Default to the canonical current window ending at the reference year
    let window: EvaluationWindow = match request.window {
        Some(w) => w.into(),
        None => EvaluationWindow {
            year_from: request.reference_year - (config.window.window_years as i32 - 1),
            year_to: request.reference_year,
        },
    };

    match evaluate_faculty(
        &profile,
        &grants,
        &contributions,
        &activities,
        window,
        request.reference_year,
        config,
    ) {
        Ok(evaluation) => {
            info!(
                correlation_id = %correlation_id,
                faculty_id = %profile.id,
                status = ?evaluation.outcome.status,
                duration_us = evaluation.audit_trace.duration_us,
                "Evaluation completed successfully"
            );
            let response = EvaluationResponse {
                evaluation_id: Uuid::new_v4(),
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                faculty_id: profile.id,
                reference_year: request.reference_year,
                window: evaluation.window,
                counts: evaluation.counts,
                outcome: evaluation.outcome,
                audit_trace: evaluation.audit_trace,
            };
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Evaluation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for POST /timeline endpoint.
///
/// Accepts a faculty snapshot and returns the qualification status projected
/// across every rolling window, including future at-risk periods.
async fn timeline_handler(
    State(state): State<AppState>,
    payload: Result<Json<TimelineRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing timeline request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(rejection, correlation_id);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let profile: FacultyProfile = request.faculty.into();
    let grants: Vec<ExemptionGrant> = request.exemption_grants.into_iter().map(Into::into).collect();
    let contributions: Vec<Contribution> =
        request.contributions.into_iter().map(Into::into).collect();
    let activities: Vec<Activity> = request.activities.into_iter().map(Into::into).collect();

    let config = state.policy().requirements();

    match build_timeline(
        &profile,
        &grants,
        &contributions,
        &activities,
        request.reference_year,
        config,
    ) {
        Ok(timeline) => {
            info!(
                correlation_id = %correlation_id,
                faculty_id = %profile.id,
                windows = timeline.windows.len(),
                at_risk = timeline.at_risk,
                "Timeline projection completed successfully"
            );
            let response = TimelineResponse {
                evaluation_id: Uuid::new_v4(),
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                faculty_id: profile.id,
                timeline,
            };
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Timeline projection failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}
