//! Response types for the Faculty Qualification Evaluation Engine API.
//!
//! This module defines the success envelopes and the error response
//! structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{
    ActualCounts, AuditTrace, EvaluationWindow, RequirementOutcome, TimelineResult,
};

/// Response body for the `/evaluate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationResponse {
    /// Unique identifier for this evaluation run.
    pub evaluation_id: Uuid,
    /// When the evaluation was performed.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the result.
    pub engine_version: String,
    /// The faculty member that was evaluated.
    pub faculty_id: String,
    /// The reference year the evaluation was anchored to.
    pub reference_year: i32,
    /// The window the evaluation covered.
    pub window: EvaluationWindow,
    /// Actual record counts inside the window.
    pub counts: ActualCounts,
    /// The requirement verdict.
    pub outcome: RequirementOutcome,
    /// Every decision made along the way, for accreditation reviewers.
    pub audit_trace: AuditTrace,
}

/// Response body for the `/timeline` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineResponse {
    /// Unique identifier for this evaluation run.
    pub evaluation_id: Uuid,
    /// When the projection was performed.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the result.
    pub engine_version: String,
    /// The faculty member that was projected.
    pub faculty_id: String,
    /// The rolling-window projection.
    pub timeline: TimelineResult,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a category not configured error response.
    pub fn category_not_configured(category: &str) -> Self {
        Self::with_details(
            "CATEGORY_NOT_CONFIGURED",
            format!("Category not configured: {}", category),
            format!(
                "The faculty category '{}' has no requirements entry in the loaded standard",
                category
            ),
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::CategoryNotConfigured { category } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::category_not_configured(&category),
            },
            EngineError::InvalidWindow { year_from, year_to } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_WINDOW",
                    format!("Invalid evaluation window: {} to {}", year_from, year_to),
                    "The window's first year must not be after its last year",
                ),
            },
        }
    }
}
