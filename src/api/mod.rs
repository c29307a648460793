//! HTTP API module for the Faculty Qualification Evaluation Engine.
//!
//! This module provides the REST API endpoints for evaluating a faculty
//! member's qualification status and projecting it across rolling windows.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EvaluationRequest, TimelineRequest};
pub use response::{ApiError, EvaluationResponse, TimelineResponse};
pub use state::AppState;
