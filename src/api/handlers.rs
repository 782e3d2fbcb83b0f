//! HTTP request handlers for the compensation engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{RawQuery, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_breakdowns, compute_yearly_series};
use crate::codec::decode_params;
use crate::models::Params;

use super::request::{BreakdownRequest, SeriesRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/breakdowns", post(breakdowns_handler))
        .route("/series", post(series_handler))
        .route("/params", get(params_handler))
        .with_state(state)
}

/// Maps a JSON extraction rejection to an error response.
fn rejection_to_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
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

/// Handler for POST /breakdowns.
///
/// Accepts computation parameters and a year, and returns the four scenario
/// breakdowns for that year.
async fn breakdowns_handler(
    State(state): State<AppState>,
    payload: Result<Json<BreakdownRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing breakdowns request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let params: Params = match request.params.try_into() {
        Ok(params) => params,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Invalid computation parameters"
            );
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    };

    match compute_breakdowns(&params, state.config().schedule(), request.year) {
        Ok(breakdowns) => {
            info!(
                correlation_id = %correlation_id,
                year = request.year,
                scenarios = breakdowns.len(),
                "Breakdowns computed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(breakdowns),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Breakdown computation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for POST /series.
///
/// Accepts computation parameters and returns the per-year scenario totals
/// across the vesting horizon.
async fn series_handler(
    State(state): State<AppState>,
    payload: Result<Json<SeriesRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing series request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let params: Params = match request.params.try_into() {
        Ok(params) => params,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Invalid computation parameters"
            );
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    };

    let series = compute_yearly_series(&params, state.config().schedule());
    info!(
        correlation_id = %correlation_id,
        horizon = series.len(),
        "Series computed successfully"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(series),
    )
        .into_response()
}

/// Handler for GET /params.
///
/// Decodes a shareable query string into a resolved parameter set, applying
/// the documented defaults for absent or malformed fields. Decoding never
/// fails.
async fn params_handler(RawQuery(query): RawQuery) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let params = decode_params(query.as_deref().unwrap_or(""));
    info!(correlation_id = %correlation_id, "Decoded shared parameters");

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(params),
    )
        .into_response()
}
