//! HTTP request handlers for the shift pricing API.
//!
//! This module contains the handler functions for all API endpoints.
//! Handlers only translate between JSON and the calculation functions.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Local;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_rate, calculate_validated_shift, days_ahead, format_rate, parse_local_date,
    quote_cancellation, validate_schedule,
};

use super::request::{
    CancellationRequest, RateQuoteRequest, ScheduleValidationRequest, ShiftCalculationRequest,
};
use super::response::{ApiError, ApiErrorResponse, RateQuoteResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/rates/quote", post(rate_quote_handler))
        .route("/schedules/validate", post(validate_schedule_handler))
        .route("/shifts/calculate", post(calculate_shift_handler))
        .route("/cancellations/quote", post(cancellation_quote_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (status, Json(body)).into_response()
}

/// Unwraps a JSON body or builds the 400 response for it.
fn read_body<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, Response> {
    let rejection = match payload {
        Ok(Json(body)) => return Ok(body),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
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
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    Err(ApiErrorResponse::bad_request(error).into_response())
}

/// Handler for POST /rates/quote.
async fn rate_quote_handler(
    State(state): State<AppState>,
    payload: Result<Json<RateQuoteRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing rate quote request");

    let request = match read_body(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let days = match (request.days_ahead, request.shift_date.as_deref()) {
        (Some(days), _) => days,
        (None, Some(shift_date)) => match parse_local_date(shift_date) {
            Some(date) => {
                let today = request.today.unwrap_or_else(|| Local::now().date_naive());
                days_ahead(date, today)
            }
            None => {
                warn!(
                    correlation_id = %correlation_id,
                    shift_date = %shift_date,
                    "Unparseable shift date"
                );
                return ApiErrorResponse::bad_request(ApiError::validation_error(
                    "shift_date must be in YYYY-MM-DD format",
                ))
                .into_response();
            }
        },
        (None, None) => {
            return ApiErrorResponse::bad_request(ApiError::validation_error(
                "days_ahead or shift_date is required",
            ))
            .into_response();
        }
    };

    let quote = calculate_rate(days, state.config().rates());
    info!(
        correlation_id = %correlation_id,
        days_ahead = days,
        rate = %quote.rate,
        urgency = %quote.urgency,
        "Rate quoted"
    );

    json_response(
        StatusCode::OK,
        RateQuoteResponse {
            rate: quote.rate,
            urgency: quote.urgency,
            days_ahead: days,
            label: format_rate(&quote),
        },
    )
}

/// Handler for POST /schedules/validate.
///
/// Always answers 200; the report says whether the schedule is valid.
async fn validate_schedule_handler(
    State(state): State<AppState>,
    payload: Result<Json<ScheduleValidationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match read_body(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let report = validate_schedule(&request.schedule, state.config().validation_mode());
    info!(
        correlation_id = %correlation_id,
        entries = request.schedule.len(),
        valid = report.valid,
        error_count = report.errors.len(),
        "Schedule validated"
    );

    json_response(StatusCode::OK, report)
}

/// Handler for POST /shifts/calculate.
async fn calculate_shift_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShiftCalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing shift calculation request");

    let request = match read_body(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let today = request.today.unwrap_or_else(|| Local::now().date_naive());
    let start_time = Instant::now();

    match calculate_validated_shift(&request.schedule, today, state.config()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                entries = request.schedule.len(),
                pricing_tier = ?result.pricing_tier,
                hourly_rate = %result.hourly_rate,
                total_hours = %result.total_hours,
                total_pay = %result.total_pay,
                warnings = result.audit_trace.warnings.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Shift calculation completed"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Shift calculation rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /cancellations/quote.
async fn cancellation_quote_handler(
    State(state): State<AppState>,
    payload: Result<Json<CancellationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing cancellation quote request");

    let request = match read_body(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let now = request.now.unwrap_or_else(|| Local::now().naive_local());

    match quote_cancellation(
        &request.shift_date,
        &request.start_time,
        now,
        state.config().penalties(),
    ) {
        Ok(quote) => {
            info!(
                correlation_id = %correlation_id,
                hours_until_shift = quote.hours_until_shift,
                penalty_amount = %quote.penalty.penalty_amount,
                penalty_level = %quote.penalty.penalty_level,
                "Cancellation penalty quoted"
            );
            json_response(StatusCode::OK, quote)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Cancellation quote rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}
