//! HTTP API module for the shift pricing engine.
//!
//! This module provides the REST endpoints posting and cancellation
//! flows call to obtain rate quotes, schedule validation, shift pricing
//! and cancellation penalties.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CancellationRequest, RateQuoteRequest, ScheduleValidationRequest, ShiftCalculationRequest,
};
pub use response::{ApiError, RateQuoteResponse};
pub use state::AppState;
