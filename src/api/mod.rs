//! HTTP API module for the compensation engine.
//!
//! This module provides the REST API endpoints for computing scenario
//! breakdowns, yearly series, and for decoding shareable parameter links.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BreakdownRequest, GrantRequest, ParamsRequest, SeriesRequest};
pub use response::ApiError;
pub use state::AppState;
