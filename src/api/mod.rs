//! HTTP API module for the Bill Settlement Engine.
//!
//! This module provides the REST API endpoint for computing a bill
//! breakdown and settlement plan from a full input snapshot.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::SettleRequest;
pub use response::ApiError;
pub use state::AppState;
