//! Web layer for the route optimizer.
//!
//! Provides JSON endpoints for the network, route search and felt-time
//! scoring.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
