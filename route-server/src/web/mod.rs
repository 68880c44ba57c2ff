//! Web layer: HTTP routes, request/response DTOs, and shared state.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
