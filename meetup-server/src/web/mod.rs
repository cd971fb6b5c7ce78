//! Web layer for the meetup planner.
//!
//! Serves the participant form and results pages, plus a JSON API for the
//! same recommendation.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
