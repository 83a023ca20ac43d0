//! Notewise server — HTTP surface over the notes analysis pipeline.

pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
