//! HTTP facade for colorpedia.
//!
//! Thin glue over [`colorpedia_core`]: JSON request parsing, route wiring,
//! CORS, tracing, and the request-boundary error envelope.

pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod state;

pub use app::create_app;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use state::AppState;
