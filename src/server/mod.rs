//! HTTP admission API
//!
//! Thin actix-web surface over the admission controller: a check endpoint,
//! usage recording, budget inspection, and a rate-limiting middleware for
//! the gateway's own routes.

pub mod builder;
pub mod middleware;
pub mod routes;
pub mod state;

pub use builder::run_server;
pub use state::AppState;
