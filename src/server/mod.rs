//! HTTP server implementation
//!
//! This module provides the HTTP server, middleware and routing.

// Submodules
pub mod builder;
pub mod middleware;
pub mod routes;
pub mod state;

pub use state::AppState;
