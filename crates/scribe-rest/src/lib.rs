//! # Scribe REST
//!
//! REST API layer using Axum for the Scribe blog backend.
//! Provides HTTP endpoints for articles, tags, maintenance purges and health checks.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
