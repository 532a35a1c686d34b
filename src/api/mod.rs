//! REST API layer for HTTP request/response handling.
//!
//! Translates HTTP requests into validated commands and service calls, and
//! formats the results as JSON.
//!
//! # Modules
//!
//! - [`dto`] - Response bodies
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
