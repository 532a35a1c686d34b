//! Application layer: validated commands and the services that act on them.
//!
//! Handlers turn raw input into a command from [`commands`], then call a
//! service from [`services`]. Services consume repository traits only.
//!
//! - [`commands::CreateUrlCommand`] / [`commands::ListTopQuery`] - validated request values
//! - [`services::url_service::UrlService`] - alias creation, resolution and ranking

pub mod commands;
pub mod services;
