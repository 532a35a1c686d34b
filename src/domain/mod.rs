//! Domain layer containing business entities and storage contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Storage trait definitions
//! - [`access_event`] - Access counting event model
//! - [`access_worker`] - Asynchronous access counting worker
//!
//! # Access Counting Flow
//!
//! 1. Redirect handler resolves an alias
//! 2. [`access_event::AccessEvent`] is sent to an async channel
//! 3. [`access_worker::run_access_worker`] applies the increment
//! 4. The counter is updated atomically via [`repositories::UrlRepository`]

pub mod access_event;
pub mod access_worker;
pub mod entities;
pub mod repositories;
