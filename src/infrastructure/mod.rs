//! Infrastructure layer: storage backends for the domain's
//! [`UrlRepository`](crate::domain::repositories::UrlRepository).
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL and in-memory repositories

pub mod persistence;
