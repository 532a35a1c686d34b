//! Data Transfer Objects for API responses.
//!
//! Request input is not deserialized into DTOs directly; it goes through the
//! validation chain in [`crate::application::commands`] first.

pub mod health;
pub mod urls;
