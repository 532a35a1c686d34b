//! Helpers shared across layers.
//!
//! - [`alias_generator`] - Random alias generation

pub mod alias_generator;
