//! Core domain entities.
//!
//! Entities are plain data structures. Creation input is a separate type
//! ([`NewUrlRecord`]) so the access counter can only ever start at zero.

pub mod url_record;

pub use url_record::{NewUrlRecord, RankedUrls, UrlRecord};
