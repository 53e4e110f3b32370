//! Domain logic for the Gazette article service.
//!
//! Pure types and functions with no I/O: identifier and timestamp aliases,
//! the shared error taxonomy, and the article field derivations and
//! validation rules used by both the persistence and HTTP layers.

pub mod article;
pub mod error;
pub mod types;
