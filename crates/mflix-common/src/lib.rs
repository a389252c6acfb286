//! Common utilities for mflix
//!
//! This crate provides the error type shared across all mflix crates.

pub mod error;

pub use error::{MflixError, Result};
