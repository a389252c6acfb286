//! MongoDB access layer for mflix
//!
//! Wraps the official driver behind the small surface the lookup tool
//! needs:
//! - Client construction with Stable API pinning and timeout overrides
//! - Validated database and collection names
//! - A single-document equality lookup
//! - Relaxed Extended JSON rendering for the console

pub mod connection;
pub mod lookup;
pub mod names;
pub mod render;

pub use connection::{ClientConfig, Connection};
pub use lookup::LookupSpec;
pub use mflix_common::{MflixError, Result};
pub use names::{CollectionName, DatabaseName};
pub use render::{render_document, EMPTY_MATCH};
