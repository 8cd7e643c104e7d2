//! cinelog/crates/cl-core/src/lib.rs
//!
//! The catalog state & aggregation engine: domain models, the gateway port,
//! the authoritative store, and the pure projection/aggregation reads.

pub mod error;
pub mod models;
pub mod projection;
pub mod ratings;
pub mod store;
pub mod traits;

// Re-exporting for easier access in other crates
pub use error::*;
pub use models::*;
pub use projection::project;
pub use ratings::average_rating;
pub use store::CatalogStore;
pub use traits::*;
