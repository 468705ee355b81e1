//! Data models
//!
//! Static catalog data shared between the engine and any presentation
//! layer. A [`MenuItem`] is immutable for the lifetime of the process.

pub mod menu_item;

// Re-exports
pub use menu_item::*;
