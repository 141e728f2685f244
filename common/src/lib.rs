//! Shared, target-independent model for the article reader.
//!
//! Everything here is plain data plus the settings panel state machine, so it
//! can be exercised with `cargo test` on the host without a browser.

pub mod error;
pub mod model;
pub mod panel;

pub use error::CatalogError;
