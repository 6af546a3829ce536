//! Reelhang - movie-title hangman over a remote catalog
//!
//! This library provides the core pieces of the Reelhang terminal game:
//! the guessing-round engine, the catalog client that supplies movie
//! titles, and the surrounding configuration, identity, and logging setup.

pub mod catalog;
pub mod config;
pub mod error;
pub mod identity;
pub mod logging;
pub mod round;
pub mod types;

// Re-export commonly used types
pub use catalog::{CatalogSource, HttpCatalog};
pub use config::Config;
pub use error::{ReelhangError, Result};
pub use round::{Outcome, RoundState, MAX_ERRORS};
pub use types::{GalleryItem, MovieRecord};
