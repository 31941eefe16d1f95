//! Word-level trigram language model.
//!
//! This crate provides a minimal statistical text generator including:
//! - A trigram frequency model trained from whitespace-split text
//! - Weighted random sampling of the next word
//! - A bounded sentence generation loop
//! - A word/id vocabulary and corpus loading utilities
//!
//! The random source is always supplied by the caller, so seeded
//! generators give reproducible output.

/// Trigram model and sentence generation.
pub mod model;

/// Word to token id mapping.
pub mod vocabulary;

/// Generation settings loaded from TOML.
pub mod config;

/// Corpus file loading.
pub mod io;

mod error;

pub use error::{Error, Result};
