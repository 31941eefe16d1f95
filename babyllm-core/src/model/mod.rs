//! Top-level module for the trigram generation system.
//!
//! This module provides a word-level trigram text generator, including:
//! - Two-word lookup keys (`Context`)
//! - Per-context continuation counts (`Transitions`)
//! - The frequency table and weighted sampling (`TrigramModel`)
//! - The sentence generation loop (`SentenceGenerator`)

/// Two-word context used as the frequency table key.
pub mod context;

/// Sentence generation loop driving a `TrigramModel`.
///
/// Handles seeding, the `<eos>` terminal condition and the
/// maximum-length cap.
pub mod generator;

/// Continuation counts of a single context.
///
/// Tracks observed next words and supports weighted random sampling.
pub mod transitions;

/// Word-level trigram model.
///
/// Handles corpus ingestion, transition counting,
/// probabilistic next-word prediction, and model merging.
pub mod trigram_model;

/// Word returned when a context was never seen in training.
pub const UNKNOWN_TOKEN: &str = "<unk>";

/// Word marking the end of a sequence; sampling it stops generation.
pub const END_TOKEN: &str = "<eos>";
