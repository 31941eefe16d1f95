use std::collections::HashMap;

use log::{debug, trace};
use rand::Rng;

use super::UNKNOWN_TOKEN;
use super::context::Context;
use super::transitions::Transitions;
use crate::error::{Error, Result};

/// Word-level trigram model.
///
/// The `TrigramModel` maps every two-word context seen in training to
/// the words that followed it, with their number of occurrences.
///
/// # Responsibilities
/// - Build the frequency table from corpus text
/// - Predict the next word given a context, by weighted random sampling
/// - Merge with another trigram model
///
/// # Invariants
/// - Each context in `table` has at least one continuation
/// - All continuation counts are >= 1
/// - Training only ever adds contexts and increases counts
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrigramModel {
	/// Mapping from a context to its observed continuations
	table: HashMap<Context, Transitions>,
}

impl TrigramModel {
	/// Creates an empty model.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a corpus to the model.
	///
	/// Splits the corpus on whitespace and records every window of three
	/// consecutive words, lower-cased.
	///
	/// # Notes
	/// - Counts accumulate across calls: training the same corpus twice
	///   doubles every count.
	/// - A corpus with fewer than three words records nothing.
	pub fn train(&mut self, corpus: &str) {
		let words: Vec<String> = corpus.split_whitespace().map(str::to_lowercase).collect();
		if words.len() < 3 {
			debug!("corpus has {} word(s), no trigram recorded", words.len());
			return;
		}

		for window in words.windows(3) {
			let context = Context::new(&window[0], &window[1]);
			let next_word = &window[2];
			trace!("{context} -> {next_word}");
			self.table.entry(context).or_default().add(next_word);
		}

		debug!(
			"trained {} trigram(s), model now has {} context(s)",
			words.len() - 2,
			self.table.len()
		);
	}

	/// Predicts the word following `word1 word2`.
	///
	/// The context is looked up exactly as given; callers lower-case the
	/// words to match the training normalization.
	///
	/// Returns `<unk>` when the context was never seen.
	///
	/// # Errors
	/// Returns `Error::EmptyContext` if the context is stored without any
	/// continuation.
	pub fn next_word<R: Rng + ?Sized>(&self, word1: &str, word2: &str, rng: &mut R) -> Result<&str> {
		let context = Context::new(word1, word2);
		match self.table.get(&context) {
			None => Ok(UNKNOWN_TOKEN),
			Some(transitions) => transitions.predict(rng).ok_or(Error::EmptyContext(context)),
		}
	}

	/// Continuations recorded for `word1 word2`, in sampling order.
	///
	/// Empty when the context is unknown.
	pub fn candidates(&self, word1: &str, word2: &str) -> impl Iterator<Item = (&str, usize)> {
		self.table
			.get(&Context::new(word1, word2))
			.into_iter()
			.flat_map(|transitions| transitions.iter())
	}

	/// Iterates the known contexts, in no particular order.
	pub fn contexts(&self) -> impl Iterator<Item = &Context> {
		self.table.keys()
	}

	/// Number of distinct contexts.
	pub fn len(&self) -> usize {
		self.table.len()
	}

	pub fn is_empty(&self) -> bool {
		self.table.is_empty()
	}

	/// Total number of trigram observations.
	pub fn trigram_count(&self) -> usize {
		self.table.values().map(Transitions::total).sum()
	}

	/// Merges another trigram model into this one.
	///
	/// Occurrence counts for matching contexts and words are summed, so
	/// the result does not depend on merge order.
	pub fn merge(&mut self, other: &Self) {
		for (context, transitions) in &other.table {
			if let Some(existing) = self.table.get_mut(context) {
				existing.merge(transitions);
			} else {
				self.table.insert(context.clone(), transitions.clone());
			}
		}
	}
}
