use std::collections::BTreeMap;

use rand::Rng;

/// Observed continuations of a single context.
///
/// Conceptually, this is a node in a Markov chain where outgoing edges
/// are weighted by their number of observations.
///
/// ## Responsibilities:
/// - Accumulate next-word occurrences during training
/// - Pick the next word using weighted random sampling
/// - Merge with the continuations of the same context from another model
///
/// ## Invariants
/// - Each occurrence count is strictly positive
///
/// Words are kept in a `BTreeMap`, so sampling enumerates them in
/// lexicographic order. This order decides which literal word owns each
/// sub-range of `[0, total)`; with a seeded random source the selected
/// words are reproducible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transitions {
	/// Example: { "ran" => 1, "sat" => 1 }
	counts: BTreeMap<String, usize>,
}

impl Transitions {
	/// Creates an empty set of continuations.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one occurrence of `next_word`.
	///
	/// - If the word was already seen, its count is increased.
	/// - Otherwise, it is stored with an initial count of 1.
	pub fn add(&mut self, next_word: &str) {
		self.add_many(next_word, 1);
	}

	fn add_many(&mut self, next_word: &str, occurrence: usize) {
		if occurrence == 0 {
			return;
		}
		match self.counts.get_mut(next_word) {
			Some(count) => *count += occurrence,
			None => {
				self.counts.insert(next_word.to_owned(), occurrence);
			}
		}
	}

	/// Sum of all counts.
	pub fn total(&self) -> usize {
		self.counts.values().sum()
	}

	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Number of distinct continuations.
	pub fn len(&self) -> usize {
		self.counts.len()
	}

	/// Count recorded for `word`, 0 when never observed.
	pub fn count(&self, word: &str) -> usize {
		self.counts.get(word).copied().unwrap_or(0)
	}

	/// Iterates `(word, count)` pairs in enumeration order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
		self.counts.iter().map(|(word, count)| (word.as_str(), *count))
	}

	/// Picks the next word using weighted random sampling.
	///
	/// Draws `r` uniformly in `[0, total)` and returns the first word whose
	/// running sum of counts strictly exceeds `r`. The probability of a word
	/// is therefore `count / total`.
	///
	/// Returns `None` if there is no continuation.
	pub fn predict<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		let total = self.total();
		if total == 0 {
			return None;
		}
		self.select(rng.random_range(0..total))
	}

	fn select(&self, r: usize) -> Option<&str> {
		let mut running = 0;
		for (word, count) in &self.counts {
			running += count;
			if running > r {
				return Some(word.as_str());
			}
		}
		None
	}

	/// Merges the continuations of the same context from another model.
	///
	/// Counts are summed, so merging is commutative and associative.
	pub fn merge(&mut self, other: &Self) {
		for (word, count) in &other.counts {
			self.add_many(word, *count);
		}
	}
}
