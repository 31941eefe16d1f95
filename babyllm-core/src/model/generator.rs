use log::{debug, warn};
use rand::Rng;

use super::END_TOKEN;
use super::trigram_model::TrigramModel;
use crate::config::GenerationConfig;
use crate::error::Result;

/// Why a generation stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
	/// The model sampled `<eos>`.
	EndOfSequence,
	/// `max_tokens` words were generated without sampling `<eos>`.
	MaxTokens,
}

/// Result of a sentence generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generation {
	/// Visible seed words followed by the generated words.
	words: Vec<String>,
	/// Number of sampled words (seeds excluded).
	generated: usize,
	stop: StopReason,
}

impl Generation {
	pub fn words(&self) -> &[String] {
		&self.words
	}

	/// Words joined by a single space.
	pub fn text(&self) -> String {
		self.words.join(" ")
	}

	pub fn generated(&self) -> usize {
		self.generated
	}

	pub fn stop_reason(&self) -> StopReason {
		self.stop
	}
}

/// Drives a `TrigramModel` to generate sentences.
///
/// # Responsibilities
/// - Slide a two-word window over the generated text
/// - Stop on `<eos>` or after `max_tokens` sampled words
/// - Own the random source used for sampling
///
/// Each generator owns its random state; two generators never share one.
#[derive(Debug)]
pub struct SentenceGenerator<'a, R: Rng> {
	model: &'a TrigramModel,
	max_tokens: usize,
	rng: R,
}

impl<'a, R: Rng> SentenceGenerator<'a, R> {
	/// Creates a generator with the default configuration.
	pub fn new(model: &'a TrigramModel, rng: R) -> Self {
		Self::with_config(model, &GenerationConfig::default(), rng)
	}

	/// Creates a generator bounded by `config.max_tokens`.
	pub fn with_config(model: &'a TrigramModel, config: &GenerationConfig, rng: R) -> Self {
		Self { model, max_tokens: config.max_tokens, rng }
	}

	pub fn max_tokens(&self) -> usize {
		self.max_tokens
	}

	/// Generates a sentence seeded with `word1 word2`.
	///
	/// # Behavior
	/// - The output starts with the seed words, each omitted if it is `<eos>`.
	/// - The next word is sampled from the lower-cased window.
	/// - `<eos>` ends the sentence and is not emitted.
	/// - `<unk>` is emitted like any other word.
	/// - At most `max_tokens` words are sampled.
	///
	/// # Errors
	/// Propagates `Error::EmptyContext` from the model.
	pub fn generate_sentence(&mut self, word1: &str, word2: &str) -> Result<Generation> {
		let mut words: Vec<String> = [word1, word2]
			.into_iter()
			.filter(|word| *word != END_TOKEN)
			.map(str::to_owned)
			.collect();

		let mut stream = self.words(word1, word2);
		let mut generated = 0;
		let stop = loop {
			match stream.step()? {
				Step::Word(word) => {
					words.push(word);
					generated += 1;
				}
				Step::Stop(reason) => break reason,
			}
		};

		debug!("generated {generated} word(s) from ({word1}, {word2}), stop: {stop:?}");
		Ok(Generation { words, generated, stop })
	}

	/// Lazily yields the words sampled after `word1 word2`.
	///
	/// Seed words are not yielded. The iterator ends on `<eos>`, on the
	/// `max_tokens` cap, or after yielding an error.
	pub fn words<'g>(&'g mut self, word1: &str, word2: &str) -> Words<'g, 'a, R> {
		Words {
			generator: self,
			window: (word1.to_lowercase(), word2.to_lowercase()),
			generated: 0,
			stopped: None,
			failed: false,
		}
	}
}

enum Step {
	Word(String),
	Stop(StopReason),
}

/// Iterator over generated words, see `SentenceGenerator::words`.
pub struct Words<'g, 'a, R: Rng> {
	generator: &'g mut SentenceGenerator<'a, R>,
	/// Lower-cased sliding window
	window: (String, String),
	generated: usize,
	stopped: Option<StopReason>,
	failed: bool,
}

impl<R: Rng> Words<'_, '_, R> {
	/// Why the iteration ended, once it has.
	pub fn stop_reason(&self) -> Option<StopReason> {
		self.stopped
	}

	fn step(&mut self) -> Result<Step> {
		if let Some(reason) = self.stopped {
			return Ok(Step::Stop(reason));
		}
		if self.generated >= self.generator.max_tokens {
			warn!(
				"generation reached the {} word cap without sampling {END_TOKEN}",
				self.generator.max_tokens
			);
			return Ok(self.stop(StopReason::MaxTokens));
		}

		let generator = &mut *self.generator;
		let next_word = generator
			.model
			.next_word(&self.window.0, &self.window.1, &mut generator.rng)?
			.to_owned();
		if next_word == END_TOKEN {
			return Ok(self.stop(StopReason::EndOfSequence));
		}

		self.window.0 = std::mem::replace(&mut self.window.1, next_word.clone());
		self.generated += 1;
		Ok(Step::Word(next_word))
	}

	fn stop(&mut self, reason: StopReason) -> Step {
		self.stopped = Some(reason);
		Step::Stop(reason)
	}
}

impl<R: Rng> Iterator for Words<'_, '_, R> {
	type Item = Result<String>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.failed {
			return None;
		}
		match self.step() {
			Ok(Step::Word(word)) => Some(Ok(word)),
			Ok(Step::Stop(_)) => None,
			Err(e) => {
				self.failed = true;
				Some(Err(e))
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::UNKNOWN_TOKEN;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn trained(corpus: &str) -> TrigramModel {
		let mut model = TrigramModel::new();
		model.train(corpus);
		model
	}

	fn config(max_tokens: usize) -> GenerationConfig {
		GenerationConfig { max_tokens, ..GenerationConfig::default() }
	}

	#[test]
	fn stops_immediately_on_eos() {
		let model = trained("the end <eos>");
		let mut generator = SentenceGenerator::new(&model, StdRng::seed_from_u64(0));

		let generation = generator.generate_sentence("the", "end").unwrap();
		assert_eq!(generation.words(), ["the", "end"]);
		assert_eq!(generation.generated(), 0);
		assert_eq!(generation.stop_reason(), StopReason::EndOfSequence);
	}

	#[test]
	fn follows_a_deterministic_chain() {
		let model = trained("<eos> <eos> the cat sat on a mat <eos>");
		let mut generator = SentenceGenerator::new(&model, StdRng::seed_from_u64(0));

		let generation = generator.generate_sentence(END_TOKEN, END_TOKEN).unwrap();
		assert_eq!(generation.text(), "the cat sat on a mat");
		assert_eq!(generation.generated(), 6);
		assert_eq!(generation.stop_reason(), StopReason::EndOfSequence);
	}

	#[test]
	fn seeds_keep_their_case_but_lookup_is_lowercased() {
		let model = trained("the cat sat <eos>");
		let mut generator = SentenceGenerator::new(&model, StdRng::seed_from_u64(0));

		let generation = generator.generate_sentence("The", "CAT").unwrap();
		assert_eq!(generation.words(), ["The", "CAT", "sat"]);
	}

	#[test]
	fn cycle_is_capped() {
		let model = trained("a b a b a b");
		let mut generator = SentenceGenerator::with_config(&model, &config(10), StdRng::seed_from_u64(0));

		let generation = generator.generate_sentence("a", "b").unwrap();
		assert_eq!(generation.generated(), 10);
		assert_eq!(generation.words().len(), 12);
		assert_eq!(generation.stop_reason(), StopReason::MaxTokens);
	}

	#[test]
	fn unknown_seed_emits_unk_until_cap() {
		let model = trained("the cat sat <eos>");
		let mut generator = SentenceGenerator::with_config(&model, &config(3), StdRng::seed_from_u64(0));

		let generation = generator.generate_sentence("no", "idea").unwrap();
		assert_eq!(generation.words(), ["no", "idea", UNKNOWN_TOKEN, UNKNOWN_TOKEN, UNKNOWN_TOKEN]);
		assert_eq!(generation.stop_reason(), StopReason::MaxTokens);
	}

	#[test]
	fn words_iterator_matches_generate() {
		let model = trained("the cat sat on the mat the cat ran away <eos>");

		let mut first = SentenceGenerator::new(&model, StdRng::seed_from_u64(11));
		let generation = first.generate_sentence("the", "cat").unwrap();

		let mut second = SentenceGenerator::new(&model, StdRng::seed_from_u64(11));
		let mut words = second.words("the", "cat");
		let streamed: Vec<String> = words.by_ref().map(|word| word.unwrap()).collect();

		assert_eq!(generation.words()[2..], streamed[..]);
		assert_eq!(words.stop_reason(), Some(generation.stop_reason()));
	}
}
