use std::collections::HashMap;

use crate::model::UNKNOWN_TOKEN;

/// Id of the unknown word, always present.
pub const UNKNOWN_ID: u32 = 0;

/// Bidirectional mapping between words and integer token ids.
///
/// Independent from the trigram counts. Words are split on whitespace and
/// kept with their case. Id `0` is reserved for `<unk>`; other ids are
/// given in first-seen order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vocabulary {
	word_to_id: HashMap<String, u32>,
	id_to_word: Vec<String>,
}

impl Default for Vocabulary {
	fn default() -> Self {
		Self::new()
	}
}

impl Vocabulary {
	/// Creates a vocabulary holding only `<unk>`.
	pub fn new() -> Self {
		Self {
			word_to_id: HashMap::from([(UNKNOWN_TOKEN.to_owned(), UNKNOWN_ID)]),
			id_to_word: vec![UNKNOWN_TOKEN.to_owned()],
		}
	}

	/// Builds a vocabulary from every word of `text`.
	pub fn from_text(text: &str) -> Self {
		let mut vocabulary = Self::new();
		vocabulary.add_text(text);
		vocabulary
	}

	/// Adds the words of `text` not already known.
	pub fn add_text(&mut self, text: &str) {
		for word in text.split_whitespace() {
			if self.word_to_id.contains_key(word) {
				continue;
			}
			let id = self.id_to_word.len() as u32;
			self.word_to_id.insert(word.to_owned(), id);
			self.id_to_word.push(word.to_owned());
		}
	}

	/// Number of words, `<unk>` included.
	pub fn len(&self) -> usize {
		self.id_to_word.len()
	}

	/// Always false: `<unk>` is always present.
	pub fn is_empty(&self) -> bool {
		self.id_to_word.is_empty()
	}

	pub fn id_of(&self, word: &str) -> Option<u32> {
		self.word_to_id.get(word).copied()
	}

	pub fn word_of(&self, id: u32) -> Option<&str> {
		self.id_to_word.get(id as usize).map(String::as_str)
	}

	/// Maps each word of `text` to its id, unknown words to `UNKNOWN_ID`.
	pub fn encode(&self, text: &str) -> Vec<u32> {
		text.split_whitespace()
			.map(|word| self.id_of(word).unwrap_or(UNKNOWN_ID))
			.collect()
	}

	/// Maps ids back to words joined by a single space.
	///
	/// Ids outside the vocabulary decode to `<unk>`.
	pub fn decode(&self, ids: &[u32]) -> String {
		ids.iter()
			.map(|id| self.word_of(*id).unwrap_or(UNKNOWN_TOKEN))
			.collect::<Vec<_>>()
			.join(" ")
	}
}
