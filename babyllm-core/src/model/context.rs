use std::fmt;

/// Two consecutive words used as the lookup key of the frequency table.
///
/// Stored as a genuine pair so that a word containing any delimiter
/// character can never collide with another context.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Context {
	first: String,
	second: String,
}

impl Context {
	/// Builds a context from two words, as given.
	///
	/// Training lower-cases words before building contexts.
	pub fn new(first: &str, second: &str) -> Self {
		Self { first: first.to_owned(), second: second.to_owned() }
	}

	pub fn first(&self) -> &str {
		&self.first
	}

	pub fn second(&self) -> &str {
		&self.second
	}
}

impl fmt::Display for Context {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({}, {})", self.first, self.second)
	}
}
