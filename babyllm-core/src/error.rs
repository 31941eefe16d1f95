use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::model::context::Context;

/// Errors raised by the library.
///
/// Unknown contexts and too-short corpora are not errors: they are
/// answered with the `<unk>` sentinel and an empty table respectively.
#[derive(Debug, Error)]
pub enum Error {
	/// The corpus file could not be read.
	#[error("failed to read corpus {}: {source}", path.display())]
	Corpus {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// The configuration file could not be read.
	#[error("failed to read config {}: {source}", path.display())]
	ConfigRead {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// The configuration file is not valid TOML for `GenerationConfig`.
	#[error("failed to parse config {}: {source}", path.display())]
	ConfigParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	/// A configuration value is out of range.
	#[error("invalid config: {0}")]
	InvalidConfig(String),

	/// A context is stored but has no recorded continuation.
	#[error("context {0} has no recorded continuation")]
	EmptyContext(Context),
}

pub type Result<T> = std::result::Result<T, Error>;
