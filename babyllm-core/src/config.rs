use std::fs;
use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Generation settings, optionally loaded from a TOML file.
///
/// ```toml
/// max_tokens = 50
/// seed = 1234
/// ```
///
/// Missing keys keep their default value.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
	/// Maximum number of words sampled per sentence.
	pub max_tokens: usize,

	/// Seed of the random source; `None` seeds from the OS.
	pub seed: Option<u64>,
}

impl Default for GenerationConfig {
	fn default() -> Self {
		Self { max_tokens: 100, seed: None }
	}
}

impl GenerationConfig {
	/// Reads and validates a TOML configuration file.
	///
	/// # Errors
	/// - `Error::ConfigRead` if the file cannot be read
	/// - `Error::ConfigParse` if it is not valid TOML or has unknown keys
	/// - `Error::InvalidConfig` if a value is out of range
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
		let path = path.as_ref();
		let contents = fs::read_to_string(path)
			.map_err(|source| Error::ConfigRead { path: path.to_owned(), source })?;
		let config: Self = toml::from_str(&contents)
			.map_err(|source| Error::ConfigParse { path: path.to_owned(), source })?;
		config.validate()?;
		Ok(config)
	}

	/// Checks value ranges.
	///
	/// # Errors
	/// Returns an error if `max_tokens` is 0.
	pub fn validate(&self) -> Result<()> {
		if self.max_tokens == 0 {
			return Err(Error::InvalidConfig("max_tokens must be >= 1".to_owned()));
		}
		Ok(())
	}

	/// Builds the random source described by `seed`.
	pub fn rng(&self) -> StdRng {
		match self.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::Rng;
	use std::path::PathBuf;

	fn write_config(name: &str, contents: &str) -> PathBuf {
		let path = std::env::temp_dir().join(format!("babyllm-{}-{name}.toml", std::process::id()));
		fs::write(&path, contents).unwrap();
		path
	}

	#[test]
	fn default_is_valid() {
		let config = GenerationConfig::default();
		assert_eq!(config.max_tokens, 100);
		assert_eq!(config.seed, None);
		assert!(config.validate().is_ok());
	}

	#[test]
	fn load_fills_missing_keys_with_defaults() {
		let path = write_config("partial", "seed = 9\n");
		let config = GenerationConfig::load(&path).unwrap();
		fs::remove_file(&path).unwrap();

		assert_eq!(config, GenerationConfig { max_tokens: 100, seed: Some(9) });
	}

	#[test]
	fn load_rejects_zero_max_tokens() {
		let path = write_config("zero", "max_tokens = 0\n");
		let result = GenerationConfig::load(&path);
		fs::remove_file(&path).unwrap();

		assert!(matches!(result, Err(Error::InvalidConfig(_))));
	}

	#[test]
	fn load_rejects_unknown_keys() {
		let path = write_config("unknown", "max_token = 3\n");
		let result = GenerationConfig::load(&path);
		fs::remove_file(&path).unwrap();

		assert!(matches!(result, Err(Error::ConfigParse { .. })));
	}

	#[test]
	fn load_reports_missing_file() {
		let result = GenerationConfig::load("/nonexistent/babyllm.toml");
		assert!(matches!(result, Err(Error::ConfigRead { .. })));
	}

	#[test]
	fn seeded_rng_is_reproducible() {
		let config = GenerationConfig { seed: Some(5), ..GenerationConfig::default() };
		let mut first = config.rng();
		let mut second = config.rng();
		let a: Vec<u32> = (0..8).map(|_| first.random()).collect();
		let b: Vec<u32> = (0..8).map(|_| second.random()).collect();
		assert_eq!(a, b);
	}
}
