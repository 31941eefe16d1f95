use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use log::info;

use babyllm_core::config::GenerationConfig;
use babyllm_core::io::read_corpora;
use babyllm_core::model::END_TOKEN;
use babyllm_core::model::generator::{SentenceGenerator, StopReason};
use babyllm_core::model::trigram_model::TrigramModel;
use babyllm_core::vocabulary::Vocabulary;

/// Word-level trigram text generator
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
	/// TOML file with generation settings (max_tokens, seed)
	#[arg(long, global = true)]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Train on a corpus and print generated sentences
	Generate(GenerateArgs),

	/// Encode text with a vocabulary built from a corpus, then decode it back
	Tokenize(TokenizeArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
	/// Corpus files, read as UTF-8 text
	#[arg(long, required = true, num_args = 1..)]
	corpus: Vec<PathBuf>,

	/// Maximum number of sampled words per sentence (overrides the config)
	#[arg(long)]
	max_tokens: Option<usize>,

	/// Random seed (overrides the config)
	#[arg(long)]
	seed: Option<u64>,

	/// Seed words, "w1 w2" or "w2"; one sentence per occurrence
	#[arg(long)]
	start: Vec<String>,
}

#[derive(Args, Debug)]
struct TokenizeArgs {
	/// Corpus files the vocabulary is built from
	#[arg(long, required = true, num_args = 1..)]
	corpus: Vec<PathBuf>,

	/// Text to encode
	text: String,
}

fn main() -> Result<()> {
	env_logger::init();

	let cli = Cli::parse();
	let config = match &cli.config {
		Some(path) => GenerationConfig::load(path)?,
		None => GenerationConfig::default(),
	};

	match cli.command {
		Command::Generate(args) => generate(config, args),
		Command::Tokenize(args) => tokenize(args),
	}
}

fn generate(mut config: GenerationConfig, args: GenerateArgs) -> Result<()> {
	if let Some(max_tokens) = args.max_tokens {
		config.max_tokens = max_tokens;
	}
	if args.seed.is_some() {
		config.seed = args.seed;
	}
	config.validate()?;

	let corpus = read_corpora(&args.corpus).context("cannot load the training corpus")?;
	let mut model = TrigramModel::new();
	model.train(&corpus);
	info!("model has {} context(s), {} trigram(s)", model.len(), model.trigram_count());

	let starts = if args.start.is_empty() {
		vec![(END_TOKEN.to_owned(), END_TOKEN.to_owned())]
	} else {
		args.start.iter().map(|start| parse_start(start)).collect::<Result<Vec<_>>>()?
	};

	let mut generator = SentenceGenerator::with_config(&model, &config, config.rng());
	for (word1, word2) in &starts {
		let generation = generator.generate_sentence(word1, word2)?;
		if generation.stop_reason() == StopReason::MaxTokens {
			info!("sentence cut after {} word(s)", generation.generated());
		}
		println!("{}", generation.text());
	}

	Ok(())
}

/// Splits a `--start` value into the two seed words.
///
/// A single word is preceded by `<eos>`, as at the start of a sentence.
fn parse_start(start: &str) -> Result<(String, String)> {
	let words: Vec<&str> = start.split_whitespace().collect();
	match words.as_slice() {
		[word] => Ok((END_TOKEN.to_owned(), (*word).to_owned())),
		[word1, word2] => Ok(((*word1).to_owned(), (*word2).to_owned())),
		_ => bail!("--start expects one or two words, got {:?}", start),
	}
}

fn tokenize(args: TokenizeArgs) -> Result<()> {
	let corpus = read_corpora(&args.corpus).context("cannot load the vocabulary corpus")?;
	let vocabulary = Vocabulary::from_text(&corpus);
	info!("vocabulary has {} word(s)", vocabulary.len());

	let encoded = vocabulary.encode(&args.text);
	println!("encoded: {encoded:?}");
	println!("decoded: {}", vocabulary.decode(&encoded));
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parse_start_pads_single_word() {
		assert_eq!(parse_start("hello").unwrap(), (END_TOKEN.to_owned(), "hello".to_owned()));
		assert_eq!(parse_start(" the  cat ").unwrap(), ("the".to_owned(), "cat".to_owned()));
		assert!(parse_start("").is_err());
		assert!(parse_start("one two three").is_err());
	}

	#[test]
	fn cli_parses_generate() {
		let cli = Cli::try_parse_from([
			"babyllm", "generate", "--corpus", "a.txt", "b.txt", "--seed", "3", "--start", "the cat",
		])
		.unwrap();
		match cli.command {
			Command::Generate(args) => {
				assert_eq!(args.corpus, [PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
				assert_eq!(args.seed, Some(3));
				assert_eq!(args.start, ["the cat"]);
			}
			other => panic!("unexpected command {other:?}"),
		}
	}

	#[test]
	fn cli_requires_a_corpus() {
		assert!(Cli::try_parse_from(["babyllm", "generate"]).is_err());
	}
}
