use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};

/// Reads a UTF-8 text file and returns its whole content.
///
/// # Errors
/// Returns `Error::Corpus` if the file cannot be opened, read, or is not
/// valid UTF-8.
pub fn read_corpus<P: AsRef<Path>>(filename: P) -> Result<String> {
	let path = filename.as_ref();
	let mut contents = String::new();
	File::open(path)
		.and_then(|mut file| file.read_to_string(&mut contents))
		.map_err(|source| Error::Corpus { path: path.to_owned(), source })?;
	debug!("read {} byte(s) from {}", contents.len(), path.display());
	Ok(contents)
}

/// Reads several corpus files and joins them with a newline.
///
/// The newline keeps the last word of a file and the first word of the
/// next one apart.
pub fn read_corpora<I, P>(filenames: I) -> Result<String>
where
	I: IntoIterator<Item = P>,
	P: AsRef<Path>,
{
	let mut corpus = String::new();
	for filename in filenames {
		if !corpus.is_empty() {
			corpus.push('\n');
		}
		corpus.push_str(&read_corpus(filename)?);
	}
	Ok(corpus)
}
