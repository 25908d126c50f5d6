use std::{
	collections::HashSet,
	fs,
	path::{Path, PathBuf},
};

use jieba_rs::Jieba;
use unicode_normalization::UnicodeNormalization;
use unicode_script::{Script, UnicodeScript};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to read stopwords file at {path:?}.")]
	ReadStopwords { path: PathBuf, source: std::io::Error },
	#[error("Failed to read user dictionary at {path:?}.")]
	ReadUserDict { path: PathBuf, source: std::io::Error },
	#[error("Failed to load user dictionary at {path:?}: {message}")]
	ParseUserDict { path: PathBuf, message: String },
}

/// Segments query text into search keywords.
///
/// Stopwords and the user dictionary are injected at construction so tests can
/// run against fixed vocabularies.
pub struct KeywordExtractor {
	jieba: Jieba,
	stopwords: HashSet<String>,
}
impl KeywordExtractor {
	pub fn new(stopwords: HashSet<String>, user_dict_words: &[String]) -> Self {
		let mut jieba = Jieba::new();

		for word in user_dict_words {
			let word = word.trim();

			if word.is_empty() {
				continue;
			}

			jieba.add_word(word, None, None);
		}

		Self { jieba, stopwords }
	}

	/// Loads stopwords (one per line) and an optional user dictionary in the
	/// standard `word [freq] [tag]` format.
	pub fn from_files(stopwords_path: &Path, user_dict_path: Option<&Path>) -> Result<Self> {
		let raw = fs::read_to_string(stopwords_path).map_err(|err| Error::ReadStopwords {
			path: stopwords_path.to_path_buf(),
			source: err,
		})?;
		let stopwords = raw
			.lines()
			.map(str::trim)
			.filter(|line| !line.is_empty())
			.map(str::to_string)
			.collect();
		let mut jieba = Jieba::new();

		if let Some(path) = user_dict_path {
			let raw = fs::read_to_string(path)
				.map_err(|err| Error::ReadUserDict { path: path.to_path_buf(), source: err })?;

			jieba.load_dict(&mut raw.as_bytes()).map_err(|err| Error::ParseUserDict {
				path: path.to_path_buf(),
				message: err.to_string(),
			})?;
		}

		Ok(Self { jieba, stopwords })
	}

	/// Extracts keywords in first-seen order. Tokens shorter than two
	/// characters and stopwords are dropped. Empty input yields an empty list.
	pub fn extract(&self, text: &str) -> Vec<String> {
		let cleaned = clean_text(text);
		let mut keywords = Vec::new();
		let mut seen = HashSet::new();

		for token in self.jieba.cut(&cleaned, true) {
			if token.chars().all(char::is_whitespace) {
				continue;
			}
			if token.chars().count() < 2 || self.stopwords.contains(token) {
				continue;
			}
			if seen.insert(token) {
				keywords.push(token.to_string());
			}
		}

		keywords
	}
}

/// NFKC-normalizes, then strips every character outside Han ideographs, ASCII
/// alphanumerics, and whitespace.
fn clean_text(text: &str) -> String {
	text.nfkc().filter(|ch| is_searchable_char(*ch)).collect()
}

fn is_searchable_char(ch: char) -> bool {
	ch.is_ascii_alphanumeric() || ch.is_whitespace() || ch.script() == Script::Han
}
