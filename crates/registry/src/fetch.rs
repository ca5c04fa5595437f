//! Registry source resolution: remote URL or local file.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::error::{RegistryError, Result};

/// Where a registry's raw text comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistrySource {
	/// Fetched over HTTP(S).
	Url(String),
	/// Read from the local filesystem.
	Path(PathBuf),
}

impl RegistrySource {
	/// Interprets a CLI/config string: `http://` and `https://` prefixes are
	/// URLs, anything else is a filesystem path.
	pub fn from_spec(spec: &str) -> Self {
		if spec.starts_with("http://") || spec.starts_with("https://") {
			Self::Url(spec.to_string())
		} else {
			Self::Path(PathBuf::from(spec))
		}
	}

	/// Retrieves the raw registry text.
	///
	/// Blocking, single attempt; a transport failure, non-success status or
	/// unreadable file is fatal to the run.
	pub fn fetch(&self) -> Result<String> {
		match self {
			Self::Url(url) => {
				debug!(url, "fetching registry");
				Ok(reqwest::blocking::get(url)?.error_for_status()?.text()?)
			}
			Self::Path(path) => {
				debug!(path = %path.display(), "reading registry");
				fs::read_to_string(path)
					.map_err(|error| RegistryError::Io { path: path.clone(), error })
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn url_specs_are_recognized() {
		assert_eq!(
			RegistrySource::from_spec("https://unicode.org/Public/emoji/15.1/emoji-test.txt"),
			RegistrySource::Url("https://unicode.org/Public/emoji/15.1/emoji-test.txt".to_string())
		);
		assert_eq!(
			RegistrySource::from_spec("data/emoji-test.txt"),
			RegistrySource::Path(PathBuf::from("data/emoji-test.txt"))
		);
	}

	#[test]
	fn missing_file_is_an_io_error() {
		let err = RegistrySource::Path(PathBuf::from("/nonexistent/emoji-test.txt"))
			.fetch()
			.expect_err("should fail");
		assert!(matches!(err, RegistryError::Io { .. }));
	}
}
