//! Error types for registry fetching and parsing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while fetching or parsing an emoji registry.
#[derive(Debug, Error)]
pub enum RegistryError {
	/// A registry line did not match the expected field grammar.
	#[error("malformed line: {line}")]
	MalformedLine {
		/// The offending raw line, unmodified.
		line: String,
	},

	/// A code-point field was not a valid Unicode scalar value in hex.
	#[error("invalid code point '{point}' in line: {line}")]
	InvalidCodePoint {
		/// The hex field that failed to decode.
		point: String,
		/// The line it came from.
		line: String,
	},

	/// A name appeared twice in a registry that disallows duplicates.
	#[error("duplicate name: {name}")]
	DuplicateName {
		/// The repeated display name.
		name: String,
	},

	/// HTTP fetch of a registry URL failed.
	#[error("fetch failed: {0}")]
	Http(#[from] reqwest::Error),

	/// Error reading a registry file from disk.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
