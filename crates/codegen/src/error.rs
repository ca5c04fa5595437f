//! Error types for constant-table generation.

use thiserror::Error;

/// Errors that can occur while generating constant tables.
#[derive(Debug, Error)]
pub enum CodegenError {
	/// A display name reduced to an empty identifier.
	#[error("invalid constant name for emoji: {name}")]
	InvalidConstName {
		/// The display name that produced no identifier characters.
		name: String,
	},

	/// Two display names produced the same identifier.
	#[error("duplicate constant name: {const_name}")]
	DuplicateConstName {
		/// The colliding generated identifier.
		const_name: String,
	},
}

/// Result type for codegen operations.
pub type Result<T> = std::result::Result<T, CodegenError>;
