//! Error types for pipeline orchestration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can abort a pipeline run.
///
/// Every variant is fatal: the run stops, nothing is written to the output
/// directory, and the process exits non-zero.
#[derive(Debug, Error)]
pub enum PipelineError {
	/// Registry fetch or parse failure.
	#[error(transparent)]
	Registry(#[from] emojigen_registry::RegistryError),

	/// Constant-table generation failure.
	#[error(transparent)]
	Codegen(#[from] emojigen_codegen::CodegenError),

	/// Filesystem failure while reading a snapshot or writing an artifact.
	#[error("I/O error at {path}: {error}")]
	Io {
		/// The path involved.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A snapshot or artifact failed to (de)serialize.
	#[error("JSON error at {path}: {error}")]
	Json {
		/// The file involved.
		path: PathBuf,
		/// The underlying serde error.
		error: serde_json::Error,
	},
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;
