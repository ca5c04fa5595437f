//! Artifact rendering and atomic output.
//!
//! Artifacts are collected in memory and only hit the filesystem once the
//! whole pipeline has succeeded; each file is then written via a temp file
//! in the destination directory plus an atomic rename. There is no
//! partial-output mode.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{PipelineError, Result};

/// One rendered output file.
#[derive(Clone, Debug)]
pub struct Artifact {
	/// Destination path.
	pub path: PathBuf,
	/// Full file contents.
	pub contents: String,
}

/// The complete set of outputs for one run.
#[derive(Debug, Default)]
pub struct ArtifactSet {
	artifacts: Vec<Artifact>,
}

impl ArtifactSet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of collected artifacts.
	pub fn len(&self) -> usize {
		self.artifacts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.artifacts.is_empty()
	}

	/// Queues a plain-text artifact.
	pub fn push_text(&mut self, path: PathBuf, contents: String) {
		self.artifacts.push(Artifact { path, contents });
	}

	/// Queues a pretty-printed JSON artifact.
	pub fn push_json<T: Serialize>(&mut self, path: PathBuf, value: &T) -> Result<()> {
		let mut contents = serde_json::to_string_pretty(value)
			.map_err(|error| PipelineError::Json { path: path.clone(), error })?;
		contents.push('\n');
		self.push_text(path, contents);
		Ok(())
	}

	/// Writes every artifact atomically.
	pub fn write_all(&self) -> Result<()> {
		for artifact in &self.artifacts {
			debug!(path = %artifact.path.display(), "writing artifact");
			write_atomic(&artifact.path, &artifact.contents)?;
		}
		Ok(())
	}
}

/// Writes `contents` to `path` through a temp file and rename, creating
/// parent directories as needed.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
	let io_err = |error| PipelineError::Io { path: path.to_path_buf(), error };

	let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
	fs::create_dir_all(dir).map_err(io_err)?;

	let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
	tmp.write_all(contents.as_bytes()).map_err(io_err)?;
	tmp.persist(path).map_err(|e| io_err(e.error))?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn atomic_write_replaces_existing_file() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("out.txt");
		write_atomic(&path, "first").expect("first write");
		write_atomic(&path, "second").expect("second write");
		assert_eq!(fs::read_to_string(&path).expect("readable"), "second");
	}

	#[test]
	fn json_artifacts_end_with_newline() {
		let mut set = ArtifactSet::new();
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("nested/value.json");
		set.push_json(path.clone(), &vec!["a", "b"]).expect("serializes");
		set.write_all().expect("writes");
		assert_eq!(fs::read_to_string(&path).expect("readable"), "[\n  \"a\",\n  \"b\"\n]\n");
	}
}
