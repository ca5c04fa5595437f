//! Snapshot cache for parsed registries.
//!
//! A successful fetch+parse is immediately serialized next to the outputs;
//! on the next run the snapshot short-circuits that registry's fetch and
//! parse stage entirely. Deleting the file forces a re-fetch. A snapshot
//! that no longer deserializes is fatal rather than silently refetched, so
//! a corrupt cache never goes unnoticed.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::info;

use emojigen_registry::{
	BaseRegistry, RegistrySource, SequenceRegistry, parse_base_registry, parse_sequence_registry,
	sanitized_lines,
};

use crate::artifacts::write_atomic;
use crate::config::PipelineConfig;
use crate::error::{PipelineError, Result};

/// Snapshot file name for the base registry.
pub const BASE_SNAPSHOT_FILE: &str = "base-emojis.json";

/// Snapshot file name for the sequence registry.
pub const SEQUENCE_SNAPSHOT_FILE: &str = "zwj-emojis.json";

/// Loads the base registry from its snapshot, or fetches and parses it and
/// writes the snapshot.
pub fn load_or_fetch_base(config: &PipelineConfig) -> Result<BaseRegistry> {
	load_or_fetch(&config.cache_dir.join(BASE_SNAPSHOT_FILE), &config.base_source, |lines| {
		parse_base_registry(lines)
	})
}

/// Loads the sequence registry from its snapshot, or fetches and parses it
/// and writes the snapshot.
pub fn load_or_fetch_sequences(config: &PipelineConfig) -> Result<SequenceRegistry> {
	load_or_fetch(
		&config.cache_dir.join(SEQUENCE_SNAPSHOT_FILE),
		&config.sequence_source,
		|lines| parse_sequence_registry(lines),
	)
}

fn load_or_fetch<T, P>(snapshot: &Path, source: &RegistrySource, parse: P) -> Result<T>
where
	T: Serialize + DeserializeOwned,
	P: FnOnce(&[String]) -> emojigen_registry::Result<T>,
{
	if snapshot.exists() {
		info!(snapshot = %snapshot.display(), "loading registry snapshot");
		let text = fs::read_to_string(snapshot)
			.map_err(|error| PipelineError::Io { path: snapshot.to_path_buf(), error })?;
		return serde_json::from_str(&text)
			.map_err(|error| PipelineError::Json { path: snapshot.to_path_buf(), error });
	}

	let raw = source.fetch()?;
	let parsed = parse(&sanitized_lines(&raw))?;
	write_atomic(snapshot, &to_pretty_json(snapshot, &parsed)?)?;
	info!(snapshot = %snapshot.display(), "wrote registry snapshot");
	Ok(parsed)
}

fn to_pretty_json<T: Serialize>(path: &Path, value: &T) -> Result<String> {
	let mut contents = serde_json::to_string_pretty(value)
		.map_err(|error| PipelineError::Json { path: path.to_path_buf(), error })?;
	contents.push('\n');
	Ok(contents)
}
