//! End-to-end pipeline: registries in, constant tables and JSON sidecars
//! out.
//!
//! The run is strictly sequential — fetch (or load snapshot), parse,
//! partition, prune, generate names, render, write — with no retries and no
//! partial output: every artifact is rendered in memory before the first
//! byte reaches the output directory. Two runs over identical inputs
//! produce byte-identical artifacts.

use std::collections::BTreeMap;

use tracing::info;

use emojigen_codegen::{
	const_table, glyph_to_name, move_const_vector, name_list, name_to_glyph, partition_viable,
	prune_oversized,
};

pub mod artifacts;
pub mod cache;
pub mod config;
pub mod error;

pub use artifacts::ArtifactSet;
pub use config::PipelineConfig;
pub use error::{PipelineError, Result};

/// Counts reported by a successful run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
	/// Emojis in the symbol partition.
	pub symbol_count: usize,
	/// Emojis in the extended partition, after pruning.
	pub extended_count: usize,
	/// Files written to the output directory.
	pub artifacts_written: usize,
}

/// Executes the whole pipeline.
///
/// # Errors
///
/// Fatal on any fetch, parse, duplicate-name, identifier-generation,
/// serialization or filesystem failure; in that case the output directory
/// is left untouched (the snapshot cache may still have been refreshed).
pub fn run(config: &PipelineConfig) -> Result<RunSummary> {
	let base = cache::load_or_fetch_base(config)?;
	let sequences = cache::load_or_fetch_sequences(config)?;
	info!(base = base.len(), sequences = sequences.len(), "parsed registries");

	let mut partitions = partition_viable(&base, &sequences, config.symbol_max_bytes);
	prune_oversized(&mut partitions.extended, &config.pruned_families, config.extended_prune_bytes);
	info!(
		symbol = partitions.symbol.len(),
		extended = partitions.extended.len(),
		"partitioned viable emojis"
	);

	let mut artifacts = ArtifactSet::new();
	for (tag, set) in [("symbol", &partitions.symbol), ("chat", &partitions.extended)] {
		let table = const_table(set)?;
		artifacts.push_text(
			config.out_dir.join(format!("move-consts-{tag}-emojis.txt")),
			move_const_vector(&table),
		);
		artifacts.push_json(config.out_dir.join(format!("{tag}-emojis.json")), &name_to_glyph(set))?;
		artifacts.push_json(config.out_dir.join(format!("{tag}-glyphs.json")), &glyph_to_name(set))?;
		artifacts.push_json(config.out_dir.join(format!("{tag}-names.json")), &name_list(set))?;
	}

	// Full symbol records for the downstream build, sorted by name.
	let all_data: BTreeMap<&str, _> =
		partitions.symbol.iter().map(|(name, emoji)| (name.as_str(), emoji)).collect();
	artifacts.push_json(config.out_dir.join("symbol-emojis-all-data.json"), &all_data)?;

	// Nothing has been written so far; flush the whole set at once.
	let artifacts_written = artifacts.len();
	artifacts.write_all()?;
	info!(artifacts_written, "pipeline complete");

	Ok(RunSummary {
		symbol_count: partitions.symbol.len(),
		extended_count: partitions.extended.len(),
		artifacts_written,
	})
}
