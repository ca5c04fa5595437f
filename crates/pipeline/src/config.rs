//! Pipeline configuration.
//!
//! All knobs live in one [`PipelineConfig`] passed explicitly into each
//! stage; the constants here are only its defaults. The byte budgets are
//! contractual: the consuming contract stores symbols in a fixed-size
//! representation of `SYMBOL_MAX_BYTES`.

use std::path::PathBuf;

use emojigen_registry::RegistrySource;

/// Default URL of the flat base-emoji registry.
pub const BASE_EMOJIS_URL: &str = "https://unicode.org/Public/emoji/15.1/emoji-test.txt";

/// Default URL of the ZWJ sequence registry.
pub const ZWJ_EMOJIS_URL: &str = "https://unicode.org/Public/emoji/15.1/emoji-zwj-sequences.txt";

/// Byte budget for the symbol (compact) partition.
pub const SYMBOL_MAX_BYTES: usize = 10;

/// Secondary threshold for pruning oversized family members from the
/// extended partition.
pub const EXTENDED_PRUNE_BYTES: usize = 20;

/// Display-name prefixes of the families pruned from the extended set to
/// keep the generated package under its size ceiling.
pub const OVERSIZED_FAMILY_PREFIXES: [&str; 6] = [
	"couple with heart",
	"kiss",
	"men holding hands",
	"people holding hands",
	"women and man holding hands",
	"women holding hands",
];

/// Everything a pipeline run needs to know.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
	/// Where the base registry text comes from.
	pub base_source: RegistrySource,
	/// Where the sequence registry text comes from.
	pub sequence_source: RegistrySource,
	/// Directory the generated artifacts are written to.
	pub out_dir: PathBuf,
	/// Directory holding the parsed-registry snapshot cache.
	pub cache_dir: PathBuf,
	/// Byte budget for the symbol partition.
	pub symbol_max_bytes: usize,
	/// Byte threshold for the extended-set pruner.
	pub extended_prune_bytes: usize,
	/// Family prefixes the pruner removes.
	pub pruned_families: Vec<String>,
}

impl Default for PipelineConfig {
	fn default() -> Self {
		Self {
			base_source: RegistrySource::Url(BASE_EMOJIS_URL.to_string()),
			sequence_source: RegistrySource::Url(ZWJ_EMOJIS_URL.to_string()),
			out_dir: PathBuf::from("data"),
			cache_dir: PathBuf::from("data"),
			symbol_max_bytes: SYMBOL_MAX_BYTES,
			extended_prune_bytes: EXTENDED_PRUNE_BYTES,
			pruned_families: OVERSIZED_FAMILY_PREFIXES.iter().map(ToString::to_string).collect(),
		}
	}
}
