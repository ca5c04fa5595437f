//! Viability filtering: which emojis make it into the generated tables, and
//! into which partition.
//!
//! The policy is fully-qualified-only: a base emoji with no fully-qualified
//! presentation sequence is skipped outright, never substituted by a lesser
//! qualification level. Sequence-registry entries are folded in afterwards,
//! minus anything the base registry already covers by name or by identical
//! code-point string.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use emojigen_registry::{BaseRegistry, CodePointSequence, Qualification, SequenceRegistry};


/// One emoji selected for output, with the single sequence chosen for it.
#[derive(Clone, Debug, Serialize)]
pub struct ViableEmoji {
	/// The rendered emoji.
	#[serde(rename = "emoji")]
	pub glyph: String,
	/// Emoji version tag.
	pub version: String,
	/// The selected code-point sequence.
	pub code_points: CodePointSequence,
}

/// A name-keyed set of viable emojis.
pub type ViableSet = IndexMap<String, ViableEmoji>;

/// The two disjoint output partitions.
///
/// `symbol` holds every emoji whose selected sequence fits the byte budget;
/// `extended` holds the rest. A name appears in at most one of the two.
#[derive(Clone, Debug, Default)]
pub struct Partitions {
	/// Emojis at or under the byte budget, usable as fixed-size symbols.
	pub symbol: ViableSet,
	/// Emojis over the byte budget.
	pub extended: ViableSet,
}

/// Splits the parsed registries into the symbol and extended partitions.
///
/// Base records contribute their fully-qualified sequence or nothing.
/// Sequence records are skipped when their name exists in the base registry
/// or their code-point string matches any base sequence at any
/// qualification level.
pub fn partition_viable(
	base: &BaseRegistry,
	sequences: &SequenceRegistry,
	symbol_max_bytes: usize,
) -> Partitions {
	let mut partitions = Partitions::default();

	// Code-point strings across every qualification level, for deduplicating
	// the sequence registry against the base registry.
	let mut base_point_strings: HashSet<String> = HashSet::new();

	for (name, record) in base {
		for sequence in record.qualifications.values() {
			base_point_strings.insert(sequence.joined_points());
		}

		let Some(fully) = record.qualifications.get(&Qualification::FullyQualified) else {
			debug!(name, "no fully-qualified sequence, skipping");
			continue;
		};
		partitions.classify(
			name.clone(),
			ViableEmoji {
				glyph: record.glyph.clone(),
				version: record.version.clone(),
				code_points: fully.clone(),
			},
			symbol_max_bytes,
		);
	}

	for (name, record) in sequences {
		if base.contains_key(name) || base_point_strings.contains(&record.code_points.joined_points())
		{
			debug!(name, "already covered by base registry, skipping");
			continue;
		}
		partitions.classify(
			name.clone(),
			ViableEmoji {
				glyph: record.glyph.clone(),
				version: record.version.clone(),
				code_points: record.code_points.clone(),
			},
			symbol_max_bytes,
		);
	}

	partitions
}

impl Partitions {
	fn classify(&mut self, name: String, emoji: ViableEmoji, symbol_max_bytes: usize) {
		if emoji.code_points.byte_len() > symbol_max_bytes {
			self.extended.insert(name, emoji);
		} else {
			self.symbol.insert(name, emoji);
		}
	}
}
