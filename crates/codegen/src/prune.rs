//! Denylist pruning of the extended partition.
//!
//! The multi-person families (hand-holding, couple, kiss) expand into many
//! skin-tone variants of 20+ bytes each; together they push the generated
//! package over its size ceiling. Pruning is by explicit name prefix plus a
//! secondary byte threshold rather than a general size cutoff, so smaller
//! variants of the same families survive.

use tracing::debug;

use crate::viable::ViableSet;

/// Removes extended entries whose name starts with one of the oversized
/// family prefixes and whose sequence exceeds `max_bytes`.
///
/// Only the extended partition is ever passed here; symbol entries are
/// never pruned.
pub fn prune_oversized<S: AsRef<str>>(
	extended: &mut ViableSet,
	family_prefixes: &[S],
	max_bytes: usize,
) {
	extended.retain(|name, emoji| {
		let in_family = family_prefixes.iter().any(|prefix| name.starts_with(prefix.as_ref()));
		if in_family && emoji.code_points.byte_len() > max_bytes {
			debug!(name, bytes = emoji.code_points.byte_len(), "pruning oversized extended emoji");
			false
		} else {
			true
		}
	});
}

#[cfg(test)]
mod tests {
	use emojigen_registry::CodePointSequence;

	use super::*;
	use crate::viable::ViableEmoji;

	fn entry(points: &[&str]) -> ViableEmoji {
		let code_points =
			CodePointSequence::from_hex_points(points.iter().copied()).expect("valid scalars");
		ViableEmoji { glyph: code_points.glyph(), version: "E12.0".to_string(), code_points }
	}

	#[test]
	fn prunes_only_oversized_family_members() {
		let mut extended = ViableSet::new();
		// 26 bytes: in family, over threshold.
		extended.insert(
			"people holding hands: light skin tone".to_string(),
			entry(&["1F9D1", "1F3FB", "200D", "1F91D", "200D", "1F9D1", "1F3FB"]),
		);
		// 18 bytes: in family, under threshold.
		extended.insert(
			"people holding hands".to_string(),
			entry(&["1F9D1", "200D", "1F91D", "200D", "1F9D1"]),
		);
		// 25 bytes: over threshold but not in any family.
		extended.insert(
			"family: man, woman, girl, boy".to_string(),
			entry(&["1F468", "200D", "1F469", "200D", "1F467", "200D", "1F466"]),
		);

		prune_oversized(&mut extended, &["people holding hands", "kiss"], 20);

		assert!(!extended.contains_key("people holding hands: light skin tone"));
		assert!(extended.contains_key("people holding hands"));
		assert!(extended.contains_key("family: man, woman, girl, boy"));
	}

	#[test]
	fn empty_denylist_prunes_nothing() {
		let mut extended = ViableSet::new();
		extended.insert("kiss".to_string(), entry(&["1F48F"]));
		prune_oversized(&mut extended, &[] as &[&str], 20);
		assert_eq!(extended.len(), 1);
	}
}
