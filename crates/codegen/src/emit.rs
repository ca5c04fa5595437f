//! Emitters for the generated artifacts.
//!
//! The vector literal is pasted into contract source; the JSON projections
//! feed downstream SDK builds. Their entries are matched positionally by
//! external consumers, so every projection of one partition preserves the
//! same name-sorted order and cardinality.

use indexmap::IndexMap;
use itertools::Itertools;

use crate::names::ConstTable;
use crate::viable::ViableSet;

/// Indent unit of the emitted contract source.
const INDENT: &str = "    ";

/// Renders a constant table as a contract-source vector literal, followed by
/// a zeroed placeholder vector of the same cardinality.
///
/// Entries are sorted by identifier. Every value line is padded to a uniform
/// column before the comment carrying the original display name and
/// code-point sequence:
///
/// ```text
///         vector [
///             x"f09f9880", // grinning face [1F600]
///         ]
///
///         vector<u8> [ 0 ]
/// ```
pub fn move_const_vector(table: &ConstTable) -> String {
	let args: Vec<(String, String)> = table
		.values()
		.map(|entry| {
			(
				format!("{}x\"{}\", ", INDENT.repeat(3), entry.hex),
				format!("// {} [{}]", entry.display_name, entry.code_points.join(" ")),
			)
		})
		.collect();

	let width = args.iter().map(|(arg, _)| arg.len()).max().unwrap_or(0);

	let mut lines = Vec::with_capacity(args.len() + 5);
	lines.push(format!("{}vector [", INDENT.repeat(2)));
	for (arg, comment) in &args {
		lines.push(format!("{arg:<width$}{comment}"));
	}
	lines.push(format!("{}]", INDENT.repeat(2)));
	lines.push(String::new());

	let zeroes = vec!["0"; args.len()].join(", ");
	lines.push(format!("{}vector<u8> [ {zeroes} ]", INDENT.repeat(2)));
	lines.push(String::new());

	lines.join("\n")
}

/// Name → glyph lookup, sorted by name.
pub fn name_to_glyph(viable: &ViableSet) -> IndexMap<String, String> {
	viable
		.iter()
		.sorted_by(|a, b| a.0.cmp(b.0))
		.map(|(name, emoji)| (name.clone(), emoji.glyph.clone()))
		.collect()
}

/// Glyph → name lookup; insertion order follows the sorted names.
pub fn glyph_to_name(viable: &ViableSet) -> IndexMap<String, String> {
	viable
		.iter()
		.sorted_by(|a, b| a.0.cmp(b.0))
		.map(|(name, emoji)| (emoji.glyph.clone(), name.clone()))
		.collect()
}

/// Flat, sorted list of display names.
pub fn name_list(viable: &ViableSet) -> Vec<String> {
	viable.keys().cloned().sorted().collect()
}

#[cfg(test)]
mod tests {
	use emojigen_registry::CodePointSequence;
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::names::const_table;
	use crate::viable::ViableEmoji;

	fn fixture() -> ViableSet {
		let mut set = ViableSet::new();
		for (name, points) in [
			("thumbs up", vec!["1F44D"]),
			("grinning face", vec!["1F600"]),
			("flag: United States", vec!["1F1FA", "1F1F8"]),
		] {
			let code_points =
				CodePointSequence::from_hex_points(points).expect("valid scalars");
			set.insert(
				name.to_string(),
				ViableEmoji {
					glyph: code_points.glyph(),
					version: "E1.0".to_string(),
					code_points,
				},
			);
		}
		set
	}

	#[test]
	fn vector_literal_is_sorted_padded_and_zeroed() {
		let table = const_table(&fixture()).expect("should build");
		let code = move_const_vector(&table);
		let expected = "        vector [\n            \
x\"f09f87baf09f87b8\", // flag: United States [1F1FA 1F1F8]\n            \
x\"f09f9880\",         // grinning face [1F600]\n            \
x\"f09f918d\",         // thumbs up [1F44D]\n        \
]\n\n        vector<u8> [ 0, 0, 0 ]\n";
		assert_eq!(code, expected);
	}

	#[test]
	fn projections_share_order_and_cardinality() {
		let set = fixture();
		let names = name_list(&set);
		let to_glyph = name_to_glyph(&set);
		let to_name = glyph_to_name(&set);

		assert_eq!(names, ["flag: United States", "grinning face", "thumbs up"]);
		assert_eq!(to_glyph.keys().collect::<Vec<_>>(), names.iter().collect::<Vec<_>>());
		assert_eq!(to_name.values().collect::<Vec<_>>(), names.iter().collect::<Vec<_>>());
		assert_eq!(to_glyph.len(), set.len());
		assert_eq!(to_name.len(), set.len());
	}

	#[test]
	fn glyph_round_trips_through_hex() {
		let set = fixture();
		let table = const_table(&set).expect("should build");
		for entry in table.values() {
			let bytes: Vec<u8> = (0..entry.hex.len())
				.step_by(2)
				.map(|i| u8::from_str_radix(&entry.hex[i..i + 2], 16).expect("valid hex"))
				.collect();
			let decoded = String::from_utf8(bytes).expect("valid utf-8");
			assert_eq!(decoded, set[&entry.display_name].glyph);
		}
	}

	#[test]
	fn empty_table_still_renders() {
		let code = move_const_vector(&ConstTable::new());
		assert_eq!(code, "        vector [\n        ]\n\n        vector<u8> [  ]\n");
	}
}
