//! Parser for the ZWJ sequence registry (`emoji-zwj-sequences.txt`).
//!
//! Each data line has the shape:
//!
//! ```text
//! 1F468 200D 1F692 ; RGI_Emoji_ZWJ_Sequence ; man firefighter # E4.0 [1] (👨‍🚒)
//! ```
//!
//! Unlike the base registry, names here are unique; a repeated name is a
//! fatal error rather than a merge.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::codepoint::CodePointSequence;
use crate::error::{RegistryError, Result};

#[cfg(test)]
mod tests;

/// Version, bracketed variation count and parenthesized glyph from the
/// trailing comment. The count is matched but unused downstream; the space
/// between version and count is optional in the upstream files.
static COMMENT_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^(E[0-9.]+)\s*(\[\d+\])\s+\((.+)\)$").expect("static pattern"));

/// One multi-code-point composite emoji from the sequence registry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SequenceEmoji {
	/// The rendered emoji from the registry comment.
	#[serde(rename = "emoji")]
	pub glyph: String,
	/// Emoji version tag, e.g. `E4.0`.
	pub version: String,
	/// The sequence's code points, in rendering order.
	pub code_points: CodePointSequence,
}

/// Registry of ZWJ sequence records, keyed by display name in file order.
pub type SequenceRegistry = IndexMap<String, SequenceEmoji>;

/// Parses sanitized sequence-registry lines into name-keyed records.
///
/// # Errors
///
/// Fatal on any line missing its three `;` fields or `#` comment split, on
/// a comment that does not match version/count/glyph, on an invalid code
/// point, and on a repeated display name.
pub fn parse_sequence_registry(lines: &[String]) -> Result<SequenceRegistry> {
	let mut registry = SequenceRegistry::new();
	for line in lines {
		let malformed = || RegistryError::MalformedLine { line: line.clone() };

		// `<code points> ; <sequence type> ; <name> # <comment>`; the
		// sequence-type field in the middle is ignored.
		let mut fields = line.splitn(3, ';');
		let points_field = fields.next().ok_or_else(malformed)?;
		let _sequence_type = fields.next().ok_or_else(malformed)?;
		let name_and_comment = fields.next().ok_or_else(malformed)?;

		let (name, comment) = name_and_comment.split_once('#').ok_or_else(malformed)?;
		let name = name.trim().to_string();

		let caps = COMMENT_RE.captures(comment.trim()).ok_or_else(malformed)?;
		let version = caps[1].to_string();
		let glyph = caps[3].to_string();

		// Order matters: it is the glyph's rendering order.
		let code_points = CodePointSequence::from_hex_points(points_field.split_whitespace())
			.map_err(|point| RegistryError::InvalidCodePoint { point, line: line.clone() })?;

		if registry.contains_key(&name) {
			return Err(RegistryError::DuplicateName { name });
		}
		registry.insert(name, SequenceEmoji { glyph, version, code_points });
	}
	Ok(registry)
}
