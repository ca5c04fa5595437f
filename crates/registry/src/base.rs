//! Parser for the flat base-emoji registry (`emoji-test.txt`).
//!
//! Each data line has the shape:
//!
//! ```text
//! 1F600 ; fully-qualified # 😀 E1.0 grinning face
//! ```
//!
//! A display name usually appears on several lines, once per qualification
//! level; those lines merge into a single [`QualifiedEmoji`] record keyed by
//! name. Any line that does not fit the grammar aborts the parse.

use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::codepoint::CodePointSequence;
use crate::error::{RegistryError, Result};


/// Glyph, version and name extracted from the trailing comment.
static COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^(.+)\s+(E[0-9.]+)\s+(.+)$").expect("static pattern")
});

/// Unicode's qualification level for an emoji presentation sequence.
///
/// `Component` never reaches the generated output on its own but its code
/// points still participate in cross-registry deduplication.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Qualification {
	FullyQualified,
	MinimallyQualified,
	Unqualified,
	Component,
}

impl FromStr for Qualification {
	type Err = ();

	/// Parses a registry label, tolerating both `-` and `_` separators.
	fn from_str(label: &str) -> std::result::Result<Self, Self::Err> {
		match label.replace('-', "_").as_str() {
			"fully_qualified" => Ok(Self::FullyQualified),
			"minimally_qualified" => Ok(Self::MinimallyQualified),
			"unqualified" => Ok(Self::Unqualified),
			"component" => Ok(Self::Component),
			_ => Err(()),
		}
	}
}

/// All qualification variants of one named base emoji.
///
/// `glyph` and `version` come from the first registry line seen for the
/// name. At most one sequence exists per level; a repeated level for the
/// same name keeps the later line, matching the upstream registry's own
/// convention of never repeating one.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QualifiedEmoji {
	/// The rendered emoji from the registry comment.
	#[serde(rename = "emoji")]
	pub glyph: String,
	/// Emoji version tag, e.g. `E1.0`.
	pub version: String,
	/// Code-point sequence per observed qualification level.
	pub qualifications: BTreeMap<Qualification, CodePointSequence>,
}

/// Registry of base emoji records, keyed by display name in file order.
pub type BaseRegistry = IndexMap<String, QualifiedEmoji>;

/// Parses sanitized base-registry lines into name-keyed records.
///
/// # Errors
///
/// Any line that fails the field grammar (missing `;` or `#`, unknown
/// qualification label, comment that does not match glyph/version/name, or
/// an invalid code point) is fatal and carries the raw line.
pub fn parse_base_registry(lines: &[String]) -> Result<BaseRegistry> {
	let mut registry = BaseRegistry::new();
	for line in lines {
		let malformed = || RegistryError::MalformedLine { line: line.clone() };

		let (points_field, rest) = line.split_once(';').ok_or_else(malformed)?;
		let (label_field, comment) = rest.split_once('#').ok_or_else(malformed)?;

		let qualification =
			Qualification::from_str(label_field.trim()).map_err(|()| malformed())?;

		let caps = COMMENT_RE.captures(comment.trim()).ok_or_else(malformed)?;
		let glyph = caps[1].to_string();
		let version = caps[2].to_string();
		let name = caps[3].trim().to_string();

		// Order matters: it is the glyph's rendering order.
		let code_points = CodePointSequence::from_hex_points(points_field.split_whitespace())
			.map_err(|point| RegistryError::InvalidCodePoint { point, line: line.clone() })?;

		registry
			.entry(name)
			.or_insert_with(|| QualifiedEmoji {
				glyph,
				version,
				qualifications: BTreeMap::new(),
			})
			.qualifications
			.insert(qualification, code_points);
	}
	Ok(registry)
}
