//! ASCII constant-identifier generation.
//!
//! Display names like `flag: São Tomé & Príncipe` become identifiers usable
//! in contract source (`FLAG_SAO_TOME_PRINCIPE`). The mapping must be
//! injective over a run; a collision or an empty result aborts before any
//! output is written.

use std::collections::BTreeMap;

use deunicode::deunicode;
use itertools::Itertools;

use crate::error::{CodegenError, Result};
use crate::viable::ViableSet;

/// One generated constant: its hex byte string plus the original name and
/// code points kept for the audit comment in the emitted code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstEntry {
	/// Lowercase hex encoding of the emoji's UTF-8 bytes.
	pub hex: String,
	/// The original display name.
	pub display_name: String,
	/// The original code-point fields.
	pub code_points: Vec<String>,
}

/// Generated identifiers mapped to their constants, sorted by identifier.
pub type ConstTable = BTreeMap<String, ConstEntry>;

/// Derives the ASCII identifier for a display name.
///
/// Transliterates to ASCII, then maps characters: alphanumerics and `_`
/// pass through; `:`, `-`, `,`, space and `'` become `_`; `#` becomes
/// `POUND` and `*` becomes `ASTERISK`; everything else is dropped. Tokens
/// are uppercased and rejoined with single underscores, and identifiers
/// that would start with a digit get an `EMOJI_` prefix.
///
/// May return an empty string; the caller treats that as fatal.
pub fn const_name(display_name: &str) -> String {
	let mapped: String = deunicode(display_name)
		.chars()
		.filter_map(|ch| match ch {
			_ if ch.is_ascii_alphanumeric() || ch == '_' => Some(ch.to_string()),
			':' | '-' | ',' | ' ' | '\'' => Some("_".to_string()),
			'#' => Some("POUND".to_string()),
			'*' => Some("ASTERISK".to_string()),
			_ => None,
		})
		.collect();

	let ident = mapped
		.split('_')
		.filter(|token| !token.is_empty())
		.map(str::to_ascii_uppercase)
		.join("_");

	if ident.chars().next().is_some_and(|ch| ch.is_ascii_digit()) {
		format!("EMOJI_{ident}")
	} else {
		ident
	}
}

/// Builds the identifier-keyed constant table for a viable set.
///
/// # Errors
///
/// Fatal when a display name produces an empty identifier or when two
/// distinct names collide on the same identifier; a collision must never
/// silently overwrite an existing constant.
pub fn const_table(viable: &ViableSet) -> Result<ConstTable> {
	let mut table = ConstTable::new();
	for (name, emoji) in viable {
		let ident = const_name(name);
		if ident.is_empty() {
			return Err(CodegenError::InvalidConstName { name: name.clone() });
		}
		let entry = ConstEntry {
			hex: emoji.code_points.hex(),
			display_name: name.clone(),
			code_points: emoji.code_points.points().to_vec(),
		};
		if table.insert(ident.clone(), entry).is_some() {
			return Err(CodegenError::DuplicateConstName { const_name: ident });
		}
	}
	Ok(table)
}
