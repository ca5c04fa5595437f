//! Ordered Unicode code-point sequences and their derived encodings.
//!
//! A [`CodePointSequence`] is the unit both registries deal in: an ordered
//! list of hex scalar values (e.g. `["1F468", "200D", "1F692"]`) describing
//! one emoji glyph or ligature. Order is the glyph's rendering order and is
//! preserved everywhere. Sequences are validated at construction and never
//! mutated afterwards.

use serde::{Deserialize, Serialize};

/// An ordered sequence of Unicode scalar values, kept as the original hex
/// fields alongside their decoded characters.
///
/// Serializes as [`CodePointInfo`], the schema used by the registry snapshot
/// cache files.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CodePointInfo", into = "CodePointInfo")]
pub struct CodePointSequence {
	points: Vec<String>,
	scalars: Vec<char>,
}

impl CodePointSequence {
	/// Builds a sequence from hex scalar-value fields.
	///
	/// Returns the offending field if it is not valid hex or names a value
	/// outside the Unicode scalar range.
	pub fn from_hex_points<I, S>(points: I) -> Result<Self, String>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let points: Vec<String> = points.into_iter().map(Into::into).collect();
		let mut scalars = Vec::with_capacity(points.len());
		for point in &points {
			match scalar(point) {
				Some(ch) => scalars.push(ch),
				None => return Err(point.clone()),
			}
		}
		Ok(Self { points, scalars })
	}

	/// The original hex fields, in rendering order.
	pub fn points(&self) -> &[String] {
		&self.points
	}

	/// The decoded glyph.
	pub fn glyph(&self) -> String {
		self.scalars.iter().collect()
	}

	/// Total UTF-8 byte length of the glyph.
	pub fn byte_len(&self) -> usize {
		self.scalars.iter().map(|ch| ch.len_utf8()).sum()
	}

	/// The glyph's UTF-8 bytes.
	pub fn utf8_bytes(&self) -> Vec<u8> {
		self.glyph().into_bytes()
	}

	/// Lowercase hex encoding of the glyph's UTF-8 bytes.
	pub fn hex(&self) -> String {
		hex_encode(&self.utf8_bytes())
	}

	/// Per-point hex encodings, matching the snapshot cache schema.
	pub fn point_hexes(&self) -> Vec<String> {
		self.scalars
			.iter()
			.map(|ch| {
				let mut buf = [0u8; 4];
				hex_encode(ch.encode_utf8(&mut buf).as_bytes())
			})
			.collect()
	}

	/// Concatenation of the hex fields, used as the cross-registry dedup key.
	pub fn joined_points(&self) -> String {
		self.points.concat()
	}
}

fn scalar(point: &str) -> Option<char> {
	u32::from_str_radix(point, 16).ok().and_then(char::from_u32)
}

fn hex_encode(bytes: &[u8]) -> String {
	use std::fmt::Write;
	bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut out, b| {
		let _ = write!(out, "{b:02x}");
		out
	})
}

/// Snapshot-cache representation of a [`CodePointSequence`].
///
/// `num_bytes` and `as_hex` are derived fields; only `as_unicode` is read
/// back on deserialization, after re-validation.
#[derive(Debug, Serialize, Deserialize)]
pub struct CodePointInfo {
	num_bytes: usize,
	as_unicode: Vec<String>,
	as_hex: Vec<String>,
}

impl From<CodePointSequence> for CodePointInfo {
	fn from(seq: CodePointSequence) -> Self {
		Self {
			num_bytes: seq.byte_len(),
			as_hex: seq.point_hexes(),
			as_unicode: seq.points,
		}
	}
}

impl TryFrom<CodePointInfo> for CodePointSequence {
	type Error = String;

	fn try_from(info: CodePointInfo) -> Result<Self, Self::Error> {
		CodePointSequence::from_hex_points(info.as_unicode)
			.map_err(|point| format!("invalid code point '{point}' in cached snapshot"))
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn grinning_face_encodings() {
		let seq = CodePointSequence::from_hex_points(["1F600"]).expect("valid scalar");
		assert_eq!(seq.glyph(), "\u{1F600}");
		assert_eq!(seq.byte_len(), 4);
		assert_eq!(seq.hex(), "f09f9880");
		assert_eq!(seq.joined_points(), "1F600");
	}

	#[test]
	fn hex_length_is_twice_byte_length() {
		let seqs = [
			CodePointSequence::from_hex_points(["1F600"]),
			CodePointSequence::from_hex_points(["1F468", "200D", "1F692"]),
			CodePointSequence::from_hex_points(["23", "FE0F", "20E3"]),
		];
		for seq in seqs {
			let seq = seq.expect("valid scalars");
			assert_eq!(seq.hex().len(), 2 * seq.byte_len());
		}
	}

	#[test]
	fn per_point_hexes_concatenate_to_full_hex() {
		let seq = CodePointSequence::from_hex_points(["1F1E6", "1F1EA"]).expect("valid scalars");
		assert_eq!(seq.point_hexes().concat(), seq.hex());
		assert_eq!(seq.hex(), "f09f87a6f09f87aa");
	}

	#[test]
	fn rejects_non_hex_and_surrogates() {
		assert_eq!(CodePointSequence::from_hex_points(["XYZ"]), Err("XYZ".to_string()));
		assert_eq!(CodePointSequence::from_hex_points(["D800"]), Err("D800".to_string()));
	}

	#[test]
	fn snapshot_round_trip() {
		let seq = CodePointSequence::from_hex_points(["1F468", "200D", "1F692"]).expect("valid scalars");
		let json = serde_json::to_string(&seq).expect("serializes");
		assert!(json.contains("\"num_bytes\":11"));
		let back: CodePointSequence = serde_json::from_str(&json).expect("deserializes");
		assert_eq!(back, seq);
	}
}
