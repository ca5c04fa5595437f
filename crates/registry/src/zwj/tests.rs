use pretty_assertions::assert_eq;

use super::*;
use crate::sanitize::sanitized_lines;

fn parse(raw: &str) -> Result<SequenceRegistry> {
	parse_sequence_registry(&sanitized_lines(raw))
}

#[test]
fn parses_man_firefighter() {
	let raw = "1F468 200D 1F692 ; RGI_Emoji_ZWJ_Sequence ; man firefighter # E4.0 [1] (👨‍🚒)";
	let registry = parse(raw).expect("should parse");
	assert_eq!(registry.len(), 1);

	let record = &registry["man firefighter"];
	assert_eq!(record.glyph, "👨‍🚒");
	assert_eq!(record.version, "E4.0");
	assert_eq!(record.code_points.points(), ["1F468", "200D", "1F692"]);
	assert_eq!(record.code_points.byte_len(), 11);
}

#[test]
fn tolerates_missing_space_before_variation_count() {
	let raw = "1F3F4 200D 2620 FE0F ; RGI_Emoji_ZWJ_Sequence ; pirate flag # E11.0[1] (🏴‍☠️)";
	let registry = parse(raw).expect("should parse");
	assert_eq!(registry["pirate flag"].version, "E11.0");
}

#[test]
fn duplicate_name_is_fatal() {
	let raw = "\
1F48F ; RGI_Emoji_ZWJ_Sequence ; kiss # E2.0 [1] (💏)
1F469 200D 2764 FE0F 200D 1F48B 200D 1F468 ; RGI_Emoji_ZWJ_Sequence ; kiss # E2.0 [1] (👩‍❤️‍💋‍👨)
";
	let err = parse(raw).expect_err("should fail");
	assert!(matches!(err, RegistryError::DuplicateName { ref name } if name == "kiss"));
}

#[test]
fn missing_third_field_is_malformed() {
	let err = parse("1F468 200D 1F692 ; RGI_Emoji_ZWJ_Sequence # E4.0 [1] (👨‍🚒)")
		.expect_err("should fail");
	assert!(matches!(err, RegistryError::MalformedLine { .. }));
}

#[test]
fn comment_without_count_is_malformed() {
	let err = parse("1F468 200D 1F692 ; RGI_Emoji_ZWJ_Sequence ; man firefighter # E4.0 (👨‍🚒)")
		.expect_err("should fail");
	assert!(matches!(err, RegistryError::MalformedLine { .. }));
}

#[test]
fn invalid_code_point_reports_field() {
	let err = parse("1F468 BADHEX ; RGI_Emoji_ZWJ_Sequence ; x # E4.0 [1] (y)")
		.expect_err("should fail");
	assert!(matches!(err, RegistryError::InvalidCodePoint { ref point, .. } if point == "BADHEX"));
}
