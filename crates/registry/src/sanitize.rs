//! Line sanitizing shared by both registry parsers.

/// Prepares raw registry text for field extraction.
///
/// Drops lines that are empty after trimming or start with `#`, and
/// normalizes the smart-quote characters U+2018/U+2019 and U+201C/U+201D to
/// their ASCII equivalents. Line order is preserved. Malformed non-empty
/// lines pass through untouched; rejecting them is the parsers' job.
pub fn sanitized_lines(raw: &str) -> Vec<String> {
	raw.lines()
		.map(str::trim)
		.filter(|line| !line.is_empty() && !line.starts_with('#'))
		.map(|line| {
			line.replace(['\u{2018}', '\u{2019}'], "'")
				.replace(['\u{201C}', '\u{201D}'], "\"")
		})
		.collect()
}
