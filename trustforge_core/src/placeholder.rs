use std::collections::BTreeMap;

use chrono::Local;

/// A token-name-to-value table driving one substitution pass.
///
/// A `BTreeMap` keeps iteration order deterministic, so repeated fills of the
/// same template with the same map are byte-identical.
pub type FieldMap = BTreeMap<String, String>;

/// The filler substituted for a key whose value is empty, so legal documents
/// keep a visible signing blank instead of silently losing the line.
pub const DEFAULT_FILLER: &str = "__________________";

/// Bracketed names that are literal UI checkbox glyphs (`[ ]`, `[x]`, `[X]`)
/// rather than fillable fields. These are never captured as placeholders.
pub const CHECKBOX_GLYPHS: &[&str] = &["x", "X", " "];

/// The reserved key injected with today's date when the caller's map omits it.
pub const DATE_KEY: &str = "Date";

/// Extract the distinct placeholder names from template content.
///
/// A placeholder is a `[`, a run of non-`]` characters, then a `]`. Captured
/// names are trimmed; single-character names and the checkbox glyphs are
/// discarded. The result is deduplicated and sorted lexicographically so that
/// form-field ordering is stable regardless of where a token first appears in
/// the text.
pub fn extract_placeholders(content: impl AsRef<str>) -> Vec<String> {
	let content = content.as_ref();
	let mut names: Vec<String> = vec![];
	let mut rest = content;

	while let Some(open) = rest.find('[') {
		let after_open = &rest[open + 1..];

		let Some(close) = after_open.find(']') else {
			break;
		};

		let raw = &after_open[..close];

		if raw.is_empty() {
			// `[]` is not a placeholder; keep scanning after the `[`.
			rest = after_open;
			continue;
		}

		let name = raw.trim();

		if name.chars().count() > 1 && !CHECKBOX_GLYPHS.contains(&name) {
			names.push(name.to_string());
		}

		rest = &after_open[close + 1..];
	}

	names.sort();
	names.dedup();
	names
}

/// Substitute every `[Key]` occurrence in `content` with the matching value
/// from the field map.
///
/// The caller's map is left untouched: `Date` defaulting happens on an
/// internal copy. An empty value substitutes [`DEFAULT_FILLER`] rather than an
/// empty string. Tokens with no entry in the map survive literally: the
/// assembler is responsible for supplying a complete map for the templates it
/// selects, and the engine never fails on gaps.
pub fn fill_template(content: impl AsRef<str>, data: &FieldMap) -> String {
	let mut data = data.clone();

	data.entry(DATE_KEY.to_string()).or_insert_with(today_long);

	let mut result = content.as_ref().to_string();

	for (key, value) in &data {
		let token = format!("[{key}]");
		let replacement = if value.is_empty() { DEFAULT_FILLER } else { value };
		result = result.replace(&token, replacement);
	}

	result
}

/// The placeholders in `content` that `fill_template` would leave unresolved
/// given this field map. Empty when the map (plus the automatic `Date` entry)
/// covers every token.
pub fn unresolved_placeholders(content: impl AsRef<str>, data: &FieldMap) -> Vec<String> {
	extract_placeholders(content)
		.into_iter()
		.filter(|name| name != DATE_KEY && !data.contains_key(name))
		.collect()
}

/// Today's date as a long-form month/day/year string, e.g. "January 5, 2025".
pub fn today_long() -> String {
	Local::now().format("%B %-d, %Y").to_string()
}
