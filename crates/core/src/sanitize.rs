//! Identifier segment normalization.

/// Normalizes a raw string into a canonical identifier segment.
///
/// The rule: surrounding whitespace is trimmed, ASCII letters are
/// uppercased, `-` and interior whitespace become `_`, every other
/// character outside `[A-Z0-9_]` is dropped, and leading/trailing
/// underscores are stripped so joining segments with `_` never produces
/// a doubled or dangling separator. Interior underscores are preserved.
///
/// Total and idempotent: invalid input yields `""` rather than an
/// error, and sanitizing an already-sanitized string returns it
/// unchanged.
pub fn sanitize(raw: &str) -> String {
	let mut out = String::with_capacity(raw.len());
	for ch in raw.trim().chars() {
		match ch {
			'a'..='z' => out.push(ch.to_ascii_uppercase()),
			'A'..='Z' | '0'..='9' | '_' => out.push(ch),
			'-' => out.push('_'),
			c if c.is_whitespace() => out.push('_'),
			_ => {}
		}
	}
	out.trim_matches('_').to_string()
}

#[cfg(test)]
mod tests {
	use super::sanitize;

	#[test]
	fn uppercases_and_maps_separators() {
		assert_eq!(sanitize("port"), "PORT");
		assert_eq!(sanitize("max-retries"), "MAX_RETRIES");
		assert_eq!(sanitize("log level"), "LOG_LEVEL");
	}

	#[test]
	fn drops_invalid_characters() {
		assert_eq!(sanitize("cache%size!"), "CACHESIZE");
		assert_eq!(sanitize("???"), "");
	}

	#[test]
	fn strips_edge_underscores() {
		assert_eq!(sanitize("_inner_"), "INNER");
		assert_eq!(sanitize("--flag--"), "FLAG");
		assert_eq!(sanitize("a__b"), "A__B");
	}

	#[test]
	fn empty_and_whitespace_yield_empty() {
		assert_eq!(sanitize(""), "");
		assert_eq!(sanitize("   \t "), "");
	}

	#[test]
	fn idempotent() {
		for raw in [
			"port",
			"max-retries",
			"  spaced out  ",
			"_X_",
			"Ünïcode-bits",
			"a__b",
			"",
			"v2.0-rc1",
		] {
			let once = sanitize(raw);
			assert_eq!(sanitize(&once), once, "not idempotent for {raw:?}");
		}
	}
}
