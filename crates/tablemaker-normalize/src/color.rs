//! Color token canonicalization.

/// Canonicalize a color token to lowercase `#rrggbb`.
///
/// Accepts bare hex (`fff`) and 3-digit shorthand; an empty value or a
/// bare `#` has no color, and anything that does not reduce to six hex
/// digits is unparsable. Returns `None` in both cases.
pub fn normalize_color(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == "#" {
        return None;
    }

    let lower = trimmed.to_lowercase();
    let hex = lower.strip_prefix('#').unwrap_or(&lower);

    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => return None,
    };

    if !expanded.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    Some(format!("#{expanded}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthand_expands() {
        assert_eq!(normalize_color("#ABC").as_deref(), Some("#aabbcc"));
        assert_eq!(normalize_color("fff").as_deref(), Some("#ffffff"));
    }

    #[test]
    fn canonical_values_pass_through() {
        assert_eq!(normalize_color("#ff0000").as_deref(), Some("#ff0000"));
        assert_eq!(normalize_color("#F00").as_deref(), Some("#ff0000"));
    }

    #[test]
    fn empty_and_bare_hash_have_no_color() {
        assert_eq!(normalize_color(""), None);
        assert_eq!(normalize_color("#"), None);
        assert_eq!(normalize_color("   "), None);
    }

    #[test]
    fn junk_is_unparsable() {
        assert_eq!(normalize_color("#ggg"), None);
        assert_eq!(normalize_color("red"), None);
        assert_eq!(normalize_color("#ff00"), None);
    }
}
