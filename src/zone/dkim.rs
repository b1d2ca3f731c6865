//! Splitting of long DKIM key material into TXT character-strings.
//!
//! A TXT character-string holds at most 255 octets, so DKIM public keys are
//! written as several adjacent quoted strings on one line, the way BIND
//! prints them.

use super::constants::MAX_CHARACTER_STRING;

/// Remove one leading and one trailing quote character (`"` or `'`)
pub fn strip_outer_quotes(value: &str) -> &str {
    let value = value
        .strip_prefix(['"', '\''])
        .unwrap_or(value);
    value.strip_suffix(['"', '\'']).unwrap_or(value)
}

/// Strip quotes and collapse every whitespace run to a single space
pub fn clean_key_material(value: &str) -> String {
    strip_outer_quotes(value)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split `value` into chunks of at most `size` characters
pub fn split_chunks(value: &str, size: usize) -> Vec<String> {
    let chars: Vec<char> = value.chars().collect();
    chars
        .chunks(size.max(1))
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Render a DKIM value as space-separated quoted character-strings.
///
/// An empty value renders as an empty string.
pub fn encode_dkim(value: &str) -> String {
    split_chunks(&clean_key_material(value), MAX_CHARACTER_STRING)
        .iter()
        .map(|chunk| format!("\"{}\"", chunk))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_outer_quotes() {
        assert_eq!(strip_outer_quotes("\"abc\""), "abc");
        assert_eq!(strip_outer_quotes("'abc'"), "abc");
        assert_eq!(strip_outer_quotes("\"abc"), "abc");
        assert_eq!(strip_outer_quotes("\"\"abc\"\""), "\"abc\"");
        assert_eq!(strip_outer_quotes("\""), "");
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(
            clean_key_material("\"v=DKIM1;  k=rsa;\n p=MIIB \""),
            "v=DKIM1; k=rsa; p=MIIB"
        );
    }

    #[test]
    fn test_short_key_single_chunk() {
        assert_eq!(encode_dkim("v=DKIM1; p=abc"), "\"v=DKIM1; p=abc\"");
    }

    #[test]
    fn test_empty_key_no_chunks() {
        assert_eq!(encode_dkim(""), "");
        assert_eq!(encode_dkim("\"  \""), "");
    }

    #[test]
    fn test_chunking_counts_characters() {
        let value = "é".repeat(300);
        let chunks = split_chunks(&value, MAX_CHARACTER_STRING);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].chars().count(), 255);
        assert_eq!(chunks[1].chars().count(), 45);
    }
}
