//! Text transformations applied when a record is put on screen.

/// Shown in place of a transaction hash the backend has not finalized yet.
pub const PENDING_HASH_LABEL: &str = "Pending";

/// Shown in place of a process time while an application is still pending.
pub const NOT_APPLICABLE: &str = "N/A";

const KEY_EDGE: usize = 5;

/// Shortens a publisher public key to its first and last five characters.
///
/// Keys shorter than ten characters are returned unchanged, since the
/// shortened form would be longer than the key itself. Counting is done on
/// `char`s so multi-byte input never splits a code point.
pub fn truncate_public_key(key: &str) -> String {
    let len = key.chars().count();
    if len < KEY_EDGE * 2 {
        return key.to_string();
    }

    let head: String = key.chars().take(KEY_EDGE).collect();
    let tail: String = key.chars().skip(len - KEY_EDGE).collect();
    format!("{head}...{tail}")
}

/// Renders an optional transaction hash, falling back to [`PENDING_HASH_LABEL`].
pub fn transaction_hash_label(hash: Option<&str>) -> &str {
    match hash {
        Some(hash) if !hash.is_empty() => hash,
        _ => PENDING_HASH_LABEL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_twenty_char_key() {
        assert_eq!(truncate_public_key("abcdefghij1234567890"), "abcde...67890");
    }

    #[test]
    fn truncation_keeps_exact_edges_for_any_long_key() {
        for len in 10..40 {
            let key: String = (0..len).map(|i| char::from(b'a' + (i % 26) as u8)).collect();
            let rendered = truncate_public_key(&key);
            let expected = format!("{}...{}", &key[..5], &key[len - 5..]);
            assert_eq!(rendered, expected, "length {len}");
        }
    }

    #[test]
    fn ten_char_key_is_split_in_half() {
        assert_eq!(truncate_public_key("0123456789"), "01234...56789");
    }

    #[test]
    fn short_keys_are_left_alone() {
        assert_eq!(truncate_public_key("abc"), "abc");
        assert_eq!(truncate_public_key(""), "");
    }

    #[test]
    fn multibyte_keys_do_not_panic() {
        assert_eq!(truncate_public_key("ñññññxxxxxééééé"), "ñññññ...ééééé");
    }

    #[test]
    fn missing_or_empty_hash_reads_pending() {
        assert_eq!(transaction_hash_label(None), "Pending");
        assert_eq!(transaction_hash_label(Some("")), "Pending");
        assert_eq!(transaction_hash_label(Some("0xabc")), "0xabc");
    }
}
