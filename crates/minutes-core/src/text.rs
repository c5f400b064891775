//! UTF-8–safe string truncation utilities.
//!
//! Rust `&str[..n]` panics when `n` falls inside a multi-byte character.
//! These helpers find the nearest char boundary so truncation is always safe.
//! Used for transcript previews in log lines and for windowing long
//! transcripts before summarization.

/// Truncate a string to at most `max_bytes` bytes at a char boundary.
///
/// Returns the longest prefix of `s` whose byte length is ≤ `max_bytes`
/// and that does not split a multi-byte character.
#[inline]
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    // `floor_char_boundary` is nightly-only, so implement it ourselves.
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Truncate `s` and append a suffix (e.g. `"..."`) if the original exceeds `max_bytes`.
///
/// The returned string is at most `max_bytes` bytes long (including the suffix).
/// If the string fits, it is returned as-is with no allocation.
pub fn truncate_with_suffix(s: &str, max_bytes: usize, suffix: &str) -> String {
    if s.len() <= max_bytes {
        return s.to_owned();
    }
    let body_budget = max_bytes.saturating_sub(suffix.len());
    let prefix = truncate_str(s, body_budget);
    format!("{prefix}{suffix}")
}

/// Split `s` into windows of at most `max_bytes` bytes at char boundaries.
///
/// Windows are contiguous and cover the whole string. An empty string
/// yields no windows. `max_bytes == 0` is treated as 1 to guarantee progress.
pub fn char_windows(s: &str, max_bytes: usize) -> Vec<&str> {
    let max_bytes = max_bytes.max(1);
    let mut out = Vec::new();
    let mut rest = s;
    while !rest.is_empty() {
        let head = truncate_str(rest, max_bytes);
        // A multi-byte char wider than the window would stall; take it whole.
        let head = if head.is_empty() {
            let ch_len = rest.chars().next().map_or(rest.len(), char::len_utf8);
            &rest[..ch_len]
        } else {
            head
        };
        out.push(head);
        rest = &rest[head.len()..];
    }
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── truncate_str ─────────────────────────────────────────────────────

    #[test]
    fn ascii_within_limit() {
        assert_eq!(truncate_str("hello", 10), "hello");
    }

    #[test]
    fn ascii_truncated() {
        assert_eq!(truncate_str("hello world", 5), "hello");
    }

    #[test]
    fn empty_string() {
        assert_eq!(truncate_str("", 5), "");
    }

    #[test]
    fn zero_max() {
        assert_eq!(truncate_str("hello", 0), "");
    }

    #[test]
    fn multibyte_boundary_snaps_back() {
        // 'é' (U+00E9) is 2 bytes: c(0) a(1) f(2) é(3,4)
        let s = "café";
        assert_eq!(truncate_str(s, 4), "caf");
        assert_eq!(truncate_str(s, 5), "café");
    }

    #[test]
    fn emoji_4_byte() {
        let s = "hi🦀bye";
        assert_eq!(truncate_str(s, 3), "hi"); // inside emoji
        assert_eq!(truncate_str(s, 6), "hi🦀");
    }

    // ── truncate_with_suffix ─────────────────────────────────────────────

    #[test]
    fn suffix_fits() {
        assert_eq!(truncate_with_suffix("hello", 10, "..."), "hello");
    }

    #[test]
    fn suffix_truncates_ascii() {
        assert_eq!(truncate_with_suffix("hello world", 8, "..."), "hello...");
    }

    #[test]
    fn suffix_very_short_max() {
        assert_eq!(truncate_with_suffix("hello", 2, "..."), "...");
    }

    // ── char_windows ─────────────────────────────────────────────────────

    #[test]
    fn windows_empty() {
        assert!(char_windows("", 4).is_empty());
    }

    #[test]
    fn windows_single() {
        assert_eq!(char_windows("abc", 10), vec!["abc"]);
    }

    #[test]
    fn windows_exact_split() {
        assert_eq!(char_windows("abcdef", 2), vec!["ab", "cd", "ef"]);
    }

    #[test]
    fn windows_cover_input() {
        let s = "Speaker 1: hello — Speaker 2: goodbye 🦀";
        let joined: String = char_windows(s, 7).concat();
        assert_eq!(joined, s);
    }

    #[test]
    fn windows_never_split_chars() {
        let s = "ééééé";
        for w in char_windows(s, 3) {
            assert!(w.chars().all(|c| c == 'é'));
        }
    }

    #[test]
    fn windows_zero_max_still_terminates() {
        assert_eq!(char_windows("ab", 0), vec!["a", "b"]);
    }

    #[test]
    fn windows_char_wider_than_window() {
        // 4-byte emoji with a 1-byte window must still make progress.
        assert_eq!(char_windows("🦀", 1), vec!["🦀"]);
    }
}
