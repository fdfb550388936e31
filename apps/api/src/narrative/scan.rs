//! Byte-offset text helpers shared by the narrative parsers.
//!
//! Case-insensitive searches lowercase ASCII only, so offsets found in the
//! lowered copy are valid offsets into the input.

/// Splits on blank lines exactly (`"\n\n"`), keeping empty paragraphs.
pub fn paragraphs(text: &str) -> Vec<&str> {
    text.split("\n\n").collect()
}

pub fn strip_bold(text: &str) -> String {
    text.replace("**", "")
}

/// Largest char boundary `<= idx`.
pub fn floor_boundary(text: &str, idx: usize) -> usize {
    let mut idx = idx.min(text.len());
    while !text.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

/// Smallest char boundary `>= idx`.
pub fn ceil_boundary(text: &str, idx: usize) -> usize {
    let mut idx = idx.min(text.len());
    while !text.is_char_boundary(idx) {
        idx += 1;
    }
    idx
}

/// Slice of `text` spanning `before` bytes ahead of `at` to `after` bytes past
/// it, widened to the nearest char boundaries.
pub fn window(text: &str, at: usize, before: usize, after: usize) -> &str {
    let start = floor_boundary(text, at.saturating_sub(before));
    let end = ceil_boundary(text, at.saturating_add(after));
    &text[start..end]
}

/// Every start offset of `needle` in `haystack`, overlapping occurrences included.
pub fn positions_ci(haystack: &str, needle: &str) -> Vec<usize> {
    let haystack = haystack.to_ascii_lowercase();
    let needle = needle.to_ascii_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    let mut out = Vec::new();
    let mut from = 0;
    while let Some(found) = haystack[from..].find(&needle) {
        let pos = from + found;
        out.push(pos);
        from = ceil_boundary(&haystack, pos + 1);
        if from >= haystack.len() {
            break;
        }
    }
    out
}

/// Number of non-overlapping, case-insensitive occurrences of `needle`.
pub fn count_ci(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack
        .to_ascii_lowercase()
        .matches(&needle.to_ascii_lowercase())
        .count()
}

pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack
        .to_ascii_lowercase()
        .contains(&needle.to_ascii_lowercase())
}

/// Text following `label` up to `terminator` (exclusive) or the end of input.
/// `label` is matched case-sensitively at its first occurrence.
pub fn labelled_section<'a>(text: &'a str, label: &str, terminator: &str) -> Option<&'a str> {
    let start = text.find(label)? + label.len();
    let rest = &text[start..];
    let end = rest.find(terminator).unwrap_or(rest.len());
    Some(&rest[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_keeps_empty_segments() {
        assert_eq!(paragraphs("a\n\nb\n\n\n\nc"), vec!["a", "b", "", "c"]);
    }

    #[test]
    fn test_window_clamps_at_edges() {
        let text = "0123456789";
        assert_eq!(window(text, 2, 5, 3), "01234");
        assert_eq!(window(text, 8, 2, 50), "6789");
    }

    #[test]
    fn test_window_respects_multibyte_boundaries() {
        // "é" is two bytes; a naive slice at byte 1 would panic.
        let text = "éxpert Rust";
        let w = window(text, 8, 7, 3);
        assert!(w.contains("Rust") || w.contains("Ru"));
        assert!(w.starts_with('é'));
    }

    #[test]
    fn test_positions_ci_finds_overlapping_matches() {
        assert_eq!(positions_ci("aaa", "aa"), vec![0, 1]);
        assert_eq!(positions_ci("Learn and LEARN", "learn"), vec![0, 10]);
        assert!(positions_ci("nothing", "zzz").is_empty());
    }

    #[test]
    fn test_count_ci_is_non_overlapping() {
        assert_eq!(count_ci("Strong, STRONG and strongly", "strong"), 3);
        assert_eq!(count_ci("aaaa", "aa"), 2);
    }

    #[test]
    fn test_labelled_section_stops_at_terminator() {
        let text = "**Keywords Missing:** Docker. Kubernetes.\n\n**Final Thoughts:** Good.";
        assert_eq!(
            labelled_section(text, "Keywords Missing:", "\n\n**"),
            Some("** Docker. Kubernetes.")
        );
        assert_eq!(
            labelled_section(text, "Final Thoughts:", "\n\n**"),
            Some("** Good.")
        );
        assert_eq!(labelled_section(text, "Strengths:", "\n\n**"), None);
    }
}
