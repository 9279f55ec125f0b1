//! Line predicates shared by the scan and assembly passes.
//!
//! Both passes must classify lines identically, so the rules live here and
//! nowhere else. Inputs are bare line text without the terminator.

use crate::lines::LineEnding;

/// Title of a level-1 heading, or `None` when `line` is not one.
///
/// A level-1 heading is a single `#` followed by at least one whitespace
/// character, where the line terminator counts as whitespace. The title is
/// everything after that whitespace run, kept verbatim (trailing whitespace
/// included) and possibly empty.
pub fn chapter_title(line: &str, ending: LineEnding) -> Option<&str> {
    let rest = line.strip_prefix('#')?;
    if rest.is_empty() {
        return (ending != LineEnding::None).then_some(rest);
    }

    let title = rest.trim_start();
    if title.len() == rest.len() {
        return None;
    }
    Some(title)
}

/// Whether `line` is exactly a `<!-- toc -->` marker (whitespace around `toc` may vary).
pub fn is_toc_marker(line: &str) -> bool {
    let Some(inner) = line
        .strip_prefix("<!--")
        .and_then(|rest| rest.strip_suffix("-->"))
    else {
        return false;
    };

    let after_open = inner.trim_start();
    if after_open.len() == inner.len() {
        return false;
    }

    match after_open.strip_prefix("toc") {
        Some(before_close) => !before_close.is_empty() && before_close.trim_start().is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title(line: &str) -> Option<&str> {
        chapter_title(line, LineEnding::Lf)
    }

    #[test]
    fn captures_level_one_titles() {
        assert_eq!(title("# Introduction"), Some("Introduction"));
        assert_eq!(title("#\t  Tabbed"), Some("Tabbed"));
        assert_eq!(title("# Spaced title  "), Some("Spaced title  "));
        assert_eq!(title("# # nested"), Some("# nested"));
        assert_eq!(title("# "), Some(""));
    }

    #[test]
    fn rejects_deeper_and_malformed_headings() {
        assert_eq!(title("## Subsection"), None);
        assert_eq!(title("##Title"), None);
        assert_eq!(title("#Title"), None);
        assert_eq!(title(" # Indented"), None);
        assert_eq!(title("plain prose"), None);
        assert_eq!(title(""), None);
    }

    #[test]
    fn bare_hash_needs_a_line_terminator() {
        assert_eq!(chapter_title("#", LineEnding::Lf), Some(""));
        assert_eq!(chapter_title("#", LineEnding::CrLf), Some(""));
        assert_eq!(chapter_title("#", LineEnding::None), None);
        assert_eq!(
            chapter_title("# Last", LineEnding::None),
            Some("Last")
        );
    }

    #[test]
    fn recognises_toc_markers() {
        assert!(is_toc_marker("<!-- toc -->"));
        assert!(is_toc_marker("<!--   toc\t-->"));
    }

    #[test]
    fn rejects_near_miss_markers() {
        assert!(!is_toc_marker("<!--toc-->"));
        assert!(!is_toc_marker("<!-- toc-->"));
        assert!(!is_toc_marker("<!--toc -->"));
        assert!(!is_toc_marker("<!-- TOC -->"));
        assert!(!is_toc_marker("<!-- tocstop -->"));
        assert!(!is_toc_marker(" <!-- toc -->"));
        assert!(!is_toc_marker("<!-- toc --> "));
        assert!(!is_toc_marker("<!--  -->"));
        assert!(!is_toc_marker(""));
    }
}
