use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

static TAG_GAP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r">\s+<").unwrap());

/// Collapse whitespace runs that sit between two tags.
///
/// Whitespace inside text runs is left alone. Whitespace-significant
/// content such as `<pre>` blocks in card bodies is not protected: a gap
/// between two tags inside it is collapsed like any other.
#[must_use]
pub fn minify_html(html: &str) -> Cow<'_, str> {
    TAG_GAP_RE.replace_all(html, "><")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_collapses_gaps_between_tags() {
        let html = "<table>\n  <tr>\n    <td>Hello world</td>\n  </tr>\n</table>";
        assert_eq!(
            minify_html(html),
            "<table><tr><td>Hello world</td></tr></table>"
        );
    }

    #[test]
    fn test_keeps_text_whitespace() {
        let html = "<p>Hello  <b>big</b>  world</p>";
        assert_eq!(minify_html(html), html);
    }

    #[test]
    fn test_pre_block_gaps_are_collapsed() {
        let html = "<pre><b>a</b>\n  <b>b</b></pre>";
        assert_eq!(minify_html(html), "<pre><b>a</b><b>b</b></pre>");
    }

    #[test]
    fn test_borrows_when_nothing_changes() {
        assert!(matches!(minify_html("<p>x</p>"), Cow::Borrowed(_)));
    }
}
