//! Escaping and HTML-to-text helpers.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Matches runs of three or more newlines.
static BLANK_LINES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Matches an `href` attribute with double, single or no quotes.
static HREF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(?:^|\s)href\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#).unwrap()
});

/// Escape text for HTML content and attribute values.
///
/// Escapes `&`, `<`, `>`, `"` and `'`.
///
/// # Examples
///
/// ```
/// use bulletin_render::escape_text;
///
/// assert_eq!(escape_text("Tom & \"Jerry\""), "Tom &amp; &quot;Jerry&quot;");
/// ```
pub fn escape_text(value: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(value)
}

/// Convert a rich-text HTML fragment to plain text.
///
/// Line breaks become newlines, paragraphs and headings become blank-line
/// separated blocks and links render as `text [href]` (the href is left out
/// when empty or `#`). Script and style content is dropped and entities are
/// decoded. Malformed markup never fails: an unclosed link is closed at the
/// end of input and a truncated tag is discarded.
///
/// # Examples
///
/// ```
/// use bulletin_render::html_to_plain_text;
///
/// let text = html_to_plain_text(r#"<p>See <a href="https://wsu.edu">WSU</a></p><p>Bye</p>"#);
/// assert_eq!(text, "See WSU [https://wsu.edu]\n\nBye");
/// ```
pub fn html_to_plain_text(html: &str) -> String {
    let mut text = TextBuffer::default();
    let mut open_link: Option<String> = None;
    let mut rest = html;

    while !rest.is_empty() {
        let Some(lt) = rest.find('<') else {
            text.push_text(rest);
            break;
        };
        text.push_text(&rest[..lt]);
        rest = &rest[lt..];

        if let Some(after) = rest.strip_prefix("<!--") {
            rest = after.find("-->").map_or("", |end| &after[end + 3..]);
            continue;
        }

        let starts_markup = rest[1..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '/' || c == '!');
        if !starts_markup {
            text.push_text("<");
            rest = &rest[1..];
            continue;
        }

        let Some(gt) = rest.find('>') else {
            break;
        };
        let tag = Tag::parse(&rest[1..gt]);
        rest = &rest[gt + 1..];

        match (tag.name.as_str(), tag.closing) {
            ("br", _) => text.push_break("\n"),
            ("p" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6", false) => text.push_break("\n\n"),
            ("p" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6", true) => text.push_break("\n"),
            ("a", false) => open_link = Some(tag.href.unwrap_or_default()),
            ("a", true) => {
                if let Some(href) = open_link.take() {
                    text.push_href(&href);
                }
            }
            ("script" | "style", false) => rest = skip_raw_text(rest, &tag.name),
            _ => {}
        }
    }

    if let Some(href) = open_link {
        text.push_href(&href);
    }

    BLANK_LINES_RE
        .replace_all(&text.out, "\n\n")
        .trim()
        .to_owned()
}

/// Skip the body of a raw-text element up to and including its end tag.
fn skip_raw_text<'a>(rest: &'a str, name: &str) -> &'a str {
    let end_tag = format!("</{name}");
    let Some(start) = rest.to_ascii_lowercase().find(&end_tag) else {
        return "";
    };
    let after = &rest[start..];
    after.find('>').map_or("", |gt| &after[gt + 1..])
}

/// A parsed start or end tag.
struct Tag {
    name: String,
    closing: bool,
    href: Option<String>,
}

impl Tag {
    /// Parse the inside of `<...>`.
    fn parse(inner: &str) -> Self {
        let (closing, body) = match inner.strip_prefix('/') {
            Some(body) => (true, body),
            None => (false, inner),
        };
        let name_len = body
            .find(|c: char| !c.is_ascii_alphanumeric())
            .unwrap_or(body.len());
        let name = body[..name_len].to_ascii_lowercase();
        let attrs = &body[name_len..];

        let href = (name == "a" && !closing)
            .then(|| HREF_RE.captures(attrs))
            .flatten()
            .and_then(|caps| caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3)))
            .map(|m| html_escape::decode_html_entities(m.as_str()).trim().to_owned());

        Self {
            name,
            closing,
            href,
        }
    }
}

/// Output buffer that collapses whitespace between text runs.
#[derive(Default)]
struct TextBuffer {
    out: String,
    pending_space: bool,
}

impl TextBuffer {
    fn push_text(&mut self, raw: &str) {
        if raw.is_empty() {
            return;
        }
        let decoded = html_escape::decode_html_entities(raw);
        let mut words = decoded.split_whitespace().peekable();
        if words.peek().is_none() {
            self.pending_space = true;
            return;
        }

        if decoded.starts_with(char::is_whitespace) {
            self.pending_space = true;
        }
        if self.pending_space && !self.out.is_empty() && !self.out.ends_with(char::is_whitespace)
        {
            self.out.push(' ');
        }

        for (i, word) in words.enumerate() {
            if i > 0 {
                self.out.push(' ');
            }
            self.out.push_str(word);
        }
        self.pending_space = decoded.ends_with(char::is_whitespace);
    }

    fn push_break(&mut self, separator: &str) {
        self.out.push_str(separator);
        self.pending_space = false;
    }

    fn push_href(&mut self, href: &str) {
        if !href.is_empty() && href != "#" {
            self.out.push_str(" [");
            self.out.push_str(href);
            self.out.push(']');
            self.pending_space = false;
        }
    }
}
