//! Card and closures renderers.
//!
//! Each renderer turns one block into a self-contained `<table>` fragment.
//! Card dispatch is an exhaustive match on [`CardKind`].

use std::fmt::Write;

use bulletin_model::{Card, CardKind, Closure, Link, Section};

use crate::RenderContext;
use crate::palette::{STYLE_IMAGE, STYLE_TABLE};
use crate::style::{card_style, resolve_padding};
use crate::text::escape_text;

/// Opening of a full-width layout table.
fn open_table(html: &mut String, style: &str) {
    let _ = write!(
        html,
        "<table cellpadding=\"0\" cellspacing=\"0\" role=\"presentation\" width=\"100%\" style=\"{style}\">\n  <tr>\n"
    );
}

fn close_table(html: &mut String) {
    html.push_str("  </tr>\n</table>");
}

/// Render one card of a section.
pub(crate) fn render_card(ctx: &RenderContext<'_>, card: &Card, section: Option<&Section>) -> String {
    match card.kind {
        CardKind::Standard => render_standard(ctx, card, section),
        CardKind::Event => render_event(ctx, card, section),
        CardKind::Resource => render_resource(ctx, card, section),
        CardKind::Cta => render_cta(ctx, card, section),
    }
}

/// Render a card's links.
///
/// Links without both a label and a URL are dropped. A single survivor is
/// rendered inline, two or more become a bulleted list.
pub(crate) fn render_links(links: &[Link], link_style: &str) -> String {
    let anchors: Vec<String> = links
        .iter()
        .filter_map(Link::usable)
        .map(|(label, url)| {
            format!(
                "<a href=\"{}\" style=\"{link_style}\">{}</a>",
                escape_text(url),
                escape_text(label)
            )
        })
        .collect();

    match anchors.len() {
        0 => String::new(),
        1 => anchors.join(" | "),
        _ => {
            let mut html = String::from(
                "<ul style=\"margin: 8px 0 0 0; padding-left: 20px; font-size: 14px; line-height: 1.8;\">",
            );
            for anchor in &anchors {
                let _ = write!(html, "<li>{anchor}</li>");
            }
            html.push_str("</ul>");
            html
        }
    }
}

/// Location, date and time line. Empty when no field is set.
fn render_meta(card: &Card, meta_style: &str) -> String {
    let items: Vec<String> = [
        ("Location", &card.location),
        ("Date", &card.date),
        ("Time", &card.time),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(label, value)| format!("<strong>{label}:</strong> {}", escape_text(value)))
    .collect();

    meta_paragraph(&items, meta_style)
}

fn meta_paragraph(items: &[String], meta_style: &str) -> String {
    if items.is_empty() {
        return String::new();
    }
    format!("<p style=\"{meta_style}\">{}</p>", items.join("<br />"))
}

/// Title, body, meta and links of a text card, one part per line.
struct CardContent {
    parts: Vec<String>,
}

impl CardContent {
    fn new() -> Self {
        Self { parts: Vec::new() }
    }

    fn push(&mut self, part: String) {
        if !part.is_empty() {
            self.parts.push(part);
        }
    }

    fn title(&mut self, ctx: &RenderContext<'_>, title: &str) {
        if !title.is_empty() {
            self.push(format!(
                "<h3 style=\"{}\">{}</h3>",
                ctx.palette.h3,
                escape_text(title)
            ));
        }
    }

    fn body(&mut self, ctx: &RenderContext<'_>, body_html: &str) {
        if !body_html.is_empty() {
            self.push(format!(
                "<div style=\"{}\">{body_html}</div>",
                ctx.palette.body_text
            ));
        }
    }

    fn finish(self) -> String {
        self.parts.join("\n")
    }
}

fn render_standard(ctx: &RenderContext<'_>, card: &Card, section: Option<&Section>) -> String {
    let mut content = CardContent::new();
    content.title(ctx, &card.title);
    content.body(ctx, &card.body_html);
    content.push(render_meta(card, &ctx.palette.meta));
    content.push(render_links(&card.links, &ctx.palette.link));

    accented_card(ctx, card, section, &content.finish())
}

/// Event cards lead with the location and keep only date and time in the meta line.
fn render_event(ctx: &RenderContext<'_>, card: &Card, section: Option<&Section>) -> String {
    let mut content = CardContent::new();
    if !card.location.is_empty() {
        content.push(format!(
            "<p style=\"{}\">{}</p>",
            ctx.palette.location_label,
            escape_text(&card.location)
        ));
    }
    content.title(ctx, &card.title);
    content.body(ctx, &card.body_html);

    let when: Vec<String> = [&card.date, &card.time]
        .into_iter()
        .filter(|value| !value.is_empty())
        .map(|value| escape_text(value).into_owned())
        .collect();
    content.push(meta_paragraph(&when, &ctx.palette.meta));
    content.push(render_links(&card.links, &ctx.palette.link));

    accented_card(ctx, card, section, &content.finish())
}

/// Card table with the primary-colored accent bar on the left.
fn accented_card(
    ctx: &RenderContext<'_>,
    card: &Card,
    section: Option<&Section>,
    content: &str,
) -> String {
    let padding = resolve_padding(card, section, Some(ctx.settings));
    let mut html = String::with_capacity(content.len() + 512);
    open_table(&mut html, &card_style(card, &ctx.config.card));
    let _ = write!(
        html,
        "    <td style=\"{}\"></td>\n    <td style=\"{}\">\n      {content}\n    </td>\n",
        ctx.palette.card_accent,
        padding.css()
    );
    close_table(&mut html);
    html
}

/// Resource card. The icon column appears only when the icon is enabled and
/// has a URL; otherwise the card renders as one cell without the accent bar.
fn render_resource(ctx: &RenderContext<'_>, card: &Card, section: Option<&Section>) -> String {
    let mut content = CardContent::new();
    content.title(ctx, &card.title);
    content.body(ctx, &card.body_html);
    content.push(render_meta(card, &ctx.palette.meta));
    content.push(render_links(&card.links, &ctx.palette.link));
    let text_content = content.finish();

    let padding = resolve_padding(card, section, Some(ctx.settings));
    let icon = &card.icon;
    let mut html = String::with_capacity(text_content.len() + 1024);
    open_table(&mut html, &card_style(card, &ctx.config.card));

    if icon.show_icon && !icon.icon_url.is_empty() {
        let size = icon.icon_size.unwrap_or(80);
        let _ = write!(
            html,
            "    <td style=\"{padding}\">\n      <table cellpadding=\"0\" cellspacing=\"0\" role=\"presentation\" width=\"100%\" style=\"{STYLE_TABLE}\">\n        <tr>\n",
            padding = padding.css()
        );
        let _ = write!(
            html,
            "          <td style=\"width:{size}px; padding-right:15px; vertical-align:middle; text-align:center;\">\n            <img src=\"{}\" alt=\"{}\" width=\"{size}\" height=\"{size}\" style=\"width:{size}px; height:{size}px; border-radius:6px; {STYLE_IMAGE}\" />\n          </td>\n",
            escape_text(&icon.icon_url),
            escape_text(&icon.icon_alt)
        );
        let _ = write!(
            html,
            "          <td style=\"vertical-align:middle;\">\n            {text_content}\n          </td>\n        </tr>\n      </table>\n    </td>\n"
        );
    } else {
        let _ = write!(
            html,
            "    <td style=\"{}\">\n      {text_content}\n    </td>\n",
            padding.css()
        );
    }

    close_table(&mut html);
    html
}

/// Keep an alignment keyword only when it is one of `left`, `center`, `right`.
pub(crate) fn valid_alignment(value: Option<&str>) -> Option<&str> {
    value.filter(|align| matches!(*align, "left" | "center" | "right"))
}

/// Call-to-action card with a button built from the card's own styling.
fn render_cta(ctx: &RenderContext<'_>, card: &Card, section: Option<&Section>) -> String {
    let defaults = &ctx.config.cta;
    let button = &card.button;

    let first = card.links.first();
    let label = first
        .map(|link| link.label.as_str())
        .filter(|label| !label.is_empty())
        .unwrap_or("Learn more");
    let url = first
        .map(|link| link.url.as_str())
        .filter(|url| !url.is_empty())
        .unwrap_or("#");

    let bg_color = button.button_bg_color.as_deref().unwrap_or(&defaults.bg_color);
    let text_color = button
        .button_text_color
        .as_deref()
        .unwrap_or(&defaults.text_color);
    let pad_v = button
        .button_padding_vertical
        .unwrap_or(defaults.padding_vertical);
    let pad_h = button
        .button_padding_horizontal
        .unwrap_or(defaults.padding_horizontal);
    let border_width = button.button_border_width.unwrap_or(defaults.border_width);
    let border_color = button
        .button_border_color
        .as_deref()
        .unwrap_or(&defaults.border_color);
    let radius = button
        .button_border_radius
        .unwrap_or(defaults.border_radius);
    let full_width = button.button_full_width.unwrap_or(defaults.full_width);

    let border = if border_width > 0 {
        format!("{border_width}px solid {border_color}")
    } else {
        "none".to_owned()
    };
    let (width, display) = if full_width {
        ("100%", "block")
    } else {
        ("auto", "inline-block")
    };
    let text_align = valid_alignment(button.text_alignment.as_deref()).unwrap_or("left");
    let button_align = valid_alignment(button.button_alignment.as_deref())
        .or_else(|| valid_alignment(Some(defaults.alignment.as_str())))
        .unwrap_or("center");

    let button_style = format!(
        "background-color:{bg_color} !important; border-radius:{radius}px; border:{border}; color:{text_color} !important; display:{display}; font-weight:bold; font-size:16px; line-height:20px; text-align:center; text-decoration:none; padding:{pad_v}px {pad_h}px; margin-top:24px; margin-bottom:8px; width:{width};"
    );

    let padding = resolve_padding(card, section, Some(ctx.settings));
    let mut html = String::with_capacity(card.body_html.len() + 1024);
    open_table(&mut html, &card_style(card, &ctx.config.card));
    let _ = writeln!(html, "    <td style=\"{}\">", padding.css());
    let _ = writeln!(
        html,
        "      <h2 style=\"{} margin:0 0 16px 0; text-align:{text_align};\">{}</h2>",
        ctx.palette.h2,
        escape_text(&card.title)
    );
    let _ = writeln!(
        html,
        "      <div style=\"{} margin:0 0 8px 0; text-align:{text_align};\">{}</div>",
        ctx.palette.body_text, card.body_html
    );
    let _ = writeln!(
        html,
        "      <div style=\"text-align: {button_align};\">\n        <a href=\"{}\" data-role=\"cta\" style=\"{button_style}\">{}</a>\n      </div>",
        escape_text(url),
        escape_text(label)
    );
    html.push_str("    </td>\n");
    close_table(&mut html);
    html
}

/// Closures list. Entries with neither date nor reason are skipped and an
/// empty list renders nothing.
pub(crate) fn render_closures(ctx: &RenderContext<'_>, closures: &[Closure]) -> String {
    let items: Vec<String> = closures
        .iter()
        .map(|closure| (closure.date.trim(), closure.reason.trim()))
        .filter(|(date, reason)| !date.is_empty() || !reason.is_empty())
        .map(|(date, reason)| {
            format!(
                "<li>{} – {}</li>",
                escape_text(date),
                escape_text(reason)
            )
        })
        .collect();

    if items.is_empty() {
        return String::new();
    }

    let mut html = String::with_capacity(items.len() * 64 + 512);
    open_table(
        &mut html,
        &format!(
            "{STYLE_TABLE} background-color:{}; margin-bottom:20px;",
            ctx.palette.bg_card
        ),
    );
    let _ = write!(
        html,
        "    <td style=\"padding:20px;\">\n      <ul style=\"margin:10px 0 0 0; padding:0 0 0 20px;\">\n        {}\n      </ul>\n    </td>\n",
        items.join("\n")
    );
    close_table(&mut html);
    html
}
