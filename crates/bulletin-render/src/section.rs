//! Section composer.

use std::fmt::Write;

use bulletin_model::{Section, SectionLayout};

use crate::RenderContext;
use crate::blocks::{render_card, render_closures, valid_alignment};
use crate::palette::STYLE_TABLE;
use crate::text::escape_text;

/// Render a section: heading, cards (or closures list) and bottom divider.
///
/// `spacing` is the document-wide space above the heading, used unless the
/// section layout sets `divider_spacing` itself. The divider is left out for
/// the last section, when the layout disables it, or when `show_borders` is
/// false. A blank title suppresses the heading element.
pub(crate) fn compose_section(
    ctx: &RenderContext<'_>,
    section: &Section,
    spacing: u32,
    show_borders: bool,
    is_last: bool,
) -> String {
    let defaults = &ctx.config.section;
    let default_layout = SectionLayout::default();
    let layout = section.layout.as_ref().unwrap_or(&default_layout);

    let spacing = layout.divider_spacing.unwrap_or(spacing);
    let title_align = valid_alignment(layout.title_align.as_deref()).unwrap_or("left");
    let padding_top = layout.padding_top.unwrap_or(defaults.padding_top);
    let padding_bottom = layout.padding_bottom.unwrap_or(defaults.padding_bottom);
    let background = layout
        .background_color
        .as_deref()
        .unwrap_or(&defaults.background_color);
    let border_radius = layout.border_radius.unwrap_or(defaults.border_radius);
    let divider_enabled = layout.divider_enabled.unwrap_or(defaults.divider_enabled);
    let divider_thickness = layout
        .divider_thickness
        .unwrap_or(defaults.divider_thickness);
    let divider_color = layout
        .divider_color
        .as_deref()
        .unwrap_or(&defaults.divider_color);

    let mut container_style =
        format!("{STYLE_TABLE} padding-top:{padding_top}px; padding-bottom:{padding_bottom}px;");
    if show_borders && divider_enabled && !is_last {
        let _ = write!(
            container_style,
            " border-bottom:{divider_thickness}px solid {divider_color};"
        );
    }
    if !background.is_empty() {
        let _ = write!(container_style, " background-color:{background};");
    }
    if border_radius > 0 {
        let _ = write!(container_style, " border-radius:{border_radius}px;");
    }

    let mut html = String::with_capacity(4096);
    let _ = write!(
        html,
        "<table cellpadding=\"0\" cellspacing=\"0\" role=\"presentation\" width=\"100%\" style=\"{container_style}\">\n  <tr>\n    <td>"
    );
    if !section.title.trim().is_empty() {
        let _ = write!(
            html,
            "\n      <h2 style=\"{} margin-top:{spacing}px; text-align:{title_align};\">{}</h2>",
            ctx.palette.h2,
            escape_text(&section.title)
        );
    }
    html.push('\n');

    if section.is_closures() {
        html.push_str(&render_closures(ctx, &section.closures));
    } else {
        let cards: Vec<String> = section
            .cards
            .iter()
            .map(|card| render_card(ctx, card, Some(section)))
            .collect();
        html.push_str(&cards.join("\n"));
    }

    html.push_str("\n    </td>\n  </tr>\n</table>");
    html
}

#[cfg(test)]
mod tests {
    use bulletin_config::Config;
    use bulletin_model::{Card, Closure, Settings};

    use super::*;

    fn compose(section: &Section, show_borders: bool, is_last: bool) -> String {
        let config = Config::default();
        let settings = Settings::default();
        let ctx = RenderContext::new(&config, &settings);
        compose_section(&ctx, section, 24, show_borders, is_last)
    }

    fn titled(title: &str) -> Section {
        Section {
            key: "news".to_owned(),
            title: title.to_owned(),
            cards: vec![Card {
                title: "Item".to_owned(),
                ..Card::default()
            }],
            ..Section::default()
        }
    }

    #[test]
    fn test_heading_and_divider() {
        let html = compose(&titled("Deadlines"), true, false);
        assert!(html.contains("margin-top:24px; text-align:left;\">Deadlines</h2>"));
        assert!(html.contains("border-bottom:2px solid #e0e0e0;"));
        assert!(html.contains(">Item</h3>"));
    }

    #[test]
    fn test_blank_title_has_no_heading() {
        let html = compose(&titled("   "), true, false);
        assert!(!html.contains("<h2"));
    }

    #[test]
    fn test_divider_suppressed_for_last_section() {
        assert!(!compose(&titled("A"), true, true).contains("border-bottom"));
    }

    #[test]
    fn test_divider_suppressed_globally() {
        assert!(!compose(&titled("A"), false, false).contains("border-bottom"));
    }

    #[test]
    fn test_divider_disabled_by_layout() {
        let section = Section {
            layout: Some(SectionLayout {
                divider_enabled: Some(false),
                ..SectionLayout::default()
            }),
            ..titled("A")
        };
        assert!(!compose(&section, true, false).contains("border-bottom"));
    }

    #[test]
    fn test_layout_overrides() {
        let section = Section {
            layout: Some(SectionLayout {
                divider_spacing: Some(8),
                title_align: Some("center".to_owned()),
                background_color: Some("#fafafa".to_owned()),
                border_radius: Some(4),
                divider_color: Some("#000".to_owned()),
                divider_thickness: Some(1),
                ..SectionLayout::default()
            }),
            ..titled("A")
        };
        let html = compose(&section, true, false);
        assert!(html.contains("margin-top:8px; text-align:center;"));
        assert!(html.contains(
            "border-bottom:1px solid #000; background-color:#fafafa; border-radius:4px;"
        ));
    }

    #[test]
    fn test_invalid_title_align_falls_back() {
        let section = Section {
            layout: Some(SectionLayout {
                title_align: Some("justify".to_owned()),
                ..SectionLayout::default()
            }),
            ..titled("A")
        };
        assert!(compose(&section, true, false).contains("text-align:left;\">A</h2>"));
    }

    #[test]
    fn test_closures_section_ignores_cards() {
        let section = Section {
            key: "closures".to_owned(),
            closures: vec![Closure {
                date: "Jan 1".to_owned(),
                reason: "Holiday".to_owned(),
            }],
            ..titled("Closures")
        };
        let html = compose(&section, true, false);
        assert!(html.contains("<li>Jan 1 – Holiday</li>"));
        assert!(!html.contains(">Item</h3>"));
    }
}
