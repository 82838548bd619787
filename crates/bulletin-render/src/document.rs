//! Document composer: assembles the complete email HTML.

use std::fmt::Write;

use bulletin_config::Config;
use bulletin_model::{Document, Footer, Masthead, coerce_int};

use crate::RenderContext;
use crate::palette::{STYLE_IMAGE, STYLE_RESET, STYLE_TABLE};
use crate::section::compose_section;
use crate::text::escape_text;

/// Footer colors and spacing when the document leaves them unset.
const FOOTER_BACKGROUND: &str = "#2A3033";
const FOOTER_TEXT: &str = "#cccccc";
const FOOTER_LINK: &str = "#ffffff";
const FOOTER_PADDING_TOP: u32 = 60;
const FOOTER_PADDING_BOTTOM: u32 = 30;
const SOCIAL_MARGIN_TOP: u32 = 40;
const SOCIAL_MARGIN_BOTTOM: u32 = 20;

/// Compose a complete email-client-safe HTML document.
///
/// The output depends only on `doc` and `config`: composing the same inputs
/// twice yields byte-identical HTML.
pub fn compose_document(doc: &Document, config: &Config) -> String {
    let ctx = RenderContext::new(config, &doc.settings);
    let settings = &doc.settings;
    let width = settings
        .container_width
        .unwrap_or(config.layout.container_width);
    let spacing = settings
        .section_spacing
        .unwrap_or(config.layout.section_spacing);
    let show_borders = settings
        .show_section_borders
        .unwrap_or(config.layout.show_section_borders);

    let last = doc.sections.len().saturating_sub(1);
    let sections: Vec<String> = doc
        .sections
        .iter()
        .enumerate()
        .map(|(i, section)| compose_section(&ctx, section, spacing, show_borders, i == last))
        .collect();

    tracing::debug!(sections = sections.len(), width, "Composing document");

    let palette = &ctx.palette;
    let mut html = String::with_capacity(16384);

    html.push_str("<!DOCTYPE html>\n");
    html.push_str("<html lang=\"en\" xmlns=\"http://www.w3.org/1999/xhtml\" xmlns:o=\"urn:schemas-microsoft-com:office:office\" xmlns:v=\"urn:schemas-microsoft-com:vml\">\n");
    html.push_str("<head>\n");
    html.push_str("  <meta charset=\"UTF-8\" />\n");
    html.push_str("  <meta name=\"viewport\" content=\"width=device-width\" />\n");
    html.push_str("  <meta http-equiv=\"X-UA-Compatible\" content=\"IE=edge\" />\n");
    html.push_str("  <!--[if gte mso 9]>\n  <xml>\n    <o:OfficeDocumentSettings>\n      <o:AllowPNG/>\n      <o:PixelsPerInch>96</o:PixelsPerInch>\n    </o:OfficeDocumentSettings>\n  </xml>\n  <![endif]-->\n");
    html.push_str("  <meta name=\"color-scheme\" content=\"light dark\" />\n");
    html.push_str("  <meta name=\"supported-color-schemes\" content=\"light dark\" />\n");
    let _ = writeln!(
        html,
        "  <title>{}</title>",
        escape_text(&config.brand.document_title)
    );
    let _ = write!(
        html,
        "  <style type=\"text/css\">\n{}  </style>\n</head>\n",
        palette.email_css()
    );
    let _ = writeln!(html, "<body style=\"{STYLE_RESET}\">");

    render_preheader(&mut html, &doc.masthead.preheader);
    html.push_str("\n<!-- View in Browser -->\n");
    render_view_in_browser(&mut html, &ctx, width);
    html.push_str("\n<!-- Masthead -->\n");
    render_masthead(&mut html, &ctx, &doc.masthead, width);

    html.push_str("\n<!-- Main Content Container -->\n");
    let _ = write!(
        html,
        "<table cellpadding=\"0\" cellspacing=\"0\" role=\"presentation\" width=\"100%\" style=\"{STYLE_TABLE} background-color:{};\">\n  <tr>\n    <td align=\"center\">\n",
        palette.bg_light
    );
    let _ = write!(
        html,
        "      <table cellpadding=\"0\" cellspacing=\"0\" role=\"presentation\" width=\"{width}\" class=\"container\" style=\"{STYLE_TABLE} background-color:{white}; border-left:1px solid {border}; border-right:1px solid {border}; border-bottom:1px solid {border};\">\n",
        white = palette.bg_white,
        border = palette.border_medium
    );
    let _ = write!(
        html,
        "        <tr>\n          <td class=\"content\" style=\"padding:18px 25px 28px; background-color:{};\">\n{}\n          </td>\n        </tr>\n",
        palette.bg_white,
        sections.join("\n")
    );
    html.push_str("        <!-- Footer -->\n        <tr>\n          <td>\n");
    render_footer(&mut html, config, &doc.footer);
    html.push_str("\n          </td>\n        </tr>\n      </table>\n    </td>\n  </tr>\n</table>\n");
    html.push_str("</body>\n</html>");

    html
}

/// Hidden inbox preview text.
fn render_preheader(html: &mut String, text: &str) {
    let _ = write!(
        html,
        "<div style=\"display:none; font-size:1px; color:#ffffff; line-height:1px; max-height:0; max-width:0; opacity:0; overflow:hidden;\">\n{}\n</div>",
        escape_text(text)
    );
}

/// Fixed "View in Browser" row pointing at the mailing platform's web copy.
fn render_view_in_browser(html: &mut String, ctx: &RenderContext<'_>, width: u32) {
    let _ = write!(
        html,
        "<table cellpadding=\"0\" cellspacing=\"0\" role=\"presentation\" width=\"100%\" style=\"{STYLE_TABLE}\">\n  <tr>\n    <td align=\"center\" style=\"padding:12px 0;\">\n      <table cellpadding=\"0\" cellspacing=\"0\" role=\"presentation\" width=\"{width}\" class=\"container\" style=\"{STYLE_TABLE}\">\n        <tr>\n          <td style=\"text-align:center; font-size:13px; color:{muted};\">\n            <a href=\"{href}\" style=\"{link}\">View in Browser</a>\n          </td>\n        </tr>\n      </table>\n    </td>\n  </tr>\n</table>",
        muted = ctx.palette.text_muted,
        href = escape_text(&ctx.config.brand.view_in_browser_href),
        link = ctx.palette.link
    );
}

/// Banner, title and tagline. The banner is emitted only when the hero is
/// shown and a banner URL is set; a hero link wraps it in an anchor.
fn render_masthead(html: &mut String, ctx: &RenderContext<'_>, masthead: &Masthead, width: u32) {
    let palette = &ctx.palette;
    let side = |name: &str, default: i64| {
        masthead
            .banner_padding
            .as_ref()
            .and_then(|padding| padding.get(name))
            .map_or(default, coerce_int)
    };
    let banner_padding = format!(
        "{}px {}px {}px {}px",
        side("top", 20),
        side("right", 0),
        side("bottom", 0),
        side("left", 0)
    );
    let banner_align = masthead.banner_align.as_deref().unwrap_or("center");

    let mut banner = String::new();
    if masthead.hero_show && !masthead.banner_url.is_empty() {
        let img = format!(
            "<img src=\"{}\" alt=\"{}\" width=\"450\" style=\"{STYLE_IMAGE} width:100%; max-width:450px; display:inline-block;\" />",
            escape_text(&masthead.banner_url),
            escape_text(&masthead.banner_alt)
        );
        if masthead.hero_link.is_empty() {
            banner = img;
        } else {
            banner = format!("<a href=\"{}\">{img}</a>", escape_text(&masthead.hero_link));
        }
    }

    let _ = write!(
        html,
        "<table cellpadding=\"0\" cellspacing=\"0\" role=\"presentation\" width=\"100%\" style=\"{STYLE_TABLE} background-color:{light};\">\n  <tr>\n    <td align=\"center\">\n      <table cellpadding=\"0\" cellspacing=\"0\" role=\"presentation\" width=\"{width}\" class=\"container\" style=\"{STYLE_TABLE} background-color:{white}; border-left:1px solid {border}; border-right:1px solid {border};\">\n",
        light = palette.bg_light,
        white = palette.bg_white,
        border = palette.border_medium
    );
    let _ = write!(
        html,
        "        <tr>\n          <td style=\"padding:{banner_padding}; text-align:{}; background-color:{};\">\n            {banner}\n          </td>\n        </tr>\n",
        escape_text(banner_align),
        palette.bg_white
    );
    let _ = write!(
        html,
        "        <tr>\n          <td style=\"padding:16px 24px 4px; font-size:13px; line-height:1.2; color:{muted}; text-transform:uppercase; letter-spacing:0.35em; text-align:center;\">\n            {}\n          </td>\n        </tr>\n",
        escape_text(&masthead.title),
        muted = palette.text_muted
    );
    let _ = write!(
        html,
        "        <tr>\n          <td style=\"padding:0 24px 12px; font-size:14px; line-height:1.5; color:{muted}; text-align:center;\">\n            <em>{}</em>\n          </td>\n        </tr>\n      </table>\n    </td>\n  </tr>\n</table>",
        escape_text(&masthead.tagline),
        muted = palette.text_muted
    );
}

/// Social icons, address block, website link and copyright.
///
/// Icons need both a URL and an icon image. Their alt text falls back to the
/// platform name, then to "Social Media Link", so it is never empty.
fn render_footer(html: &mut String, config: &Config, footer: &Footer) {
    let background = footer.background_color.as_deref().unwrap_or(FOOTER_BACKGROUND);
    let text_color = footer.text_color.as_deref().unwrap_or(FOOTER_TEXT);
    let link_color = footer.link_color.as_deref().unwrap_or(FOOTER_LINK);
    let padding_top = footer.padding_top.unwrap_or(FOOTER_PADDING_TOP);
    let padding_bottom = footer.padding_bottom.unwrap_or(FOOTER_PADDING_BOTTOM);
    let margin_top = footer.social_margin_top.unwrap_or(SOCIAL_MARGIN_TOP);
    let margin_bottom = footer.social_margin_bottom.unwrap_or(SOCIAL_MARGIN_BOTTOM);

    let mut icons = String::new();
    for link in &footer.social {
        let url = link.url.trim();
        let icon = link.icon.trim();
        if url.is_empty() || icon.is_empty() {
            continue;
        }
        let alt = [link.alt.trim(), link.platform.trim()]
            .into_iter()
            .find(|candidate| !candidate.is_empty())
            .unwrap_or("Social Media Link");
        let alt = escape_text(alt);
        let _ = write!(
            icons,
            "\n          <td style=\"padding:0 8px;\">\n            <a href=\"{}\" title=\"{alt}\">\n              <img src=\"{}\" alt=\"{alt}\" width=\"28\" height=\"28\" style=\"{STYLE_IMAGE}\" />\n            </a>\n          </td>",
            escape_text(url),
            escape_text(icon)
        );
    }

    let social_table = if icons.is_empty() {
        "<!-- No social links configured -->".to_owned()
    } else {
        format!(
            "\n      <!-- Social Icons -->\n      <table cellpadding=\"0\" cellspacing=\"0\" role=\"presentation\" style=\"{STYLE_TABLE} margin:{margin_top}px auto {margin_bottom}px auto;\">\n        <tr>{icons}\n        </tr>\n      </table>"
        )
    };

    let address = match footer.address_lines.split_first() {
        None => String::new(),
        Some((first, rest)) => {
            let mut address = format!("<strong>{}</strong>", escape_text(first));
            if !rest.is_empty() {
                let others: Vec<_> = rest.iter().map(|line| escape_text(line)).collect();
                let _ = write!(address, "<br />{}", others.join("<br />"));
            }
            address
        }
    };

    let org = &config.organization;
    let _ = write!(
        html,
        "<table cellpadding=\"0\" cellspacing=\"0\" role=\"presentation\" width=\"100%\" style=\"{STYLE_TABLE} background-color:{background};\">\n  <tr>\n    <td align=\"center\" style=\"color:{text_color}; text-align:center; padding:{padding_top}px 20px {padding_bottom}px 20px;\">\n      {social_table}\n"
    );
    let _ = write!(
        html,
        "      <!-- Address -->\n      <p style=\"color:{text_color}; font-size:14px; line-height:1.6; margin:0 0 8px 0;\">\n        {address}\n      </p>\n"
    );
    html.push_str("      <!-- Divider -->\n      <div style=\"height:1px; background-color:#444444; margin:20px auto; max-width:400px;\"></div>\n");
    let _ = write!(
        html,
        "      <!-- Links -->\n      <p style=\"color:{text_color}; font-size:13px; line-height:1.6; margin:15px 0;\">\n        <a href=\"{}\" data-role=\"footer-link\" style=\"color:{link_color} !important; text-decoration:underline;\">{}</a>\n      </p>\n",
        escape_text(&org.website),
        escape_text(&org.website_label)
    );
    let _ = write!(
        html,
        "      <!-- Copyright -->\n      <p style=\"color:#999999; font-size:12px; line-height:1.6; margin:15px 0 0 0;\">\n        {}\n      </p>\n    </td>\n  </tr>\n</table>",
        escape_text(&org.copyright)
    );
}
