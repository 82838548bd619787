//! Starter documents built from configuration.
//!
//! Everything taken from [`Config`] is cloned, so a returned document never
//! shares data with the configuration it was built from.

use bulletin_config::{Config, PaddingDefaults, TemplateDefaults};

use crate::{
    Card, CardKind, CardStyle, Closure, CtaButton, Document, Footer, Link, Masthead,
    PaddingOverride, ResourceIcon, Section, SectionLayout, Settings, SettingsColors,
    SettingsTypography, SocialLink, TemplateKind,
};

/// Build the starter document for a template.
#[must_use]
pub fn default_document(kind: TemplateKind, config: &Config) -> Document {
    let template = template_defaults(kind, config);
    let sections = match kind {
        TemplateKind::Ff => friday_focus_sections(config, template),
        TemplateKind::Briefing => briefing_sections(config, template),
    };

    Document {
        template: kind,
        masthead: Masthead {
            banner_url: config.brand.banner_url.clone(),
            banner_alt: config.brand.banner_alt.clone(),
            title: template.title.clone(),
            tagline: template.tagline.clone(),
            preheader: template.preheader.clone(),
            hero_show: true,
            ..Masthead::default()
        },
        sections,
        footer: default_footer(config),
        settings: default_settings(config),
        ..Document::default()
    }
}

/// Fill empty masthead copy, banner and footer fields from configuration.
pub fn fill_config_defaults(doc: &mut Document, config: &Config) {
    let template = template_defaults(doc.template, config);
    let masthead = &mut doc.masthead;

    fill_if_empty(&mut masthead.title, &template.title);
    fill_if_empty(&mut masthead.tagline, &template.tagline);
    fill_if_empty(&mut masthead.preheader, &template.preheader);
    fill_if_empty(&mut masthead.banner_url, &config.brand.banner_url);
    fill_if_empty(&mut masthead.banner_alt, &config.brand.banner_alt);

    if doc.footer.address_lines.is_empty() {
        doc.footer.address_lines = config.organization.footer_address();
    }
    if doc.footer.social.is_empty() {
        doc.footer.social = default_social(config);
    }
}

/// Section layout with every field set from configuration.
#[must_use]
pub fn default_section_layout(config: &Config) -> SectionLayout {
    let section = &config.section;
    SectionLayout {
        padding_top: Some(section.padding_top),
        padding_bottom: Some(section.padding_bottom),
        background_color: Some(section.background_color.clone()),
        border_radius: Some(section.border_radius),
        divider_enabled: Some(section.divider_enabled),
        divider_thickness: Some(section.divider_thickness),
        divider_color: Some(section.divider_color.clone()),
        divider_spacing: Some(section.divider_spacing),
        title_align: Some(section.title_align.clone()),
        ..SectionLayout::default()
    }
}

fn template_defaults(kind: TemplateKind, config: &Config) -> &TemplateDefaults {
    match kind {
        TemplateKind::Ff => &config.templates.ff,
        TemplateKind::Briefing => &config.templates.briefing,
    }
}

fn fill_if_empty(field: &mut String, default: &str) {
    if field.is_empty() {
        default.clone_into(field);
    }
}

fn padding(defaults: PaddingDefaults) -> PaddingOverride {
    PaddingOverride::new(defaults.top, defaults.right, defaults.bottom, defaults.left)
}

fn default_social(config: &Config) -> Vec<SocialLink> {
    config
        .social
        .iter()
        .map(|link| SocialLink {
            platform: link.platform.clone(),
            url: link.url.clone(),
            icon: link.icon.clone(),
            alt: if link.alt.is_empty() {
                link.platform.clone()
            } else {
                link.alt.clone()
            },
            ..SocialLink::default()
        })
        .collect()
}

fn default_footer(config: &Config) -> Footer {
    let footer = &config.footer;
    Footer {
        address_lines: config.organization.footer_address(),
        social: default_social(config),
        background_color: Some(footer.background_color.clone()),
        text_color: Some(footer.text_color.clone()),
        link_color: Some(footer.link_color.clone()),
        padding_top: Some(footer.padding_top),
        padding_bottom: Some(footer.padding_bottom),
        social_margin_top: Some(footer.social_margin_top),
        social_margin_bottom: Some(footer.social_margin_bottom),
        ..Footer::default()
    }
}

fn default_settings(config: &Config) -> Settings {
    let layout = &config.layout;
    let typography = &config.brand.typography;
    let colors = &config.brand.colors;
    Settings {
        container_width: Some(layout.container_width),
        section_spacing: Some(layout.section_spacing),
        show_section_borders: Some(layout.show_section_borders),
        padding_text: Some(padding(layout.padding_text)),
        padding_image: Some(padding(layout.padding_image)),
        typography: Some(SettingsTypography {
            font_family: Some(typography.font_family.clone()),
            h2_size: Some(typography.h2_size),
            h2_line_height: Some(typography.h2_line_height),
            h3_size: Some(typography.h3_size),
            h3_line_height: Some(typography.h3_line_height),
            body_size: Some(typography.body_size),
            body_line_height: Some(typography.body_line_height),
            meta_size: Some(typography.meta_size),
            meta_line_height: Some(typography.meta_line_height),
        }),
        colors: Some(SettingsColors {
            primary: Some(colors.primary.clone()),
            text_dark: Some(colors.text_dark.clone()),
            text_body: Some(colors.text_body.clone()),
            text_muted: Some(colors.text_muted.clone()),
        }),
        ..Settings::default()
    }
}

fn section(config: &Config, key: &str, title: &str, cards: Vec<Card>) -> Section {
    Section {
        key: key.to_owned(),
        title: title.to_owned(),
        layout: Some(default_section_layout(config)),
        cards,
        ..Section::default()
    }
}

fn card(kind: CardKind, title: &str, body_html: &str, links: Vec<Link>) -> Card {
    Card {
        kind,
        title: title.to_owned(),
        body_html: body_html.to_owned(),
        links,
        style: CardStyle {
            spacing_bottom: Some(20),
            ..CardStyle::default()
        },
        ..Card::default()
    }
}

fn cta_card(config: &Config, title: &str, body_html: &str, link: Link) -> Card {
    let cta = &config.cta;
    Card {
        kind: CardKind::Cta,
        title: title.to_owned(),
        body_html: body_html.to_owned(),
        links: vec![link],
        button: CtaButton {
            button_bg_color: Some(cta.bg_color.clone()),
            button_text_color: Some(cta.text_color.clone()),
            button_padding_vertical: Some(cta.padding_vertical),
            button_padding_horizontal: Some(cta.padding_horizontal),
            button_border_width: Some(cta.border_width),
            button_border_color: Some(cta.border_color.clone()),
            button_border_radius: Some(cta.border_radius),
            button_alignment: Some(cta.alignment.clone()),
            button_full_width: Some(cta.full_width),
            text_alignment: None,
        },
        ..Card::default()
    }
}

fn resource_card(
    config: &Config,
    icon: &str,
    icon_alt: &str,
    title: &str,
    body_html: &str,
    url: &str,
) -> Card {
    Card {
        icon: ResourceIcon {
            show_icon: true,
            icon_url: config.brand.resource_icon(icon),
            icon_alt: icon_alt.to_owned(),
            icon_size: Some(80),
        },
        ..card(
            CardKind::Resource,
            title,
            body_html,
            vec![Link::new("Read more", url)],
        )
    }
}

fn friday_focus_sections(config: &Config, template: &TemplateDefaults) -> Vec<Section> {
    let card_defaults = &config.card;

    let announcement = Card {
        location: "Building / Room".to_owned(),
        style: CardStyle {
            spacing_bottom: Some(card_defaults.spacing_bottom),
            background_color: Some(card_defaults.background_color.clone()),
            ..CardStyle::default()
        },
        ..card(
            CardKind::Standard,
            "Sample Announcement",
            "<p>Placeholder body copy for a standard item.</p>",
            vec![Link::new("Read more", "#")],
        )
    };

    let event = Card {
        location: "Pullman Campus".to_owned(),
        date: "Friday, October 10, 2025".to_owned(),
        time: "2:00 PM – 4:00 PM".to_owned(),
        style: CardStyle {
            spacing_bottom: Some(20),
            background_color: Some("#f9f9f9".to_owned()),
            ..CardStyle::default()
        },
        ..card(
            CardKind::Event,
            "Sample Event Title",
            "<p>Join us for an exciting event designed to help graduate students connect and learn.</p>",
            vec![Link::new("Learn more", "#")],
        )
    };

    let resources = vec![
        resource_card(
            config,
            "health_counseling",
            "Health and Counseling Services icon",
            "Health & Counseling Resources",
            "<p>Support for emotional health, addiction, and medical needs is available through Cougar Health Services and Counseling & Psychological Services (CAPS).</p>",
            "https://handbook.wsu.edu/communitystandards/student-resources/campus-resources-and-support/",
        ),
        resource_card(
            config,
            "basic_needs",
            "Basic Needs icon",
            "Basic Needs Benefit Navigator",
            "<p>A university resource to help students navigate help with childcare, financial aid, food security, housing, utility support, health resources, and more.</p>",
            "https://deanofstudents.wsu.edu/student-resources",
        ),
        resource_card(
            config,
            "career_services",
            "Career Services icon",
            "Explore Your Interests / Self-Assessment",
            "<p>The Academic Success and Career Center offers self-assessments to help you find a career path that fits your interests.</p>",
            "https://ascc.wsu.edu/channels/explore-your-interests-self-assessment/",
        ),
    ];

    let submit = cta_card(
        config,
        "Want to advertise in Friday Focus?",
        "<p>Submit your events, announcements, and opportunities for the next newsletter.</p>",
        Link::new("Please use this form", template.submit_form_url.clone()),
    );

    vec![
        section(
            config,
            "deadlines",
            "Deadlines and Important Information",
            vec![announcement],
        ),
        section(config, "events", "Upcoming Events", vec![event]),
        section(config, "resources", "Resources", resources),
        section(config, "submit_request", "", vec![submit]),
    ]
}

fn briefing_sections(config: &Config, template: &TemplateDefaults) -> Vec<Section> {
    let org = &config.organization;

    let closures = Section {
        closures: vec![Closure {
            date: "Jan 1".to_owned(),
            reason: "Office closed for New Year's Day".to_owned(),
        }],
        ..section(config, Section::CLOSURES_KEY, "Graduate School Closures", Vec::new())
    };

    let submit = cta_card(
        config,
        "Submit Your Post",
        "<p>Do you have an update or announcement to share? We encourage submissions from all \
         graduate programs. Submit your post here. You can also access \
         <a href=\"https://gradschool.wsu.edu/faculty-and-staff-updates/\">current and archived \
         updates</a>.</p>",
        Link::new("Submit your post", template.submit_form_url.clone()),
    );

    let assistance_links = [
        ("Service Desk", template.jira_url.as_deref()),
        ("Knowledge Base", template.knowledge_base_url.as_deref()),
    ]
    .into_iter()
    .filter_map(|(label, url)| url.map(|url| Link::new(label, url)))
    .collect();

    let assistance = card(
        CardKind::Standard,
        "Contact Options",
        &format!(
            "<p>Submit a ticket via our Jira service desk, access resources in our Knowledge \
             Base, email {}, or call {}.</p>",
            org.email, org.phone
        ),
        assistance_links,
    );

    vec![
        section(
            config,
            "updates",
            "Updates from the Graduate School",
            vec![card(
                CardKind::Standard,
                "Sample Update",
                "<p>Plain text summary of an update.</p>",
                Vec::new(),
            )],
        ),
        section(
            config,
            "fiscal",
            "Fiscal Processor Updates",
            vec![card(
                CardKind::Standard,
                "Sample Fiscal Note",
                "<p>Operational information that may impact fiscal processors.</p>",
                Vec::new(),
            )],
        ),
        closures,
        section(config, "submit_request", "", vec![submit]),
        section(config, "assistance", "Need Assistance?", vec![assistance]),
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_friday_focus_structure() {
        let doc = default_document(TemplateKind::Ff, &Config::default());
        assert_eq!(doc.template, TemplateKind::Ff);
        assert_eq!(doc.masthead.title, "Friday Focus Newsletter");

        let keys: Vec<&str> = doc.sections.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, ["deadlines", "events", "resources", "submit_request"]);

        let resources = &doc.sections[2].cards;
        assert_eq!(resources.len(), 3);
        assert!(resources.iter().all(Card::wants_icon));
        assert_eq!(
            resources[1].icon.icon_url,
            "https://futurecoug.wsu.edu/www/images/we_can_help_ff.png"
        );

        let cta = &doc.sections[3].cards[0];
        assert_eq!(cta.kind, CardKind::Cta);
        assert_eq!(
            cta.links[0].url,
            "https://gradschool.wsu.edu/request-for-ff-promotion/"
        );
    }

    #[test]
    fn test_briefing_structure() {
        let doc = default_document(TemplateKind::Briefing, &Config::default());
        let keys: Vec<&str> = doc.sections.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(
            keys,
            ["updates", "fiscal", "closures", "submit_request", "assistance"]
        );
        assert!(doc.sections[2].is_closures());
        assert_eq!(doc.sections[2].closures.len(), 1);

        let assistance = &doc.sections[4].cards[0];
        assert_eq!(assistance.links.len(), 2);
        assert!(assistance.body_html.contains("gradschool@wsu.edu"));
        assert!(assistance.body_html.contains("509-335-6424"));
    }

    #[test]
    fn test_sections_carry_full_layout() {
        let doc = default_document(TemplateKind::Ff, &Config::default());
        for section in &doc.sections {
            let layout = section.layout.as_ref().unwrap();
            assert_eq!(layout.title_align.as_deref(), Some("left"));
            assert_eq!(layout.divider_spacing, Some(24));
        }
    }

    #[test]
    fn test_settings_from_config() {
        let mut config = Config::default();
        config.layout.container_width = 600;
        let doc = default_document(TemplateKind::Ff, &config);
        assert_eq!(doc.settings.container_width, Some(600));
        assert_eq!(
            doc.settings.padding_image,
            Some(PaddingOverride::new(20, 15, 20, 0))
        );
    }

    #[test]
    fn test_footer_is_independent_copy() {
        let config = Config::default();
        let mut first = default_document(TemplateKind::Ff, &config);
        first.footer.social[0].url = "https://changed.example".to_owned();

        let second = default_document(TemplateKind::Ff, &config);
        assert_eq!(second.footer.social[0].url, config.social[0].url);
        assert_eq!(second.footer.address_lines.len(), 3);
    }

    #[test]
    fn test_fill_config_defaults_only_fills_empty() {
        let config = Config::default();
        let mut doc = Document {
            template: TemplateKind::Briefing,
            masthead: Masthead {
                title: "Custom".to_owned(),
                ..Masthead::default()
            },
            ..Document::default()
        };

        fill_config_defaults(&mut doc, &config);

        assert_eq!(doc.masthead.title, "Custom");
        assert_eq!(doc.masthead.tagline, config.templates.briefing.tagline);
        assert_eq!(doc.masthead.banner_url, config.brand.banner_url);
        assert_eq!(doc.footer.address_lines[0], "WSU Graduate School");
        assert_eq!(doc.footer.social.len(), 3);
    }

    #[test]
    fn test_default_document_survives_json() {
        let doc = default_document(TemplateKind::Briefing, &Config::default());
        let reparsed = Document::from_json(&doc.to_json().unwrap()).unwrap();
        assert_eq!(reparsed, doc);
    }
}
