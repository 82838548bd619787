//! Document tree types.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::ModelError;
use crate::padding::PaddingOverride;

/// Deserialize `null` as the type's default value.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn is_false(value: &bool) -> bool {
    !*value
}

const fn default_true() -> bool {
    true
}

/// Deserialize a flag that reads `null` as `true`.
fn nullable_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<bool>::deserialize(deserializer).map(|flag| flag.unwrap_or(true))
}

/// Newsletter template variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    /// Friday Focus, the student newsletter.
    #[default]
    Ff,
    /// Graduate School Briefing, the faculty and staff newsletter.
    Briefing,
}

impl TemplateKind {
    /// Tag used in JSON and as the filename prefix key.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ff => "ff",
            Self::Briefing => "briefing",
        }
    }
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TemplateKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ff" => Ok(Self::Ff),
            "briefing" => Ok(Self::Briefing),
            other => Err(format!("unknown template '{other}' (expected ff or briefing)")),
        }
    }
}

/// Root of a newsletter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub template: TemplateKind,
    #[serde(default)]
    pub masthead: Masthead,
    #[serde(default, deserialize_with = "nullable")]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub footer: Footer,
    #[serde(default)]
    pub settings: Settings,
    /// Keys this model has no field for, carried through export unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Document {
    /// Parse a document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidJson`] for unparsable text and
    /// [`ModelError::Malformed`] when a field has the wrong shape.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a document from an already parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Malformed`] when a field has the wrong shape.
    pub fn from_value(value: Value) -> Result<Self, ModelError> {
        serde_json::from_value(value).map_err(ModelError::Malformed)
    }

    /// Serialize to compact JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Banner, title and inbox preview text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Masthead {
    #[serde(default, deserialize_with = "nullable")]
    pub banner_url: String,
    #[serde(default, deserialize_with = "nullable")]
    pub banner_alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_align: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_padding: Option<PaddingOverride>,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub tagline: String,
    #[serde(default, deserialize_with = "nullable")]
    pub preheader: String,
    #[serde(default = "default_true", deserialize_with = "nullable_true")]
    pub hero_show: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub hero_link: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Masthead {
    fn default() -> Self {
        Self {
            banner_url: String::new(),
            banner_alt: String::new(),
            banner_align: None,
            banner_padding: None,
            title: String::new(),
            tagline: String::new(),
            preheader: String::new(),
            hero_show: true,
            hero_link: String::new(),
            extra: Map::new(),
        }
    }
}

/// A titled group of cards, or a closures list when `key` is `"closures"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default, deserialize_with = "nullable")]
    pub key: String,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<SectionLayout>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Vec::is_empty")]
    pub cards: Vec<Card>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Vec::is_empty")]
    pub closures: Vec<Closure>,
    /// Section-wide padding for text-bearing cards.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_text: Option<PaddingOverride>,
    /// Section-wide padding for cards showing an icon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_image: Option<PaddingOverride>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Section {
    /// Key that switches a section to the closures list layout.
    pub const CLOSURES_KEY: &'static str = "closures";

    /// True when this section renders its closures instead of cards.
    #[must_use]
    pub fn is_closures(&self) -> bool {
        self.key == Self::CLOSURES_KEY
    }
}

/// Section layout overrides. Absent fields use the configured defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionLayout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub divider_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub divider_thickness: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub divider_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub divider_spacing: Option<u32>,
    /// One of `left`, `center`, `right`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_align: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Card variant tag. Unrecognized tags read as [`CardKind::Standard`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum CardKind {
    #[default]
    Standard,
    Event,
    Resource,
    Cta,
}

impl CardKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Event => "event",
            Self::Resource => "resource",
            Self::Cta => "cta",
        }
    }
}

impl From<String> for CardKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "event" => Self::Event,
            "resource" => Self::Resource,
            "cta" => Self::Cta,
            _ => Self::Standard,
        }
    }
}

impl From<CardKind> for &'static str {
    fn from(kind: CardKind) -> Self {
        kind.as_str()
    }
}

/// One content block.
///
/// `body_html` is authored by a rich-text editor and rendered as-is. Every
/// other text field is escaped on output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Card {
    #[serde(rename = "type", default)]
    pub kind: CardKind,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub body_html: String,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub location: String,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub date: String,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub time: String,
    #[serde(default, deserialize_with = "nullable")]
    pub links: Vec<Link>,
    #[serde(flatten)]
    pub style: CardStyle,
    /// Explicit padding, highest priority in the padding cascade.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<PaddingOverride>,
    #[serde(flatten)]
    pub icon: ResourceIcon,
    #[serde(flatten)]
    pub button: CtaButton,
    /// Editor fields without a dedicated field, such as table styling.
    /// Declared after the flattened groups so it only collects what they leave.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Card {
    /// True for a resource card that asks for its icon column.
    ///
    /// Decides which global padding applies, whether or not an icon URL
    /// is present.
    #[must_use]
    pub fn wants_icon(&self) -> bool {
        self.kind == CardKind::Resource && self.icon.show_icon
    }
}

/// Per-card box styling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing_bottom: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
}

/// Resource card icon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceIcon {
    #[serde(default, skip_serializing_if = "is_false")]
    pub show_icon: bool,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub icon_url: String,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub icon_alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_size: Option<u32>,
}

/// Call-to-action button styling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CtaButton {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_bg_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_padding_vertical: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_padding_horizontal: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_border_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_border_radius: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_alignment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_full_width: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_alignment: Option<String>,
}

/// A labelled link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    #[serde(default, deserialize_with = "nullable")]
    pub label: String,
    #[serde(default, deserialize_with = "nullable")]
    pub url: String,
}

impl Link {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }

    /// Trimmed label and URL, if both are non-empty.
    #[must_use]
    pub fn usable(&self) -> Option<(&str, &str)> {
        let label = self.label.trim();
        let url = self.url.trim();
        (!label.is_empty() && !url.is_empty()).then_some((label, url))
    }
}

/// An office closure entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Closure {
    #[serde(default, deserialize_with = "nullable")]
    pub date: String,
    #[serde(default, deserialize_with = "nullable")]
    pub reason: String,
}

/// Footer address block, social icons and colors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    #[serde(default, deserialize_with = "nullable")]
    pub address_lines: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub social: Vec<SocialLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_margin_top: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_margin_bottom: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A footer social icon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    #[serde(default, deserialize_with = "nullable")]
    pub platform: String,
    #[serde(default, deserialize_with = "nullable")]
    pub url: String,
    #[serde(default, deserialize_with = "nullable")]
    pub icon: String,
    #[serde(default, deserialize_with = "nullable")]
    pub alt: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Document-wide layout settings. Absent fields use the configured defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_spacing: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_section_borders: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_text: Option<PaddingOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_image: Option<PaddingOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typography: Option<SettingsTypography>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<SettingsColors>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Typography overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsTypography {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h2_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h2_line_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h3_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h3_line_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_line_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_line_height: Option<f64>,
}

/// Palette overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsColors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_dark: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_muted: Option<String>,
}
