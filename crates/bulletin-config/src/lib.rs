//! Configuration management for Bulletin.
//!
//! Parses `bulletin.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. Every table is
//! optional: an empty file yields the built-in branding and layout defaults.
//!
//! The loaded [`Config`] is an immutable value. Composers and codecs receive it
//! by reference and never mutate it; anything copied out of it into a document
//! is cloned, so documents never share structure with the configuration.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! URL-valued strings support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `brand.banner_url`
//! - `brand.view_in_browser_href`
//! - `organization.website`
//! - `social[].url`, `social[].icon`

mod expand;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override HTML minification on export.
    pub minify: Option<bool>,
    /// Override embedded-data stripping on export.
    pub strip_json: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "bulletin.toml";

/// Allowed container widths in pixels.
const CONTAINER_WIDTH_RANGE: std::ops::RangeInclusive<u32> = 560..=700;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Brand assets, palette and typography.
    pub brand: BrandConfig,
    /// Organization contact details used in the footer.
    pub organization: OrganizationConfig,
    /// Default footer social links for new documents.
    pub social: Vec<SocialLinkDefaults>,
    /// Global layout defaults.
    pub layout: LayoutDefaults,
    /// Section layout defaults.
    pub section: SectionLayoutDefaults,
    /// Card style defaults.
    pub card: CardDefaults,
    /// Call-to-action button defaults.
    pub cta: CtaButtonDefaults,
    /// Footer defaults for new documents.
    pub footer: FooterDefaults,
    /// Per-template masthead copy and links.
    pub templates: TemplatesConfig,
    /// Export behaviour.
    pub export: ExportConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            brand: BrandConfig::default(),
            organization: OrganizationConfig::default(),
            social: default_social_links(),
            layout: LayoutDefaults::default(),
            section: SectionLayoutDefaults::default(),
            card: CardDefaults::default(),
            cta: CtaButtonDefaults::default(),
            footer: FooterDefaults::default(),
            templates: TemplatesConfig::default(),
            export: ExportConfig::default(),
            config_path: None,
        }
    }
}

/// Brand assets and the visual identity applied to rendered output.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BrandConfig {
    /// `<title>` of the rendered HTML document.
    pub document_title: String,
    /// Default masthead banner image.
    pub banner_url: String,
    /// Alt text for the default banner.
    pub banner_alt: String,
    /// Href of the fixed "View in Browser" link (a mailing-platform variable).
    pub view_in_browser_href: String,
    /// Icon URLs for the starter resource cards, keyed by resource name.
    pub resource_icons: BTreeMap<String, String>,
    /// Color palette.
    pub colors: ColorPalette,
    /// Typography sizes.
    pub typography: Typography,
}

impl BrandConfig {
    /// Icon URL for a starter resource, empty when unknown.
    #[must_use]
    pub fn resource_icon(&self, name: &str) -> String {
        self.resource_icons.get(name).cloned().unwrap_or_default()
    }
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            document_title: "WSU Graduate School Newsletter".to_owned(),
            banner_url: "https://futurecoug.wsu.edu/www/images/FF_header.png".to_owned(),
            banner_alt: "WSU Graduate School".to_owned(),
            view_in_browser_href: "browser".to_owned(),
            resource_icons: BTreeMap::from([
                (
                    "health_counseling".to_owned(),
                    "https://futurecoug.wsu.edu/www/images/health_counseling.png".to_owned(),
                ),
                (
                    "basic_needs".to_owned(),
                    "https://futurecoug.wsu.edu/www/images/we_can_help_ff.png".to_owned(),
                ),
                (
                    "career_services".to_owned(),
                    "https://futurecoug.wsu.edu/www/images/career-coach-2.png".to_owned(),
                ),
            ]),
            colors: ColorPalette::default(),
            typography: Typography::default(),
        }
    }
}

/// Brand color palette.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ColorPalette {
    pub primary: String,
    pub text_dark: String,
    pub text_body: String,
    pub text_muted: String,
    pub bg_light: String,
    pub bg_card: String,
    pub bg_white: String,
    pub border_medium: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            primary: "#A60F2D".to_owned(),
            text_dark: "#2A3033".to_owned(),
            text_body: "#333333".to_owned(),
            text_muted: "#5E6A71".to_owned(),
            bg_light: "#f4f4f4".to_owned(),
            bg_card: "#f9f9f9".to_owned(),
            bg_white: "#ffffff".to_owned(),
            border_medium: "#d9d9d9".to_owned(),
        }
    }
}

/// Typography sizes in pixels, line heights as unitless multipliers.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Typography {
    pub font_family: String,
    pub h2_size: u32,
    pub h2_line_height: f64,
    pub h3_size: u32,
    pub h3_line_height: f64,
    pub body_size: u32,
    pub body_line_height: f64,
    pub meta_size: u32,
    pub meta_line_height: f64,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            font_family: "Arial, Helvetica, sans-serif".to_owned(),
            h2_size: 22,
            h2_line_height: 1.3,
            h3_size: 18,
            h3_line_height: 1.3,
            body_size: 16,
            body_line_height: 1.6,
            meta_size: 15,
            meta_line_height: 1.7,
        }
    }
}

/// Organization contact details.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OrganizationConfig {
    pub name: String,
    /// Street address lines following the organization name.
    pub address_lines: Vec<String>,
    pub phone: String,
    pub email: String,
    pub website: String,
    /// Link text for the website in the footer and plain-text trailer.
    pub website_label: String,
    pub copyright: String,
}

impl OrganizationConfig {
    /// Footer address block: organization name followed by the address lines.
    #[must_use]
    pub fn footer_address(&self) -> Vec<String> {
        std::iter::once(self.name.clone())
            .chain(self.address_lines.iter().cloned())
            .collect()
    }
}

impl Default for OrganizationConfig {
    fn default() -> Self {
        Self {
            name: "WSU Graduate School".to_owned(),
            address_lines: vec![
                "French Administration Building 324".to_owned(),
                "Pullman, WA 99164".to_owned(),
            ],
            phone: "509-335-6424".to_owned(),
            email: "gradschool@wsu.edu".to_owned(),
            website: "https://gradschool.wsu.edu".to_owned(),
            website_label: "Graduate School website".to_owned(),
            copyright: "© 2025 Washington State University. All rights reserved.".to_owned(),
        }
    }
}

/// A default footer social link.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SocialLinkDefaults {
    pub platform: String,
    pub url: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub alt: String,
}

fn default_social_links() -> Vec<SocialLinkDefaults> {
    let link = |platform: &str, url: &str, icon: &str| SocialLinkDefaults {
        platform: platform.to_owned(),
        url: url.to_owned(),
        icon: icon.to_owned(),
        alt: platform.to_owned(),
    };
    vec![
        link(
            "Instagram",
            "https://www.instagram.com/gradschoolwsu/",
            "https://futurecoug.wsu.edu/www/images/insta%20icon%20.png",
        ),
        link(
            "LinkedIn",
            "https://www.linkedin.com/school/washington-state-university-graduate-school/",
            "https://futurecoug.wsu.edu/www/images/Lin%20icon.png",
        ),
        link(
            "Facebook",
            "https://www.facebook.com/WsuGraduateSchool/",
            "https://futurecoug.wsu.edu/www/images/facebook%20icon.png",
        ),
    ]
}

/// Four-sided padding in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PaddingDefaults {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl PaddingDefaults {
    /// Same padding on every side.
    #[must_use]
    pub const fn uniform(value: u32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

/// Global layout defaults for new documents.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutDefaults {
    /// Email width in pixels.
    pub container_width: u32,
    /// Space between a section border and the next section title.
    pub section_spacing: u32,
    /// Show horizontal divider lines between sections.
    pub show_section_borders: bool,
    /// Padding for text-bearing cards.
    pub padding_text: PaddingDefaults,
    /// Padding for image-bearing cards.
    pub padding_image: PaddingDefaults,
}

impl Default for LayoutDefaults {
    fn default() -> Self {
        Self {
            container_width: 640,
            section_spacing: 24,
            show_section_borders: true,
            padding_text: PaddingDefaults::uniform(20),
            padding_image: PaddingDefaults {
                top: 20,
                right: 15,
                bottom: 20,
                left: 0,
            },
        }
    }
}

/// Section layout defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SectionLayoutDefaults {
    pub padding_top: u32,
    pub padding_bottom: u32,
    /// Empty means transparent.
    pub background_color: String,
    pub border_radius: u32,
    pub divider_enabled: bool,
    pub divider_thickness: u32,
    pub divider_color: String,
    pub divider_spacing: u32,
    pub title_align: String,
}

impl Default for SectionLayoutDefaults {
    fn default() -> Self {
        Self {
            padding_top: 18,
            padding_bottom: 28,
            background_color: String::new(),
            border_radius: 0,
            divider_enabled: true,
            divider_thickness: 2,
            divider_color: "#e0e0e0".to_owned(),
            divider_spacing: 24,
            title_align: "left".to_owned(),
        }
    }
}

/// Card style defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CardDefaults {
    pub background_color: String,
    pub spacing_bottom: u32,
    pub border_radius: u32,
    pub border_width: u32,
    pub border_color: String,
}

impl Default for CardDefaults {
    fn default() -> Self {
        Self {
            background_color: "#f9f9f9".to_owned(),
            spacing_bottom: 20,
            border_radius: 0,
            border_width: 0,
            border_color: "#e0e0e0".to_owned(),
        }
    }
}

/// Call-to-action button defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CtaButtonDefaults {
    pub bg_color: String,
    pub text_color: String,
    pub padding_vertical: u32,
    pub padding_horizontal: u32,
    pub border_width: u32,
    pub border_color: String,
    pub border_radius: u32,
    pub alignment: String,
    pub full_width: bool,
}

impl Default for CtaButtonDefaults {
    fn default() -> Self {
        Self {
            bg_color: "#A60F2D".to_owned(),
            text_color: "#ffffff".to_owned(),
            padding_vertical: 12,
            padding_horizontal: 32,
            border_width: 0,
            border_color: "#8c0d25".to_owned(),
            border_radius: 10,
            alignment: "center".to_owned(),
            full_width: false,
        }
    }
}

/// Footer defaults for new documents.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FooterDefaults {
    pub background_color: String,
    pub text_color: String,
    pub link_color: String,
    pub padding_top: u32,
    pub padding_bottom: u32,
    pub social_margin_top: u32,
    pub social_margin_bottom: u32,
}

impl Default for FooterDefaults {
    fn default() -> Self {
        Self {
            background_color: "#FFFFFF".to_owned(),
            text_color: "#000000".to_owned(),
            link_color: "#ffffff".to_owned(),
            padding_top: 0,
            padding_bottom: 0,
            social_margin_top: 0,
            social_margin_bottom: 0,
        }
    }
}

/// Masthead copy and links for one template.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TemplateDefaults {
    pub title: String,
    pub tagline: String,
    pub preheader: String,
    /// Form where readers submit content for the next issue.
    pub submit_form_url: String,
    /// Service desk link (briefing only).
    pub jira_url: Option<String>,
    /// Knowledge base link (briefing only).
    pub knowledge_base_url: Option<String>,
}

/// Per-template defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TemplatesConfig {
    /// Friday Focus.
    pub ff: TemplateDefaults,
    /// Graduate School Briefing.
    pub briefing: TemplateDefaults,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            ff: TemplateDefaults {
                title: "Friday Focus Newsletter".to_owned(),
                tagline: "A semimonthly newsletter for graduate students".to_owned(),
                preheader: "Your biweekly update from the WSU Graduate School".to_owned(),
                submit_form_url: "https://gradschool.wsu.edu/request-for-ff-promotion/".to_owned(),
                jira_url: None,
                knowledge_base_url: None,
            },
            briefing: TemplateDefaults {
                title: "Graduate School Briefing".to_owned(),
                tagline: "Semimonthly updates for graduate program faculty and staff".to_owned(),
                preheader: "Updates from the Graduate School".to_owned(),
                submit_form_url: "https://gradschool.wsu.edu/listserv/".to_owned(),
                jira_url: Some(
                    "https://jira.esg.wsu.edu/servicedesk/customer/portal/121/group/323".to_owned(),
                ),
                knowledge_base_url: Some(
                    "https://confluence.esg.wsu.edu/display/GRADSCHOOL".to_owned(),
                ),
            },
        }
    }
}

/// Export configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Minify HTML output by default.
    pub minify: bool,
    /// Skip embedding the document data by default.
    pub strip_json: bool,
    /// Download filename prefix keyed by template tag.
    pub filename_prefix: BTreeMap<String, String>,
    /// Prefix for templates missing from `filename_prefix`.
    pub fallback_prefix: String,
}

impl ExportConfig {
    /// Filename prefix for a template tag.
    #[must_use]
    pub fn prefix_for(&self, template: &str) -> &str {
        self.filename_prefix
            .get(template)
            .map_or(self.fallback_prefix.as_str(), String::as_str)
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            minify: true,
            strip_json: false,
            filename_prefix: BTreeMap::from([
                ("ff".to_owned(), "Friday_Focus_".to_owned()),
                ("briefing".to_owned(), "Briefing_".to_owned()),
            ]),
            fallback_prefix: "Newsletter_".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`brand.banner_url`").
        field: String,
        /// Error message (e.g., "${`ASSET_HOST`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `bulletin.toml` in current directory and parents,
    /// falling back to the built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(minify) = settings.minify {
            self.export.minify = minify;
        }
        if let Some(strip_json) = settings.strip_json {
            self.export.strip_json = strip_json;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::discover_from(&current)
    }

    /// Search for config file starting at `start` and walking up.
    fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.brand.document_title, "brand.document_title")?;
        require_http_url(&self.organization.website, "organization.website")?;

        let width = self.layout.container_width;
        if !CONTAINER_WIDTH_RANGE.contains(&width) {
            return Err(ConfigError::Validation(format!(
                "layout.container_width must be between {} and {} (got {width})",
                CONTAINER_WIDTH_RANGE.start(),
                CONTAINER_WIDTH_RANGE.end()
            )));
        }

        for (i, link) in self.social.iter().enumerate() {
            require_non_empty(&link.platform, &format!("social[{i}].platform"))?;
        }

        Ok(())
    }

    /// Expand environment variable references in URL-valued strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.brand.banner_url = expand::expand_env(&self.brand.banner_url, "brand.banner_url")?;
        self.brand.view_in_browser_href = expand::expand_env(
            &self.brand.view_in_browser_href,
            "brand.view_in_browser_href",
        )?;
        self.organization.website =
            expand::expand_env(&self.organization.website, "organization.website")?;

        for (i, link) in self.social.iter_mut().enumerate() {
            link.url = expand::expand_env(&link.url, &format!("social[{i}].url"))?;
            link.icon = expand::expand_env(&link.icon, &format!("social[{i}].icon"))?;
        }

        Ok(())
    }
}
