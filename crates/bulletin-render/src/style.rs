//! Padding cascade and per-card box styles.

use std::fmt::Write;

use bulletin_config::CardDefaults;
use bulletin_model::{Card, PaddingOverride, Section, Settings, coerce_int};
use serde_json::Value;

use crate::palette::STYLE_TABLE;

/// Padding used when no layer sets a side.
const DEFAULT_PADDING: i64 = 20;

/// Resolved four-sided padding in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
    pub left: i64,
}

impl Padding {
    /// CSS `padding` declaration.
    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "padding:{}px {}px {}px {}px;",
            self.top, self.right, self.bottom, self.left
        )
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self {
            top: DEFAULT_PADDING,
            right: DEFAULT_PADDING,
            bottom: DEFAULT_PADDING,
            left: DEFAULT_PADDING,
        }
    }
}

/// Raw side values, overwritten layer by layer before coercion.
struct PaddingLayers<'a> {
    sides: [Option<&'a Value>; 4],
}

impl<'a> PaddingLayers<'a> {
    const SIDES: [&'static str; 4] = ["top", "right", "bottom", "left"];

    fn apply(&mut self, layer: Option<&'a PaddingOverride>) {
        let Some(layer) = layer else {
            return;
        };
        for (slot, side) in self.sides.iter_mut().zip(Self::SIDES) {
            if let Some(value) = layer.get(side) {
                *slot = Some(value);
            }
        }
    }

    fn resolve(&self) -> Padding {
        let side = |i: usize| self.sides[i].map_or(DEFAULT_PADDING, coerce_int);
        Padding {
            top: side(0),
            right: side(1),
            bottom: side(2),
            left: side(3),
        }
    }
}

/// Resolve the effective padding of a card.
///
/// Layers apply in increasing priority: the 20px default, the document's
/// global `padding_image` (resource card showing its icon) or `padding_text`
/// (every other card), the section's override of the same key, then the
/// card's own `padding`. A side whose winning value is not numeric becomes 0.
///
/// # Examples
///
/// ```
/// use bulletin_model::Card;
/// use bulletin_render::resolve_padding;
///
/// let padding = resolve_padding(&Card::default(), None, None);
/// assert_eq!((padding.top, padding.left), (20, 20));
/// ```
pub fn resolve_padding(
    card: &Card,
    section: Option<&Section>,
    settings: Option<&Settings>,
) -> Padding {
    let with_icon = card.wants_icon();
    let mut layers = PaddingLayers { sides: [None; 4] };

    if let Some(settings) = settings {
        layers.apply(if with_icon {
            settings.padding_image.as_ref()
        } else {
            settings.padding_text.as_ref()
        });
    }
    if let Some(section) = section {
        layers.apply(if with_icon {
            section.padding_image.as_ref()
        } else {
            section.padding_text.as_ref()
        });
    }
    layers.apply(card.padding.as_ref());

    layers.resolve()
}

/// Inline style of a card's outer table.
///
/// Borders are emitted only for a positive width and corner rounding only for
/// a positive radius.
pub fn card_style(card: &Card, defaults: &CardDefaults) -> String {
    let style = &card.style;
    let background = style
        .background_color
        .as_deref()
        .unwrap_or(&defaults.background_color);
    let spacing_bottom = style.spacing_bottom.unwrap_or(defaults.spacing_bottom);
    let border_width = style.border_width.unwrap_or(defaults.border_width);
    let border_color = style
        .border_color
        .as_deref()
        .unwrap_or(&defaults.border_color);
    let border_radius = style.border_radius.unwrap_or(defaults.border_radius);

    let mut css =
        format!("{STYLE_TABLE} background-color:{background}; margin-bottom:{spacing_bottom}px;");
    if border_width > 0 {
        let _ = write!(css, " border:{border_width}px solid {border_color};");
    }
    if border_radius > 0 {
        let _ = write!(css, " border-radius:{border_radius}px;");
    }
    css
}

#[cfg(test)]
mod tests {
    use bulletin_model::{CardKind, CardStyle, ResourceIcon};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn padding(value: serde_json::Value) -> Option<PaddingOverride> {
        Some(serde_json::from_value(value).unwrap())
    }

    fn icon_card() -> Card {
        Card {
            kind: CardKind::Resource,
            icon: ResourceIcon {
                show_icon: true,
                ..ResourceIcon::default()
            },
            ..Card::default()
        }
    }

    #[test]
    fn test_no_layers_gives_defaults() {
        assert_eq!(resolve_padding(&Card::default(), None, None), Padding::default());
    }

    #[test]
    fn test_card_top_overrides_only_top() {
        let settings = Settings {
            padding_text: padding(json!({"top": 10, "right": 11, "bottom": 12, "left": 13})),
            ..Settings::default()
        };
        let section = Section {
            padding_text: padding(json!({"right": 30})),
            ..Section::default()
        };
        let card = Card {
            padding: padding(json!({"top": 5})),
            ..Card::default()
        };

        assert_eq!(
            resolve_padding(&card, Some(&section), Some(&settings)),
            Padding {
                top: 5,
                right: 30,
                bottom: 12,
                left: 13,
            }
        );
    }

    #[test]
    fn test_icon_card_uses_image_padding() {
        let settings = Settings {
            padding_text: padding(json!({"top": 1, "right": 1, "bottom": 1, "left": 1})),
            padding_image: padding(json!({"top": 20, "right": 15, "bottom": 20, "left": 0})),
            ..Settings::default()
        };
        assert_eq!(
            resolve_padding(&icon_card(), None, Some(&settings)),
            Padding {
                top: 20,
                right: 15,
                bottom: 20,
                left: 0,
            }
        );
    }

    #[test]
    fn test_resource_without_icon_uses_text_padding() {
        let settings = Settings {
            padding_text: padding(json!({"left": 7})),
            padding_image: padding(json!({"left": 0})),
            ..Settings::default()
        };
        let card = Card {
            kind: CardKind::Resource,
            ..Card::default()
        };
        assert_eq!(resolve_padding(&card, None, Some(&settings)).left, 7);
    }

    #[test]
    fn test_non_numeric_sides_become_zero() {
        let card = Card {
            padding: padding(json!({"top": "12", "right": "wide", "bottom": null, "left": 3.8})),
            ..Card::default()
        };
        assert_eq!(
            resolve_padding(&card, None, None),
            Padding {
                top: 12,
                right: 0,
                bottom: 0,
                left: 3,
            }
        );
    }

    #[test]
    fn test_padding_css() {
        assert_eq!(Padding::default().css(), "padding:20px 20px 20px 20px;");
    }

    #[test]
    fn test_card_style_defaults() {
        assert_eq!(
            card_style(&Card::default(), &CardDefaults::default()),
            format!("{STYLE_TABLE} background-color:#f9f9f9; margin-bottom:20px;")
        );
    }

    #[test]
    fn test_card_style_border_and_radius() {
        let card = Card {
            style: CardStyle {
                background_color: Some("#fff".to_owned()),
                spacing_bottom: Some(8),
                border_width: Some(2),
                border_color: None,
                border_radius: Some(6),
            },
            ..Card::default()
        };
        assert_eq!(
            card_style(&card, &CardDefaults::default()),
            format!(
                "{STYLE_TABLE} background-color:#fff; margin-bottom:8px; border:2px solid #e0e0e0; border-radius:6px;"
            )
        );
    }
}
