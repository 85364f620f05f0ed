use serde::{Deserialize, Serialize};

/// Padding in pixels, stored as a structured object and flattened to CSS
/// shorthand at render time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Padding {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

impl Padding {
    pub fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    pub fn uniform(value: u32) -> Self {
        Self::new(value, value, value, value)
    }

    /// CSS shorthand in top/right/bottom/left order
    pub fn to_css(&self) -> String {
        format!(
            "{}px {}px {}px {}px",
            self.top, self.right, self.bottom, self.left
        )
    }
}

/// Font stacks offered by the inspector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FontFamily {
    ModernSans,
    BookSans,
    OrganicSans,
    GeometricSans,
    HeavySans,
    RoundedSans,
    ModernSerif,
    BookSerif,
    Monospace,
}

impl FontFamily {
    pub const NAMES: &'static [&'static str] = &[
        "MODERN_SANS",
        "BOOK_SANS",
        "ORGANIC_SANS",
        "GEOMETRIC_SANS",
        "HEAVY_SANS",
        "ROUNDED_SANS",
        "MODERN_SERIF",
        "BOOK_SERIF",
        "MONOSPACE",
    ];

    pub fn css_stack(&self) -> &'static str {
        match self {
            FontFamily::ModernSans => {
                r#""Helvetica Neue", "Arial Nova", "Nimbus Sans", Arial, sans-serif"#
            }
            FontFamily::BookSans => r#"Optima, Candara, "Noto Sans", source-sans-pro, sans-serif"#,
            FontFamily::OrganicSans => {
                r#"Seravek, "Gill Sans Nova", Ubuntu, Calibri, "DejaVu Sans", source-sans-pro, sans-serif"#
            }
            FontFamily::GeometricSans => {
                r#"Avenir, "Avenir Next LT Pro", Montserrat, Corbel, "URW Gothic", source-sans-pro, sans-serif"#
            }
            FontFamily::HeavySans => {
                r#"Bahnschrift, "DIN Alternate", "Franklin Gothic Medium", "Nimbus Sans Narrow", sans-serif-condensed, sans-serif"#
            }
            FontFamily::RoundedSans => {
                r#"ui-rounded, "Hiragino Maru Gothic ProN", Quicksand, Comfortaa, Manjari, "Arial Rounded MT Bold", Calibri, source-sans-pro, sans-serif"#
            }
            FontFamily::ModernSerif => r#"Charter, "Bitstream Charter", "Sitka Text", Cambria, serif"#,
            FontFamily::BookSerif => {
                r#""Iowan Old Style", "Palatino Linotype", "URW Palladio L", P052, serif"#
            }
            FontFamily::Monospace => r#""Nimbus Mono PS", "Courier New", "Cutive Mono", monospace"#,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Bold,
    Normal,
}

impl FontWeight {
    pub fn as_css(&self) -> &'static str {
        match self {
            FontWeight::Bold => "bold",
            FontWeight::Normal => "normal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_css(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Style bag shared by every block type. Which keys a given type accepts is
/// decided by its schema, not by this struct.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BlockStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<FontFamily>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
}

impl BlockStyle {
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn with_background_image(mut self, url: impl Into<String>) -> Self {
        self.background_image = Some(url.into());
        self
    }

    pub fn with_border_color(mut self, color: impl Into<String>) -> Self {
        self.border_color = Some(color.into());
        self
    }

    pub fn with_text_align(mut self, align: TextAlign) -> Self {
        self.text_align = Some(align);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_shorthand_order() {
        let padding = Padding::new(1, 2, 3, 4);
        assert_eq!(padding.to_css(), "1px 2px 3px 4px");
        assert_eq!(Padding::uniform(24).to_css(), "24px 24px 24px 24px");
    }

    #[test]
    fn test_font_family_names_match_serde() {
        for name in FontFamily::NAMES {
            let parsed: FontFamily = serde_json::from_value(serde_json::json!(name)).unwrap();
            assert_eq!(serde_json::to_value(parsed).unwrap(), serde_json::json!(name));
        }
    }

    #[test]
    fn test_style_skips_unset_fields() {
        let style = BlockStyle::default().with_border_color("#CCCCCC");
        let json = serde_json::to_string(&style).unwrap();
        assert_eq!(json, r##"{"borderColor":"#CCCCCC"}"##);
    }
}
