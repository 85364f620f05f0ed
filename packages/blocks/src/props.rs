//! Per-type property bags.
//!
//! Every field is optional on the wire; render defaults live next to the
//! struct so both renderer sets agree on them.

use crate::style::FontFamily;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    Middle,
    Bottom,
}

impl VerticalAlign {
    pub const NAMES: &'static [&'static str] = &["top", "middle", "bottom"];

    pub fn as_css(&self) -> &'static str {
        match self {
            VerticalAlign::Top => "top",
            VerticalAlign::Middle => "middle",
            VerticalAlign::Bottom => "bottom",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TextProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markdown: Option<bool>,
}

impl TextProps {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            markdown: None,
        }
    }

    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    pub fn is_markdown(&self) -> bool {
        self.markdown.unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ImageProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_alignment: Option<VerticalAlign>,
}

impl ImageProps {
    pub fn content_alignment(&self) -> VerticalAlign {
        self.content_alignment.unwrap_or(VerticalAlign::Middle)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    Rectangle,
    Rounded,
    Pill,
}

impl ButtonStyle {
    pub const NAMES: &'static [&'static str] = &["rectangle", "rounded", "pill"];

    /// Border radius for the button shape, `None` for square corners
    pub fn border_radius(&self) -> Option<u32> {
        match self {
            ButtonStyle::Rectangle => None,
            ButtonStyle::Rounded => Some(4),
            ButtonStyle::Pill => Some(64),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonSize {
    XSmall,
    Small,
    Medium,
    Large,
}

impl ButtonSize {
    pub const NAMES: &'static [&'static str] = &["x-small", "small", "medium", "large"];

    /// Vertical and horizontal inner padding of the button face
    pub fn padding(&self) -> (u32, u32) {
        match self {
            ButtonSize::XSmall => (4, 8),
            ButtonSize::Small => (8, 12),
            ButtonSize::Medium => (12, 20),
            ButtonSize::Large => (16, 32),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ButtonProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_style: Option<ButtonStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<ButtonSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_width: Option<bool>,
}

impl ButtonProps {
    pub const DEFAULT_BACKGROUND: &'static str = "#999999";
    pub const DEFAULT_TEXT_COLOR: &'static str = "#FFFFFF";

    pub fn background(&self) -> &str {
        self.button_background_color
            .as_deref()
            .unwrap_or(Self::DEFAULT_BACKGROUND)
    }

    pub fn text_color(&self) -> &str {
        self.button_text_color
            .as_deref()
            .unwrap_or(Self::DEFAULT_TEXT_COLOR)
    }

    pub fn shape(&self) -> ButtonStyle {
        self.button_style.unwrap_or(ButtonStyle::Rounded)
    }

    pub fn size(&self) -> ButtonSize {
        self.size.unwrap_or(ButtonSize::Medium)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DividerProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<u32>,
}

impl DividerProps {
    pub fn line_color(&self) -> &str {
        self.line_color.as_deref().unwrap_or("#333333")
    }

    pub fn line_height(&self) -> u32 {
        self.line_height.unwrap_or(1)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SpacerProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl SpacerProps {
    pub fn height(&self) -> u32 {
        self.height.unwrap_or(16)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvatarShape {
    Circle,
    Square,
    Rounded,
}

impl AvatarShape {
    pub const NAMES: &'static [&'static str] = &["circle", "square", "rounded"];
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AvatarProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<AvatarShape>,
}

impl AvatarProps {
    pub fn size(&self) -> u32 {
        self.size.unwrap_or(64)
    }

    pub fn shape(&self) -> AvatarShape {
        self.shape.unwrap_or(AvatarShape::Square)
    }

    /// Corner radius in pixels for the configured shape
    pub fn border_radius(&self) -> Option<u32> {
        match self.shape() {
            AvatarShape::Circle => Some(self.size()),
            AvatarShape::Rounded => Some(self.size() / 8),
            AvatarShape::Square => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HtmlProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contents: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContainerProps {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ColumnsContainerProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns_gap: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_alignment: Option<VerticalAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_widths: Option<Vec<Option<u32>>>,
}

impl ColumnsContainerProps {
    pub fn columns_gap(&self) -> u32 {
        self.columns_gap.unwrap_or(0)
    }

    pub fn content_alignment(&self) -> VerticalAlign {
        self.content_alignment.unwrap_or(VerticalAlign::Middle)
    }

    pub fn fixed_width(&self, column: usize) -> Option<u32> {
        self.fixed_widths
            .as_ref()
            .and_then(|widths| widths.get(column).copied().flatten())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EmailLayoutProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backdrop_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canvas_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<FontFamily>,
}

impl EmailLayoutProps {
    /// Fixed canvas width of the email-safe inner table
    pub const CANVAS_WIDTH: u32 = 600;

    pub fn backdrop_color(&self) -> &str {
        self.backdrop_color.as_deref().unwrap_or("#F5F5F5")
    }

    pub fn canvas_color(&self) -> &str {
        self.canvas_color.as_deref().unwrap_or("#FFFFFF")
    }

    pub fn text_color(&self) -> &str {
        self.text_color.as_deref().unwrap_or("#262626")
    }

    pub fn font_family(&self) -> FontFamily {
        self.font_family.unwrap_or(FontFamily::ModernSans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let button = ButtonProps::default();
        assert_eq!(button.background(), "#999999");
        assert_eq!(button.shape(), ButtonStyle::Rounded);
        assert_eq!(button.size().padding(), (12, 20));

        assert_eq!(SpacerProps::default().height(), 16);
        assert_eq!(DividerProps::default().line_height(), 1);
        assert_eq!(EmailLayoutProps::default().canvas_color(), "#FFFFFF");
    }

    #[test]
    fn test_button_size_kebab_case() {
        let size: ButtonSize = serde_json::from_str("\"x-small\"").unwrap();
        assert_eq!(size, ButtonSize::XSmall);
    }

    #[test]
    fn test_columns_fixed_width_lookup() {
        let props = ColumnsContainerProps {
            fixed_widths: Some(vec![Some(200), None]),
            ..Default::default()
        };
        assert_eq!(props.fixed_width(0), Some(200));
        assert_eq!(props.fixed_width(1), None);
        assert_eq!(props.fixed_width(2), None);
    }

    #[test]
    fn test_avatar_radius_by_shape() {
        let mut avatar = AvatarProps {
            size: Some(80),
            ..Default::default()
        };
        assert_eq!(avatar.border_radius(), None);
        avatar.shape = Some(AvatarShape::Circle);
        assert_eq!(avatar.border_radius(), Some(80));
        avatar.shape = Some(AvatarShape::Rounded);
        assert_eq!(avatar.border_radius(), Some(10));
    }
}
