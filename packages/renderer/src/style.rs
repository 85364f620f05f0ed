//! Style translation shared by both renderer sets.
//!
//! Every CSS value derived from a block's `style` goes through this module,
//! so the editor canvas and the exported HTML carry the same strings.

use mailcraft_blocks::{BlockStyle, Padding};
use serde::{Deserialize, Serialize};

/// Ordered list of CSS declarations. Setting an existing property replaces
/// its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CssDeclarations(Vec<(String, String)>);

impl CssDeclarations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.0.iter_mut().find(|(name, _)| *name == property) {
            Some(entry) => entry.1 = value,
            None => self.0.push((property, value)),
        }
    }

    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }

    pub fn remove(&mut self, property: &str) -> Option<String> {
        let index = self.0.iter().position(|(name, _)| name == property)?;
        Some(self.0.remove(index).1)
    }

    pub fn extend(&mut self, other: CssDeclarations) {
        for (property, value) in other.0 {
            self.set(property, value);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value for a `style` attribute: `a: 1; b: 2`
    pub fn to_inline(&self) -> String {
        self.0
            .iter()
            .map(|(name, value)| format!("{}: {}", name, value))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

pub fn padding(padding: &Padding) -> String {
    padding.to_css()
}

pub fn border(color: &str) -> String {
    format!("1px solid {}", color)
}

pub fn background_image(url: &str) -> String {
    format!("url(\"{}\")", url)
}

pub fn px(value: u32) -> String {
    format!("{}px", value)
}

/// Declarations for a block's `style`, excluding `backgroundImage` which
/// each renderer places itself
pub fn block_declarations(style: Option<&BlockStyle>) -> CssDeclarations {
    let mut css = CssDeclarations::new();
    let Some(style) = style else {
        return css;
    };

    if let Some(color) = &style.color {
        css.set("color", color);
    }
    if let Some(color) = &style.background_color {
        css.set("background-color", color);
    }
    if let Some(family) = style.font_family {
        css.set("font-family", family.css_stack());
    }
    if let Some(size) = style.font_size {
        css.set("font-size", px(size));
    }
    if let Some(weight) = style.font_weight {
        css.set("font-weight", weight.as_css());
    }
    if let Some(align) = style.text_align {
        css.set("text-align", align.as_css());
    }
    if let Some(color) = &style.border_color {
        css.set("border", border(color));
    }
    if let Some(radius) = style.border_radius {
        css.set("border-radius", px(radius));
    }
    if let Some(value) = &style.padding {
        css.set("padding", padding(value));
    }

    css
}
