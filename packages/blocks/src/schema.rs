//! # Block Schemas
//!
//! One [`BlockSchema`] per block type. A schema lists the fields its props
//! and style bags accept. The inspector reads the field list to build its
//! form, and [`BlockSchema::validate`] checks incoming data against the same
//! list before decoding it into a typed [`Block`].

use crate::block::{Block, BlockType};
use crate::error::{Section, ValidationError};
use crate::props::{AvatarShape, ButtonSize, ButtonStyle, VerticalAlign};
use crate::style::FontFamily;
use serde_json::{json, Map, Value};

/// Value kind of a single field, with its constraints
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Single-line string
    Text,
    /// Multi-line string (text bodies, raw HTML)
    MultilineText,
    Url,
    /// `#RRGGBB`
    Color,
    /// Whole number of pixels in `min..=max`
    Number { min: u32, max: u32 },
    Boolean,
    /// One of a fixed list of strings
    Choice(&'static [&'static str]),
    /// `{top, bottom, left, right}` in pixels
    Padding,
    /// Per-column fixed widths, `null` for auto
    ColumnWidths,
}

const PADDING_MAX: u64 = 400;
const WIDTH_MAX: u64 = 1200;

impl FieldKind {
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            FieldKind::Text | FieldKind::MultilineText | FieldKind::Url => value.is_string(),
            FieldKind::Color => value.as_str().map(is_hex_color).unwrap_or(false),
            FieldKind::Number { min, max } => value
                .as_u64()
                .map(|n| n >= u64::from(*min) && n <= u64::from(*max))
                .unwrap_or(false),
            FieldKind::Boolean => value.is_boolean(),
            FieldKind::Choice(options) => value
                .as_str()
                .map(|s| options.contains(&s))
                .unwrap_or(false),
            FieldKind::Padding => match value.as_object() {
                Some(sides) => {
                    sides.len() == 4
                        && ["top", "bottom", "left", "right"].iter().all(|side| {
                            sides
                                .get(*side)
                                .and_then(Value::as_u64)
                                .map(|n| n <= PADDING_MAX)
                                .unwrap_or(false)
                        })
                }
                None => false,
            },
            FieldKind::ColumnWidths => match value.as_array() {
                Some(widths) => widths.iter().all(|w| {
                    w.is_null() || w.as_u64().map(|n| n <= WIDTH_MAX).unwrap_or(false)
                }),
                None => false,
            },
        }
    }

    /// Human readable expectation, used in error messages
    pub fn describe(&self) -> String {
        match self {
            FieldKind::Text | FieldKind::MultilineText => "a string".to_string(),
            FieldKind::Url => "a URL string".to_string(),
            FieldKind::Color => "a #RRGGBB color".to_string(),
            FieldKind::Number { min, max } => format!("a whole number between {} and {}", min, max),
            FieldKind::Boolean => "true or false".to_string(),
            FieldKind::Choice(options) => format!("one of {}", options.join(", ")),
            FieldKind::Padding => format!(
                "an object with top, bottom, left and right between 0 and {}",
                PADDING_MAX
            ),
            FieldKind::ColumnWidths => format!("an array of widths up to {} or null", WIDTH_MAX),
        }
    }
}

fn is_hex_color(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { name, label, kind }
    }
}

/// Validator and inspector description for one block type
#[derive(Debug, Clone, PartialEq)]
pub struct BlockSchema {
    pub block_type: BlockType,
    pub props: &'static [FieldSpec],
    pub style: &'static [FieldSpec],
}

impl BlockSchema {
    pub fn accepts_children(&self) -> bool {
        self.block_type.accepts_children()
    }

    pub fn field(&self, section: Section, name: &str) -> Option<&FieldSpec> {
        let fields = match section {
            Section::Props => self.props,
            Section::Style => self.style,
        };
        fields.iter().find(|f| f.name == name)
    }

    /// Validate a raw `data` payload and decode it into a typed block
    pub fn validate(&self, data: &Value) -> Result<Block, ValidationError> {
        let empty = Map::new();
        let fields = match data {
            Value::Object(map) => map,
            Value::Null => &empty,
            _ => {
                return Err(ValidationError::NotAnObject {
                    block_type: self.block_type,
                    section: "data",
                })
            }
        };

        for (key, value) in fields {
            match key.as_str() {
                "props" => self.check_section(Section::Props, value)?,
                "style" => self.check_section(Section::Style, value)?,
                "childrenIds" => self.check_children(value)?,
                other => {
                    return Err(ValidationError::Malformed {
                        block_type: self.block_type,
                        message: format!("unknown key `{}` in data", other),
                    })
                }
            }
        }

        let payload = Value::Object(fields.clone());
        serde_json::from_value(json!({ "type": self.block_type.name(), "data": payload })).map_err(
            |e| ValidationError::Malformed {
                block_type: self.block_type,
                message: e.to_string(),
            },
        )
    }

    /// Re-run the constraint checks on an already typed block
    pub fn check(&self, block: &Block) -> Result<(), ValidationError> {
        if block.block_type() != self.block_type {
            return Err(ValidationError::Malformed {
                block_type: self.block_type,
                message: format!("schema applied to a {} block", block.block_type()),
            });
        }
        self.validate(&block.data_value()).map(|_| ())
    }

    fn check_section(&self, section: Section, value: &Value) -> Result<(), ValidationError> {
        let entries = match value {
            Value::Null => return Ok(()),
            Value::Object(entries) => entries,
            _ => {
                return Err(ValidationError::NotAnObject {
                    block_type: self.block_type,
                    section: match section {
                        Section::Props => "props",
                        Section::Style => "style",
                    },
                })
            }
        };

        for (name, field_value) in entries {
            let spec = self
                .field(section, name)
                .ok_or_else(|| ValidationError::UnknownField {
                    block_type: self.block_type,
                    section,
                    field: name.clone(),
                })?;

            if field_value.is_null() {
                continue;
            }

            if !spec.kind.accepts(field_value) {
                return Err(ValidationError::InvalidValue {
                    block_type: self.block_type,
                    section,
                    field: name.clone(),
                    expected: spec.kind.describe(),
                });
            }
        }

        Ok(())
    }

    fn check_children(&self, value: &Value) -> Result<(), ValidationError> {
        if !self.accepts_children() {
            return Err(ValidationError::ChildrenNotAllowed(self.block_type));
        }
        let valid = value
            .as_array()
            .map(|ids| ids.iter().all(Value::is_string))
            .unwrap_or(false);
        if valid {
            Ok(())
        } else {
            Err(ValidationError::InvalidChildren {
                block_type: self.block_type,
            })
        }
    }
}

const FONT_WEIGHTS: &[&str] = &["bold", "normal"];
const TEXT_ALIGNS: &[&str] = &["left", "center", "right"];

const COLOR: FieldSpec = FieldSpec::new("color", "Text color", FieldKind::Color);
const BACKGROUND_COLOR: FieldSpec =
    FieldSpec::new("backgroundColor", "Background color", FieldKind::Color);
const BACKGROUND_IMAGE: FieldSpec =
    FieldSpec::new("backgroundImage", "Background image", FieldKind::Url);
const BORDER_COLOR: FieldSpec = FieldSpec::new("borderColor", "Border color", FieldKind::Color);
const BORDER_RADIUS: FieldSpec = FieldSpec::new(
    "borderRadius",
    "Border radius",
    FieldKind::Number { min: 0, max: 200 },
);
const FONT_FAMILY: FieldSpec = FieldSpec::new(
    "fontFamily",
    "Font family",
    FieldKind::Choice(FontFamily::NAMES),
);
const FONT_SIZE: FieldSpec = FieldSpec::new(
    "fontSize",
    "Font size",
    FieldKind::Number { min: 1, max: 200 },
);
const FONT_WEIGHT: FieldSpec =
    FieldSpec::new("fontWeight", "Font weight", FieldKind::Choice(FONT_WEIGHTS));
const TEXT_ALIGN: FieldSpec =
    FieldSpec::new("textAlign", "Alignment", FieldKind::Choice(TEXT_ALIGNS));
const PADDING: FieldSpec = FieldSpec::new("padding", "Padding", FieldKind::Padding);

const TEXT_STYLE: &[FieldSpec] = &[
    COLOR,
    BACKGROUND_COLOR,
    FONT_FAMILY,
    FONT_SIZE,
    FONT_WEIGHT,
    TEXT_ALIGN,
    PADDING,
];

pub const TEXT: BlockSchema = BlockSchema {
    block_type: BlockType::Text,
    props: &[
        FieldSpec::new("text", "Content", FieldKind::MultilineText),
        FieldSpec::new("markdown", "Markdown", FieldKind::Boolean),
    ],
    style: TEXT_STYLE,
};

pub const IMAGE: BlockSchema = BlockSchema {
    block_type: BlockType::Image,
    props: &[
        FieldSpec::new("url", "Source URL", FieldKind::Url),
        FieldSpec::new("alt", "Alt text", FieldKind::Text),
        FieldSpec::new("linkHref", "Click through URL", FieldKind::Url),
        FieldSpec::new("width", "Width", FieldKind::Number { min: 0, max: 1200 }),
        FieldSpec::new("height", "Height", FieldKind::Number { min: 0, max: 1200 }),
        FieldSpec::new(
            "contentAlignment",
            "Alignment",
            FieldKind::Choice(VerticalAlign::NAMES),
        ),
    ],
    style: &[BACKGROUND_COLOR, TEXT_ALIGN, PADDING],
};

pub const BUTTON: BlockSchema = BlockSchema {
    block_type: BlockType::Button,
    props: &[
        FieldSpec::new("text", "Text", FieldKind::Text),
        FieldSpec::new("url", "URL", FieldKind::Url),
        FieldSpec::new("buttonBackgroundColor", "Button color", FieldKind::Color),
        FieldSpec::new("buttonTextColor", "Text color", FieldKind::Color),
        FieldSpec::new("buttonStyle", "Style", FieldKind::Choice(ButtonStyle::NAMES)),
        FieldSpec::new("size", "Size", FieldKind::Choice(ButtonSize::NAMES)),
        FieldSpec::new("fullWidth", "Full width", FieldKind::Boolean),
    ],
    style: &[
        BACKGROUND_COLOR,
        FONT_FAMILY,
        FONT_SIZE,
        FONT_WEIGHT,
        TEXT_ALIGN,
        PADDING,
    ],
};

pub const DIVIDER: BlockSchema = BlockSchema {
    block_type: BlockType::Divider,
    props: &[
        FieldSpec::new("lineColor", "Color", FieldKind::Color),
        FieldSpec::new("lineHeight", "Height", FieldKind::Number { min: 1, max: 32 }),
    ],
    style: &[BACKGROUND_COLOR, PADDING],
};

pub const SPACER: BlockSchema = BlockSchema {
    block_type: BlockType::Spacer,
    props: &[FieldSpec::new(
        "height",
        "Height",
        FieldKind::Number { min: 0, max: 400 },
    )],
    style: &[],
};

pub const AVATAR: BlockSchema = BlockSchema {
    block_type: BlockType::Avatar,
    props: &[
        FieldSpec::new("imageUrl", "Image URL", FieldKind::Url),
        FieldSpec::new("alt", "Alt text", FieldKind::Text),
        FieldSpec::new("size", "Size", FieldKind::Number { min: 8, max: 512 }),
        FieldSpec::new("shape", "Shape", FieldKind::Choice(AvatarShape::NAMES)),
    ],
    style: &[TEXT_ALIGN, PADDING],
};

pub const HTML: BlockSchema = BlockSchema {
    block_type: BlockType::Html,
    props: &[FieldSpec::new("contents", "Content", FieldKind::MultilineText)],
    style: &[
        COLOR,
        BACKGROUND_COLOR,
        FONT_FAMILY,
        FONT_SIZE,
        TEXT_ALIGN,
        PADDING,
    ],
};

pub const CONTAINER: BlockSchema = BlockSchema {
    block_type: BlockType::Container,
    props: &[],
    style: &[
        BACKGROUND_COLOR,
        BACKGROUND_IMAGE,
        BORDER_COLOR,
        BORDER_RADIUS,
        PADDING,
    ],
};

pub const COLUMNS_CONTAINER: BlockSchema = BlockSchema {
    block_type: BlockType::ColumnsContainer,
    props: &[
        FieldSpec::new(
            "columnsGap",
            "Columns gap",
            FieldKind::Number { min: 0, max: 200 },
        ),
        FieldSpec::new(
            "contentAlignment",
            "Alignment",
            FieldKind::Choice(VerticalAlign::NAMES),
        ),
        FieldSpec::new("fixedWidths", "Column widths", FieldKind::ColumnWidths),
    ],
    style: &[BACKGROUND_COLOR, BACKGROUND_IMAGE, PADDING],
};

pub const EMAIL_LAYOUT: BlockSchema = BlockSchema {
    block_type: BlockType::EmailLayout,
    props: &[
        FieldSpec::new("backdropColor", "Backdrop color", FieldKind::Color),
        FieldSpec::new("canvasColor", "Canvas color", FieldKind::Color),
        FieldSpec::new("textColor", "Text color", FieldKind::Color),
        FieldSpec::new("linkColor", "Link color", FieldKind::Color),
        BORDER_COLOR,
        BORDER_RADIUS,
        FONT_FAMILY,
    ],
    style: &[BACKGROUND_IMAGE, PADDING],
};

/// Schemas for every built-in block type
pub fn builtin_schemas() -> Vec<BlockSchema> {
    vec![
        TEXT,
        IMAGE,
        BUTTON,
        DIVIDER,
        SPACER,
        AVATAR,
        HTML,
        CONTAINER,
        COLUMNS_CONTAINER,
        EMAIL_LAYOUT,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_text() {
        let block = TEXT
            .validate(&json!({"props": {"text": "hi"}, "style": {"color": "#112233"}}))
            .unwrap();
        assert_eq!(block.block_type(), BlockType::Text);
    }

    #[test]
    fn test_rejects_bad_color() {
        let err = TEXT
            .validate(&json!({"style": {"color": "red"}}))
            .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidValue { ref field, .. } if field == "color"
        ));
    }

    #[test]
    fn test_rejects_unknown_field() {
        let err = SPACER
            .validate(&json!({"props": {"height": 10, "width": 5}}))
            .unwrap_err();
        assert!(matches!(err, ValidationError::UnknownField { .. }));
    }

    #[test]
    fn test_rejects_children_on_leaf() {
        let err = TEXT.validate(&json!({"childrenIds": []})).unwrap_err();
        assert_eq!(err, ValidationError::ChildrenNotAllowed(BlockType::Text));
    }

    #[test]
    fn test_number_range() {
        assert!(SPACER.validate(&json!({"props": {"height": 400}})).is_ok());
        assert!(SPACER.validate(&json!({"props": {"height": 401}})).is_err());
        assert!(SPACER.validate(&json!({"props": {"height": -1}})).is_err());
    }

    #[test]
    fn test_padding_requires_all_sides() {
        let ok = json!({"style": {"padding": {"top": 1, "bottom": 2, "left": 3, "right": 4}}});
        let missing = json!({"style": {"padding": {"top": 1, "bottom": 2, "left": 3}}});
        assert!(CONTAINER.validate(&ok).is_ok());
        assert!(CONTAINER.validate(&missing).is_err());
    }

    #[test]
    fn test_null_fields_are_unset() {
        let block = BUTTON
            .validate(&json!({"props": {"text": "Go", "url": null}}))
            .unwrap();
        match block {
            Block::Button(data) => assert_eq!(data.props_or_default().url, None),
            other => panic!("unexpected block {:?}", other),
        }
    }

    #[test]
    fn test_check_typed_block() {
        let block = Block::starter(BlockType::Button);
        assert!(BUTTON.check(&block).is_ok());
        assert!(TEXT.check(&block).is_err());
    }

    #[test]
    fn test_every_type_has_builtin_schema() {
        let schemas = builtin_schemas();
        for block_type in BlockType::ALL {
            assert!(schemas.iter().any(|s| s.block_type == block_type));
        }
    }
}
