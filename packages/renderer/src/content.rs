//! Block bodies shared by the editor and reader renderers.
//!
//! Each function returns the block's own markup with its translated style
//! applied. Wrapping (selection outlines, background-image tables, the
//! layout canvas) is left to the renderer set.

use crate::markdown::render_markdown;
use crate::style::{self, block_declarations, CssDeclarations};
use crate::vdom::VNode;
use mailcraft_blocks::props::{
    AvatarProps, ButtonProps, ColumnsContainerProps, DividerProps, EmailLayoutProps, HtmlProps,
    ImageProps, SpacerProps, TextProps,
};
use mailcraft_blocks::{BlockData, BlockStyle};

fn shell(style: Option<&BlockStyle>) -> VNode {
    VNode::element("div").with_styles(block_declarations(style))
}

pub fn text(data: &BlockData<TextProps>) -> VNode {
    let props = data.props_or_default();
    let body = if props.is_markdown() {
        VNode::html(render_markdown(props.text()))
    } else {
        VNode::text(props.text())
    };
    shell(data.style.as_ref()).with_child(body)
}

pub fn image(data: &BlockData<ImageProps>) -> VNode {
    let props = data.props_or_default();

    let mut img = VNode::element("img")
        .with_attr("src", props.url.clone().unwrap_or_default())
        .with_attr("alt", props.alt.clone().unwrap_or_default())
        .with_style("outline", "none")
        .with_style("border", "none")
        .with_style("text-decoration", "none")
        .with_style("vertical-align", props.content_alignment().as_css())
        .with_style("display", "inline-block")
        .with_style("max-width", "100%");
    if let Some(width) = props.width {
        img = img.with_attr("width", width.to_string());
    }
    if let Some(height) = props.height {
        img = img.with_attr("height", height.to_string());
    }

    let content = match &props.link_href {
        Some(href) => VNode::element("a")
            .with_attr("href", href.as_str())
            .with_attr("target", "_blank")
            .with_style("text-decoration", "none")
            .with_child(img),
        None => img,
    };

    shell(data.style.as_ref()).with_child(content)
}

pub fn button(data: &BlockData<ButtonProps>) -> VNode {
    let props = data.props_or_default();
    let (vertical, horizontal) = props.size().padding();

    let mut css = CssDeclarations::new()
        .with("color", props.text_color())
        .with("background-color", props.background());
    if let Some(style) = &data.style {
        if let Some(size) = style.font_size {
            css.set("font-size", style::px(size));
        }
        if let Some(family) = style.font_family {
            css.set("font-family", family.css_stack());
        }
        if let Some(weight) = style.font_weight {
            css.set("font-weight", weight.as_css());
        }
    }
    if let Some(radius) = props.shape().border_radius() {
        css.set("border-radius", style::px(radius));
    }
    let full_width = props.full_width.unwrap_or(false);
    css.set("display", if full_width { "block" } else { "inline-block" });
    css.set(
        "padding",
        format!("{}px {}px", vertical, horizontal),
    );
    css.set("text-decoration", "none");

    let link = VNode::element("a")
        .with_attr("href", props.url.clone().unwrap_or_default())
        .with_attr("target", "_blank")
        .with_styles(css)
        .with_child(VNode::element("span").with_child(VNode::text(
            props.text.clone().unwrap_or_default(),
        )));

    shell(data.style.as_ref()).with_child(link)
}

pub fn divider(data: &BlockData<DividerProps>) -> VNode {
    let props = data.props_or_default();
    let rule = VNode::element("hr")
        .with_style("width", "100%")
        .with_style("border", "none")
        .with_style(
            "border-top",
            format!("{}px solid {}", props.line_height(), props.line_color()),
        )
        .with_style("margin", "0");

    shell(data.style.as_ref()).with_child(rule)
}

pub fn spacer(data: &BlockData<SpacerProps>) -> VNode {
    let props = data.props_or_default();
    VNode::element("div").with_style("height", style::px(props.height()))
}

pub fn avatar(data: &BlockData<AvatarProps>) -> VNode {
    let props = data.props_or_default();
    let size = props.size();

    let mut img = VNode::element("img")
        .with_attr("src", props.image_url.clone().unwrap_or_default())
        .with_attr("alt", props.alt.clone().unwrap_or_default())
        .with_attr("width", size.to_string())
        .with_attr("height", size.to_string())
        .with_style("display", "inline-block")
        .with_style("object-fit", "cover")
        .with_style("width", style::px(size))
        .with_style("height", style::px(size))
        .with_style("vertical-align", "middle");
    if let Some(radius) = props.border_radius() {
        img = img.with_style("border-radius", style::px(radius));
    }

    shell(data.style.as_ref()).with_child(img)
}

pub fn html(data: &BlockData<HtmlProps>) -> VNode {
    let props = data.props_or_default();
    shell(data.style.as_ref()).with_child(VNode::html(props.contents.unwrap_or_default()))
}

/// Plain container: a styled div around the children
pub fn container(style: Option<&BlockStyle>, children: Vec<VNode>) -> VNode {
    shell(style).with_children(children)
}

/// One table cell per child, gap split between neighbouring cells
pub fn columns(data: &BlockData<ColumnsContainerProps>, children: Vec<VNode>) -> VNode {
    let props = data.props_or_default();
    let half_gap = props.columns_gap() / 2;
    let last = children.len().saturating_sub(1);

    let cells = children
        .into_iter()
        .enumerate()
        .map(|(index, child)| {
            let left = if index == 0 { 0 } else { half_gap };
            let right = if index == last { 0 } else { half_gap };

            let mut cell = VNode::element("td")
                .with_style("box-sizing", "content-box")
                .with_style("vertical-align", props.content_alignment().as_css())
                .with_style("padding-left", style::px(left))
                .with_style("padding-right", style::px(right));
            if let Some(width) = props.fixed_width(index) {
                cell = cell.with_style("width", style::px(width));
            }
            cell.with_child(child)
        })
        .collect();

    let table = presentation_table("100%")
        .with_attr("align", "center")
        .with_style("table-layout", "fixed")
        .with_style("border-collapse", "collapse")
        .with_child(
            VNode::element("tbody").with_child(
                VNode::element("tr")
                    .with_style("width", "100%")
                    .with_children(cells),
            ),
        );

    shell(data.style.as_ref()).with_child(table)
}

/// Typography and backdrop shared by the editor canvas and the reader's
/// outer table
pub fn layout_declarations(props: &EmailLayoutProps) -> CssDeclarations {
    CssDeclarations::new()
        .with("background-color", props.backdrop_color())
        .with("color", props.text_color())
        .with("font-family", props.font_family().css_stack())
        .with("font-size", "16px")
        .with("font-weight", "400")
        .with("letter-spacing", "0.15008px")
        .with("line-height", "1.5")
        .with("margin", "0")
}

/// Declarations of the 600px canvas
pub fn canvas_declarations(props: &EmailLayoutProps) -> CssDeclarations {
    let mut css = CssDeclarations::new()
        .with("max-width", style::px(EmailLayoutProps::CANVAS_WIDTH))
        .with("margin", "0 auto")
        .with("background-color", props.canvas_color());
    if let Some(radius) = props.border_radius {
        css.set("border-radius", style::px(radius));
    }
    if let Some(color) = &props.border_color {
        css.set("border", style::border(color));
    }
    css
}

/// Padding around the canvas unless the layout style overrides it
pub fn layout_padding(data: &BlockData<EmailLayoutProps>) -> String {
    data.style
        .as_ref()
        .and_then(|style| style.padding.as_ref())
        .map(style::padding)
        .unwrap_or_else(|| "32px 0px 32px 0px".to_string())
}

/// `<table>` with the attributes mail clients expect on layout tables
pub fn presentation_table(width: &str) -> VNode {
    VNode::element("table")
        .with_attr("role", "presentation")
        .with_attr("width", width)
        .with_attr("cellspacing", "0")
        .with_attr("cellpadding", "0")
        .with_attr("border", "0")
}

/// Link color for the whole email, as a `<style>` rule
pub fn link_color_rule(props: &EmailLayoutProps) -> Option<VNode> {
    props
        .link_color
        .as_ref()
        .map(|color| VNode::element("style").with_child(VNode::text(format!("a {{ color: {}; }}", color))))
}
