//! VNode → HTML string serialization

use crate::vdom::VNode;

/// Options for HTML output
#[derive(Debug, Clone, PartialEq)]
pub struct ReaderOptions {
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
    /// Contents of `<title>`, if any
    pub title: Option<String>,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            indent: "  ".to_string(),
            title: None,
        }
    }
}

impl ReaderOptions {
    pub fn pretty() -> Self {
        Self {
            pretty: true,
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

struct Context<'o> {
    options: &'o ReaderOptions,
    depth: usize,
    buffer: String,
}

impl<'o> Context<'o> {
    fn new(options: &'o ReaderOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        self.newline();
    }

    fn newline(&mut self) {
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Serialize a full HTML document around `body`
pub fn document_markup(body: &VNode, options: &ReaderOptions) -> String {
    let mut ctx = Context::new(options);

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html>");
    ctx.indent();

    ctx.add_line("<head>");
    ctx.indent();
    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    if let Some(title) = &options.title {
        ctx.add_line(&format!("<title>{}</title>", escape_html(title)));
    }
    ctx.dedent();
    ctx.add_line("</head>");

    ctx.add_line("<body style=\"margin: 0; padding: 0\">");
    ctx.indent();
    write_node(body, &mut ctx);
    ctx.dedent();
    ctx.add_line("</body>");

    ctx.dedent();
    ctx.add_line("</html>");

    ctx.get_output()
}

/// Serialize a single node tree (no document wrapper)
pub fn to_markup(node: &VNode, options: &ReaderOptions) -> String {
    let mut ctx = Context::new(options);
    write_node(node, &mut ctx);
    ctx.get_output()
}

fn write_node(node: &VNode, ctx: &mut Context) {
    match node {
        VNode::Element {
            tag,
            attributes,
            styles,
            children,
            ..
        } => {
            if ctx.options.pretty {
                ctx.add_indent();
            }
            ctx.add(&format!("<{}", tag));

            for (name, value) in attributes {
                ctx.add(&format!(" {}=\"{}\"", name, escape_html(value)));
            }
            if !styles.is_empty() {
                ctx.add(&format!(" style=\"{}\"", escape_html(&styles.to_inline())));
            }

            if children.is_empty() && is_self_closing(tag) {
                ctx.add(" />");
                ctx.newline();
                return;
            }

            ctx.add(">");

            let block_layout = ctx.options.pretty && has_element_children(children);
            if block_layout {
                ctx.add("\n");
                ctx.indent();
                for child in children {
                    write_node(child, ctx);
                }
                ctx.dedent();
                ctx.add_indent();
            } else {
                for child in children {
                    write_inline(child, ctx);
                }
            }

            ctx.add(&format!("</{}>", tag));
            ctx.newline();
        }

        other => {
            if ctx.options.pretty {
                ctx.add_indent();
            }
            write_inline(other, ctx);
            ctx.newline();
        }
    }
}

/// Node written without surrounding whitespace
fn write_inline(node: &VNode, ctx: &mut Context) {
    match node {
        VNode::Element { .. } => {
            if ctx.options.pretty {
                let flat = ReaderOptions {
                    pretty: false,
                    ..ctx.options.clone()
                };
                ctx.add(&to_markup(node, &flat));
            } else {
                write_node(node, ctx);
            }
        }
        VNode::Text { content } => ctx.add(&escape_html(content)),
        VNode::Html { markup } => ctx.add(markup),
        VNode::Comment { content } => {
            ctx.add(&format!("<!-- {} -->", content.replace("--", "- -")))
        }
    }
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn is_self_closing(tag: &str) -> bool {
    matches!(
        tag,
        "img" | "input" | "br" | "hr" | "meta" | "link" | "area" | "base" | "col" | "wbr"
    )
}

fn has_element_children(children: &[VNode]) -> bool {
    children
        .iter()
        .any(|child| matches!(child, VNode::Element { .. }))
}
