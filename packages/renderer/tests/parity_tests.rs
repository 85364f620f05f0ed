//! Editor and reader renderers must produce the same padding and border
//! strings for the same block.

use mailcraft_blocks::{BlockRegistry, Document};
use mailcraft_renderer::{render_editor, ReaderRenderer, VNode};

fn document() -> Document {
    Document::from_json(
        r##"{
            "root": {"type": "EmailLayout", "data": {"childrenIds": ["box", "t2", "img"]}},
            "box": {"type": "Container", "data": {
                "style": {"padding": {"top": 12, "bottom": 14, "left": 16, "right": 18}, "borderColor": "#CCCCCC"},
                "childrenIds": ["t1"]
            }},
            "t1": {"type": "Text", "data": {
                "style": {"padding": {"top": 1, "bottom": 2, "left": 3, "right": 4}},
                "props": {"text": "inner"}
            }},
            "t2": {"type": "Text", "data": {
                "style": {"padding": {"top": 0, "bottom": 0, "left": 24, "right": 24}},
                "props": {"text": "outer"}
            }},
            "img": {"type": "Image", "data": {
                "style": {"padding": {"top": 8, "bottom": 8, "left": 8, "right": 8}},
                "props": {"url": "https://example.com/a.png", "alt": "a"}
            }}
        }"##,
    )
    .unwrap()
}

/// `(padding, border)` of every element that declares either, in tree order
fn box_styles(node: &VNode, out: &mut Vec<(Option<String>, Option<String>)>) {
    if let Some(styles) = node.styles() {
        let padding = styles.get("padding").map(str::to_string);
        let border = styles.get("border").map(str::to_string);
        if padding.is_some() || border.is_some() {
            out.push((padding, border));
        }
    }
    for child in node.children() {
        box_styles(child, out);
    }
}

/// Follow the first child `depth` times
fn descend(node: &VNode, depth: usize) -> &VNode {
    (0..depth).fold(node, |node, _| &node.children()[0])
}

#[test]
fn test_padding_and_border_match() {
    let registry = BlockRegistry::standard().unwrap();
    let document = document();

    let editor = render_editor(&registry, &document, "root", None, None);
    let reader = ReaderRenderer::new(&registry).render(&document, "root");

    // both layouts carry their own canvas padding; compare the blocks below
    let editor_root = editor.root.unwrap();
    let mut from_editor = Vec::new();
    for child in editor_root.children() {
        box_styles(child, &mut from_editor);
    }

    // table > tbody > tr > td > table > tbody > tr > td
    let reader_root = reader.root.unwrap();
    let canvas_cell = descend(&reader_root, 7);
    assert_eq!(canvas_cell.tag(), Some("td"));
    let mut from_reader = Vec::new();
    for child in canvas_cell.children() {
        box_styles(child, &mut from_reader);
    }

    assert_eq!(
        from_editor,
        vec![
            (Some("12px 18px 14px 16px".to_string()), Some("1px solid #CCCCCC".to_string())),
            (Some("1px 4px 2px 3px".to_string()), None),
            (Some("0px 24px 0px 24px".to_string()), None),
            (Some("8px 8px 8px 8px".to_string()), None),
            (None, Some("none".to_string())),
        ]
    );
    assert_eq!(from_editor, from_reader);
}

#[test]
fn test_layout_wrapping_only_in_reader() {
    let registry = BlockRegistry::standard().unwrap();
    let document = document();

    let editor = render_editor(&registry, &document, "root", None, None);
    let editor_root = editor.root.unwrap();
    assert_eq!(editor_root.tag(), Some("div"));

    let reader = ReaderRenderer::new(&registry).render(&document, "root");
    let reader_root = reader.root.unwrap();
    assert_eq!(reader_root.tag(), Some("table"));
    assert_eq!(reader_root.attr("width"), Some("100%"));
}

#[test]
fn test_missing_child_renders_siblings() {
    let registry = BlockRegistry::standard().unwrap();
    let mut document = document();
    document.merge(
        Document::from_json(
            r#"{"root": {"type": "EmailLayout", "data": {"childrenIds": ["box", "ghost", "t2"]}}}"#,
        )
        .unwrap()
        .iter()
        .map(|(id, node)| (id.to_string(), node.clone())),
    );

    let editor = render_editor(&registry, &document, "root", None, None);
    assert_eq!(editor.diagnostics.len(), 1);

    let root = editor.root.unwrap();
    assert!(root.find_block("t1").is_some());
    assert!(root.find_block("t2").is_some());
}
