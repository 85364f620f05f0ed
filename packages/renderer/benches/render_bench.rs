use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mailcraft_blocks::{BlockRegistry, Document};
use mailcraft_renderer::{render_editor, render_to_static_markup};
use serde_json::{json, Map, Value};

/// Layout with `sections` containers, each holding a text, a button and a
/// two-column row
fn newsletter(sections: usize) -> Document {
    let mut blocks = Map::new();
    let mut root_children = Vec::new();

    for i in 0..sections {
        let section = format!("section-{}", i);
        let text = format!("text-{}", i);
        let button = format!("button-{}", i);
        let columns = format!("columns-{}", i);
        let left = format!("left-{}", i);
        let right = format!("right-{}", i);

        blocks.insert(section.clone(), json!({"type": "Container", "data": {
            "style": {"padding": {"top": 16, "bottom": 16, "left": 24, "right": 24}, "borderColor": "#EEEEEE"},
            "childrenIds": [text, button, columns]
        }}));
        blocks.insert(text, json!({"type": "Text", "data": {
            "props": {"text": format!("Section **{}** body", i), "markdown": true}
        }}));
        blocks.insert(button, json!({"type": "Button", "data": {
            "props": {"text": "Read more", "url": "https://example.com"}
        }}));
        blocks.insert(columns, json!({"type": "ColumnsContainer", "data": {
            "props": {"columnsGap": 16},
            "childrenIds": [left, right]
        }}));
        blocks.insert(left, json!({"type": "Avatar", "data": {"props": {"imageUrl": "https://example.com/a.png"}}}));
        blocks.insert(right, json!({"type": "Divider", "data": {}}));

        root_children.push(Value::String(section));
    }

    blocks.insert(
        "root".to_string(),
        json!({"type": "EmailLayout", "data": {"childrenIds": root_children}}),
    );

    serde_json::from_value(Value::Object(blocks)).unwrap()
}

fn reader_small(c: &mut Criterion) {
    let registry = BlockRegistry::standard().unwrap();
    let doc = newsletter(5);

    c.bench_function("reader_small", |b| {
        b.iter(|| render_to_static_markup(black_box(&doc), "root", &registry))
    });
}

fn reader_large(c: &mut Criterion) {
    let registry = BlockRegistry::standard().unwrap();
    let doc = newsletter(50);

    c.bench_function("reader_large", |b| {
        b.iter(|| render_to_static_markup(black_box(&doc), "root", &registry))
    });
}

fn editor_large(c: &mut Criterion) {
    let registry = BlockRegistry::standard().unwrap();
    let doc = newsletter(50);

    c.bench_function("editor_large", |b| {
        b.iter(|| render_editor(&registry, black_box(&doc), "root", Some("text-10"), None))
    });
}

criterion_group!(benches, reader_small, reader_large, editor_large);
criterion_main!(benches);
