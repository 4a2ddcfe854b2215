//! JSON format tests
//!
//! Markdown → JSON → Markdown, the path a notebook host takes between open and save.

use crate::common::fixture;
use cellmark_babel::{Cell, FormatRegistry};

#[test]
fn test_fixture_survives_json_hop() {
    let registry = FormatRegistry::default();
    let source = fixture("notebook.md");

    let notebook = registry.parse(&source, "markdown").unwrap();
    let json = registry.serialize(&notebook, "json").unwrap();
    let back = registry.parse(&json, "json").unwrap();

    assert_eq!(registry.serialize(&back, "markdown").unwrap(), source);
}

#[test]
fn test_cells_added_in_json_get_default_spacing() {
    let registry = FormatRegistry::default();
    let notebook = registry.parse("Intro\n", "markdown").unwrap();
    let json = registry.serialize(&notebook, "json").unwrap();

    let mut edited = registry.parse(&json, "json").unwrap();
    edited.push(Cell::code("typescript", "let x = 1;"));

    assert_eq!(
        registry.serialize(&edited, "markdown").unwrap(),
        "Intro\n\n```ts\nlet x = 1;\n```\n"
    );
}

#[test]
fn test_json_uses_host_field_names() {
    let registry = FormatRegistry::default();
    let notebook = registry.parse("\n# T\n", "markdown").unwrap();
    let json = registry.serialize(&notebook, "json").unwrap();

    assert!(json.contains("\"leadingWhitespace\": \"\\n\""));
    assert!(json.contains("\"trailingWhitespace\": \"\\n\""));
    assert!(json.contains("\"source\": \"# T\""));
}
