//! Round-trip tests (Markdown → cells → Markdown)

use crate::common::fixture;
use cellmark_babel::transforms::check_round_trip;
use cellmark_babel::{parse_markdown, Cell, Notebook};

fn round_trip(source: &str) -> String {
    Notebook::from_markdown(source).to_markdown()
}

#[test]
fn test_fixtures_round_trip_exactly() {
    for name in ["notebook.md", "nested-list.md", "blank-runs.md"] {
        let source = fixture(name);
        assert_eq!(round_trip(&source), source, "fixture {name}");
    }
}

#[test]
fn test_blank_line_gap_is_reproduced() {
    let cells = parse_markdown("a\n\n\nb");
    assert_eq!(cells.len(), 2);
    let gap = format!(
        "{}{}",
        cells[0].trailing_whitespace, cells[1].leading_whitespace
    );
    assert_eq!(gap, "\n\n\n");
    assert_eq!(round_trip("a\n\n\nb"), "a\n\n\nb");
}

#[test]
fn test_unknown_tag_round_trips() {
    let source = "```zig\nconst x = 1;\n```\n";
    assert_eq!(round_trip(source), source);
}

#[test]
fn test_python_variants_are_canonicalized() {
    for tag in ["py", "py2"] {
        let source = format!("```{tag}\nx\n```");
        assert_eq!(round_trip(&source), "```py3\nx\n```");
    }
    assert_eq!(round_trip("```py3\nx\n```"), "```py3\nx\n```");
}

#[test]
fn test_tab_indentation_round_trips() {
    let source = "- step\n\t```sh\n\tmake\n\tmake install\n\t```\n";
    let cells = parse_markdown(source);
    assert_eq!(cells[1].content, "make\nmake install");
    assert_eq!(round_trip(source), source);
}

#[test]
fn test_single_block_documents() {
    for source in ["only text", "```sh\nls\n```", "\n\n```sh\nls\n```\n\n"] {
        assert_eq!(round_trip(source), source);
    }
}

#[test]
fn test_serializer_output_is_stable() {
    // output of a serialize with fresh cells parses back to the same text
    let fresh = Notebook::new(vec![
        Cell::markdown("# Title"),
        Cell::code("python", "print(1)"),
        Cell::code("rust", "fn main() {}"),
        Cell::markdown("The end."),
    ]);
    let text = fresh.to_markdown();
    assert_eq!(
        text,
        "# Title\n\n```py3\nprint(1)\n```\n\n```rust\nfn main() {}\n```\n\nThe end.\n"
    );
    assert!(check_round_trip(&text).is_identical());
}

#[test]
fn test_crlf_documents_are_normalized() {
    let result = check_round_trip("text\r\n");
    assert_eq!(result.output, "text\n");
    assert!(!result.is_identical());
}

#[test]
fn test_final_carriage_return_survives() {
    assert_eq!(round_trip("a\r"), "a\r");

    let mut notebook = Notebook::from_markdown("Intro\n\nOutro");
    notebook.cells[1].source = "Outro\r".to_string();
    let text = notebook.to_markdown();
    assert_eq!(text, "Intro\n\nOutro\r");
    assert!(check_round_trip(&text).is_identical());
}
