//! Import tests for Markdown format (Markdown → cells)

use crate::common::{fixture, shape};
use cellmark_babel::{parse_markdown, CellKind, Notebook};

#[test]
fn test_notebook_fixture_structure() {
    let notebook = Notebook::from_markdown(&fixture("notebook.md"));

    assert_eq!(
        shape(&notebook.cells),
        vec![
            "markdown",
            "markdown",
            "code:sh",
            "markdown",
            "code:python",
            "code:zig",
            "markdown",
            "code:cpp",
        ]
    );
}

#[test]
fn test_paragraph_runs_keep_their_lines() {
    let cells = parse_markdown(&fixture("notebook.md"));
    assert_eq!(
        cells[1].content,
        "Steps to reproduce the benchmark numbers.\nRun everything from the repository root."
    );
    assert_eq!(cells[1].trailing_whitespace, "\n\n\n");
}

#[test]
fn test_adjacent_code_blocks() {
    let cells = parse_markdown(&fixture("notebook.md"));
    let python = &cells[4];
    assert_eq!(
        python.content,
        "import json\nwith open(\"baseline.json\") as f:\n    print(json.load(f)[\"parse\"])"
    );
    // the zig fence starts on the very next line
    assert_eq!(python.trailing_whitespace, "\n");
    assert_eq!(cells[5].trailing_whitespace, "\n\n\n\n");
}

#[test]
fn test_nested_list_fences() {
    let cells = parse_markdown(&fixture("nested-list.md"));
    assert_eq!(cells.len(), 5);

    let tab_block = &cells[1];
    assert_eq!(tab_block.kind, CellKind::Code);
    assert_eq!(tab_block.indentation.as_deref(), Some("\t"));
    assert_eq!(tab_block.content, "apt-get install jq\njq --version");

    let space_block = &cells[3];
    assert_eq!(space_block.indentation.as_deref(), Some("    "));
    assert_eq!(space_block.language, "javascript");
    assert_eq!(
        space_block.content,
        "const cfg = require(\"./cfg\");\n  console.log(cfg);"
    );
}

#[test]
fn test_only_first_cell_has_leading_whitespace() {
    let cells = parse_markdown(&fixture("blank-runs.md"));
    assert_eq!(cells.len(), 2);
    assert_eq!(cells[0].leading_whitespace, "\n\n");
    assert_eq!(cells[1].leading_whitespace, "");
    assert_eq!(cells[1].trailing_whitespace, "\n\n\n\n");
}

#[test]
fn test_whitespace_runs_contain_only_newlines() {
    for name in ["notebook.md", "nested-list.md", "blank-runs.md"] {
        for cell in parse_markdown(&fixture(name)) {
            assert!(cell.leading_whitespace.chars().all(|c| c == '\n'));
            assert!(cell.trailing_whitespace.chars().all(|c| c == '\n'));
        }
    }
}

#[test]
fn test_python_tags_collapse() {
    for tag in ["py", "py2", "py3"] {
        let cells = parse_markdown(&format!("```{tag}\nx\n```"));
        assert_eq!(cells[0].language, "python", "tag {tag}");
    }
}

#[test]
fn test_unterminated_fence_does_not_fail() {
    let cells = parse_markdown("```py\nprint(1)");
    assert_eq!(cells.len(), 1);
    assert_eq!(cells[0].kind, CellKind::Code);
    assert_eq!(cells[0].content, "print(1)");
}
