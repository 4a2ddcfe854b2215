//! Export tests after editing (cells changed between parse and serialize)

use crate::common::fixture;
use cellmark_babel::{Cell, CellKind, Notebook};
use insta::assert_snapshot;

#[test]
fn test_new_cell_between_parsed_cells() {
    let mut notebook = Notebook::from_markdown("Intro\n\n```js\nrun()\n```\n");
    notebook.insert(1, Cell::markdown("Inserted"));

    assert_eq!(
        notebook.to_markdown(),
        "Intro\n\nInserted\n\n```js\nrun()\n```\n"
    );
}

#[test]
fn test_new_cell_next_to_tight_neighbours() {
    // paragraph directly followed by a fence: the cached gap is a single newline
    let mut notebook = Notebook::from_markdown("Intro\n```js\nrun()\n```");
    notebook.insert(1, Cell::code("python", "setup()"));

    assert_eq!(
        notebook.to_markdown(),
        "Intro\n\n```py3\nsetup()\n```\n\n```js\nrun()\n```"
    );
}

#[test]
fn test_new_cell_appended_at_end() {
    let mut notebook = Notebook::from_markdown("Intro");
    notebook.push(Cell::code("sh", "ls"));

    assert_eq!(notebook.to_markdown(), "Intro\n\n```sh\nls\n```\n");
}

#[test]
fn test_new_cell_prepended() {
    let mut notebook = Notebook::from_markdown("\n\nBody\n");
    notebook.insert(0, Cell::markdown("# Title"));

    // the old leading run now separates the two cells
    assert_eq!(notebook.to_markdown(), "# Title\n\nBody\n");
}

#[test]
fn test_edited_content_keeps_surrounding_layout() {
    let source = fixture("nested-list.md");
    let mut notebook = Notebook::from_markdown(&source);
    let block = &mut notebook.cells[1];
    assert_eq!(block.kind, CellKind::Code);
    block.source = "brew install jq".to_string();

    let output = notebook.to_markdown();
    assert!(output.starts_with("1. Install the tools:\n\t```sh\n\tbrew install jq\n\t```\n2."));
    assert!(output.ends_with("    ```\n\nDone."));
}

#[test]
fn test_changing_kind_drops_fence() {
    let mut notebook = Notebook::from_markdown("```sh\necho hi\n```\n");
    notebook.cells[0].kind = CellKind::Markdown;

    assert_eq!(notebook.to_markdown(), "echo hi\n");
}

#[test]
fn test_assembled_notebook_snapshot() {
    let mut notebook = Notebook::from_markdown("# Setup\n\n```sh\necho hi\n```\n");
    notebook.push(Cell::markdown("Done"));

    assert_snapshot!(notebook.to_markdown(), @r"
    # Setup

    ```sh
    echo hi
    ```

    Done
    ");
}
