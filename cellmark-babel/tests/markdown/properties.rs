//! Property tests for the Markdown parser and serializer

use cellmark_babel::transforms::format_markdown_source;
use cellmark_babel::{parse_markdown, Notebook};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Block {
    Paragraph(Vec<String>),
    Code { tag: &'static str, body: Vec<String> },
}

fn block() -> impl Strategy<Value = Block> {
    prop_oneof![
        prop::collection::vec("[a-z#*-][a-z ]{0,12}", 1..4).prop_map(Block::Paragraph),
        (
            prop::sample::select(vec!["", "js", "ts", "py3", "c++", "sh", "zig"]),
            prop::collection::vec("[a-z =();]{0,12}", 1..4),
        )
            .prop_map(|(tag, body)| Block::Code { tag, body }),
    ]
}

fn render(leading: usize, blocks: &[(Block, usize)], trailing: usize) -> String {
    let mut text = "\n".repeat(leading);
    for (i, (block, blank_lines)) in blocks.iter().enumerate() {
        match block {
            Block::Paragraph(lines) => text.push_str(&lines.join("\n")),
            Block::Code { tag, body } => {
                text.push_str(&format!("```{tag}\n{}\n```", body.join("\n")));
            }
        }
        if i + 1 < blocks.len() {
            text.push('\n');
            text.push_str(&"\n".repeat(*blank_lines));
        }
    }
    text.push_str(&"\n".repeat(trailing));
    text
}

fn line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("```".to_string()),
        "```[a-z+]{1,3}",
        Just("    ```py".to_string()),
        Just("\t```".to_string()),
        Just("  ```".to_string()),
        "[a-c ]{0,4}",
        Just("x\r".to_string()),
    ]
}

proptest! {
    #[test]
    fn canonical_documents_round_trip(
        leading in 0usize..3,
        blocks in prop::collection::vec((block(), 0usize..3), 1..6),
        trailing in 0usize..3,
    ) {
        let source = render(leading, &blocks, trailing);
        prop_assert_eq!(Notebook::from_markdown(&source).to_markdown(), source);
    }

    #[test]
    fn parsing_is_total(source in any::<String>()) {
        for cell in parse_markdown(&source) {
            prop_assert!(cell.leading_whitespace.chars().all(|c| c == '\n'));
            prop_assert!(cell.trailing_whitespace.chars().all(|c| c == '\n'));
        }
    }

    #[test]
    fn formatting_is_idempotent(lines in prop::collection::vec(line(), 0..12)) {
        let once = format_markdown_source(&lines.join("\n"));
        prop_assert_eq!(format_markdown_source(&once), once);
    }
}
