//! Markdown notebooks as cells
//!
//!     This crate converts between Markdown documents and an ordered list of notebook cells
//!     (prose runs and fenced code blocks), and back, without changing a byte of the document
//!     when nothing was edited.
//!
//!     This is a pure lib: it powers cellmark-cli but is shell agnostic, no code here should
//!     print, read env vars or touch the filesystem.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── cell.rs                 # RawCell, Cell, CellMetadata, NotebookCell
//!     ├── notebook.rs             # Notebook, the document every format maps to
//!     ├── languages.rs            # fence tag <-> language identifier table
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── transforms.rs           # open / format / round-trip check
//!     ├── formats
//!     │   ├── markdown
//!     │   │   ├── parser.rs       # text -> raw cells
//!     │   │   ├── serializer.rs   # cells -> text
//!     │   │   └── mod.rs
//!     │   └── json                # host cell records as JSON
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     └── <format>
//!         └── <testname>.rs
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
//! Core Algorithms
//!
//!     Parsing is a line scanner that knows two block kinds. Whatever is not a fence start is
//!     paragraph text, so parsing is total. The hard part is layout: the blank-line runs between
//!     blocks are not derivable from the cells after an edit, so each cell carries the runs that
//!     surrounded it (see ./formats/markdown/parser.rs). The serializer writes those runs back
//!     verbatim when both neighbours still have them, and falls back to one blank line next to
//!     cells inserted since the document was parsed.
//!
//! Host Boundary
//!
//!     Notebook hosts own the editable cell objects. They receive RawCells, keep indentation and
//!     whitespace in an opaque metadata slot ([`CellMetadata`]), and hand cells back through the
//!     [`NotebookCell`] trait. Nothing here depends on a host runtime.

pub mod cell;
pub mod error;
pub mod format;
pub mod formats;
pub mod languages;
pub mod notebook;
pub mod registry;
pub mod transforms;

pub use cell::{Cell, CellKind, CellMetadata, NotebookCell, RawCell, MARKDOWN_LANGUAGE};
pub use error::FormatError;
pub use format::Format;
pub use formats::markdown::{parse_markdown, write_cells_to_markdown};
pub use notebook::Notebook;
pub use registry::FormatRegistry;
