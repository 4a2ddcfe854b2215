//! Markdown format tests
//!
//! Tests for the Markdown ↔ cells conversion.

mod editing;
mod import;
mod properties;
mod round_trip;
