//! Format implementations
//!
//! This module contains all format implementations that convert between
//! notebooks and their text representations.

pub mod json;
pub mod markdown;

pub use json::{JsonFormat, JsonOptions};
pub use markdown::{MarkdownFormat, MarkdownOptions};
