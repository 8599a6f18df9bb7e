//! Output rendering for comparison results

pub mod markdown;

pub use markdown::{format_cell, MarkdownTable};
