//! Markdown editor
//!
//! A text buffer with a selection, the toolbar formatting actions that act on
//! it, and the HTML preview.

pub mod document;
pub mod format;
pub mod preview;

pub use document::{Document, Selection};
pub use format::{Format, FormatError};
pub use preview::{render_html, render_page};
