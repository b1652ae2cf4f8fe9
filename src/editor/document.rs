//! Editor buffer
//!
//! Selections are byte offsets into the text, always on char boundaries with
//! `start <= end`.

use crate::editor::format::Format;

/// Starting content for a new document
pub const WELCOME: &str = "# Welcome to markpad\n\nThis is a **live preview** markdown editor with _syntax highlighting_.\n\n## Features\n\n- Split pane view\n- Live preview\n- Syntax highlighting\n- Toolbar with formatting options\n\n```js\n// Example code block\nfunction greeting() {\n  return \"Hello, world!\";\n}\n```\n\n> This is a blockquote with a [link](https://commonmark.org)";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn caret(at: usize) -> Self {
        Self { start: at, end: at }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
    selection: Selection,
}

impl Default for Document {
    fn default() -> Self {
        Self::from_text(WELCOME)
    }
}

impl Document {
    /// Document holding `text` with the caret at the end
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let end = text.len();
        Self {
            text,
            selection: Selection::caret(end),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn selected_text(&self) -> &str {
        &self.text[self.selection.start..self.selection.end]
    }

    /// Replace the whole text, keeping the selection inside it
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        let Selection { start, end } = self.selection;
        self.set_selection(start, end);
    }

    /// Select `start..end`, clamped to the text and snapped back to char boundaries
    pub fn set_selection(&mut self, start: usize, end: usize) {
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        self.selection = Selection {
            start: self.floor_boundary(start),
            end: self.floor_boundary(end),
        };
    }

    /// Replace the selection with `insert` and put the caret after it
    pub fn insert_at_cursor(&mut self, insert: &str) {
        let Selection { start, end } = self.selection;
        self.text.replace_range(start..end, insert);
        self.selection = Selection::caret(start + insert.len());
    }

    /// Run a toolbar action on the current selection
    pub fn apply_format(&mut self, format: Format) {
        let snippet = format.apply(self.selected_text());
        self.insert_at_cursor(&snippet);
    }

    fn floor_boundary(&self, index: usize) -> usize {
        let mut index = index.min(self.text.len());
        while !self.text.is_char_boundary(index) {
            index -= 1;
        }
        index
    }
}
