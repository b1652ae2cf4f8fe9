//! Toolbar formatting actions
//!
//! Each action turns the selected text into a markdown snippet, or inserts a
//! placeholder snippet when nothing is selected.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("Unknown format action: {0}")]
    UnknownAction(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Bold,
    Italic,
    Heading1,
    Heading2,
    Heading3,
    Quote,
    Code,
    CodeBlock,
    Link,
    Image,
    BulletList,
    NumberedList,
}

impl Format {
    pub const ALL: [Format; 12] = [
        Format::Bold,
        Format::Italic,
        Format::Heading1,
        Format::Heading2,
        Format::Heading3,
        Format::Quote,
        Format::Code,
        Format::CodeBlock,
        Format::Link,
        Format::Image,
        Format::BulletList,
        Format::NumberedList,
    ];

    /// Action name as used on the toolbar and the command line
    pub fn name(&self) -> &'static str {
        match self {
            Format::Bold => "bold",
            Format::Italic => "italic",
            Format::Heading1 => "heading1",
            Format::Heading2 => "heading2",
            Format::Heading3 => "heading3",
            Format::Quote => "quote",
            Format::Code => "code",
            Format::CodeBlock => "codeblock",
            Format::Link => "link",
            Format::Image => "image",
            Format::BulletList => "list",
            Format::NumberedList => "numbered-list",
        }
    }

    /// Tooltip label
    pub fn label(&self) -> &'static str {
        match self {
            Format::Bold => "Bold (Ctrl+B)",
            Format::Italic => "Italic (Ctrl+I)",
            Format::Heading1 => "Heading 1",
            Format::Heading2 => "Heading 2",
            Format::Heading3 => "Heading 3",
            Format::Quote => "Quote",
            Format::Code => "Inline Code",
            Format::CodeBlock => "Code Block",
            Format::Link => "Link",
            Format::Image => "Image",
            Format::BulletList => "Bullet List",
            Format::NumberedList => "Numbered List",
        }
    }

    /// Snippet that replaces `selected`
    pub fn apply(&self, selected: &str) -> String {
        let empty = selected.is_empty();
        match self {
            Format::Bold if empty => "**bold text**".to_string(),
            Format::Bold => format!("**{}**", selected),
            Format::Italic if empty => "*italic text*".to_string(),
            Format::Italic => format!("*{}*", selected),
            Format::Heading1 if empty => "# Heading 1".to_string(),
            Format::Heading1 => format!("# {}", selected),
            Format::Heading2 if empty => "## Heading 2".to_string(),
            Format::Heading2 => format!("## {}", selected),
            Format::Heading3 if empty => "### Heading 3".to_string(),
            Format::Heading3 => format!("### {}", selected),
            Format::Quote if empty => "> Blockquote".to_string(),
            Format::Quote => format!("> {}", selected),
            Format::Code if empty => "`inline code`".to_string(),
            Format::Code => format!("`{}`", selected),
            Format::CodeBlock if empty => "```\ncode block\n```".to_string(),
            Format::CodeBlock => format!("```\n{}\n```", selected),
            Format::Link if empty => "[link text](url)".to_string(),
            Format::Link => format!("[{}](url)", selected),
            Format::Image => "![alt text](image-url)".to_string(),
            Format::BulletList if empty => "- List item 1\n- List item 2\n- List item 3".to_string(),
            Format::BulletList => format!("- {}", selected.split('\n').collect::<Vec<_>>().join("\n- ")),
            Format::NumberedList if empty => "1. List item 1\n2. List item 2\n3. List item 3".to_string(),
            Format::NumberedList => selected
                .split('\n')
                .enumerate()
                .map(|(i, line)| format!("{}. {}", i + 1, line))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Format::ALL
            .iter()
            .copied()
            .find(|f| f.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| FormatError::UnknownAction(wanted.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for format in Format::ALL {
            assert_eq!(format.name().parse::<Format>().unwrap(), format);
        }
        assert_eq!(
            "underline".parse::<Format>(),
            Err(FormatError::UnknownAction("underline".to_string()))
        );
    }

    #[test]
    fn test_wraps_selection() {
        assert_eq!(Format::Bold.apply("hi"), "**hi**");
        assert_eq!(Format::Italic.apply("hi"), "*hi*");
        assert_eq!(Format::Heading2.apply("Intro"), "## Intro");
        assert_eq!(Format::Code.apply("x"), "`x`");
        assert_eq!(Format::CodeBlock.apply("let a = 1;"), "```\nlet a = 1;\n```");
        assert_eq!(Format::Link.apply("docs"), "[docs](url)");
    }

    #[test]
    fn test_placeholders_without_selection() {
        assert_eq!(Format::Bold.apply(""), "**bold text**");
        assert_eq!(Format::Quote.apply(""), "> Blockquote");
        assert_eq!(Format::NumberedList.apply(""), "1. List item 1\n2. List item 2\n3. List item 3");
    }

    #[test]
    fn test_image_ignores_selection() {
        assert_eq!(Format::Image.apply("cat"), "![alt text](image-url)");
    }

    #[test]
    fn test_lists_prefix_every_line() {
        assert_eq!(Format::BulletList.apply("a\nb\nc"), "- a\n- b\n- c");
        assert_eq!(Format::NumberedList.apply("a\nb"), "1. a\n2. b");
    }
}
