/// A contiguous run of line text carrying one formatting attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineSpan {
    Plain(String),
    Bold(String),
}

impl InlineSpan {
    pub fn text(&self) -> &str {
        match self {
            InlineSpan::Plain(s) | InlineSpan::Bold(s) => s,
        }
    }
}

/// One display block produced by [`render`](crate::markdown::render).
///
/// Blocks are transient view-model values: they live only for the render
/// call that produced them and are never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentBlock {
    /// `#`, `##` or `###` heading; `level` is 1 through 3
    Heading { level: u8, spans: Vec<InlineSpan> },
    Paragraph(Vec<InlineSpan>),
    BulletItem(Vec<InlineSpan>),
    /// Ordered list line; `label` keeps the digits the author wrote,
    /// never renumbered
    NumberedItem { label: String, spans: Vec<InlineSpan> },
    Blockquote(Vec<InlineSpan>),
    /// Fenced literal content, language hint already stripped
    CodeBlock(String),
    /// Blank line between blocks
    Spacer,
}

impl DocumentBlock {
    /// Concatenated span text, for assertions and plain-text output.
    /// Empty for `CodeBlock` and `Spacer`.
    pub fn span_text(&self) -> String {
        match self {
            DocumentBlock::Heading { spans, .. }
            | DocumentBlock::Paragraph(spans)
            | DocumentBlock::BulletItem(spans)
            | DocumentBlock::NumberedItem { spans, .. }
            | DocumentBlock::Blockquote(spans) => {
                spans.iter().map(InlineSpan::text).collect()
            }
            DocumentBlock::CodeBlock(_) | DocumentBlock::Spacer => String::new(),
        }
    }
}
