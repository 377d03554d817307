use super::ast::DocumentBlock;
use super::inline::parse_inline;

const FENCE: &str = "```";

/// Convert raw model output into an ordered sequence of display blocks.
///
/// Two passes: fenced spans are extracted first and become single
/// `CodeBlock`s (their content is never line-classified); everything
/// outside fences is classified line by line. A trailing unmatched
/// opening fence starts a code block that runs to end of input.
///
/// This function never fails - unrecognized structure degrades to
/// `Paragraph`. It is pure and touches no shared state.
pub fn render(text: &str) -> Vec<DocumentBlock> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut blocks = Vec::new();
    for (idx, segment) in text.split(FENCE).enumerate() {
        // split() alternates outside/inside fence; with an odd number of
        // markers the final segment lands inside, giving the open-ended
        // code block.
        if idx % 2 == 1 {
            blocks.push(DocumentBlock::CodeBlock(code_content(segment)));
        } else {
            classify_segment(segment, &mut blocks);
        }
    }
    blocks
}

/// Fence body with a single leading language-hint line removed.
///
/// The hint is a non-empty line of lowercase letters immediately after
/// the opening marker, e.g. the `rust` in ```` ```rust ````.
fn code_content(body: &str) -> String {
    let without_hint = match body.split_once('\n') {
        Some((first, rest))
            if !first.is_empty() && first.chars().all(|c| c.is_ascii_lowercase()) =>
        {
            rest
        }
        _ => body,
    };
    without_hint.trim().to_string()
}

fn classify_segment(segment: &str, blocks: &mut Vec<DocumentBlock>) {
    if segment.is_empty() {
        return;
    }
    for line in segment.split('\n') {
        blocks.push(classify_line(line));
    }
}

fn classify_line(line: &str) -> DocumentBlock {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return DocumentBlock::Spacer;
    }

    if let Some(rest) = trimmed.strip_prefix("### ") {
        return DocumentBlock::Heading { level: 3, spans: parse_inline(rest) };
    }
    if let Some(rest) = trimmed.strip_prefix("## ") {
        return DocumentBlock::Heading { level: 2, spans: parse_inline(rest) };
    }
    if let Some(rest) = trimmed.strip_prefix("# ") {
        return DocumentBlock::Heading { level: 1, spans: parse_inline(rest) };
    }

    if let Some(rest) = trimmed.strip_prefix("- ").or_else(|| trimmed.strip_prefix("* ")) {
        return DocumentBlock::BulletItem(parse_inline(rest));
    }

    if let Some((label, rest)) = split_numbered(trimmed) {
        return DocumentBlock::NumberedItem { label: label.to_string(), spans: parse_inline(rest) };
    }

    if let Some(rest) = trimmed.strip_prefix("> ") {
        return DocumentBlock::Blockquote(parse_inline(rest));
    }

    DocumentBlock::Paragraph(parse_inline(trimmed))
}

/// Match a `digits`, `.`, single-whitespace prefix and return
/// (digit label, remainder after the whitespace)
fn split_numbered(line: &str) -> Option<(&str, &str)> {
    let digits_end = line.find(|c: char| !c.is_ascii_digit()).unwrap_or(line.len());
    if digits_end == 0 {
        return None;
    }
    let rest = line[digits_end..].strip_prefix('.')?;
    let mut chars = rest.chars();
    if !chars.next()?.is_whitespace() {
        return None;
    }
    Some((&line[..digits_end], chars.as_str()))
}
