use super::ast::InlineSpan;

/// Split a line into plain and bold spans.
///
/// A bold span is a `**`-delimited pair with non-empty content between
/// the markers, matched non-greedily. Unpaired markers stay in the text
/// as literals, so concatenating the span texts (with markers reinserted
/// around bold spans) reconstructs the input exactly.
pub fn parse_inline(text: &str) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    let mut plain = String::new();
    let mut rest = text;

    while let Some(open) = rest.find("**") {
        let after = &rest[open + 2..];
        match after.find("**") {
            // Closing pair with at least one character between
            Some(close) if close > 0 => {
                plain.push_str(&rest[..open]);
                if !plain.is_empty() {
                    spans.push(InlineSpan::Plain(std::mem::take(&mut plain)));
                }
                spans.push(InlineSpan::Bold(after[..close].to_string()));
                rest = &after[close + 2..];
            }
            // No closer, or empty content: the opener is literal text
            _ => {
                plain.push_str(&rest[..open + 2]);
                rest = after;
            }
        }
    }

    plain.push_str(rest);
    if !plain.is_empty() {
        spans.push(InlineSpan::Plain(plain));
    }
    spans
}
