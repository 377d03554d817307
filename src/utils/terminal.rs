//! Sanitizing model output before it reaches the terminal.
//!
//! Responses come back from an external service and are displayed
//! verbatim in the TUI and on stdout. Embedded ANSI escape sequences
//! could move the cursor, restyle the screen or otherwise corrupt the
//! display, so every result string passes through [`strip_ansi_codes`]
//! before rendering.

/// Remove ANSI CSI escape sequences and stray control characters,
/// keeping tabs, newlines and carriage returns.
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        // CSI sequence: ESC [ ... terminated by a letter
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }

        if ch.is_control() && ch != '\t' && ch != '\n' && ch != '\r' {
            continue;
        }

        result.push(ch);
    }

    result
}
