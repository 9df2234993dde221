//! Terminal rendering of parsing errors
//!
//! Produces the one-line summary and, on request, the offending pattern with
//! the erroring span highlighted using ANSI escape codes.

use super::types::ParsingError;
use crate::tokens::Span;

const ANSI_WHITE_BG_RED_FG_BOLD: &str = "\x1B[31;47;1m";
const ANSI_COLOUR_RESET: &str = "\x1B[0m";

impl ParsingError {
    /// Render the error for display
    ///
    /// Without highlighting, or when no pattern is attached, this is the same
    /// text as `Display`. With highlighting a second line follows holding the
    /// pattern with the erroring span coloured.
    #[must_use]
    pub fn render(&self, ansi_highlight: bool) -> String {
        let summary = self.to_string();

        match self.highlight() {
            Some(highlighted) if ansi_highlight => format!("{summary}\n{highlighted}"),
            _ => summary,
        }
    }

    /// Attached pattern with the erroring span wrapped in ANSI colour codes
    #[must_use]
    pub fn highlight(&self) -> Option<String> {
        self.pattern()
            .map(|pattern| highlight_span(pattern, self.span()))
    }
}

/// Wrap the characters covered by `span` in colour codes
///
/// Spans reaching past the end of the pattern are clamped.
fn highlight_span(pattern: &str, span: Span) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let start = span.position.min(chars.len());
    let end = span.end().min(chars.len());

    let mut highlighted = String::with_capacity(
        pattern.len() + ANSI_WHITE_BG_RED_FG_BOLD.len() + ANSI_COLOUR_RESET.len(),
    );
    highlighted.extend(&chars[..start]);
    highlighted.push_str(ANSI_WHITE_BG_RED_FG_BOLD);
    highlighted.extend(&chars[start..end]);
    highlighted.push_str(ANSI_COLOUR_RESET);
    highlighted.extend(&chars[end..]);
    highlighted
}
