//! Token name screening and symbol truncation

use lazy_static::lazy_static;
use regex::Regex;
use crate::types::Token;

/// Longest symbol pair, in characters, kept in a name tag.
pub const MAX_SYMBOLS_LENGTH: usize = 45;
const ELLIPSIS: &str = "...";

lazy_static! {
    static ref HTML_TAG: Regex = Regex::new(r"<[^>]*>").expect("valid tag pattern");
}

/// True when `text` contains something shaped like an HTML tag. This is a
/// pattern check only, not a sanitizer.
pub fn contains_html(text: &str) -> bool {
    HTML_TAG.is_match(text)
}

pub fn is_token_flagged(token: &Token) -> bool {
    contains_html(&token.name) || contains_html(&token.symbol)
}

/// Diagnostic label for a rejected token.
pub fn rejected_label(token: &Token) -> String {
    format!("{}, Symbol: {}", token.name, token.symbol)
}

/// Shortens `text` to [`MAX_SYMBOLS_LENGTH`] characters, ending in "..." when cut.
pub fn truncate_symbols(text: &str) -> String {
    if text.chars().count() <= MAX_SYMBOLS_LENGTH {
        return text.to_string();
    }

    let kept: String = text.chars().take(MAX_SYMBOLS_LENGTH - ELLIPSIS.len()).collect();
    format!("{kept}{ELLIPSIS}")
}
