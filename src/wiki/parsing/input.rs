//! Inputs a grammar can run over.
//!
//! Text is addressed by byte offset and terminals match substrings. A token sequence is
//! addressed by token index and every terminal matches exactly one token.

use crate::wiki::token::{Token, TokenKind};
use regex::Regex;

use super::value::Value;

/// A compiled terminal pattern.
///
/// `prefix` is anchored at the start of the haystack, for matching inside text. `whole` is
/// anchored at both ends, for matching a token's entire content.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    prefix: Regex,
    whole: Regex,
}

impl Pattern {
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        Ok(Pattern {
            source: source.to_string(),
            prefix: Regex::new(&format!("^(?:{})", source))?,
            whole: Regex::new(&format!("^(?:{})$", source))?,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

/// The sequence an expression is checked against.
///
/// Every method looks only at `pos` and what follows it, and returns the position after
/// the match together with its value.
pub trait Input {
    /// The position right after the last element; a full parse must end here.
    fn end(&self) -> usize;

    fn match_literal(&self, pos: usize, literal: &str) -> Option<(usize, Value)>;

    fn match_pattern(&self, pos: usize, pattern: &Pattern) -> Option<(usize, Value)>;

    fn match_kind(&self, pos: usize, kind: TokenKind) -> Option<(usize, Value)>;
}

impl Input for str {
    fn end(&self) -> usize {
        self.len()
    }

    fn match_literal(&self, pos: usize, literal: &str) -> Option<(usize, Value)> {
        self.get(pos..)?
            .starts_with(literal)
            .then(|| (pos + literal.len(), Value::text(literal)))
    }

    fn match_pattern(&self, pos: usize, pattern: &Pattern) -> Option<(usize, Value)> {
        let found = pattern.prefix.find(self.get(pos..)?)?;
        Some((pos + found.end(), Value::text(found.as_str())))
    }

    /// Text carries no token kinds.
    fn match_kind(&self, _pos: usize, _kind: TokenKind) -> Option<(usize, Value)> {
        None
    }
}

impl Input for [Token] {
    fn end(&self) -> usize {
        self.len()
    }

    fn match_literal(&self, pos: usize, literal: &str) -> Option<(usize, Value)> {
        let token = self.get(pos)?;
        (token.content == literal).then(|| (pos + 1, Value::Token(token.clone())))
    }

    fn match_pattern(&self, pos: usize, pattern: &Pattern) -> Option<(usize, Value)> {
        let token = self.get(pos)?;
        pattern
            .whole
            .is_match(&token.content)
            .then(|| (pos + 1, Value::Token(token.clone())))
    }

    fn match_kind(&self, pos: usize, kind: TokenKind) -> Option<(usize, Value)> {
        let token = self.get(pos)?;
        (token.kind == kind).then(|| (pos + 1, Value::Token(token.clone())))
    }
}

impl Input for String {
    fn end(&self) -> usize {
        self.as_str().end()
    }

    fn match_literal(&self, pos: usize, literal: &str) -> Option<(usize, Value)> {
        self.as_str().match_literal(pos, literal)
    }

    fn match_pattern(&self, pos: usize, pattern: &Pattern) -> Option<(usize, Value)> {
        self.as_str().match_pattern(pos, pattern)
    }

    fn match_kind(&self, pos: usize, kind: TokenKind) -> Option<(usize, Value)> {
        self.as_str().match_kind(pos, kind)
    }
}

impl Input for Vec<Token> {
    fn end(&self) -> usize {
        self.as_slice().end()
    }

    fn match_literal(&self, pos: usize, literal: &str) -> Option<(usize, Value)> {
        self.as_slice().match_literal(pos, literal)
    }

    fn match_pattern(&self, pos: usize, pattern: &Pattern) -> Option<(usize, Value)> {
        self.as_slice().match_pattern(pos, pattern)
    }

    fn match_kind(&self, pos: usize, kind: TokenKind) -> Option<(usize, Value)> {
        self.as_slice().match_kind(pos, kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_literal_is_exact_prefix() {
        assert_eq!("abc".match_literal(1, "bc"), Some((3, Value::text("bc"))));
        assert_eq!("abc".match_literal(1, "bcd"), None);
        assert_eq!("abc".match_literal(4, "a"), None);
    }

    #[test]
    fn test_text_literal_off_char_boundary() {
        assert_eq!("ɑb".match_literal(1, "b"), None);
    }

    #[test]
    fn test_text_pattern_is_anchored() {
        let digits = Pattern::new("[0-9]+").unwrap();
        assert_eq!("a12".match_pattern(0, &digits), None);
        assert_eq!("a12".match_pattern(1, &digits), Some((3, Value::text("12"))));
    }

    #[test]
    fn test_token_pattern_matches_whole_content() {
        let tokens = vec![Token::new(TokenKind::Text, "ab", 0..2)];
        let alternation = Pattern::new("a|ab").unwrap();
        assert!(tokens.match_pattern(0, &alternation).is_some());
        let short = Pattern::new("a").unwrap();
        assert_eq!(tokens.match_pattern(0, &short), None);
    }

    #[test]
    fn test_token_kind() {
        let tokens = vec![Token::new(TokenKind::LinkOpen, "[[", 0..2)];
        assert!(tokens.match_kind(0, TokenKind::LinkOpen).is_some());
        assert_eq!(tokens.match_kind(0, TokenKind::LinkClose), None);
        assert_eq!(tokens.match_kind(1, TokenKind::LinkOpen), None);
        assert_eq!("[[".match_kind(0, TokenKind::LinkOpen), None);
    }
}
