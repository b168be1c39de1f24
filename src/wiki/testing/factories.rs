//! Test factories for creating spanned tokens succinctly

use crate::wiki::token::{Token, TokenKind};

/// Make a single token
pub fn mk_token(kind: TokenKind, content: &str, start: usize, end: usize) -> Token {
    Token::new(kind, content, start..end)
}

/// Make a vector of tokens from a list of (kind, content, start, end)
pub fn mk_tokens(entries: &[(TokenKind, &str, usize, usize)]) -> Vec<Token> {
    entries
        .iter()
        .map(|&(kind, content, start, end)| mk_token(kind, content, start, end))
        .collect()
}

/// Render tokens one per line as `kind("content") start..end`.
pub fn render_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| format!("{} {}..{}", token, token.span.start, token.span.end))
        .collect::<Vec<_>>()
        .join("\n")
}
