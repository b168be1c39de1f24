//! Tokenizer implementation
//!
//! This is where source strings become token sequences. At each position the lexical rules
//! are tried in priority order; characters no rule claims are buffered as orphans and
//! flushed as a single plain-text token when the next rule matches or the input ends.

use super::rules::{is_ignorable, LexRule, RuleMatch, DEFAULT_RULES};
use crate::wiki::token::{Token, TokenKind};
use serde::Serialize;
use std::ops::Range;
use tracing::{debug, trace};

/// Output of a tokenizer run that keeps track of what was dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Lexed {
    pub tokens: Vec<Token>,
    /// One `Ignore` token per dropped piece of source: bare newlines and the uncaptured
    /// parts of structural matches.
    pub discarded: Vec<Token>,
}

/// Applies an ordered rule set to text.
///
/// A tokenizer holds no per-run state, so one instance can serve any number of runs,
/// from any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer<'r> {
    rules: &'r [LexRule],
}

impl Tokenizer<'static> {
    /// A tokenizer over the default wiki markup rules.
    pub fn new() -> Self {
        Tokenizer {
            rules: DEFAULT_RULES.as_slice(),
        }
    }
}

impl Default for Tokenizer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

/// Characters waiting to become a plain-text token.
#[derive(Debug, Default)]
struct Orphans {
    content: String,
    span: Option<Range<usize>>,
}

impl Orphans {
    fn push(&mut self, c: char, at: usize) {
        let end = at + c.len_utf8();
        match &mut self.span {
            Some(span) => span.end = end,
            None => self.span = Some(at..end),
        }
        self.content.push(c);
    }

    fn flush(&mut self) -> Option<Token> {
        let span = self.span.take()?;
        Some(Token::new(
            TokenKind::Text,
            std::mem::take(&mut self.content),
            span,
        ))
    }
}

impl<'r> Tokenizer<'r> {
    /// A tokenizer over a custom rule set. Order in `rules` is priority.
    pub fn with_rules(rules: &'r [LexRule]) -> Self {
        Tokenizer { rules }
    }

    /// Tokenize `text`. Never fails; unclaimed text degrades to plain-text tokens.
    pub fn process(&self, text: &str) -> Vec<Token> {
        self.process_with_discards(text).tokens
    }

    /// Tokenize `text`, also returning everything that was dropped along the way.
    pub fn process_with_discards(&self, text: &str) -> Lexed {
        let mut lexed = Lexed::default();
        let mut orphans = Orphans::default();
        let mut pos = 0;

        while pos < text.len() {
            if let Some((kind, found)) = self.first_match(text, pos) {
                if let Some(token) = orphans.flush() {
                    trace!(%token, "flushed orphans");
                    lexed.tokens.push(token);
                }
                for range in found.discarded {
                    lexed
                        .discarded
                        .push(Token::new(TokenKind::Ignore, &text[range.clone()], range));
                }
                let token = Token::new(kind, found.content, found.span.clone());
                trace!(%token, "matched rule");
                lexed.tokens.push(token);
                pos = found.span.end;
                continue;
            }

            let Some(c) = text[pos..].chars().next() else {
                break;
            };
            let width = c.len_utf8();
            if is_ignorable(c) {
                lexed.discarded.push(Token::new(
                    TokenKind::Ignore,
                    &text[pos..pos + width],
                    pos..pos + width,
                ));
            } else {
                orphans.push(c, pos);
            }
            pos += width;
        }

        if let Some(token) = orphans.flush() {
            lexed.tokens.push(token);
        }

        debug!(
            tokens = lexed.tokens.len(),
            discarded = lexed.discarded.len(),
            bytes = text.len(),
            "tokenized"
        );
        lexed
    }

    fn first_match(&self, text: &str, pos: usize) -> Option<(TokenKind, RuleMatch)> {
        self.rules
            .iter()
            .find_map(|rule| rule.match_at(text, pos).map(|found| (rule.kind, found)))
    }
}
