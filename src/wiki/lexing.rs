//! Lexer
//!
//!     This module turns wiki markup into a flat, ordered token sequence.
//!
//! Rules and Priority
//!
//!     Tokenization is driven by an ordered table of lexical rules, see [rules](rules). At
//!     every position each rule is tried anchored there, and the first one that matches wins.
//!     Order therefore encodes priority: when two rules could both match at a position the one
//!     declared first is used.
//!
//!     Rules capture the part of their match that becomes token content. The rest of the
//!     match is discarded, which is how a heading that opens a new line spans its leading
//!     newline while carrying only the `=` run.
//!
//! Orphans and Ignored Characters
//!
//!     Characters no rule claims are orphans. They accumulate in a buffer that is flushed as a
//!     single plain-text token as soon as a rule matches again, or at the end of the input.
//!     A bare newline is the exception: it is dropped outright, so two runs of text separated
//!     by a single newline end up in the same plain-text token.
//!
//! Source Preservation
//!
//!     Every token carries the byte range it came from. Together with the discarded pieces
//!     reported by [Tokenizer::process_with_discards], the tokens reconstruct the source
//!     exactly, see [detokenize](crate::wiki::formats::detokenizer::detokenize).
//!
//!     Tokenization has no failure mode. Malformed markup degrades to plain text.

pub mod rules;
pub mod tokenizer;

pub use rules::{Boundary, LexRule, RuleMatch, DEFAULT_RULES};
pub use tokenizer::{Lexed, Tokenizer};

use crate::wiki::token::Token;

/// Tokenize `text` with the default rules.
pub fn tokenize(text: &str) -> Vec<Token> {
    Tokenizer::new().process(text)
}
