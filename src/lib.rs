//! # wikiparse
//!
//! A tokenizer for wiki markup and a small parsing expression grammar engine.
//!
//! File Layout
//!
//! The crate has two halves that meet at the token stream:
//! src/wiki
//!   ├── lexing     Ordered lexical rules and the tokenizer that applies them
//!   ├── parsing    PEG expressions, grammars and the full-input parser driver
//!   └── <common>   Tokens, configuration, detokenizer and the article source seam
//!
//! The tokenizer never fails: any text becomes some token sequence. Grammars
//! run either directly over text or over the token sequence, and a parse either
//! consumes the whole input or produces nothing.
//!
//! For testing helpers, see the [testing module](wiki::testing).

pub mod wiki;

pub use wiki::lexing::{tokenize, Tokenizer};
pub use wiki::parsing::{Expr, Grammar, NonTerminal, Parser, Value};
pub use wiki::token::{Token, TokenKind};
