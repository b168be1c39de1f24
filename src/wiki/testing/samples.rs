//! Curated markup samples
//!
//! The files live in `samples/` at the crate root and are embedded at compile time, so tests
//! never depend on the working directory.

use crate::wiki::lexing::{Lexed, Tokenizer};
use crate::wiki::token::Token;

/// A named sample document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    /// Headings of two levels, bold markup, paragraph breaks and a list item.
    HeadingsAndParagraphs,
    /// A trimmed Wiktionary entry: sections, templates, list items and a link.
    WiktionaryParser,
}

impl Sample {
    pub const ALL: [Sample; 2] = [Sample::HeadingsAndParagraphs, Sample::WiktionaryParser];

    pub fn name(self) -> &'static str {
        match self {
            Sample::HeadingsAndParagraphs => "headings-and-paragraphs",
            Sample::WiktionaryParser => "wiktionary-parser",
        }
    }

    pub fn source(self) -> &'static str {
        match self {
            Sample::HeadingsAndParagraphs => {
                include_str!("../../../samples/headings-and-paragraphs.wiki")
            }
            Sample::WiktionaryParser => include_str!("../../../samples/wiktionary-parser.wiki"),
        }
    }

    pub fn tokenize(self) -> Vec<Token> {
        Tokenizer::new().process(self.source())
    }

    pub fn lex(self) -> Lexed {
        Tokenizer::new().process_with_discards(self.source())
    }
}
