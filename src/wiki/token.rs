//! Core token types shared by the tokenizer, the detokenizer and token-level grammars.
//!
//!     A token carries its kind, the text it stands for and the byte range of the source it
//!     was produced from. For structural tokens the content is what the lexical rule captured,
//!     which can be shorter than the spanned text: a heading opened on a new line spans the
//!     newline, but its content is the `=` run only.
//!
//!     Token kind names are an external contract. They show up in `Display` output and in the
//!     serde representation, and consumers match on them, so they must stay stable.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// The closed set of token kinds the tokenizer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TokenKind {
    #[serde(rename = "heading-open")]
    HeadingOpen,
    #[serde(rename = "heading-close")]
    HeadingClose,
    #[serde(rename = "template-open")]
    TemplateOpen,
    #[serde(rename = "template-close")]
    TemplateClose,
    #[serde(rename = "template-field-separator")]
    TemplateSeparator,
    #[serde(rename = "link-open")]
    LinkOpen,
    #[serde(rename = "link-close")]
    LinkClose,
    #[serde(rename = "inline-markup-open")]
    MarkupOpen,
    #[serde(rename = "inline-markup-close")]
    MarkupClose,
    #[serde(rename = "list-item-marker")]
    ListItem,
    #[serde(rename = "paragraph-break")]
    ParagraphBreak,
    #[serde(rename = "plain-text")]
    Text,
    #[serde(rename = "ignorable")]
    Ignore,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 13] = [
        TokenKind::HeadingOpen,
        TokenKind::HeadingClose,
        TokenKind::TemplateOpen,
        TokenKind::TemplateClose,
        TokenKind::TemplateSeparator,
        TokenKind::LinkOpen,
        TokenKind::LinkClose,
        TokenKind::MarkupOpen,
        TokenKind::MarkupClose,
        TokenKind::ListItem,
        TokenKind::ParagraphBreak,
        TokenKind::Text,
        TokenKind::Ignore,
    ];

    /// The stable external name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::HeadingOpen => "heading-open",
            TokenKind::HeadingClose => "heading-close",
            TokenKind::TemplateOpen => "template-open",
            TokenKind::TemplateClose => "template-close",
            TokenKind::TemplateSeparator => "template-field-separator",
            TokenKind::LinkOpen => "link-open",
            TokenKind::LinkClose => "link-close",
            TokenKind::MarkupOpen => "inline-markup-open",
            TokenKind::MarkupClose => "inline-markup-close",
            TokenKind::ListItem => "list-item-marker",
            TokenKind::ParagraphBreak => "paragraph-break",
            TokenKind::Text => "plain-text",
            TokenKind::Ignore => "ignorable",
        }
    }

    /// Look a kind up by its stable name.
    pub fn from_name(name: &str) -> Option<TokenKind> {
        TokenKind::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// True for kinds produced by a lexical rule rather than by orphan buffering or the
    /// ignore policy.
    pub fn is_structural(self) -> bool {
        !matches!(self, TokenKind::Text | TokenKind::Ignore)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub content: String,
    pub span: Range<usize>,
}

impl Token {
    pub fn new(kind: TokenKind, content: impl Into<String>, span: Range<usize>) -> Self {
        Token {
            kind,
            content: content.into(),
            span,
        }
    }

    /// The slice of `source` covered by this token's span.
    ///
    /// Returns `None` when the span does not fall on character boundaries of `source`,
    /// which only happens when the token came from a different text.
    pub fn text_in<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.span.clone())
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.content)
    }
}
