//! Lexical Rule Definitions
//!
//! This module defines the ordered lexical rules used by the tokenizer.
//! Rules are tried in declaration order at every position and the first one
//! that matches wins, so order is priority.
//!
//! # Rule Order
//!
//! 1. heading-open - `=` run at the start of the text or right after a newline
//! 2. heading-close - `=` run directly followed by a newline
//! 3. template-open - `{{`
//! 4. template-close - `}}`
//! 5. template-field-separator - `|`
//! 6. link-open - `[[`
//! 7. link-close - `]]`
//! 8. list-item-marker - run of `*#:;` right after a newline
//! 9. inline-markup-open - bare tag such as `<b>`
//! 10. inline-markup-close - bare closing tag such as `</b>`
//! 11. paragraph-break - two newlines not followed by a heading or list marker
//!
//! Tags with attributes (`<span class="x">`) are not recognised and fall through to text.
//!
//! The regex crate has no lookaround, so the zero-width conditions some rules need are
//! expressed as a [`Boundary`] checked after the pattern matched. A boundary never
//! consumes input.

use crate::wiki::token::TokenKind;
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

/// Characters that start a heading or a list item. A double newline followed by one of
/// these is not a paragraph break.
const STRUCTURAL_MARKERS: &[char] = &['=', '*', '#', ':', ';'];

/// Zero-width condition on the text around a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// No condition.
    Free,
    /// The match starts at offset 0 or begins with a newline.
    LineStart,
    /// The character right after the match is one of these.
    FollowedBy(&'static [char]),
    /// The character right after the match, if any, is none of these.
    NotFollowedBy(&'static [char]),
}

impl Boundary {
    fn holds(&self, text: &str, start: usize, end: usize) -> bool {
        let next = text[end..].chars().next();
        match self {
            Boundary::Free => true,
            Boundary::LineStart => start == 0 || text[start..end].starts_with('\n'),
            Boundary::FollowedBy(set) => next.is_some_and(|c| set.contains(&c)),
            Boundary::NotFollowedBy(set) => !next.is_some_and(|c| set.contains(&c)),
        }
    }
}

/// Rule table as (kind, pattern, boundary).
///
/// Capture groups select the token content. Everything a rule matches outside its groups
/// is discarded (the leading newline of a heading or a list item).
pub(super) const RULE_PATTERNS: &[(TokenKind, &str, Boundary)] = &[
    (TokenKind::HeadingOpen, r"\n?(=+)", Boundary::LineStart),
    (TokenKind::HeadingClose, r"(=+)", Boundary::FollowedBy(&['\n'])),
    (TokenKind::TemplateOpen, r"(\{\{)", Boundary::Free),
    (TokenKind::TemplateClose, r"(\}\})", Boundary::Free),
    (TokenKind::TemplateSeparator, r"(\|)", Boundary::Free),
    (TokenKind::LinkOpen, r"(\[\[)", Boundary::Free),
    (TokenKind::LinkClose, r"(\]\])", Boundary::Free),
    (TokenKind::ListItem, r"\n([*#:;]+)", Boundary::Free),
    (TokenKind::MarkupOpen, r"(<[A-Za-z]+>)", Boundary::Free),
    (TokenKind::MarkupClose, r"(</[A-Za-z]+>)", Boundary::Free),
    (
        TokenKind::ParagraphBreak,
        r"(\n\n)",
        Boundary::NotFollowedBy(STRUCTURAL_MARKERS),
    ),
];

/// The default rule set, compiled once per process.
pub static DEFAULT_RULES: Lazy<Vec<LexRule>> = Lazy::new(|| {
    RULE_PATTERNS
        .iter()
        .map(|&(kind, pattern, boundary)| LexRule::new(kind, pattern, boundary).unwrap())
        .collect()
});

/// Whether an unclaimed character is dropped instead of buffered as text.
///
/// Only a bare newline is ignorable: one that no structural rule claimed.
pub fn is_ignorable(c: char) -> bool {
    c == '\n'
}

/// A compiled lexical rule.
#[derive(Debug, Clone)]
pub struct LexRule {
    pub kind: TokenKind,
    pattern: Regex,
    boundary: Boundary,
}

/// A successful rule application, with absolute byte offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch {
    pub span: Range<usize>,
    pub content: String,
    /// Parts of the span outside every capture group, in source order.
    pub discarded: Vec<Range<usize>>,
}

impl LexRule {
    /// Compile a rule. The pattern is anchored at the position it is tried at.
    pub fn new(kind: TokenKind, pattern: &str, boundary: Boundary) -> Result<Self, regex::Error> {
        let pattern = Regex::new(&format!("^(?:{})", pattern))?;
        Ok(LexRule {
            kind,
            pattern,
            boundary,
        })
    }

    /// Try the rule at `pos`. Empty matches are rejected so the tokenizer always advances.
    pub fn match_at(&self, text: &str, pos: usize) -> Option<RuleMatch> {
        let captures = self.pattern.captures(&text[pos..])?;
        let whole = captures.get(0)?;
        let (start, end) = (pos + whole.start(), pos + whole.end());
        if start == end || !self.boundary.holds(text, start, end) {
            return None;
        }

        let groups: Vec<Range<usize>> = captures
            .iter()
            .skip(1)
            .flatten()
            .map(|group| pos + group.start()..pos + group.end())
            .collect();
        if groups.is_empty() {
            return Some(RuleMatch {
                span: start..end,
                content: text[start..end].to_string(),
                discarded: Vec::new(),
            });
        }

        let content = groups.iter().map(|group| &text[group.clone()]).collect();
        let mut discarded = Vec::new();
        let mut cursor = start;
        for group in &groups {
            if group.start > cursor {
                discarded.push(cursor..group.start);
            }
            cursor = cursor.max(group.end);
        }
        if cursor < end {
            discarded.push(cursor..end);
        }

        Some(RuleMatch {
            span: start..end,
            content,
            discarded,
        })
    }
}
