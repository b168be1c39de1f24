//! Parsing expressions
//!
//! An [Expr] is an immutable, cheaply clonable handle on an expression node. Cloning shares
//! the node, so one sub-expression can appear in several places of a grammar. Recursion goes
//! through [NonTerminal] names resolved by the grammar at check time, which keeps the node
//! graph acyclic.
//!
//! Grammars read as algebra: `+` builds a sequence, `|` an ordered choice.
//!
//! ```text
//! let value = Expr::regex("[a-z0-9]+")? | Expr::terminal("(") + &expr + Expr::terminal(")");
//! ```

use super::grammar::{GrammarError, NonTerminal};
use super::input::Pattern;
use super::value::Value;
use crate::wiki::token::TokenKind;
use std::fmt;
use std::ops::{Add, BitOr};
use std::sync::Arc;

/// A pure, total mapping applied to the value of a successful match.
pub type Transformer = Arc<dyn Fn(Value) -> Value + Send + Sync>;

#[derive(Clone)]
pub struct Expr(pub(super) Arc<Node>);

pub(super) enum Node {
    Terminal(String),
    TerminalRegex(Pattern),
    TerminalKind(TokenKind),
    Follow(Expr, Expr),
    Or(Expr, Expr),
    Many(Expr),
    ManyOne(Expr),
    Opt(Expr),
    Transform(Expr, Transformer),
    NonTerminal(NonTerminal),
}

impl Expr {
    fn from_node(node: Node) -> Self {
        Expr(Arc::new(node))
    }

    /// Match `literal` exactly.
    pub fn terminal(literal: impl Into<String>) -> Self {
        Expr::from_node(Node::Terminal(literal.into()))
    }

    /// Match a regular expression anchored at the current position.
    pub fn regex(pattern: &str) -> Result<Self, GrammarError> {
        let pattern = Pattern::new(pattern).map_err(|e| GrammarError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        Ok(Expr::from_node(Node::TerminalRegex(pattern)))
    }

    /// Match one token of the given kind. Never matches on text input.
    pub fn kind(kind: TokenKind) -> Self {
        Expr::from_node(Node::TerminalKind(kind))
    }

    /// `self` followed by `next`; yields a pair.
    pub fn follow(self, next: impl Into<Expr>) -> Self {
        Expr::from_node(Node::Follow(self, next.into()))
    }

    /// `self`, or `alternative` when `self` fails.
    pub fn or(self, alternative: impl Into<Expr>) -> Self {
        Expr::from_node(Node::Or(self, alternative.into()))
    }

    /// Zero or more repetitions.
    pub fn many(self) -> Self {
        Expr::from_node(Node::Many(self))
    }

    /// One or more repetitions.
    pub fn many1(self) -> Self {
        Expr::from_node(Node::ManyOne(self))
    }

    /// Zero or one occurrence; yields [Value::Absent] when missing.
    pub fn opt(self) -> Self {
        Expr::from_node(Node::Opt(self))
    }

    /// Map the value of a successful match. `f` must not fail.
    pub fn then<F>(self, f: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        Expr::from_node(Node::Transform(self, Arc::new(f)))
    }

    /// Every non-terminal this expression refers to, in first-seen order.
    pub fn references(&self) -> Vec<NonTerminal> {
        let mut found = Vec::new();
        self.collect_references(&mut found);
        found
    }

    fn collect_references(&self, found: &mut Vec<NonTerminal>) {
        match &*self.0 {
            Node::Terminal(_) | Node::TerminalRegex(_) | Node::TerminalKind(_) => {}
            Node::Follow(left, right) | Node::Or(left, right) => {
                left.collect_references(found);
                right.collect_references(found);
            }
            Node::Many(inner) | Node::ManyOne(inner) | Node::Opt(inner) => {
                inner.collect_references(found)
            }
            Node::Transform(inner, _) => inner.collect_references(found),
            Node::NonTerminal(name) => {
                if !found.contains(name) {
                    found.push(name.clone());
                }
            }
        }
    }
}

impl From<NonTerminal> for Expr {
    fn from(name: NonTerminal) -> Self {
        Expr::from_node(Node::NonTerminal(name))
    }
}

impl From<&NonTerminal> for Expr {
    fn from(name: &NonTerminal) -> Self {
        Expr::from(name.clone())
    }
}

impl From<&Expr> for Expr {
    fn from(expr: &Expr) -> Self {
        expr.clone()
    }
}

impl<R: Into<Expr>> Add<R> for Expr {
    type Output = Expr;

    fn add(self, rhs: R) -> Expr {
        self.follow(rhs)
    }
}

impl<R: Into<Expr>> BitOr<R> for Expr {
    type Output = Expr;

    fn bitor(self, rhs: R) -> Expr {
        self.or(rhs)
    }
}

impl<R: Into<Expr>> Add<R> for &NonTerminal {
    type Output = Expr;

    fn add(self, rhs: R) -> Expr {
        Expr::from(self).follow(rhs)
    }
}

impl<R: Into<Expr>> BitOr<R> for &NonTerminal {
    type Output = Expr;

    fn bitor(self, rhs: R) -> Expr {
        Expr::from(self).or(rhs)
    }
}

/// Grammar-like notation: `'lit'`, `/re/`, `<kind>`, `(a b)`, `(a | b)`, `a*`, `a+`, `a?`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.0 {
            Node::Terminal(literal) => write!(f, "{:?}", literal),
            Node::TerminalRegex(pattern) => write!(f, "/{}/", pattern.as_str()),
            Node::TerminalKind(kind) => write!(f, "<{}>", kind),
            Node::Follow(left, right) => write!(f, "({} {})", left, right),
            Node::Or(left, right) => write!(f, "({} | {})", left, right),
            Node::Many(inner) => write!(f, "{}*", inner),
            Node::ManyOne(inner) => write!(f, "{}+", inner),
            Node::Opt(inner) => write!(f, "{}?", inner),
            Node::Transform(inner, _) => write!(f, "{{{}}}", inner),
            Node::NonTerminal(name) => write!(f, "{}", name),
        }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Expr({})", self)
    }
}
