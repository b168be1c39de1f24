//! Grammars: named non-terminals bound to expressions.
//!
//! A [Grammar] can only be obtained from [GrammarBuilder::build], which checks that every
//! non-terminal referenced anywhere is defined exactly once. Lookups during evaluation
//! therefore cannot miss.

use super::expr::Expr;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A named reference to a grammar rule. Identity is the name.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NonTerminal(Arc<str>);

impl NonTerminal {
    pub fn new(name: impl AsRef<str>) -> Self {
        NonTerminal(Arc::from(name.as_ref()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// This non-terminal as an expression.
    pub fn expr(&self) -> Expr {
        Expr::from(self)
    }
}

impl fmt::Display for NonTerminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for NonTerminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NonTerminal({})", self.0)
    }
}

/// Errors raised while putting a grammar together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    /// A non-terminal is used but never defined.
    Undefined {
        name: String,
        referenced_by: Option<String>,
    },
    /// A non-terminal is defined twice.
    Duplicate(String),
    /// A terminal pattern does not compile.
    InvalidPattern { pattern: String, message: String },
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarError::Undefined {
                name,
                referenced_by: Some(rule),
            } => write!(f, "Undefined non-terminal '{}' referenced by '{}'", name, rule),
            GrammarError::Undefined {
                name,
                referenced_by: None,
            } => write!(f, "Undefined non-terminal '{}'", name),
            GrammarError::Duplicate(name) => write!(f, "Non-terminal '{}' defined twice", name),
            GrammarError::InvalidPattern { pattern, message } => {
                write!(f, "Invalid pattern /{}/: {}", pattern, message)
            }
        }
    }
}

impl std::error::Error for GrammarError {}

/// A closed set of rules.
#[derive(Debug, Clone, Default)]
pub struct Grammar {
    rules: HashMap<NonTerminal, Expr>,
}

impl Grammar {
    pub fn builder() -> GrammarBuilder {
        GrammarBuilder::default()
    }

    /// The expression bound to `name`.
    pub fn resolve(&self, name: &NonTerminal) -> Option<&Expr> {
        self.rules.get(name)
    }

    pub fn contains(&self, name: &NonTerminal) -> bool {
        self.rules.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Defined non-terminals, sorted by name.
    pub fn non_terminals(&self) -> Vec<&NonTerminal> {
        let mut names: Vec<&NonTerminal> = self.rules.keys().collect();
        names.sort();
        names
    }
}

/// Collects rules in definition order and validates them on [build](GrammarBuilder::build).
#[derive(Debug, Clone, Default)]
pub struct GrammarBuilder {
    rules: Vec<(NonTerminal, Expr)>,
}

impl GrammarBuilder {
    /// Bind `name` to `expr`.
    pub fn rule(mut self, name: &NonTerminal, expr: impl Into<Expr>) -> Self {
        self.rules.push((name.clone(), expr.into()));
        self
    }

    pub fn build(self) -> Result<Grammar, GrammarError> {
        let mut rules = HashMap::with_capacity(self.rules.len());
        for (name, expr) in &self.rules {
            if rules.insert(name.clone(), expr.clone()).is_some() {
                return Err(GrammarError::Duplicate(name.to_string()));
            }
        }

        for (name, expr) in &self.rules {
            if let Some(missing) = expr.references().into_iter().find(|r| !rules.contains_key(r)) {
                return Err(GrammarError::Undefined {
                    name: missing.to_string(),
                    referenced_by: Some(name.to_string()),
                });
            }
        }

        Ok(Grammar { rules })
    }
}
