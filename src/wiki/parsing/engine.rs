//! Expression evaluation
//!
//!     Evaluation is plain recursive descent with backtracking. Each expression is tried at a
//!     position and either succeeds with a new position and a value, or fails. Failure carries
//!     no information and consumes nothing, so the caller is free to try something else at
//!     the same position. Nothing ever looks at input before the position it was given.
//!
//!     The only state is an [Evaluation], which lives for one descent. It carries the grammar
//!     used to resolve non-terminals and, when enabled, a packrat memo table keyed by
//!     (non-terminal, position). Since every check is a pure function of expression, position
//!     and grammar, the memo table changes running time but never results.
//!
//!     Without memoization, ambiguous grammars can revisit the same (non-terminal, position)
//!     pair an exponential number of times.

use super::expr::{Expr, Node};
use super::grammar::{Grammar, NonTerminal};
use super::input::Input;
use super::value::Value;
use std::collections::HashMap;
use tracing::trace;

/// Position after a match and the value it produced; `None` is a failed match.
pub type Outcome = Option<(usize, Value)>;

/// State of one evaluation descent.
pub struct Evaluation<'g> {
    grammar: &'g Grammar,
    memo: Option<HashMap<(NonTerminal, usize), Outcome>>,
}

impl<'g> Evaluation<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        Evaluation {
            grammar,
            memo: None,
        }
    }

    /// An evaluation that caches non-terminal results per position.
    pub fn memoized(grammar: &'g Grammar) -> Self {
        Evaluation {
            grammar,
            memo: Some(HashMap::new()),
        }
    }

    pub fn grammar(&self) -> &'g Grammar {
        self.grammar
    }

    /// Number of cached (non-terminal, position) results.
    pub fn cached(&self) -> usize {
        self.memo.as_ref().map_or(0, HashMap::len)
    }

    /// Resolve `name` and check its definition at `pos`.
    pub fn non_terminal<I: Input + ?Sized>(
        &mut self,
        name: &NonTerminal,
        input: &I,
        pos: usize,
    ) -> Outcome {
        if let Some(hit) = self
            .memo
            .as_ref()
            .and_then(|memo| memo.get(&(name.clone(), pos)))
        {
            return hit.clone();
        }

        let grammar = self.grammar;
        let Some(expr) = grammar.resolve(name) else {
            unreachable!("non-terminal '{}' missing from a validated grammar", name);
        };
        trace!(rule = %name, pos, "enter");
        let outcome = expr.eval(input, pos, self);
        trace!(rule = %name, pos, matched = outcome.is_some(), "leave");

        if let Some(memo) = self.memo.as_mut() {
            memo.insert((name.clone(), pos), outcome.clone());
        }
        outcome
    }
}

impl Expr {
    /// Try to match this expression at `pos`.
    ///
    /// On success returns the position right after the match and the match's value. On
    /// failure returns `None` and nothing has been consumed.
    pub fn check<I: Input + ?Sized>(&self, input: &I, pos: usize, grammar: &Grammar) -> Outcome {
        self.eval(input, pos, &mut Evaluation::new(grammar))
    }

    pub fn eval<I: Input + ?Sized>(
        &self,
        input: &I,
        pos: usize,
        evaluation: &mut Evaluation<'_>,
    ) -> Outcome {
        match &*self.0 {
            Node::Terminal(literal) => input.match_literal(pos, literal),
            Node::TerminalRegex(pattern) => input.match_pattern(pos, pattern),
            Node::TerminalKind(kind) => input.match_kind(pos, *kind),
            Node::Follow(left, right) => {
                let (middle, left_value) = left.eval(input, pos, evaluation)?;
                let (end, right_value) = right.eval(input, middle, evaluation)?;
                Some((end, Value::pair(left_value, right_value)))
            }
            Node::Or(left, right) => left
                .eval(input, pos, evaluation)
                .or_else(|| right.eval(input, pos, evaluation)),
            Node::Many(inner) => {
                let (end, values) = repeat(inner, input, pos, evaluation, Vec::new());
                Some((end, Value::List(values)))
            }
            Node::ManyOne(inner) => {
                let (next, first) = inner.eval(input, pos, evaluation)?;
                let (end, values) = repeat(inner, input, next, evaluation, vec![first]);
                Some((end, Value::List(values)))
            }
            Node::Opt(inner) => inner
                .eval(input, pos, evaluation)
                .or(Some((pos, Value::Absent))),
            Node::Transform(inner, transform) => {
                let (end, value) = inner.eval(input, pos, evaluation)?;
                Some((end, transform(value)))
            }
            Node::NonTerminal(name) => evaluation.non_terminal(name, input, pos),
        }
    }
}

/// Apply `inner` until it fails, stops consuming, or the input runs out.
fn repeat<I: Input + ?Sized>(
    inner: &Expr,
    input: &I,
    mut pos: usize,
    evaluation: &mut Evaluation<'_>,
    mut values: Vec<Value>,
) -> (usize, Vec<Value>) {
    while pos < input.end() {
        match inner.eval(input, pos, evaluation) {
            Some((next, value)) if next > pos => {
                values.push(value);
                pos = next;
            }
            _ => break,
        }
    }
    (pos, values)
}
