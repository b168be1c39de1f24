//! Parser driver
//!
//! A [Parser] pairs a grammar with its initial non-terminal and applies the full-input
//! discipline: a parse succeeds only when the initial rule matches from position 0 and
//! stops exactly at the end of the input. A rule that matches a strict prefix is a
//! failed parse.

use super::engine::Evaluation;
use super::grammar::{Grammar, GrammarError, NonTerminal};
use super::input::Input;
use super::value::Value;
use crate::wiki::config::ParserConfig;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Parser {
    initial: NonTerminal,
    grammar: Grammar,
    packrat: bool,
}

impl Parser {
    /// Bind `initial` to `grammar`. Fails when `initial` is not defined by the grammar.
    pub fn new(initial: NonTerminal, grammar: Grammar) -> Result<Self, GrammarError> {
        if !grammar.contains(&initial) {
            return Err(GrammarError::Undefined {
                name: initial.to_string(),
                referenced_by: None,
            });
        }
        Ok(Parser {
            initial,
            grammar,
            packrat: false,
        })
    }

    /// Turn packrat memoization on or off. Results are the same either way.
    pub fn packrat(mut self, enabled: bool) -> Self {
        self.packrat = enabled;
        self
    }

    pub fn with_config(self, config: &ParserConfig) -> Self {
        self.packrat(config.packrat)
    }

    pub fn initial(&self) -> &NonTerminal {
        &self.initial
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Parse the whole of `input`. Returns `None` when there is no match or the match
    /// leaves input unconsumed.
    pub fn parse<I: Input + ?Sized>(&self, input: &I) -> Option<Value> {
        let mut evaluation = if self.packrat {
            Evaluation::memoized(&self.grammar)
        } else {
            Evaluation::new(&self.grammar)
        };

        let outcome = evaluation.non_terminal(&self.initial, input, 0);
        match outcome {
            Some((end, value)) if end == input.end() => {
                debug!(rule = %self.initial, end, cached = evaluation.cached(), "parsed");
                Some(value)
            }
            Some((end, _)) => {
                debug!(rule = %self.initial, end, total = input.end(), "partial match rejected");
                None
            }
            None => {
                debug!(rule = %self.initial, "no match");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wiki::parsing::Expr;

    fn parser(expr: Expr) -> Parser {
        let start = NonTerminal::new("expr");
        let grammar = Grammar::builder().rule(&start, expr).build().unwrap();
        Parser::new(start, grammar).unwrap()
    }

    #[test]
    fn test_full_input_discipline() {
        let parser = parser(Expr::terminal("a"));
        assert_eq!(parser.parse("a"), Some(Value::text("a")));
        assert_eq!(parser.parse("aa"), None);
        assert_eq!(parser.parse(""), None);
    }

    #[test]
    fn test_initial_must_be_defined() {
        let grammar = Grammar::builder()
            .rule(&NonTerminal::new("a"), Expr::terminal("a"))
            .build()
            .unwrap();
        let error = Parser::new(NonTerminal::new("b"), grammar).unwrap_err();
        assert_eq!(error.to_string(), "Undefined non-terminal 'b'");
    }

    #[test]
    fn test_empty_many_parses_empty_input() {
        let parser = parser(Expr::terminal("a").many());
        assert_eq!(parser.parse(""), Some(Value::List(vec![])));
    }

    #[test]
    fn test_opt_on_empty_input_is_absent() {
        let parser = parser(Expr::terminal("a").opt());
        assert_eq!(parser.parse(""), Some(Value::Absent));
        assert_eq!(parser.parse("b"), None);
    }

    #[test]
    fn test_packrat_toggle_keeps_results() {
        let plain = parser(Expr::regex("[a-z]+").unwrap());
        let memoized = plain.clone().packrat(true);
        for input in ["abcd", "", "abcd--"] {
            assert_eq!(plain.parse(input), memoized.parse(input));
        }
    }

    #[test]
    fn test_parser_is_reusable() {
        let parser = parser(Expr::terminal("a") + Expr::terminal("b"));
        assert!(parser.parse("ab").is_some());
        assert!(parser.parse("a").is_none());
        assert!(parser.parse("ab").is_some());
    }
}
