//! Parsing expression grammars
//!
//!     A small PEG engine. Grammars are declared as expressions built from a closed set of
//!     nodes and evaluated by recursive descent with backtracking.
//!
//! Expressions
//!
//!     | Node          | Matches                                   | Value               |
//!     |---------------|-------------------------------------------|---------------------|
//!     | Terminal      | the literal, exactly                      | the literal         |
//!     | TerminalRegex | the pattern, anchored at the position     | the matched text    |
//!     | TerminalKind  | one token of the kind (token input only)  | the token           |
//!     | Follow        | left, then right                          | pair                |
//!     | Or            | left, or right if left fails              | the winner's value  |
//!     | Many          | zero or more                              | list                |
//!     | ManyOne       | one or more                               | non-empty list      |
//!     | Opt           | zero or one, never fails                  | value or Absent     |
//!     | Transform     | its operand                               | f(operand's value)  |
//!     | NonTerminal   | the expression bound to the name          | that value          |
//!
//!     Choice is ordered: the right side of an `Or` is only tried when the left side fails,
//!     and the left side wins when both could match. Repetition is greedy and never gives
//!     back what it consumed. It stops when its operand fails, stops consuming, or the end
//!     of the input is reached.
//!
//! Grammars and Parsing
//!
//!     Non-terminals are names. A [Grammar] binds each name to an expression and is checked
//!     for completeness when built, so recursive and mutually recursive rules are written
//!     without building cyclic structures. A [Parser] applies the grammar's initial rule to a
//!     whole input: matching a prefix is not enough.
//!
//!     Grammars run over text (byte positions) or over a token sequence from the tokenizer
//!     (token positions), see [Input]. Left-recursive grammars are not supported; they recurse
//!     without consuming input.
//!
//!     Evaluation is synchronous and holds no shared mutable state. Expressions, grammars and
//!     parsers are immutable after construction, `Send` and `Sync`, and can be used from many
//!     threads at once. There is no timeout: heavily ambiguous grammars can take exponential
//!     time unless packrat memoization is turned on.

pub mod engine;
pub mod expr;
pub mod grammar;
pub mod input;
pub mod parser;
pub mod templates;
pub mod value;

pub use engine::{Evaluation, Outcome};
pub use expr::{Expr, Transformer};
pub use grammar::{Grammar, GrammarBuilder, GrammarError, NonTerminal};
pub use input::{Input, Pattern};
pub use parser::Parser;
pub use templates::{parse_template, Template};
pub use value::Value;
