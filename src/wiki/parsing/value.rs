//! Parse values
//!
//! Every expression produces a [Value] on success. The shape mirrors the expression that
//! produced it: a sequence yields a pair, a repetition a list, an optional either its
//! operand's value or [Value::Absent]. Transforms are free to build anything, usually
//! [Value::Node] trees.

use crate::wiki::token::Token;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Value {
    /// Text matched by a terminal on text input.
    Text(String),
    /// A token matched on token input.
    Token(Token),
    /// Result of a sequence: left value, right value.
    Pair(Box<Value>, Box<Value>),
    /// Result of a repetition, possibly empty.
    List(Vec<Value>),
    /// An optional expression that did not match.
    Absent,
    /// A named node, built by transforms.
    Node(String, Vec<Value>),
}

impl Value {
    pub fn text(text: impl Into<String>) -> Self {
        Value::Text(text.into())
    }

    pub fn pair(left: Value, right: Value) -> Self {
        Value::Pair(Box::new(left), Box::new(right))
    }

    pub fn node(name: impl Into<String>, children: Vec<Value>) -> Self {
        Value::Node(name.into(), children)
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Value::Token(token) => Some(token),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(values) => Some(values),
            _ => None,
        }
    }

    pub fn into_pair(self) -> Result<(Value, Value), Value> {
        match self {
            Value::Pair(left, right) => Ok((*left, *right)),
            other => Err(other),
        }
    }

    /// Split a left-nested chain of pairs, as built by `a + b + c`, into its `arity` parts.
    ///
    /// `((a, b), c)` with arity 3 gives `[a, b, c]`. Unpacking stops early, keeping the
    /// remainder as the first element, when the value runs out of pairs.
    pub fn unchain(self, arity: usize) -> Vec<Value> {
        let mut parts = Vec::with_capacity(arity);
        let mut rest = self;
        for _ in 1..arity {
            match rest.into_pair() {
                Ok((left, right)) => {
                    parts.push(right);
                    rest = left;
                }
                Err(value) => {
                    rest = value;
                    break;
                }
            }
        }
        parts.push(rest);
        parts.reverse();
        parts
    }

    /// Concatenate every piece of text or token content in the value, in order.
    pub fn flatten_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Value::Text(text) => out.push_str(text),
            Value::Token(token) => out.push_str(&token.content),
            Value::Pair(left, right) => {
                left.collect_text(out);
                right.collect_text(out);
            }
            Value::List(values) | Value::Node(_, values) => {
                values.iter().for_each(|value| value.collect_text(out));
            }
            Value::Absent => {}
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => write!(f, "{:?}", text),
            Value::Token(token) => write!(f, "{}", token),
            Value::Pair(left, right) => write!(f, "({}, {})", left, right),
            Value::List(values) => {
                f.write_str("[")?;
                write_joined(f, values)?;
                f.write_str("]")
            }
            Value::Absent => f.write_str("absent"),
            Value::Node(name, children) => {
                write!(f, "{}(", name)?;
                write_joined(f, children)?;
                f.write_str(")")
            }
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, values: &[Value]) -> fmt::Result {
    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", value)?;
    }
    Ok(())
}
