//! Template invocations
//!
//! A token-level grammar for `{{name|arg|...}}`. Arguments may contain plain text, links
//! (`[[target]]` or `[[target|label]]`) and nested templates.
//!
//! ```text
//! template := <template-open> name field* <template-close>
//! name     := <plain-text>
//! field    := <template-field-separator> piece*
//! piece    := <plain-text> | link | template
//! link     := <link-open> <plain-text> (<template-field-separator> <plain-text>)? <link-close>
//! ```

use super::expr::Expr;
use super::grammar::{Grammar, GrammarError, NonTerminal};
use super::parser::Parser;
use super::value::Value;
use crate::wiki::lexing::tokenize;
use crate::wiki::token::TokenKind;
use once_cell::sync::Lazy;
use serde::Serialize;

static TEMPLATE_PARSER: Lazy<Parser> = Lazy::new(|| template_parser().unwrap());

/// A parsed template invocation with its arguments rendered to text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Template {
    pub name: String,
    pub args: Vec<String>,
}

impl Template {
    /// Read a template back from the value produced by the template grammar.
    pub fn from_value(value: &Value) -> Option<Template> {
        let Value::Node(kind, children) = value else {
            return None;
        };
        if kind != "template" {
            return None;
        }
        let (name, fields) = children.split_first()?;
        Some(Template {
            name: name.as_text()?.to_string(),
            args: fields.iter().map(render_field).collect(),
        })
    }

    pub fn to_markup(&self) -> String {
        let mut out = format!("{{{{{}", self.name);
        for arg in &self.args {
            out.push('|');
            out.push_str(arg);
        }
        out.push_str("}}");
        out
    }
}

/// The template grammar, rooted at `template`.
pub fn template_grammar() -> Result<Grammar, GrammarError> {
    let template = NonTerminal::new("template");
    let name = NonTerminal::new("name");
    let field = NonTerminal::new("field");
    let piece = NonTerminal::new("piece");
    let link = NonTerminal::new("link");

    let text = || Expr::kind(TokenKind::Text);
    let separator = || Expr::kind(TokenKind::TemplateSeparator);

    Grammar::builder()
        .rule(
            &template,
            (Expr::kind(TokenKind::TemplateOpen) + &name + field.expr().many()
                + Expr::kind(TokenKind::TemplateClose))
            .then(template_node),
        )
        .rule(
            &name,
            text().then(|v| Value::text(v.flatten_text().trim())),
        )
        .rule(&field, (separator() + piece.expr().many()).then(field_node))
        .rule(
            &piece,
            text().then(|v| Value::text(v.flatten_text())) | &link | &template,
        )
        .rule(
            &link,
            (Expr::kind(TokenKind::LinkOpen)
                + text()
                + (separator() + text()).opt()
                + Expr::kind(TokenKind::LinkClose))
            .then(link_node),
        )
        .build()
}

pub fn template_parser() -> Result<Parser, GrammarError> {
    Parser::new(NonTerminal::new("template"), template_grammar()?)
}

/// Parse markup that consists of exactly one template invocation.
pub fn parse_template(markup: &str) -> Option<Template> {
    let tokens = tokenize(markup);
    let value = TEMPLATE_PARSER.parse(&tokens)?;
    Template::from_value(&value)
}

fn items(value: Value) -> Vec<Value> {
    match value {
        Value::List(values) => values,
        Value::Absent => Vec::new(),
        other => vec![other],
    }
}

fn template_node(value: Value) -> Value {
    let mut parts = value.unchain(4).into_iter().skip(1);
    let name = parts.next().unwrap_or(Value::Absent);
    let fields = parts.next().map(items).unwrap_or_default();
    let mut children = vec![name];
    children.extend(fields);
    Value::node("template", children)
}

fn field_node(value: Value) -> Value {
    let pieces = value.unchain(2).pop().map(items).unwrap_or_default();
    Value::node("field", pieces)
}

fn link_node(value: Value) -> Value {
    let mut parts = value.unchain(4).into_iter().skip(1);
    let target = parts.next().map(|v| v.flatten_text()).unwrap_or_default();
    let mut children = vec![Value::Text(target)];
    if let Some(Ok((_, label))) = parts.next().map(Value::into_pair) {
        children.push(Value::Text(label.flatten_text()));
    }
    Value::node("link", children)
}

fn render_field(field: &Value) -> String {
    let Value::Node(_, pieces) = field else {
        return field.flatten_text();
    };
    pieces.iter().map(render_piece).collect()
}

fn render_piece(piece: &Value) -> String {
    match piece {
        Value::Node(kind, children) if kind == "link" => children
            .last()
            .map(Value::flatten_text)
            .unwrap_or_default(),
        Value::Node(kind, _) if kind == "template" => Template::from_value(piece)
            .map(|nested| nested.to_markup())
            .unwrap_or_default(),
        other => other.flatten_text(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(name: &str, args: &[&str]) -> Template {
        Template {
            name: name.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    #[test]
    fn test_plain_template() {
        assert_eq!(
            parse_template("{{suffix|en|parse|er}}"),
            Some(template("suffix", &["en", "parse", "er"]))
        );
    }

    #[test]
    fn test_template_without_arguments() {
        assert_eq!(parse_template("{{ wikipedia }}"), Some(template("wikipedia", &[])));
    }

    #[test]
    fn test_empty_argument() {
        assert_eq!(parse_template("{{x||y}}"), Some(template("x", &["", "y"])));
    }

    #[test]
    fn test_links_render_to_label() {
        assert_eq!(
            parse_template("{{gloss|a [[parse|parsing]] [[program]]}}"),
            Some(template("gloss", &["a parsing program"]))
        );
    }

    #[test]
    fn test_nested_template() {
        assert_eq!(
            parse_template("{{q|{{lb|en|computing}}}}"),
            Some(template("q", &["{{lb|en|computing}}"]))
        );
    }

    #[test]
    fn test_rejects_trailing_text_and_unclosed() {
        assert_eq!(parse_template("{{a|b}} tail"), None);
        assert_eq!(parse_template("{{a|b"), None);
        assert_eq!(parse_template("{{}}"), None);
    }

    #[test]
    fn test_value_shape() {
        let tokens = tokenize("{{a|[[b]]}}");
        let value = TEMPLATE_PARSER.parse(&tokens).unwrap();
        assert_eq!(
            value.to_string(),
            r#"template("a", field(link("b")))"#
        );
    }

    #[test]
    fn test_to_markup() {
        assert_eq!(template("IPA", &["en", "/x/"]).to_markup(), "{{IPA|en|/x/}}");
    }
}
