//! Whole-grammar parsing tests
//!
//! Small grammars over text exercising each expression node through the full-input parser,
//! an arithmetic grammar with mutual recursion, and token-level grammars fed by the
//! tokenizer.

use rstest::rstest;
use wikiparse::wiki::config::Loader;
use wikiparse::wiki::lexing::tokenize;
use wikiparse::wiki::parsing::{Expr, Grammar, NonTerminal, Parser, Value};
use wikiparse::wiki::testing::Sample;
use wikiparse::wiki::token::TokenKind;

fn t(literal: &str) -> Expr {
    Expr::terminal(literal)
}

fn single_rule(expr: Expr) -> Parser {
    let start = NonTerminal::new("expr");
    let grammar = Grammar::builder().rule(&start, expr).build().unwrap();
    Parser::new(start, grammar).unwrap()
}

fn arithmetic() -> Parser {
    let expr = NonTerminal::new("expr");
    let sum = NonTerminal::new("sum");
    let product = NonTerminal::new("product");
    let power = NonTerminal::new("power");
    let value = NonTerminal::new("value");

    let grammar = Grammar::builder()
        .rule(&expr, &sum)
        .rule(&sum, &product + ((t("+") | t("-")) + &product).many())
        .rule(&product, &power + ((t("*") | t("/")) + &power).many())
        .rule(&power, &value + (t("^") + &value).opt())
        .rule(
            &value,
            Expr::regex("[a-z0-9]+").unwrap() | t("(") + &expr + t(")"),
        )
        .build()
        .unwrap();
    Parser::new(expr, grammar).unwrap()
}

#[rstest]
#[case("aaa", true)]
#[case("aaaa", false)]
#[case("aaab", false)]
#[case("aa", false)]
fn test_terminal(#[case] input: &str, #[case] accepted: bool) {
    assert_eq!(single_rule(t("aaa")).parse(input).is_some(), accepted);
}

#[rstest]
#[case("abcd", true)]
#[case("", false)]
#[case("abcd--", false)]
fn test_terminal_regex(#[case] input: &str, #[case] accepted: bool) {
    let parser = single_rule(Expr::regex("[a-z]+").unwrap());
    assert_eq!(parser.parse(input).is_some(), accepted);
}

#[rstest]
#[case("ab", true)]
#[case("a", false)]
#[case("b", false)]
#[case("aab", false)]
#[case("", false)]
fn test_follow(#[case] input: &str, #[case] accepted: bool) {
    assert_eq!(single_rule(t("a") + t("b")).parse(input).is_some(), accepted);
}

#[rstest]
#[case("ab", false)]
#[case("a", true)]
#[case("b", true)]
#[case("", false)]
fn test_or(#[case] input: &str, #[case] accepted: bool) {
    assert_eq!(single_rule(t("a") | t("b")).parse(input).is_some(), accepted);
}

#[test]
fn test_many() {
    let parser = single_rule((t("a") | t("b")).many());
    assert!(parser.parse("ab").is_some());
    assert!(parser.parse("a").is_some());
    assert!(parser.parse("b").is_some());
    assert_eq!(parser.parse(""), Some(Value::List(vec![])));
    assert_eq!(parser.parse("abc"), None);
}

#[test]
fn test_many_one() {
    let parser = single_rule((t("a") | t("b")).many1());
    assert_eq!(
        parser.parse("ab"),
        Some(Value::List(vec![Value::text("a"), Value::text("b")]))
    );
    assert!(parser.parse("a").is_some());
    assert!(parser.parse("b").is_some());
    assert_eq!(parser.parse(""), None);
}

#[test]
fn test_opt() {
    let parser = single_rule(t("a").opt());
    assert_eq!(parser.parse("ab"), None);
    assert_eq!(parser.parse("a"), Some(Value::text("a")));
    assert_eq!(parser.parse("b"), None);
    assert_eq!(parser.parse(""), Some(Value::Absent));
}

#[rstest]
#[case("a+a", true)]
#[case("(a+aaa)^(c*d/a)", true)]
#[case("(a-a-a-(a*b+(1-1)))+1", true)]
#[case("((()))", false)]
#[case("((((a))", false)]
#[case("(a^a^a)", false)]
fn test_arithmetic_grammar(
    #[case] input: &str,
    #[case] accepted: bool,
    #[values(false, true)] packrat: bool,
) {
    let parser = arithmetic().packrat(packrat);
    assert_eq!(parser.parse(input).is_some(), accepted, "input {:?}", input);
}

#[test]
fn test_packrat_from_config() {
    let config = Loader::new()
        .set_override("parser.packrat", true)
        .unwrap()
        .build()
        .unwrap();
    let parser = arithmetic().with_config(&config.parser);
    assert!(parser.parse("(a+aaa)^(c*d/a)").is_some());
}

fn number(value: &Value) -> i64 {
    value.flatten_text().parse().unwrap()
}

/// Fold `first (op operand)*` left to right.
fn fold(value: Value, apply: fn(&str, i64, i64) -> i64) -> Value {
    let (first, rest) = value.into_pair().unwrap();
    let mut acc = number(&first);
    for step in rest.as_list().unwrap() {
        let (op, operand) = step.clone().into_pair().unwrap();
        acc = apply(&op.flatten_text(), acc, number(&operand));
    }
    Value::text(acc.to_string())
}

#[test]
fn test_transforms_evaluate_arithmetic() {
    let sum = NonTerminal::new("sum");
    let product = NonTerminal::new("product");
    let power = NonTerminal::new("power");
    let value = NonTerminal::new("value");

    let grammar = Grammar::builder()
        .rule(
            &sum,
            (&product + ((t("+") | t("-")) + &product).many()).then(|v| {
                fold(v, |op, a, b| if op == "+" { a + b } else { a - b })
            }),
        )
        .rule(
            &product,
            (&power + ((t("*") | t("/")) + &power).many()).then(|v| {
                fold(v, |op, a, b| if op == "*" { a * b } else { a / b })
            }),
        )
        .rule(
            &power,
            (&value + (t("^") + &value).opt()).then(|v| {
                let (base, exponent) = v.into_pair().unwrap();
                match exponent.into_pair() {
                    Ok((_, exponent)) => {
                        Value::text(number(&base).pow(number(&exponent) as u32).to_string())
                    }
                    Err(_) => base,
                }
            }),
        )
        .rule(
            &value,
            Expr::regex("[0-9]+").unwrap()
                | (t("(") + &sum + t(")")).then(|v| v.unchain(3).swap_remove(1)),
        )
        .build()
        .unwrap();
    let parser = Parser::new(sum, grammar).unwrap();

    assert_eq!(parser.parse("2*3+4^2-(1+1)"), Some(Value::text("20")));
    assert_eq!(parser.parse("(7)"), Some(Value::text("7")));
    assert_eq!(parser.parse("2*"), None);
}

#[test]
fn test_token_grammar_over_sample_opening() {
    let heading = NonTerminal::new("heading");
    let template = NonTerminal::new("template");
    let section = NonTerminal::new("section");

    let grammar = Grammar::builder()
        .rule(
            &heading,
            (Expr::kind(TokenKind::HeadingOpen)
                + Expr::kind(TokenKind::Text)
                + Expr::kind(TokenKind::HeadingClose))
            .then(|v| Value::node("heading", vec![v.unchain(3).swap_remove(1)])),
        )
        .rule(&template, t("{{") + Expr::regex("[a-z]+").unwrap() + t("}}"))
        .rule(&section, &heading + &template)
        .build()
        .unwrap();
    let parser = Parser::new(section, grammar).unwrap();

    let source = Sample::WiktionaryParser.source();
    let opening = &source[..source.find("\n\n").unwrap()];
    let value = parser.parse(&tokenize(opening)).unwrap();
    let (heading, template) = value.into_pair().unwrap();
    assert_eq!(heading.flatten_text(), "English");
    assert_eq!(template.flatten_text(), "{{wikipedia}}");

    assert_eq!(parser.parse(&Sample::WiktionaryParser.tokenize()), None);
}

#[test]
fn test_kind_terminals_never_match_text() {
    let parser = single_rule(Expr::kind(TokenKind::Text));
    assert_eq!(parser.parse("anything"), None);
    assert_eq!(parser.parse(""), None);
}

#[test]
fn test_parsers_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Parser>();
    assert_send_sync::<Grammar>();
    assert_send_sync::<Expr>();

    let parser = arithmetic();
    std::thread::scope(|scope| {
        let handles: Vec<_> = ["a+a", "(a+aaa)^(c*d/a)", "((()))"]
            .into_iter()
            .map(|input| {
                let parser = &parser;
                scope.spawn(move || parser.parse(input).is_some())
            })
            .collect();
        let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results, vec![true, true, false]);
    });
}
