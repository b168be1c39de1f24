//! JSON dumps of tokenizer output
//!
//! Tokens serialize with their stable kind names, so dumps can be consumed by tools that
//! know nothing about this crate.

use crate::wiki::lexing::Lexed;
use crate::wiki::token::Token;

pub fn tokens_to_json(tokens: &[Token]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(tokens)
}

/// Tokens and discarded pieces, as `{"tokens": [...], "discarded": [...]}`.
pub fn lexed_to_json(lexed: &Lexed) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(lexed)
}

pub fn tokens_from_json(json: &str) -> Result<Vec<Token>, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wiki::lexing::Tokenizer;
    use serde_json::Value;

    #[test]
    fn test_dump_uses_kind_names() {
        let tokens = Tokenizer::new().process("[[parse]]");
        let json: Value = serde_json::from_str(&tokens_to_json(&tokens).unwrap()).unwrap();
        assert_eq!(json[0]["kind"], "link-open");
        assert_eq!(json[1]["kind"], "plain-text");
        assert_eq!(json[1]["span"]["start"], 2);
        assert_eq!(tokens_from_json(&tokens_to_json(&tokens).unwrap()).unwrap(), tokens);
    }

    #[test]
    fn test_lexed_dump_has_discards() {
        let lexed = Tokenizer::new().process_with_discards("a\nb");
        let json: Value = serde_json::from_str(&lexed_to_json(&lexed).unwrap()).unwrap();
        assert_eq!(json["tokens"][0]["content"], "ab");
        assert_eq!(json["discarded"][0]["kind"], "ignorable");
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let json = r#"[{"kind":"bold","content":"x","span":{"start":0,"end":1}}]"#;
        assert!(tokens_from_json(json).is_err());
    }
}
