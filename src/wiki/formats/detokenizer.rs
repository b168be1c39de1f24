//! Detokenizer for wiki markup
//!
//! Converts the output of a tokenizer run back into the source text. This is useful for:
//!
//! - Round-trip testing (source -> tokens -> source)
//! - Checking that a custom rule set loses nothing it did not mean to discard
//!
//! Token content alone is not enough: plain-text tokens swallow the bare newlines that were
//! dropped inside them, and structural tokens drop the newline they were anchored on. The
//! discarded pieces recorded by the tokenizer fill those holes back in.

use crate::wiki::lexing::Lexed;
use std::collections::BTreeMap;

/// Rebuild the source text from tokens and discarded pieces.
///
/// Each content character is placed at the next offset of its token's span that is not
/// covered by a discarded piece, then everything is read back in offset order.
pub fn detokenize(lexed: &Lexed) -> String {
    let skips: BTreeMap<usize, usize> = lexed
        .discarded
        .iter()
        .map(|piece| (piece.span.start, piece.span.end))
        .collect();

    let mut pieces: BTreeMap<usize, &str> = lexed
        .discarded
        .iter()
        .map(|piece| (piece.span.start, piece.content.as_str()))
        .collect();

    for token in &lexed.tokens {
        let mut cursor = token.span.start;
        for (index, c) in token.content.char_indices() {
            while let Some(&end) = skips.get(&cursor) {
                cursor = end;
            }
            let width = c.len_utf8();
            pieces.insert(cursor, &token.content[index..index + width]);
            cursor += width;
        }
    }

    pieces.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wiki::lexing::Tokenizer;

    #[test]
    fn test_round_trip() {
        let inputs = vec![
            "",
            "plain",
            "one\ntwo",
            "one\n\ntwo",
            "==Heading==\n",
            "text\n\n==H==\n* a\n# b\n",
            "{{IPA|en|/ˈpɑː(ɹ).zə/}}\n",
            "\n\n\n",
        ];

        for input in inputs {
            let lexed = Tokenizer::new().process_with_discards(input);
            assert_eq!(detokenize(&lexed), input, "Round-trip failed for input: {:?}", input);
        }
    }
}
