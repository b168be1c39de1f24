//! Output formats at the token level
//!
//! - Token streams back to source text (detokenizer)
//! - Token streams to JSON (json)

pub mod detokenizer;
pub mod json;

pub use detokenizer::detokenize;
pub use json::{lexed_to_json, tokens_from_json, tokens_to_json};
