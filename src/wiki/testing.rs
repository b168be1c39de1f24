//! Testing utilities
//!
//!     Helpers shared by unit tests and the integration tests under `tests/`.
//!
//!     Wiki markup is full of small traps (a newline before a heading is significant, a
//!     single newline inside a paragraph is not), and hand-typed strings drift from what real
//!     articles look like. Document-level tests should therefore load markup through
//!     [samples](samples), which serves the curated files from the `samples/` directory,
//!     and keep ad-hoc strings for tests that target one rule at a time.
//!
//!     Token sequences are compared either exactly, built with [factories](factories), or
//!     rendered one token per line with [render_tokens](factories::render_tokens) for
//!     snapshot tests.

pub mod factories;
pub mod samples;

pub use factories::{mk_token, mk_tokens, render_tokens};
pub use samples::Sample;
