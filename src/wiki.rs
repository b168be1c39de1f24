//! Main module for wikiparse library functionality

pub mod config;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod source;
pub mod testing;
pub mod token;
