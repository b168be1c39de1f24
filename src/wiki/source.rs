//! Article sources
//!
//! Retrieving article markup is somebody else's job: the tokenizer and the parser only ever
//! see text. This module defines the seam a retriever plugs into, and an in-memory source
//! for tests and for callers that already hold the markup.

use std::collections::HashMap;
use std::fmt;

/// Errors a source can report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// No article with this title.
    NotFound(String),
    /// The source could not be reached or answered with something unusable.
    Unavailable(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::NotFound(title) => write!(f, "Article not found: {}", title),
            FetchError::Unavailable(msg) => write!(f, "Source unavailable: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

/// Anything that can hand over the raw markup of an article given its title.
pub trait ArticleSource {
    fn fetch(&self, title: &str) -> Result<String, FetchError>;
}

/// A source backed by a map of title to markup.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    articles: HashMap<String, String>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_article(mut self, title: impl Into<String>, markup: impl Into<String>) -> Self {
        self.insert(title, markup);
        self
    }

    pub fn insert(&mut self, title: impl Into<String>, markup: impl Into<String>) {
        self.articles.insert(title.into(), markup.into());
    }
}

impl ArticleSource for InMemorySource {
    fn fetch(&self, title: &str) -> Result<String, FetchError> {
        self.articles
            .get(title)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(title.to_string()))
    }
}
