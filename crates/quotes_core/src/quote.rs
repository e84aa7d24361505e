use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A quote and the category it is filed under.
///
/// There is no separate identifier: two quotes are the same quote when their
/// `(text, category)` pair matches exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub category: String,
}

/// Identity used by merge and dedupe decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuoteKey<'a> {
    pub text: &'a str,
    pub category: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter both quote text and category.")]
    MissingField,
}

impl Quote {
    /// Builds a quote from raw user input, trimming both fields.
    pub fn new(text: &str, category: &str) -> Result<Self, ValidationError> {
        let text = text.trim();
        let category = category.trim();
        if text.is_empty() || category.is_empty() {
            return Err(ValidationError::MissingField);
        }
        Ok(Self {
            text: text.to_string(),
            category: category.to_string(),
        })
    }

    pub fn key(&self) -> QuoteKey<'_> {
        QuoteKey {
            text: &self.text,
            category: &self.category,
        }
    }

    /// Whether both fields are non-empty after trimming.
    pub fn is_valid(&self) -> bool {
        !self.text.trim().is_empty() && !self.category.trim().is_empty()
    }
}

/// Seed list used when nothing (or nothing readable) has been persisted.
pub fn default_quotes() -> Vec<Quote> {
    [
        (
            "The only limit to our realization of tomorrow is our doubts of today.",
            "Motivation",
        ),
        (
            "In the middle of every difficulty lies opportunity.",
            "Inspiration",
        ),
        (
            "Life is what happens when you're busy making other plans.",
            "Life",
        ),
    ]
    .into_iter()
    .map(|(text, category)| Quote {
        text: text.to_string(),
        category: category.to_string(),
    })
    .collect()
}
