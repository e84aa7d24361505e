use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Quote;

/// Sentinel stored for the unrestricted filter.
pub const ALL_CATEGORIES: &str = "all";

/// Category selection, persisted as a plain string (`"all"` or a category).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Category(trimmed.to_string())
        }
    }

    pub fn matches(&self, quote: &Quote) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => quote.category == *category,
        }
    }
}

impl From<String> for Filter {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Filter> for String {
    fn from(value: Filter) -> Self {
        match value {
            Filter::All => ALL_CATEGORIES.to_string(),
            Filter::Category(category) => category,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => write!(f, "{ALL_CATEGORIES}"),
            Filter::Category(category) => write!(f, "{category}"),
        }
    }
}

/// What the display area currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Display {
    /// Nothing picked yet.
    #[default]
    Blank,
    Quote(Quote),
    /// The active filter matched no quotes.
    Empty,
}

/// Distinct categories in first-seen order.
pub fn categories(quotes: &[Quote]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut ordered = Vec::new();
    for quote in quotes {
        if seen.insert(quote.category.as_str()) {
            ordered.push(quote.category.clone());
        }
    }
    ordered
}

pub fn filtered<'a>(quotes: &'a [Quote], filter: &Filter) -> Vec<&'a Quote> {
    quotes.iter().filter(|quote| filter.matches(quote)).collect()
}

/// Picks one candidate using a caller-supplied uniformly random `roll`.
///
/// The roll is reduced onto `[0, len)` by multiply-shift, so every index is
/// reachable and the result is never out of range.
pub fn pick_random(candidates: &[&Quote], roll: u64) -> Display {
    if candidates.is_empty() {
        return Display::Empty;
    }
    let index = pick_index(candidates.len(), roll);
    Display::Quote(candidates[index].clone())
}

fn pick_index(len: usize, roll: u64) -> usize {
    ((u128::from(roll) * len as u128) >> 64) as usize
}
