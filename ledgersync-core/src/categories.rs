//! Keyword-driven category inference.
//!
//! A [`CategoryRules`] table is an ordered list of buckets. The first bucket
//! with a keyword contained in the description (case-insensitive) wins; no
//! match falls through to the fallback label.

use serde::{Deserialize, Serialize};

pub const DEFAULT_FALLBACK: &str = "Other Expenses";

/// Built-in buckets in priority order.
const DEFAULT_BUCKETS: &[(&str, &[&str])] = &[
    (
        "Restaurant",
        &[
            "mcdonald",
            "popeyes",
            "ubereats",
            "steve's",
            "doordash",
            "tim hortons",
            "sushi",
            "hee rae deung",
            "fantuan",
            "breka",
            "big way hot pot",
            "ramen",
        ],
    ),
    (
        "Groceries",
        &[
            "costco",
            "save on foods",
            "urban fare",
            "h-mart",
            "oddbunch",
            "chit chat",
            "wal-mart",
            "no frills",
            "hellofresh",
            "chefs plate",
        ],
    ),
    ("Transportation", &["impark", "trip", "taxi", "uberone", "compass"]),
    ("Fuel", &["super save", "esso", "petro", "shell", "husky"]),
    ("Kido", &["oldnavy", "carters"]),
];

/// One category label and the substrings that select it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryBucket {
    pub label: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl CategoryBucket {
    pub fn new<I, S>(label: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    /// `lower_desc` must already be lowercased.
    fn matches(&self, lower_desc: &str) -> bool {
        self.keywords.iter().any(|kw| {
            let kw = kw.trim().to_lowercase();
            !kw.is_empty() && lower_desc.contains(&kw)
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CategoryRules {
    pub fallback: String,
    pub buckets: Vec<CategoryBucket>,
}

impl Default for CategoryRules {
    fn default() -> Self {
        Self {
            fallback: DEFAULT_FALLBACK.to_string(),
            buckets: DEFAULT_BUCKETS
                .iter()
                .map(|(label, keywords)| CategoryBucket::new(*label, keywords.iter().copied()))
                .collect(),
        }
    }
}

impl CategoryRules {
    pub fn new(buckets: Vec<CategoryBucket>, fallback: impl Into<String>) -> Self {
        Self {
            fallback: fallback.into(),
            buckets,
        }
    }

    /// Label for a transaction description.
    pub fn categorize(&self, description: &str) -> &str {
        let desc = description.to_lowercase();
        self.buckets
            .iter()
            .find(|b| b.matches(&desc))
            .map(|b| b.label.as_str())
            .unwrap_or(self.fallback.as_str())
    }

    /// Labels in priority order, fallback last.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.buckets
            .iter()
            .map(|b| b.label.as_str())
            .chain(std::iter::once(self.fallback.as_str()))
    }
}
