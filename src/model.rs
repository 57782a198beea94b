//! Domain entities flowing between pipeline stages.
//!
//! All of these are plain values: built once by the stage that owns them and
//! never mutated afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The single product the pipeline writes pages for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub concentration: String,
    pub skin_types: Vec<String>,
    pub key_ingredients: Vec<String>,
    pub benefits: Vec<String>,
    pub how_to_use: String,
    pub side_effects: String,
    /// Currency-prefixed numeric string, e.g. "₹699".
    pub price: String,
}

/// Fixed set of question categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionCategory {
    Informational,
    Usage,
    Safety,
    Purchase,
    Comparison,
}

impl QuestionCategory {
    pub const ALL: [QuestionCategory; 5] = [
        QuestionCategory::Informational,
        QuestionCategory::Usage,
        QuestionCategory::Safety,
        QuestionCategory::Purchase,
        QuestionCategory::Comparison,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            QuestionCategory::Informational => "informational",
            QuestionCategory::Usage => "usage",
            QuestionCategory::Safety => "safety",
            QuestionCategory::Purchase => "purchase",
            QuestionCategory::Comparison => "comparison",
        }
    }
}

impl fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub category: QuestionCategory,
}

/// A matched question/answer pair; the category is inherited from the
/// source [`Question`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
    pub category: QuestionCategory,
}

/// The synthetic competitor shown on the comparison page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonProduct {
    pub name: String,
    pub key_ingredients: Vec<String>,
    pub benefits: Vec<String>,
    pub price: String,
}

/// Fields shared by anything that can sit on either side of a comparison.
pub trait Comparable {
    fn name(&self) -> &str;
    fn key_ingredients(&self) -> &[String];
    fn benefits(&self) -> &[String];
    fn price(&self) -> &str;
}

impl Comparable for Product {
    fn name(&self) -> &str {
        &self.name
    }
    fn key_ingredients(&self) -> &[String] {
        &self.key_ingredients
    }
    fn benefits(&self) -> &[String] {
        &self.benefits
    }
    fn price(&self) -> &str {
        &self.price
    }
}

impl Comparable for ComparisonProduct {
    fn name(&self) -> &str {
        &self.name
    }
    fn key_ingredients(&self) -> &[String] {
        &self.key_ingredients
    }
    fn benefits(&self) -> &[String] {
        &self.benefits
    }
    fn price(&self) -> &str {
        &self.price
    }
}
