//! Page documents – the only artifact the pipeline persists.
//!
//! Every page shares the envelope `{"page_type": ..., "payload": {...}}` but
//! each kind carries its own payload shape. Field order in the structs below
//! is the key order of the written JSON.

use serde::{Deserialize, Serialize};

use crate::blocks::{
    BenefitComparison, IngredientComparison, IngredientsBlock, PricingBlock, PricingComparison,
};
use crate::model::{Comparable, FaqItem};

/// A rendered page, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "page_type", content = "payload", rename_all = "snake_case")]
pub enum Page {
    Faq(FaqPayload),
    ProductPage(ProductPayload),
    ComparisonPage(ComparisonPayload),
}

/// The three page kinds, without their payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Faq,
    ProductPage,
    ComparisonPage,
}

impl PageKind {
    pub const ALL: [PageKind; 3] = [PageKind::Faq, PageKind::ProductPage, PageKind::ComparisonPage];

    /// Tag written as `page_type`, also used as the page name in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            PageKind::Faq => "faq",
            PageKind::ProductPage => "product_page",
            PageKind::ComparisonPage => "comparison_page",
        }
    }

    /// Fixed file name inside the output directory.
    pub fn file_name(self) -> &'static str {
        match self {
            PageKind::Faq => "faq.json",
            PageKind::ProductPage => "product_page.json",
            PageKind::ComparisonPage => "comparison_page.json",
        }
    }
}

impl Page {
    pub fn kind(&self) -> PageKind {
        match self {
            Page::Faq(_) => PageKind::Faq,
            Page::ProductPage(_) => PageKind::ProductPage,
            Page::ComparisonPage(_) => PageKind::ComparisonPage,
        }
    }

    /// Serialise to pretty JSON (2-space indent, non-ASCII kept literal).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialise from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ---------------------------------------------------------------------------
// FAQ page
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqPayload {
    pub title: String,
    pub product_name: String,
    pub faqs: Vec<FaqItem>,
}

// ---------------------------------------------------------------------------
// Product page
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPayload {
    pub title: String,
    pub product_name: String,
    pub summary: String,
    pub sections: ProductSections,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSections {
    pub ingredients: IngredientsBlock,
    pub benefits: Vec<String>,
    pub usage: UsageSection,
    pub safety: SafetySection,
    pub pricing: PricingBlock,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageSection {
    pub how_to_use: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetySection {
    pub notes: String,
}

// ---------------------------------------------------------------------------
// Comparison page
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonPayload {
    pub title: String,
    pub products: ComparedProducts,
    pub comparison: ComparisonSections,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparedProducts {
    pub glowboost: ProductCard,
    pub product_b: ProductCard,
}

/// Side-by-side summary of one compared product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCard {
    pub name: String,
    pub key_ingredients: Vec<String>,
    pub benefits: Vec<String>,
    pub price: String,
}

impl ProductCard {
    pub fn from_comparable<P: Comparable>(product: &P) -> Self {
        Self {
            name: product.name().to_string(),
            key_ingredients: product.key_ingredients().to_vec(),
            benefits: product.benefits().to_vec(),
            price: product.price().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSections {
    pub ingredients: IngredientComparison,
    pub benefits: BenefitComparison,
    pub pricing: PricingComparison,
}
