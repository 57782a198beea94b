//! Content blocks – pure fragments derived from product data.
//!
//! Each function interpolates known product fields into a fixed template or
//! reshapes them into a small structured block. Nothing here touches I/O or
//! holds state; the renderers compose these into page payloads.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::{Comparable, ComparisonProduct, Product};

/// Currency attached to every pricing block.
pub const CURRENCY: &str = "INR";

const SAFETY_ADVISORY: &str =
    "If irritation persists, consider reducing frequency or discontinuing use.";

// ---------------------------------------------------------------------------
// Single-product blocks
// ---------------------------------------------------------------------------

/// One-sentence summary built only from the product's own fields.
pub fn summary(product: &Product) -> String {
    format!(
        "{} is a {} serum designed for {} skin. It contains {} and helps with {}.",
        product.name,
        product.concentration,
        product.skin_types.join(", "),
        product.key_ingredients.join(", "),
        product.benefits.join(", ").to_lowercase(),
    )
}

pub fn usage(product: &Product) -> String {
    product.how_to_use.clone()
}

pub fn safety(product: &Product) -> String {
    format!("Side effects: {} {}", product.side_effects, SAFETY_ADVISORY)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientsBlock {
    pub key_ingredients: Vec<String>,
    pub concentration: String,
}

pub fn ingredients(product: &Product) -> IngredientsBlock {
    IngredientsBlock {
        key_ingredients: product.key_ingredients.clone(),
        concentration: product.concentration.clone(),
    }
}

pub fn benefits(product: &Product) -> Vec<String> {
    product.benefits.clone()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingBlock {
    pub price: String,
    pub currency: String,
    pub display_price: String,
}

pub fn pricing(product: &Product) -> PricingBlock {
    PricingBlock {
        price: product.price.clone(),
        currency: CURRENCY.to_string(),
        display_price: product.price.clone(),
    }
}

// ---------------------------------------------------------------------------
// Comparison blocks
// ---------------------------------------------------------------------------

/// The fixed fictional competitor. Same value on every call.
pub fn comparison_product() -> ComparisonProduct {
    ComparisonProduct {
        name: "ClearRadiance Brightening Serum".to_string(),
        key_ingredients: vec!["Vitamin C".to_string(), "Niacinamide".to_string()],
        benefits: vec!["Brightening".to_string(), "Helps with uneven tone".to_string()],
        price: "₹849".to_string(),
    }
}

/// Set difference of two lists; each side sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SetComparison {
    pub common: Vec<String>,
    pub only_left: Vec<String>,
    pub only_right: Vec<String>,
}

pub fn compare_sets(left: &[String], right: &[String]) -> SetComparison {
    let left: BTreeSet<&String> = left.iter().collect();
    let right: BTreeSet<&String> = right.iter().collect();

    // BTreeSet iterators already yield in ascending order.
    SetComparison {
        common: left.intersection(&right).map(|s| s.to_string()).collect(),
        only_left: left.difference(&right).map(|s| s.to_string()).collect(),
        only_right: right.difference(&left).map(|s| s.to_string()).collect(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientComparison {
    pub common_ingredients: Vec<String>,
    pub only_in_glowboost: Vec<String>,
    pub only_in_product_b: Vec<String>,
}

pub fn compare_ingredients<A: Comparable, B: Comparable>(a: &A, b: &B) -> IngredientComparison {
    let diff = compare_sets(a.key_ingredients(), b.key_ingredients());
    IngredientComparison {
        common_ingredients: diff.common,
        only_in_glowboost: diff.only_left,
        only_in_product_b: diff.only_right,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitComparison {
    pub common_benefits: Vec<String>,
    pub only_glowboost_benefits: Vec<String>,
    pub only_product_b_benefits: Vec<String>,
}

pub fn compare_benefits<A: Comparable, B: Comparable>(a: &A, b: &B) -> BenefitComparison {
    let diff = compare_sets(a.benefits(), b.benefits());
    BenefitComparison {
        common_benefits: diff.common,
        only_glowboost_benefits: diff.only_left,
        only_product_b_benefits: diff.only_right,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceRelation {
    GlowboostCheaper,
    GlowboostMoreExpensive,
    SamePrice,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingComparison {
    pub glowboost_price: String,
    pub product_b_price: String,
    pub price_relation: PriceRelation,
}

/// Numeric value of a price string: all decimal digits concatenated, so
/// currency symbols and separators are ignored. `0.0` when there are none.
pub fn price_value(price: &str) -> f64 {
    let digits: String = price.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0.0)
}

pub fn compare_pricing<A: Comparable, B: Comparable>(a: &A, b: &B) -> PricingComparison {
    let a_price = price_value(a.price());
    let b_price = price_value(b.price());

    let price_relation = if a_price < b_price {
        PriceRelation::GlowboostCheaper
    } else if a_price > b_price {
        PriceRelation::GlowboostMoreExpensive
    } else {
        PriceRelation::SamePrice
    };

    PricingComparison {
        glowboost_price: a.price().to_string(),
        product_b_price: b.price().to_string(),
        price_relation,
    }
}
