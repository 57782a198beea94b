//! Page renderers – compose content blocks into [`Page`] documents.
//!
//! The three renderers are independent of each other; each takes immutable
//! entities and returns a fresh page.

use crate::blocks;
use crate::error::{ForgeError, Result};
use crate::model::{FaqItem, Product};
use crate::page::*;

/// Minimum number of Q&A pairs an FAQ page must carry.
pub const MIN_FAQ_ITEMS: usize = 5;

/// Render the FAQ page. Fails when fewer than [`MIN_FAQ_ITEMS`] are given.
pub fn render_faq_page(product: &Product, items: &[FaqItem]) -> Result<Page> {
    if items.len() < MIN_FAQ_ITEMS {
        return Err(ForgeError::TooFewFaqItems {
            found: items.len(),
            required: MIN_FAQ_ITEMS,
        });
    }

    Ok(Page::Faq(FaqPayload {
        title: format!("{} – Frequently Asked Questions", product.name),
        product_name: product.name.clone(),
        faqs: items.to_vec(),
    }))
}

pub fn render_product_page(product: &Product) -> Page {
    Page::ProductPage(ProductPayload {
        title: product.name.clone(),
        product_name: product.name.clone(),
        summary: blocks::summary(product),
        sections: ProductSections {
            ingredients: blocks::ingredients(product),
            benefits: blocks::benefits(product),
            usage: UsageSection {
                how_to_use: blocks::usage(product),
            },
            safety: SafetySection {
                notes: blocks::safety(product),
            },
            pricing: blocks::pricing(product),
        },
    })
}

/// Render the comparison page against the fixed competitor from
/// [`blocks::comparison_product`].
pub fn render_comparison_page(product: &Product) -> Page {
    let product_b = blocks::comparison_product();

    Page::ComparisonPage(ComparisonPayload {
        title: format!("{} vs {}", product.name, product_b.name),
        products: ComparedProducts {
            glowboost: ProductCard::from_comparable(product),
            product_b: ProductCard::from_comparable(&product_b),
        },
        comparison: ComparisonSections {
            ingredients: blocks::compare_ingredients(product, &product_b),
            benefits: blocks::compare_benefits(product, &product_b),
            pricing: blocks::compare_pricing(product, &product_b),
        },
    })
}
