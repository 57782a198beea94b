//! Sample product records for the binary and for tests.
//!
//! Records are plain JSON objects keyed the way an upstream data source
//! supplies them; [`crate::parser`] turns them into a [`crate::model::Product`].

use serde_json::{json, Value};

/// The canonical GlowBoost record the `forge` binary renders.
pub fn glowboost_record() -> Value {
    json!({
        "product_name": "GlowBoost Vitamin C Serum",
        "concentration": "10% Vitamin C",
        "skin_type": ["oily", "combination"],
        "key_ingredients": ["Vitamin C", "Hyaluronic Acid"],
        "benefits": ["Brightening", "Hydration"],
        "how_to_use": "Apply 2-3 drops in the morning before sunscreen.",
        "side_effects": "May cause mild tingling.",
        "price": "₹699"
    })
}

/// A record lacking `price`, for exercising the missing-field path.
pub fn incomplete_record() -> Value {
    let mut record = glowboost_record();
    if let Some(map) = record.as_object_mut() {
        map.remove("price");
    }
    record
}
