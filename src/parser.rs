//! Parser – raw keyed record → validated [`Product`].
//!
//! Every key is required. There is no defaulting and no partial product: the
//! first missing or malformed field aborts parsing.

use serde_json::{Map, Value};

use crate::error::{ForgeError, Result};
use crate::model::Product;

pub const PRODUCT_NAME: &str = "product_name";
pub const CONCENTRATION: &str = "concentration";
pub const SKIN_TYPE: &str = "skin_type";
pub const KEY_INGREDIENTS: &str = "key_ingredients";
pub const BENEFITS: &str = "benefits";
pub const HOW_TO_USE: &str = "how_to_use";
pub const SIDE_EFFECTS: &str = "side_effects";
pub const PRICE: &str = "price";

/// Keys a record must carry, in the order they are read.
pub const REQUIRED_FIELDS: [&str; 8] = [
    PRODUCT_NAME,
    CONCENTRATION,
    SKIN_TYPE,
    KEY_INGREDIENTS,
    BENEFITS,
    HOW_TO_USE,
    SIDE_EFFECTS,
    PRICE,
];

/// Parse any JSON value; only objects are accepted.
pub fn parse_record(record: &Value) -> Result<Product> {
    match record {
        Value::Object(map) => parse_product(map),
        _ => Err(ForgeError::InvalidRecord),
    }
}

pub fn parse_product(record: &Map<String, Value>) -> Result<Product> {
    let product = Product {
        name: required_str(record, PRODUCT_NAME)?,
        concentration: required_str(record, CONCENTRATION)?,
        skin_types: required_list(record, SKIN_TYPE)?,
        key_ingredients: required_list(record, KEY_INGREDIENTS)?,
        benefits: required_list(record, BENEFITS)?,
        how_to_use: required_str(record, HOW_TO_USE)?,
        side_effects: required_str(record, SIDE_EFFECTS)?,
        price: required_str(record, PRICE)?,
    };
    log::debug!("Parsed product '{}'", product.name);
    Ok(product)
}

fn required<'a>(record: &'a Map<String, Value>, field: &'static str) -> Result<&'a Value> {
    record.get(field).ok_or(ForgeError::MissingField { field })
}

fn required_str(record: &Map<String, Value>, field: &'static str) -> Result<String> {
    required(record, field)?
        .as_str()
        .map(str::to_string)
        .ok_or(ForgeError::InvalidField {
            field,
            expected: "a string",
        })
}

/// Lists keep the order they were supplied in.
fn required_list(record: &Map<String, Value>, field: &'static str) -> Result<Vec<String>> {
    let invalid = ForgeError::InvalidField {
        field,
        expected: "an array of strings",
    };
    let items = match required(record, field)? {
        Value::Array(items) => items,
        _ => return Err(invalid),
    };
    items
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect::<Option<Vec<_>>>()
        .ok_or(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;
    use serde_json::json;

    fn record() -> Map<String, Value> {
        sample::glowboost_record().as_object().unwrap().clone()
    }

    #[test]
    fn parses_canonical_record() {
        let p = parse_product(&record()).unwrap();
        assert_eq!(p.name, "GlowBoost Vitamin C Serum");
        assert_eq!(p.concentration, "10% Vitamin C");
        assert_eq!(p.skin_types, vec!["oily", "combination"]);
        assert_eq!(p.key_ingredients, vec!["Vitamin C", "Hyaluronic Acid"]);
        assert_eq!(p.benefits, vec!["Brightening", "Hydration"]);
        assert_eq!(p.side_effects, "May cause mild tingling.");
        assert_eq!(p.price, "₹699");
    }

    #[test]
    fn every_missing_key_is_reported_by_name() {
        for field in REQUIRED_FIELDS {
            let mut r = record();
            r.remove(field);
            match parse_product(&r) {
                Err(ForgeError::MissingField { field: missing }) => assert_eq!(missing, field),
                other => panic!("Expected MissingField for '{}', got {:?}", field, other),
            }
        }
    }

    #[test]
    fn list_field_must_be_array() {
        let mut r = record();
        r.insert(BENEFITS.to_string(), json!("Brightening"));
        assert!(matches!(
            parse_product(&r),
            Err(ForgeError::InvalidField { field: BENEFITS, .. })
        ));
    }

    #[test]
    fn list_items_must_be_strings() {
        let mut r = record();
        r.insert(SKIN_TYPE.to_string(), json!(["oily", 3]));
        assert!(matches!(
            parse_product(&r),
            Err(ForgeError::InvalidField { field: SKIN_TYPE, .. })
        ));
    }

    #[test]
    fn text_field_must_be_string() {
        let mut r = record();
        r.insert(PRICE.to_string(), json!(699));
        assert!(matches!(
            parse_product(&r),
            Err(ForgeError::InvalidField { field: PRICE, .. })
        ));
    }

    #[test]
    fn non_object_record_rejected() {
        assert!(matches!(
            parse_record(&json!(["not", "an", "object"])),
            Err(ForgeError::InvalidRecord)
        ));
    }

    #[test]
    fn empty_lists_are_accepted() {
        let mut r = record();
        r.insert(BENEFITS.to_string(), json!([]));
        let p = parse_product(&r).unwrap();
        assert!(p.benefits.is_empty());
    }
}
