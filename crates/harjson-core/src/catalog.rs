//! Product rows from product-catalog responses.
//!
//! Works on already-extracted records; anything that isn't a recognized
//! catalog payload contributes no rows.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use std::sync::LazyLock;

use crate::error::PipelineError;
use crate::har::ExtractedRecord;
use crate::pipeline::{extract_path, write_json, ExtractOptions};

static PRICE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"~?(\d+)dh~?").expect("valid regex"));
static BRAND_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z0-9]+)").expect("valid regex"));

const SINGLE_COLLECTION_KEY: &str = "xwa_product_catalog_get_single_collection";
const PRODUCT_CATALOG_KEY: &str = "xwa_product_catalog_get_product_catalog";
const GENERAL_CATALOG: &str = "General Catalog";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    pub name: String,
    pub price: String,
    pub description: String,
    pub category: String,
    pub brand: String,
    pub image_url: Option<String>,
    /// URL of the response the product came from.
    pub source: String,
}

/// Extract a capture, then write its product rows to `output`.
pub async fn run_catalog(
    input: &Path,
    output: &Path,
    opts: &ExtractOptions,
) -> Result<usize, PipelineError> {
    let extraction = extract_path(input, opts).await?;
    let products = products_from_records(&extraction.into_records());
    write_json(output, &products, opts.indent).await?;
    tracing::info!(
        "extracted {} products, saved to {}",
        products.len(),
        output.display()
    );
    Ok(products.len())
}

pub fn products_from_records(records: &[ExtractedRecord]) -> Vec<Product> {
    records
        .iter()
        .flat_map(|r| products_from_response(&r.response, &r.url))
        .collect()
}

pub fn products_from_response(response: &Value, source: &str) -> Vec<Product> {
    let data = &response["data"];
    let collection = &data[SINGLE_COLLECTION_KEY];
    let catalog = &data[PRODUCT_CATALOG_KEY];

    let (category, products) = if is_present(collection) {
        let collection = &collection["collection"];
        let category = collection["name"].as_str().unwrap_or("No Category");
        (category, &collection["products"])
    } else if is_present(catalog) {
        (GENERAL_CATALOG, &catalog["product_catalog"]["products"])
    } else {
        return Vec::new();
    };

    let Some(products) = products.as_array() else {
        return Vec::new();
    };
    products
        .iter()
        .map(|p| product_row(p, category, source))
        .collect()
}

/// Missing, null, and empty objects all count as absent.
fn is_present(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Object(m) => !m.is_empty(),
        _ => true,
    }
}

fn product_row(product: &Value, category: &str, source: &str) -> Product {
    let name = str_or(&product["name"], "No Name");
    let description = &product["description"];
    // A missing key prices like an empty description; a non-string value doesn't.
    let price = match product.get("description") {
        Some(v) => extract_price(v),
        None => extract_price(&Value::String(String::new())),
    };
    Product {
        sku: scalar_or(&product["id"], "No SKU"),
        brand: extract_brand(&name),
        price,
        description: str_or(description, "No Description"),
        category: category.to_string(),
        image_url: first_image_url(product),
        name,
        source: source.to_string(),
    }
}

/// First `<digits>dh` amount, optionally wrapped in `~`.
pub fn extract_price(description: &Value) -> String {
    let Some(text) = description.as_str() else {
        return "No description".to_string();
    };
    PRICE_REGEX
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| "No price found".to_string())
}

/// Leading run of uppercase letters and digits in the product name.
pub fn extract_brand(name: &str) -> String {
    BRAND_REGEX
        .captures(name.trim())
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

fn first_image_url(product: &Value) -> Option<String> {
    product["media"]["images"]
        .as_array()?
        .first()?
        .get("original_image_url")?
        .as_str()
        .filter(|s| !s.is_empty())
        .map(String::from)
}

fn str_or(v: &Value, default: &str) -> String {
    v.as_str().unwrap_or(default).to_string()
}

fn scalar_or(v: &Value, default: &str) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn price_patterns() {
        assert_eq!(extract_price(&json!("Nice shoes ~250dh~ only")), "250");
        assert_eq!(extract_price(&json!("Price 99dh")), "99");
        assert_eq!(extract_price(&json!("call us")), "No price found");
        assert_eq!(extract_price(&json!(12)), "No description");
        assert_eq!(extract_price(&Value::Null), "No description");
    }

    #[test]
    fn brand_patterns() {
        assert_eq!(extract_brand("  NIKE Air Max"), "NIKE");
        assert_eq!(extract_brand("A1 bag"), "A1");
        assert_eq!(extract_brand("lowercase brand"), "Unknown");
        assert_eq!(extract_brand(""), "Unknown");
    }

    #[test]
    fn single_collection_payload() {
        let response = json!({"data": {"xwa_product_catalog_get_single_collection": {"collection": {
            "name": "Shoes",
            "products": [{
                "id": "123",
                "name": "ADIDAS Run",
                "description": "Light ~300dh~",
                "media": {"images": [{"original_image_url": "https://cdn.test/i/1.jpg"}]}
            }]
        }}}});
        let rows = products_from_response(&response, "https://w.test/graphql");
        assert_eq!(
            rows,
            vec![Product {
                sku: "123".into(),
                name: "ADIDAS Run".into(),
                price: "300".into(),
                description: "Light ~300dh~".into(),
                category: "Shoes".into(),
                brand: "ADIDAS".into(),
                image_url: Some("https://cdn.test/i/1.jpg".into()),
                source: "https://w.test/graphql".into(),
            }]
        );
    }

    #[test]
    fn product_catalog_payload_with_defaults() {
        let response = json!({"data": {"xwa_product_catalog_get_product_catalog": {"product_catalog": {
            "products": [{"media": {"images": []}}]
        }}}});
        let rows = products_from_response(&response, "u");
        assert_eq!(rows.len(), 1);
        let p = &rows[0];
        assert_eq!(p.sku, "No SKU");
        assert_eq!(p.name, "No Name");
        assert_eq!(p.description, "No Description");
        assert_eq!(p.price, "No price found");
        assert_eq!(p.category, "General Catalog");
        // The placeholder name itself starts with an uppercase letter.
        assert_eq!(p.brand, "N");
        assert!(p.image_url.is_none());
    }

    #[test]
    fn missing_and_non_string_description_price_differently() {
        let response = json!({"data": {"xwa_product_catalog_get_product_catalog": {"product_catalog": {
            "products": [
                {"id": "a", "name": "KIA Mat"},
                {"id": "b", "name": "KIA Mat", "description": null},
                {"id": "c", "name": "KIA Mat", "description": 7}
            ]
        }}}});
        let prices: Vec<String> = products_from_response(&response, "u")
            .into_iter()
            .map(|p| p.price)
            .collect();
        assert_eq!(prices, vec!["No price found", "No description", "No description"]);
    }

    #[test]
    fn unrelated_responses_yield_nothing() {
        assert!(products_from_response(&json!({}), "u").is_empty());
        assert!(products_from_response(&json!([1, 2]), "u").is_empty());
        assert!(products_from_response(&json!({"data": {"xwa_product_catalog_get_single_collection": {}}}), "u").is_empty());
    }

    #[test]
    fn records_are_flattened_in_order() {
        let records = vec![
            ExtractedRecord {
                url: "one".into(),
                response: json!({"data": {"xwa_product_catalog_get_product_catalog": {"product_catalog": {
                    "products": [{"id": 1}, {"id": 2}]
                }}}}),
            },
            ExtractedRecord {
                url: "skip".into(),
                response: json!({}),
            },
            ExtractedRecord {
                url: "two".into(),
                response: json!({"data": {"xwa_product_catalog_get_product_catalog": {"product_catalog": {
                    "products": [{"id": "x"}]
                }}}}),
            },
        ];
        let skus: Vec<(String, String)> = products_from_records(&records)
            .into_iter()
            .map(|p| (p.source, p.sku))
            .collect();
        assert_eq!(
            skus,
            vec![
                ("one".into(), "1".into()),
                ("one".into(), "2".into()),
                ("two".into(), "x".into()),
            ]
        );
    }
}
