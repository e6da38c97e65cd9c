//! Sequential bulk product upload.
//!
//! Takes one JSON file describing an array of products, each optionally
//! naming image files, plus the image bytes keyed by file name. Products
//! are created one request at a time with a pause between requests so the
//! batch never overwhelms the backend; one product failing never stops the
//! rest. The summary reports every item either way.

use std::collections::HashMap;
use std::time::Duration;

use serde_json::Value;

use marketdesk_api::{Client, ImageFile, ProductPayload};

use crate::error::MarketdeskError;

/// Pause between consecutive create requests.
const UPLOAD_PAUSE: Duration = Duration::from_millis(300);

/// One product parsed out of the bulk JSON file: the display title, the
/// image file names it references, and every other field passed through
/// verbatim.
#[derive(Debug, Clone)]
pub struct ProductDescriptor {
    pub title: String,
    pub image_names: Vec<String>,
    fields: Vec<(String, String)>,
}

/// Parses the bulk products file. Fails fast on invalid JSON or a non-array
/// top level, before any request is made.
pub fn parse_descriptors(raw: &str) -> Result<Vec<ProductDescriptor>, MarketdeskError> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| MarketdeskError::BulkParse(format!("Invalid JSON file: {}", e)))?;
    let items = match value {
        Value::Array(items) => items,
        _ => {
            return Err(MarketdeskError::BulkParse(
                "Products file must contain an array of products".to_string(),
            ))
        }
    };

    let mut descriptors = Vec::with_capacity(items.len());
    for (i, item) in items.into_iter().enumerate() {
        let obj = match item {
            Value::Object(obj) => obj,
            _ => {
                return Err(MarketdeskError::BulkParse(format!(
                    "Product {} must be an object",
                    i + 1
                )))
            }
        };

        let title = obj
            .get("title")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Product {}", i + 1));

        let image_names = obj
            .get("images")
            .and_then(Value::as_array)
            .map(|names| {
                names
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let mut fields = Vec::new();
        for (key, value) in &obj {
            if key == "images" {
                continue;
            }
            if let Some(text) = stringify_field(value) {
                fields.push((key.clone(), text));
            }
        }

        descriptors.push(ProductDescriptor {
            title,
            image_names,
            fields,
        });
    }
    Ok(descriptors)
}

/// Wire form of one descriptor field. Nulls and empty strings are dropped,
/// booleans go out as literal "true"/"false", everything else is
/// stringified.
fn stringify_field(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(if *b { "true" } else { "false" }.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => serde_json::to_string(other).ok(),
    }
}

/// Outcome for one item of the batch, success or failure.
#[derive(Debug, Clone)]
pub struct BulkItemOutcome {
    /// 1-based position in the file.
    pub index: usize,
    pub title: String,
    pub product_id: Option<i64>,
    pub error: Option<String>,
}

/// Result of a whole batch run.
#[derive(Debug, Clone, Default)]
pub struct BulkSummary {
    pub outcomes: Vec<BulkItemOutcome>,
}

impl BulkSummary {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.error.is_none()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn failed_items(&self) -> impl Iterator<Item = &BulkItemOutcome> {
        self.outcomes.iter().filter(|o| o.error.is_some())
    }
}

/// Drives a batch of product creations against the admin add endpoint.
pub struct BulkUploader<'a> {
    client: &'a Client,
    user_id: i64,
    pause: Duration,
}

impl<'a> BulkUploader<'a> {
    /// Uploads will be created under the given seller account.
    pub fn new(client: &'a Client, user_id: i64) -> Self {
        Self {
            client,
            user_id,
            pause: UPLOAD_PAUSE,
        }
    }

    /// Overrides the inter-request pause. Tests use zero.
    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    /// Runs the batch strictly sequentially. `progress` is called before
    /// each item with (current, total, title). Every item is attempted
    /// regardless of earlier failures.
    pub async fn run(
        &self,
        descriptors: Vec<ProductDescriptor>,
        images: &HashMap<String, Vec<u8>>,
        mut progress: impl FnMut(usize, usize, &str),
    ) -> BulkSummary {
        let total = descriptors.len();
        let mut summary = BulkSummary::default();

        for (i, descriptor) in descriptors.into_iter().enumerate() {
            progress(i + 1, total, &descriptor.title);

            let title = descriptor.title.clone();
            let payload = self.payload_for(descriptor, images);
            let outcome = match self.client.create_product(payload).await {
                Ok(envelope) => BulkItemOutcome {
                    index: i + 1,
                    title,
                    product_id: envelope.data.map(|p| p.id),
                    error: None,
                },
                Err(e) => {
                    tracing::warn!("Bulk item {} failed: {}", i + 1, e);
                    BulkItemOutcome {
                        index: i + 1,
                        title,
                        product_id: None,
                        error: Some(e.display_message()),
                    }
                }
            };
            summary.outcomes.push(outcome);

            if i + 1 < total && !self.pause.is_zero() {
                tokio::time::sleep(self.pause).await;
            }
        }
        summary
    }

    fn payload_for(
        &self,
        descriptor: ProductDescriptor,
        images: &HashMap<String, Vec<u8>>,
    ) -> ProductPayload {
        // Image names with no matching selected file are skipped, not
        // treated as errors.
        let attachments = descriptor
            .image_names
            .iter()
            .filter_map(|name| {
                images.get(name).map(|bytes| ImageFile {
                    file_name: name.clone(),
                    bytes: bytes.clone(),
                })
            })
            .collect();

        ProductPayload {
            user_id: Some(self.user_id),
            extra: descriptor.fields,
            images: attachments,
            ..ProductPayload::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_json_before_any_request() {
        let err = parse_descriptors("{not json").unwrap_err();
        assert!(err.to_string().starts_with("Invalid JSON file"));
    }

    #[test]
    fn rejects_non_array_top_level() {
        let err = parse_descriptors("{\"title\": \"one product\"}").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Products file must contain an array of products"
        );
    }

    #[test]
    fn parses_fields_and_image_names() {
        let raw = r#"[
            {"title": "Silk scarf", "price": 120, "is_negotiable": true,
             "note": "", "brand": null, "images": ["scarf.jpg", "scarf-2.jpg"]}
        ]"#;
        let descriptors = parse_descriptors(raw).unwrap();
        assert_eq!(descriptors.len(), 1);

        let d = &descriptors[0];
        assert_eq!(d.title, "Silk scarf");
        assert_eq!(d.image_names, vec!["scarf.jpg", "scarf-2.jpg"]);
        // Empty strings and nulls are dropped; booleans are literal text.
        assert!(d.fields.iter().any(|(k, v)| k == "price" && v == "120"));
        assert!(d
            .fields
            .iter()
            .any(|(k, v)| k == "is_negotiable" && v == "true"));
        assert!(!d.fields.iter().any(|(k, _)| k == "note" || k == "brand"));
    }

    #[test]
    fn untitled_products_get_positional_names() {
        let descriptors = parse_descriptors("[{\"price\": 10}]").unwrap();
        assert_eq!(descriptors[0].title, "Product 1");
    }
}
