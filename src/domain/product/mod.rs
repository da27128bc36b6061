pub mod model;

pub use model::{Product, SuggestionField};

use serde::{Deserialize, Serialize};

/// Payload for creating a new product
///
/// Field names follow the backend's camelCase JSON convention. No local
/// validation happens here; malformed or empty values are forwarded to the
/// service, which rejects them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub product_code: String,
    pub product_name: String,
    pub material_type: String,
    pub unit: String,
    pub quantity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grn_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_invoice_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}
