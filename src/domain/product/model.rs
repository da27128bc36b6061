use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A product record as served by the warehouse API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub product_code: String,
    pub product_name: String,
    pub material_type: String,
    pub unit: String,
    pub quantity: f64,
    pub batch_no: Option<String>,
    pub grn_no: Option<String>,
    pub sales_invoice_no: Option<String>,
    pub source: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Fields the autocomplete endpoint family is keyed by
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SuggestionField {
    ProductCode,
    ProductName,
    Unit,
    BatchNo,
    GrnNo,
    SalesInvoiceNo,
    Source,
}

impl SuggestionField {
    /// Path segment used in `GET /products/autocomplete/{field}`
    pub fn as_path_segment(&self) -> &'static str {
        match self {
            Self::ProductCode => "product-code",
            Self::ProductName => "product-name",
            Self::Unit => "unit",
            Self::BatchNo => "batch-no",
            Self::GrnNo => "grn-no",
            Self::SalesInvoiceNo => "sales-invoice-no",
            Self::Source => "source",
        }
    }
}
