//! Product management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use warehouse_client::domain::product::{NewProduct, Product, SuggestionField};
use warehouse_client::infrastructure::api::{ApiClient, ProductService};

/// Arguments for product commands
#[derive(Debug, Args)]
pub struct ProductArgs {
    /// Product subcommand
    #[command(subcommand)]
    pub command: ProductCommand,
}

/// Product subcommands
#[derive(Debug, Subcommand)]
pub enum ProductCommand {
    /// List all products
    List,
    /// Show a product by id
    Get {
        /// Product id
        id: i64,
    },
    /// Add a new product
    Add {
        /// Product code
        #[arg(long)]
        code: String,
        /// Product name
        #[arg(long)]
        name: String,
        /// Material type
        #[arg(long)]
        material_type: String,
        /// Unit of measure
        #[arg(long)]
        unit: String,
        /// Quantity on hand
        #[arg(long)]
        quantity: f64,
        /// Batch number
        #[arg(long)]
        batch_no: Option<String>,
        /// Goods received note number
        #[arg(long)]
        grn_no: Option<String>,
        /// Sales invoice number
        #[arg(long)]
        sales_invoice_no: Option<String>,
        /// Source
        #[arg(long)]
        source: Option<String>,
    },
    /// Delete a product by id
    Delete {
        /// Product id
        id: i64,
    },
    /// Free-text search
    Search {
        /// Search term
        term: String,
    },
    /// Filter by material type
    Filter {
        /// Material type
        material_type: String,
    },
    /// Autocomplete suggestions for a field
    Suggest {
        /// Field to complete
        #[arg(value_enum)]
        field: SuggestionField,
        /// Partial input
        term: String,
    },
    /// Exact-match lookups
    Lookup {
        #[command(subcommand)]
        by: LookupCommand,
    },
}

/// Lookup subcommands
#[derive(Debug, Subcommand)]
pub enum LookupCommand {
    /// Look up a product by exact name
    ByName {
        /// Product name
        name: String,
    },
    /// Look up a product by exact code
    ByCode {
        /// Product code
        code: String,
    },
}

/// Product display row for table output
#[derive(Debug, Serialize, Tabled)]
struct ProductRow {
    /// Product ID
    id: i64,
    /// Product code
    code: String,
    /// Product name
    name: String,
    /// Material type
    material_type: String,
    /// Unit
    unit: String,
    /// Quantity
    quantity: f64,
    /// Batch number
    batch_no: String,
}

impl From<&Product> for ProductRow {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id,
            code: p.product_code.clone(),
            name: p.product_name.clone(),
            material_type: p.material_type.clone(),
            unit: p.unit.clone(),
            quantity: p.quantity,
            batch_no: p.batch_no.clone().unwrap_or_default(),
        }
    }
}

/// Execute product commands
pub async fn execute(
    args: &ProductArgs,
    api: ApiClient,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let products = ProductService::new(api);

    match &args.command {
        ProductCommand::List => {
            let items = products.get_all_products().await?;
            print_products(&items, format);
        }
        ProductCommand::Get { id } => {
            let product = products.get_product_by_id(*id).await?;
            output::print_item(&product, format);
        }
        ProductCommand::Add {
            code,
            name,
            material_type,
            unit,
            quantity,
            batch_no,
            grn_no,
            sales_invoice_no,
            source,
        } => {
            let created = products
                .add_product(&NewProduct {
                    product_code: code.clone(),
                    product_name: name.clone(),
                    material_type: material_type.clone(),
                    unit: unit.clone(),
                    quantity: *quantity,
                    batch_no: batch_no.clone(),
                    grn_no: grn_no.clone(),
                    sales_invoice_no: sales_invoice_no.clone(),
                    source: source.clone(),
                })
                .await?;
            output::print_success(&format!("Product {} created", created.id));
        }
        ProductCommand::Delete { id } => {
            products.delete_product(*id).await?;
            output::print_success(&format!("Product {} deleted", id));
        }
        ProductCommand::Search { term } => {
            let items = products.search_products(term).await?;
            print_products(&items, format);
        }
        ProductCommand::Filter { material_type } => {
            let items = products.filter_by_material_type(material_type).await?;
            print_products(&items, format);
        }
        ProductCommand::Suggest { field, term } => {
            let values = products.suggestions(*field, term).await?;
            output::print_values(&values, format);
        }
        ProductCommand::Lookup { by } => {
            let product = match by {
                LookupCommand::ByName { name } => products.lookup_by_name(name).await?,
                LookupCommand::ByCode { code } => products.lookup_by_code(code).await?,
            };
            output::print_item(&product, format);
        }
    }

    Ok(())
}

fn print_products(items: &[Product], format: OutputFormat) {
    let rows: Vec<ProductRow> = items.iter().map(ProductRow::from).collect();
    output::print_list(&rows, format);
}
