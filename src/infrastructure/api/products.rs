use crate::domain::product::{NewProduct, Product, SuggestionField};
use crate::error::ApiResult;
use crate::infrastructure::api::ApiClient;
use urlencoding::encode;

/// Request builders for the `/products` endpoint family.
///
/// Each operation maps primitive inputs onto a fixed method and path
/// template with percent-encoded parameters, then hands the request to
/// [`ApiClient`]. Same inputs always produce the same request shape; there
/// is no caching, no retry and no deduplication. Create and delete are not
/// idempotent and carry no safeguard.
#[derive(Debug, Clone)]
pub struct ProductService {
    api: ApiClient,
}

fn product_path(id: i64) -> String {
    format!("/products/{}", id)
}

fn search_path(term: &str) -> String {
    format!("/products/search?q={}", encode(term))
}

fn filter_path(material_type: &str) -> String {
    format!("/products/filter?materialType={}", encode(material_type))
}

fn autocomplete_path(field: SuggestionField, term: &str) -> String {
    format!(
        "/products/autocomplete/{}?term={}",
        field.as_path_segment(),
        encode(term)
    )
}

fn lookup_by_name_path(name: &str) -> String {
    format!("/products/lookup/by-name?name={}", encode(name))
}

fn lookup_by_code_path(code: &str) -> String {
    format!("/products/lookup/by-code?code={}", encode(code))
}

impl ProductService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn get_all_products(&self) -> ApiResult<Vec<Product>> {
        self.api.get_json("/products").await
    }

    pub async fn get_product_by_id(&self, id: i64) -> ApiResult<Product> {
        self.api.get_json(&product_path(id)).await
    }

    pub async fn add_product(&self, product: &NewProduct) -> ApiResult<Product> {
        self.api.post_json("/products", product).await
    }

    pub async fn delete_product(&self, id: i64) -> ApiResult<()> {
        self.api.delete(&product_path(id)).await
    }

    /// Free-text search across product records
    pub async fn search_products(&self, term: &str) -> ApiResult<Vec<Product>> {
        self.api.get_json(&search_path(term)).await
    }

    pub async fn filter_by_material_type(&self, material_type: &str) -> ApiResult<Vec<Product>> {
        self.api.get_json(&filter_path(material_type)).await
    }

    /// Candidate values matching a partial input, keyed by field
    pub async fn suggestions(&self, field: SuggestionField, term: &str) -> ApiResult<Vec<String>> {
        self.api.get_json(&autocomplete_path(field, term)).await
    }

    pub async fn lookup_by_name(&self, name: &str) -> ApiResult<Product> {
        self.api.get_json(&lookup_by_name_path(name)).await
    }

    pub async fn lookup_by_code(&self, code: &str) -> ApiResult<Product> {
        self.api.get_json(&lookup_by_code_path(code)).await
    }
}
