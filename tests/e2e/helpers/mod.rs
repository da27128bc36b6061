use httpmock::MockServer;
use serde_json::{json, Value};
use warehouse_client::infrastructure::api::{ApiClient, HealthService, ProductService};

pub fn api_client(server: &MockServer) -> ApiClient {
    ApiClient::new(server.base_url()).expect("client should build")
}

pub fn product_service(server: &MockServer) -> ProductService {
    ProductService::new(api_client(server))
}

pub fn health_service(server: &MockServer) -> HealthService {
    HealthService::new(api_client(server))
}

/// A complete product body as the backend serves it
pub fn widget_json(id: i64) -> Value {
    json!({
        "id": id,
        "productCode": "PC-001",
        "productName": "Widget",
        "materialType": "steel",
        "unit": "kg",
        "quantity": 12.5,
        "batchNo": "B-7",
        "grnNo": "GRN-42",
        "salesInvoiceNo": null,
        "source": "import",
        "createdAt": "2024-03-01T10:00:00Z"
    })
}
