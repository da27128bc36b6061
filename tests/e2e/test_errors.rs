use crate::helpers::product_service;
use httpmock::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use warehouse_client::error::GENERIC_ERROR_MESSAGE;

#[tokio::test]
async fn service_message_field_wins() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/products/999");
        then.status(404).json_body(json!({"message": "Not found"}));
    });

    let err = product_service(&server)
        .get_product_by_id(999)
        .await
        .expect_err("404 should fail");

    assert_eq!(err.message, "Not found");
}

#[tokio::test]
async fn failure_without_usable_body_falls_back_to_generic_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/products");
        then.status(500);
    });

    let err = product_service(&server)
        .get_all_products()
        .await
        .expect_err("500 should fail");

    assert_eq!(err.message, GENERIC_ERROR_MESSAGE);
}

#[tokio::test]
async fn non_json_error_body_falls_back_to_generic_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/products");
        then.status(502).body("Bad Gateway");
    });

    let err = product_service(&server)
        .get_all_products()
        .await
        .expect_err("502 should fail");

    assert_eq!(err.message, GENERIC_ERROR_MESSAGE);
}

#[tokio::test]
async fn error_body_with_empty_message_falls_back_to_generic_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/products");
        then.status(400).json_body(json!({"message": ""}));
    });

    let err = product_service(&server)
        .get_all_products()
        .await
        .expect_err("400 should fail");

    assert_eq!(err.message, GENERIC_ERROR_MESSAGE);
}

#[tokio::test]
async fn transport_failure_surfaces_the_transport_message() {
    // Bind then drop a listener so the port is known to refuse connections.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr").port()
    };

    let service = warehouse_client::infrastructure::api::ProductService::new(
        warehouse_client::infrastructure::api::ApiClient::new(format!("http://127.0.0.1:{}", port))
            .expect("client should build"),
    );

    let err = service
        .get_all_products()
        .await
        .expect_err("connection should fail");

    // The message comes from the transport, not the generic fallback.
    assert!(!err.message.is_empty());
    assert_ne!(err.message, GENERIC_ERROR_MESSAGE);
}

#[tokio::test]
async fn delete_failure_is_normalized_like_any_other() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(DELETE).path("/products/1");
        then.status(404).json_body(json!({"message": "Product not found"}));
    });

    let err = product_service(&server)
        .delete_product(1)
        .await
        .expect_err("delete of a missing product should fail");

    assert_eq!(err.message, "Product not found");
}
