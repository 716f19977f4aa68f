//! End-to-end tests of the catalog REST API over a real socket.

use catalog_sdk::{CatalogClient, Product};
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};

mod common;

fn sdk(server: &common::TestServer) -> CatalogClient {
    CatalogClient::with_client(common::http_client(), &server.url())
}

#[tokio::test]
async fn test_delete_and_recreate_scenario() {
    let server = common::start_server().await;
    let client = sdk(&server);

    let lolito = client.get_product("3").await.unwrap();
    assert_eq!(lolito.title, "Lolito");
    assert_eq!(lolito.price, 7000000.00);
    assert_eq!(lolito.discount.as_deref(), Some("-50%"));

    client.delete_product("3").await.unwrap();
    let err = client.get_product("3").await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(err.to_string(), "catalog returned 404 Not Found: Product not found");

    let again = Product {
        id: "3".into(),
        title: "Lolito II".into(),
        ..Default::default()
    };
    let created = client.create_product(&again).await.unwrap();
    assert_eq!(created, again);

    let dup = Product {
        id: "1".into(),
        ..Default::default()
    };
    let err = client.create_product(&dup).await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::CONFLICT));

    let ids: Vec<_> = client
        .list_products()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, ["1", "2", "4", "5", "6", "7", "8", "3"]);
}

#[tokio::test]
async fn test_update_keeps_path_id() {
    let server = common::start_server().await;
    let client = sdk(&server);

    let body = Product {
        id: "something-else".into(),
        title: "Muggo Large".into(),
        description: "Big mug".into(),
        price: 120000.0,
        discount: Some("-10%".into()),
        is_new: true,
    };
    let updated = client.update_product("6", &body).await.unwrap();

    assert_eq!(updated.id, "6");
    assert_eq!(updated.title, "Muggo Large");
    assert_eq!(client.get_product("6").await.unwrap(), updated);
    assert!(server.catalog.get("something-else").is_err());

    let err = client.update_product("missing", &body).await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn test_wire_format() {
    let server = common::start_server().await;
    let http = common::http_client();

    let res = http
        .get(format!("{}/api/products/4", server.url()))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "id": "4",
            "title": "Respira",
            "description": "Outdoor table & stools",
            "price": 500000.0,
            "isNew": true,
        })
    );
}

#[tokio::test]
async fn test_malformed_body_is_400() {
    let server = common::start_server().await;
    let http = common::http_client();

    let res = http
        .post(format!("{}/api/products", server.url()))
        .header("content-type", "application/json")
        .body(r#"{"id": 5"#)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
    assert_eq!(server.catalog.len(), 8);
}

#[tokio::test]
async fn test_preflight_and_cors_headers() {
    let server = common::start_server().await;
    let http = common::http_client();

    let res = http
        .request(Method::OPTIONS, format!("{}/api/products", server.url()))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert_eq!(
        res.headers()["access-control-allow-origin"],
        "https://furniro-project-bryce.netlify.app"
    );
    assert_eq!(
        res.headers()["access-control-allow-methods"],
        "GET, POST, PUT, DELETE, OPTIONS"
    );
    assert_eq!(res.headers()["access-control-allow-credentials"], "true");
    assert!(res.text().await.unwrap().is_empty());

    let res = http
        .delete(format!("{}/api/products/does-not-exist", server.url()))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(res.headers().contains_key("access-control-allow-headers"));
    assert!(res.headers().contains_key("x-request-id"));
}
