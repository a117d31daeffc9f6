//! Product command integration tests against a mock API server.

use std::fs;
use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use tempfile::tempdir;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn seed_session(home: &Path, base_url: &str) {
    fs::write(
        home.join("config.toml"),
        format!("base_url = \"{base_url}\"\n"),
    )
    .unwrap();
    fs::write(
        home.join("credentials.json"),
        json!({
            "token": "tok-cli",
            "user": {
                "id": 1,
                "email": "a@b.com",
                "first_name": "Ada",
                "last_name": "Byron",
                "role": "MERCHANDISER"
            }
        })
        .to_string(),
    )
    .unwrap();
}

fn product_json(id: i64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "description": "",
        "sku": format!("SKU-{id}"),
        "barcode": "",
        "price": "2.50",
        "stock_quantity": 7,
        "image": null,
        "created_by": 1,
        "created_by_name": "Ada Byron",
        "created_at": "2026-01-15T09:30:00Z",
        "updated_at": "2026-01-15T09:30:00Z"
    })
}

#[tokio::test(flavor = "multi_thread")]
async fn test_products_list_renders_table() {
    let server = MockServer::start().await;
    let home = tempdir().unwrap();
    seed_session(home.path(), &server.uri());

    Mock::given(method("GET"))
        .and(path("/products/"))
        .and(header("authorization", "Token tok-cli"))
        .and(query_param("search", "cola"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "products": [product_json(1, "Cola 330ml"), product_json(2, "Cola 1l")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("shelf")
        .env("SHELF_HOME", home.path())
        .args(["products", "list", "--search", "cola"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cola 330ml"))
        .stdout(predicate::str::contains("SKU-2"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_products_list_rejects_bad_ordering() {
    let home = tempdir().unwrap();

    cargo_bin_cmd!("shelf")
        .env("SHELF_HOME", home.path())
        .args(["products", "list", "--ordering", "weight"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown ordering"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_product_show_prints_details() {
    let server = MockServer::start().await;
    let home = tempdir().unwrap();
    seed_session(home.path(), &server.uri());

    Mock::given(method("GET"))
        .and(path("/products/7/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"product": product_json(7, "Cola 330ml")})),
        )
        .mount(&server)
        .await;

    cargo_bin_cmd!("shelf")
        .env("SHELF_HOME", home.path())
        .args(["products", "show", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cola 330ml"))
        .stdout(predicate::str::contains("SKU-7"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_product_delete() {
    let server = MockServer::start().await;
    let home = tempdir().unwrap();
    seed_session(home.path(), &server.uri());

    Mock::given(method("DELETE"))
        .and(path("/products/3/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("shelf")
        .env("SHELF_HOME", home.path())
        .args(["products", "delete", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted product 3."));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_expired_session_reports_auth_error() {
    let server = MockServer::start().await;
    let home = tempdir().unwrap();
    seed_session(home.path(), &server.uri());

    Mock::given(method("GET"))
        .and(path("/products/"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Invalid token."})),
        )
        .mount(&server)
        .await;

    cargo_bin_cmd!("shelf")
        .env("SHELF_HOME", home.path())
        .args(["products", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid token."));
}
