mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use seo_pages::api::handlers::{list_pages_handler, page_handler, related_handler};
use seo_pages::state::AppState;

fn api_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/api/pages", get(list_pages_handler))
        .route("/api/pages/{slug}", get(page_handler))
        .route("/api/pages/{slug}/related", get(related_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_list_pages() {
    let server = api_server(common::create_test_state());

    let response = server.get("/api/pages").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["total"], 14);
    assert_eq!(json["items"].as_array().unwrap().len(), 14);
    assert_eq!(json["items"][0]["slug"], "geracao-de-leads-b2b-praia-grande");
    assert_eq!(json["items"][0]["kind"], "city");
    assert_eq!(
        json["items"][0]["url"],
        "https://example.com/geracao-de-leads-b2b-praia-grande"
    );
    assert_eq!(json["items"][5]["kind"], "city_niche");
}

#[tokio::test]
async fn test_list_pages_includes_neighborhoods() {
    let state = common::create_state_for(&common::taxonomy_with_neighborhoods());
    let server = api_server(state);

    let response = server.get("/api/pages").await;

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["total"], 16);
    assert_eq!(json["items"][15]["slug"], "empresas-no-bairro-boqueirao");
    assert_eq!(json["items"][15]["kind"], "neighborhood");
}

#[tokio::test]
async fn test_get_city_page() {
    let server = api_server(common::create_test_state());

    let response = server.get("/api/pages/geracao-de-leads-b2b-santos").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["slug"], "geracao-de-leads-b2b-santos");
    assert_eq!(json["title"], "Geração de Leads B2B em Santos | LeadRadar");
    assert_eq!(
        json["canonical_url"],
        "https://example.com/geracao-de-leads-b2b-santos"
    );
    assert_eq!(json["intro"].as_array().unwrap().len(), 2);
    assert_eq!(json["local"].as_array().unwrap().len(), 2);
    assert_eq!(json["faq"].as_array().unwrap().len(), 3);
    assert!(json["faq"][0]["question"].as_str().unwrap().contains("Santos"));

    let related: Vec<&str> = json["related"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["slug"].as_str().unwrap())
        .collect();
    assert_eq!(
        related,
        vec![
            "prospeccao-b2b-dentistas-santos",
            "prospeccao-b2b-imobiliarias-santos",
            "prospeccao-b2b-contadores-santos",
        ]
    );
}

#[tokio::test]
async fn test_get_city_niche_page() {
    let server = api_server(common::create_test_state());

    let response = server
        .get("/api/pages/prospeccao-b2b-dentistas-praia-grande")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(
        json["title"],
        "Prospecção B2B de Dentistas em Praia Grande | LeadRadar"
    );
    assert_eq!(json["related"][0]["slug"], "geracao-de-leads-b2b-praia-grande");
    assert_eq!(json["related"][0]["label"], "Leads B2B em Praia Grande");
}

#[tokio::test]
async fn test_get_unknown_page() {
    let server = api_server(common::create_test_state());

    let response = server.get("/api/pages/random-unmapped-path").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["slug"], "random-unmapped-path");
}

#[tokio::test]
async fn test_related_default_limit() {
    let server = api_server(common::create_test_state());

    let response = server
        .get("/api/pages/prospeccao-b2b-dentistas-santos/related")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["slug"], "prospeccao-b2b-dentistas-santos");
    assert_eq!(json["limit"], 6);
    assert_eq!(json["items"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_related_custom_limit() {
    let server = api_server(common::create_test_state());

    let response = server
        .get("/api/pages/prospeccao-b2b-dentistas-santos/related")
        .add_query_param("limit", 2)
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["limit"], 2);
    assert_eq!(json["items"].as_array().unwrap().len(), 2);
    assert_eq!(json["items"][0]["slug"], "geracao-de-leads-b2b-santos");
}

#[tokio::test]
async fn test_related_limit_out_of_range() {
    let server = api_server(common::create_test_state());

    let response = server
        .get("/api/pages/prospeccao-b2b-dentistas-santos/related")
        .add_query_param("limit", 0)
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");

    let response = server
        .get("/api/pages/prospeccao-b2b-dentistas-santos/related")
        .add_query_param("limit", 51)
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_related_non_numeric_limit() {
    let server = api_server(common::create_test_state());

    let response = server
        .get("/api/pages/prospeccao-b2b-dentistas-santos/related")
        .add_query_param("limit", "abc")
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["message"], "Invalid query parameters");
    assert!(json["error"]["details"]["reason"].is_string());
}

#[tokio::test]
async fn test_related_unknown_page() {
    let server = api_server(common::create_test_state());

    let response = server.get("/api/pages/nope/related").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_related_for_neighborhood_lists_cities() {
    let state = common::create_state_for(&common::taxonomy_with_neighborhoods());
    let server = api_server(state);

    let response = server
        .get("/api/pages/empresas-no-bairro-gonzaga/related")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 5);
    assert!(
        items
            .iter()
            .all(|i| i["slug"].as_str().unwrap().starts_with("geracao-de-leads-b2b-"))
    );
}
