mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use seo_pages::web::handlers::{index_handler, landing_handler};

fn web_server() -> TestServer {
    let app = Router::new()
        .route("/", get(index_handler))
        .route("/{slug}", get(landing_handler))
        .with_state(common::create_test_state());

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_landing_page_renders_head_and_sections() {
    let server = web_server();

    let response = server.get("/geracao-de-leads-b2b-santos").await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("<title>Geração de Leads B2B em Santos | LeadRadar</title>"));
    assert!(html.contains("rel=\"canonical\""));
    assert!(html.contains("example.com"));
    assert!(html.contains("Perguntas frequentes"));
    assert!(html.contains("Como gerar leads B2B em Santos?"));
    assert!(html.contains("href=\"/prospeccao-b2b-dentistas-santos\""));
}

#[tokio::test]
async fn test_landing_page_without_related_omits_nav() {
    let server = web_server();

    let response = server.get("/geracao-de-leads-b2b-guaruja").await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("Guarujá"));
    assert!(!html.contains("Páginas relacionadas"));
}

#[tokio::test]
async fn test_unknown_slug_redirects_home() {
    let server = web_server();

    let response = server.get("/random-unmapped-path").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "/");
}

#[tokio::test]
async fn test_malformed_slug_redirects_home() {
    let server = web_server();

    let response = server.get("/Geracao-De-Leads-B2B-Santos").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "/");
}

#[tokio::test]
async fn test_index_lists_every_page() {
    let server = web_server();

    let response = server.get("/").await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("<title>LeadRadar | Inteligência de prospecção B2B</title>"));
    assert!(html.contains("href=\"/geracao-de-leads-b2b-sao-vicente\""));
    assert!(html.contains("href=\"/prospeccao-b2b-contadores-sao-paulo\""));
    assert_eq!(html.matches("<li><a href=").count(), 14);
    assert!(!html.contains("Bairros"));
}
