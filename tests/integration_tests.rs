//! Integration tests for the studio site
//!
//! Each test starts the full router on an ephemeral port, with the screenshot
//! service and the email relay replaced by wiremock servers.

use std::time::Duration;
use studio_site::config::Config;
use studio_site::server::{build_router, AppState};
use wiremock::{
    matchers::{method, path, path_regex},
    Mock, MockServer, ResponseTemplate,
};

// ==================== Test Helpers ====================

struct TestApp {
    base_url: String,
    client: reqwest::Client,
}

impl TestApp {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn create_test_config(shots_url: &str, relay_url: &str) -> Config {
    Config {
        port: 0,
        screenshot_service_url: format!("{}/get", shots_url),
        screenshot_timeout: Duration::from_millis(500),
        email_relay_url: format!("{}/email/send", relay_url),
        email_relay_service_id: Some("service_test".to_string()),
        email_relay_template_id: Some("template_test".to_string()),
        email_relay_public_key: Some("public_test".to_string()),
        email_relay_timeout: Duration::from_millis(500),
        contact_email: "hello@revorgs.com".to_string(),
    }
}

async fn spawn_app(config: Config) -> TestApp {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind ephemeral port");
    let addr = listener.local_addr().expect("Failed to read local addr");

    let app = build_router(AppState::new(config, reqwest::Client::new()));
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        base_url: format!("http://{}", addr),
        client: reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("Failed to build client"),
    }
}

async fn mount_png(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path_regex("^/get/"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "image/png")
                .set_body_bytes(vec![0x89, b'P', b'N', b'G']),
        )
        .mount(server)
        .await;
}

// ==================== Routing Tests ====================

#[tokio::test]
async fn test_root_redirects_to_english() {
    let shots = MockServer::start().await;
    let relay = MockServer::start().await;
    let app = spawn_app(create_test_config(&shots.uri(), &relay.uri())).await;

    let response = app.client.get(app.url("/")).send().await.unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], "/en");
}

#[tokio::test]
async fn test_unknown_locale_renders_english() {
    let shots = MockServer::start().await;
    let relay = MockServer::start().await;
    let app = spawn_app(create_test_config(&shots.uri(), &relay.uri())).await;

    let response = app.client.get(app.url("/xx")).send().await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body = response.text().await.unwrap();
    assert!(body.contains("<html lang=\"en\">"));
    assert!(body.contains("Digital Future."));
}

#[tokio::test]
async fn test_unrouted_deep_path_renders_english() {
    let shots = MockServer::start().await;
    let relay = MockServer::start().await;
    let app = spawn_app(create_test_config(&shots.uri(), &relay.uri())).await;

    let response = app.client.get(app.url("/some/deep/path")).send().await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert!(response.text().await.unwrap().contains("<html lang=\"en\">"));
}

#[tokio::test]
async fn test_locale_pages_are_localized() {
    let shots = MockServer::start().await;
    let relay = MockServer::start().await;
    let app = spawn_app(create_test_config(&shots.uri(), &relay.uri())).await;

    let ru = app.client.get(app.url("/ru")).send().await.unwrap();
    assert_eq!(ru.status(), reqwest::StatusCode::OK);
    assert!(ru.text().await.unwrap().contains("<html lang=\"ru\">"));

    let rom = app.client.get(app.url("/rom/")).send().await.unwrap();
    assert_eq!(rom.status(), reqwest::StatusCode::OK);
    let body = rom.text().await.unwrap();
    assert!(body.contains("<html lang=\"ro\">"));
    assert!(body.contains("Viitorul Digital."));
}

#[tokio::test]
async fn test_health() {
    let shots = MockServer::start().await;
    let relay = MockServer::start().await;
    let app = spawn_app(create_test_config(&shots.uri(), &relay.uri())).await;

    let response = app.client.get(app.url("/health")).send().await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "status": "ok" }));
}

// ==================== Project Tests ====================

#[tokio::test]
async fn test_projects_api_lists_localized_projects() {
    let shots = MockServer::start().await;
    let relay = MockServer::start().await;
    let app = spawn_app(create_test_config(&shots.uri(), &relay.uri())).await;

    let body: serde_json::Value = app
        .client
        .get(app.url("/api/rom/projects"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["locale"], "rom");
    assert_eq!(body["categories"][0], "All");
    assert_eq!(body["projects"].as_array().unwrap().len(), 6);
    assert_eq!(body["projects"][0]["id"], "vendi");
}

#[tokio::test]
async fn test_preview_uses_screenshot_when_service_responds() {
    let shots = MockServer::start().await;
    let relay = MockServer::start().await;
    mount_png(&shots).await;
    let app = spawn_app(create_test_config(&shots.uri(), &relay.uri())).await;

    let body: serde_json::Value = app
        .client
        .get(app.url("/api/en/projects/vendi/preview"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["id"], "vendi");
    assert_eq!(body["image"]["source"], "remote");
    let url = body["image"]["url"].as_str().unwrap();
    assert!(url.starts_with(&format!("{}/get/width/1200/height/800/", shots.uri())));
}

#[tokio::test]
async fn test_preview_falls_back_when_service_hangs() {
    let shots = MockServer::start().await;
    let relay = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "image/png")
                .set_body_bytes(vec![1, 2, 3])
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&shots)
        .await;
    let app = spawn_app(create_test_config(&shots.uri(), &relay.uri())).await;

    let body: serde_json::Value = app
        .client
        .get(app.url("/api/en/projects/chirie/preview"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["image"]["source"], "fallback");
    assert!(body["image"]["url"]
        .as_str()
        .unwrap()
        .starts_with("https://images.unsplash.com/"));
}

#[tokio::test]
async fn test_gallery_api_returns_three_live_slides() {
    let shots = MockServer::start().await;
    let relay = MockServer::start().await;
    mount_png(&shots).await;
    let app = spawn_app(create_test_config(&shots.uri(), &relay.uri())).await;

    let body: serde_json::Value = app
        .client
        .get(app.url("/api/ru/projects/himalaya/gallery"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["gallery"]["live"], true);
    let slides = body["gallery"]["slides"].as_array().unwrap();
    assert_eq!(slides.len(), 3);
    assert!(slides[2].as_str().unwrap().contains("/width/768/height/1024/"));
}

#[tokio::test]
async fn test_project_viewer_falls_back_to_authored_gallery() {
    let shots = MockServer::start().await;
    let relay = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&shots)
        .await;
    let app = spawn_app(create_test_config(&shots.uri(), &relay.uri())).await;

    let response = app.client.get(app.url("/en/projects/vendi")).send().await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body = response.text().await.unwrap();
    assert!(body.contains("data-live=\"false\""));
    assert_eq!(body.matches("class=\"slide\"").count(), 3);
    assert!(!body.contains(&shots.uri()));
}

#[tokio::test]
async fn test_unknown_project_is_localized_404() {
    let shots = MockServer::start().await;
    let relay = MockServer::start().await;
    let app = spawn_app(create_test_config(&shots.uri(), &relay.uri())).await;

    let page = app.client.get(app.url("/rom/projects/nope")).send().await.unwrap();
    assert_eq!(page.status(), reqwest::StatusCode::NOT_FOUND);
    assert!(page.text().await.unwrap().contains("Proiectul nu a fost găsit"));

    let api = app
        .client
        .get(app.url("/api/en/projects/nope/preview"))
        .send()
        .await
        .unwrap();
    assert_eq!(api.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_home_cards_carry_live_screenshots() {
    let shots = MockServer::start().await;
    let relay = MockServer::start().await;
    mount_png(&shots).await;
    let app = spawn_app(create_test_config(&shots.uri(), &relay.uri())).await;

    let body = app
        .client
        .get(app.url("/en"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert_eq!(body.matches("data-source=\"remote\"").count(), 6);
    assert!(body.contains(&format!(
        "src=\"{}/get/width/1200/height/800/",
        shots.uri()
    )));
}

#[tokio::test]
async fn test_category_page_filters_cards() {
    let shots = MockServer::start().await;
    let relay = MockServer::start().await;
    let app = spawn_app(create_test_config(&shots.uri(), &relay.uri())).await;

    let response = app
        .client
        .get(app.url("/en/category/Real%20Estate"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body = response.text().await.unwrap();
    assert_eq!(body.matches("class=\"portfolio-card\"").count(), 1);
    assert!(body.contains("href=\"/en/projects/vendi\""));
    assert!(body.contains("data-filter=\"Real Estate\" aria-current=\"true\""));
}

// ==================== Contact Tests ====================

#[tokio::test]
async fn test_contact_invalid_then_valid_sends_once() {
    let shots = MockServer::start().await;
    let relay = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/email/send"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&relay)
        .await;
    let app = spawn_app(create_test_config(&shots.uri(), &relay.uri())).await;

    let invalid = app
        .client
        .post(app.url("/en/contact"))
        .form(&[("name", ""), ("email", "not-an-email"), ("message", "")])
        .send()
        .await
        .unwrap();
    assert_eq!(invalid.status(), reqwest::StatusCode::UNPROCESSABLE_ENTITY);
    let body = invalid.text().await.unwrap();
    assert!(body.contains("Name is required"));
    assert!(body.contains("Please enter a valid email address"));
    assert!(body.contains("Message is required"));
    assert_eq!(relay.received_requests().await.unwrap().len(), 0);

    let valid = app
        .client
        .post(app.url("/en/contact"))
        .form(&[
            ("name", "Ana"),
            ("email", "ana@example.com"),
            ("message", "We need a shop"),
        ])
        .send()
        .await
        .unwrap();
    assert_eq!(valid.status(), reqwest::StatusCode::OK);
    let body = valid.text().await.unwrap();
    assert!(body.contains("Message Sent!"));
    assert!(!body.contains("mailto:hello@revorgs.com"));
    assert_eq!(relay.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_contact_relay_failure_offers_mailto() {
    let shots = MockServer::start().await;
    let relay = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502))
        .expect(1)
        .mount(&relay)
        .await;
    let app = spawn_app(create_test_config(&shots.uri(), &relay.uri())).await;

    let response = app
        .client
        .post(app.url("/ru/contact"))
        .form(&[
            ("name", "Ivan"),
            ("email", "ivan@example.com"),
            ("message", "Hello"),
        ])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains("role=\"status\""));
    assert!(body.contains("href=\"mailto:hello@revorgs.com?subject="));
}

#[tokio::test]
async fn test_contact_hanging_relay_offers_mailto() {
    let shots = MockServer::start().await;
    let relay = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/email/send"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(120)))
        .mount(&relay)
        .await;
    let app = spawn_app(create_test_config(&shots.uri(), &relay.uri())).await;

    let response = tokio::time::timeout(
        Duration::from_secs(10),
        app.client
            .post(app.url("/en/contact"))
            .form(&[
                ("name", "Ana"),
                ("email", "ana@example.com"),
                ("message", "Hello"),
            ])
            .send(),
    )
    .await
    .expect("contact page should answer once the relay times out")
    .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains("Message Sent!"));
    assert!(body.contains("href=\"mailto:hello@revorgs.com?subject="));
}
