// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Integration tests for locale routing and the site endpoints.

use axum::{
	body::Body,
	http::{header, Method, Request, StatusCode},
	Router,
};
use nextstep_server::{create_app_state, create_router, ServerConfig};
use tower::ServiceExt;

fn app() -> Router {
	app_with(ServerConfig::default())
}

fn app_with(config: ServerConfig) -> Router {
	create_router(create_app_state(&config).unwrap())
}

async fn get(app: Router, uri: &str, accept_language: Option<&str>) -> axum::response::Response {
	let mut builder = Request::builder().uri(uri);
	if let Some(value) = accept_language {
		builder = builder.header(header::ACCEPT_LANGUAGE, value);
	}
	app.oneshot(builder.body(Body::empty()).unwrap())
		.await
		.unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
	let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
		.await
		.unwrap();
	String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
	let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
		.await
		.unwrap();
	serde_json::from_slice(&bytes).unwrap()
}

fn location(response: &axum::response::Response) -> &str {
	response.headers()[header::LOCATION].to_str().unwrap()
}

#[tokio::test]
async fn test_root_redirects_to_preferred_locale() {
	let response = get(app(), "/", Some("fr-FR,en;q=0.8")).await;
	assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
	assert_eq!(location(&response), "/fr/");
	assert_eq!(response.headers()[header::VARY], "Accept-Language");
}

#[tokio::test]
async fn test_redirect_without_header_uses_default_locale() {
	let response = get(app(), "/about", None).await;
	assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
	assert_eq!(location(&response), "/ar/about");
}

#[tokio::test]
async fn test_redirect_with_only_unsupported_languages_uses_default() {
	let response = get(app(), "/about", Some("de-DE,ja;q=0.5")).await;
	assert_eq!(location(&response), "/ar/about");
}

#[tokio::test]
async fn test_redirect_preserves_query_string() {
	let response = get(app(), "/about?utm_source=mail&ref=1", Some("hi")).await;
	assert_eq!(location(&response), "/hi/about?utm_source=mail&ref=1");
}

#[tokio::test]
async fn test_lookalike_prefix_is_redirected() {
	let response = get(app(), "/english", Some("en")).await;
	assert_eq!(location(&response), "/en/english");
}

#[tokio::test]
async fn test_redirect_target_is_served() {
	let first = get(app(), "/", Some("ru")).await;
	let target = location(&first).to_string();

	let second = get(app(), &target, Some("ru")).await;
	assert_eq!(second.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_localized_home_renders() {
	let response = get(app(), "/en", Some("fr")).await;
	assert_eq!(response.status(), StatusCode::OK);
	let html = body_string(response).await;
	assert!(html.contains(r#"<html lang="en" dir="ltr">"#));
	assert!(html.contains("Your Future Starts Abroad"));
	assert!(html.contains(r#"id="services""#));
	assert!(html.contains(r#"id="contact""#));
	assert!(html.contains(r#"<img src="/_assets/trusted-partners/KTU.png" alt="KTU""#));
	assert!(html.contains(r##"<a class="cta" href="/en#contact">"##));
}

#[tokio::test]
async fn test_contact_links_resolve_to_a_served_page() {
	// The fragment never reaches the server; `/fr` is the page it points into.
	let response = get(app(), "/fr", None).await;
	assert_eq!(response.status(), StatusCode::OK);
	let html = body_string(response).await;
	assert!(html.contains(r##"href="/fr#contact""##));
	assert!(html.contains(r##"href="/fr#services""##));
	assert!(!html.contains(r#"href="/fr/contact""#));
}

#[tokio::test]
async fn test_pages_link_to_configured_public_origin() {
	let mut config = ServerConfig::default();
	config.http.base_url = "https://makeyournextstep.com".to_string();

	let html = body_string(get(app_with(config), "/ru/about", None).await).await;
	assert!(html.contains(
		r#"<link rel="canonical" href="https://makeyournextstep.com/ru/about">"#
	));
	assert!(html.contains(
		r#"<link rel="alternate" hreflang="ar" href="https://makeyournextstep.com/ar/about">"#
	));
	assert!(html.contains(
		r#"<link rel="alternate" hreflang="x-default" href="https://makeyournextstep.com/ar/about">"#
	));
}

#[tokio::test]
async fn test_excluded_prefixes_from_config_still_route_pages() {
	let mut config = ServerConfig::default();
	config.i18n.excluded_prefixes = vec!["/static".to_string()];

	let response = get(app_with(config.clone()), "/static/brochure", Some("fr")).await;
	assert_eq!(response.status(), StatusCode::NOT_FOUND);

	let response = get(app_with(config), "/about", Some("fr")).await;
	assert_eq!(location(&response), "/fr/about");
}

#[tokio::test]
async fn test_arabic_pages_render_right_to_left() {
	let response = get(app(), "/ar/about", None).await;
	assert_eq!(response.status(), StatusCode::OK);
	let html = body_string(response).await;
	assert!(html.contains(r#"<html lang="ar" dir="rtl">"#));
	assert!(html.contains(r#"href="/fr/about""#));
}

#[tokio::test]
async fn test_language_switcher_follows_configured_locales() {
	let mut config = ServerConfig::default();
	config.i18n.locales = vec!["en".to_string(), "fr".to_string()];
	config.i18n.default_locale = "en".to_string();

	let response = get(app_with(config.clone()), "/fr", None).await;
	let html = body_string(response).await;
	assert!(html.contains(r#"href="/en""#));
	assert!(!html.contains(r#"hreflang="ar""#));

	let response = get(app_with(config), "/ar/about", None).await;
	assert_eq!(location(&response), "/en/ar/about");
}

#[tokio::test]
async fn test_unknown_page_under_locale_is_localized_404() {
	let response = get(app(), "/fr/blog", None).await;
	assert_eq!(response.status(), StatusCode::NOT_FOUND);
	let html = body_string(response).await;
	assert!(html.contains(r#"<html lang="fr" dir="ltr">"#));
}

#[tokio::test]
async fn test_health_is_not_redirected() {
	let response = get(app(), "/health", Some("fr")).await;
	assert_eq!(response.status(), StatusCode::OK);
	let json = body_json(response).await;
	assert_eq!(json["status"], "healthy");
	assert_eq!(json["default_locale"], "ar");
	assert_eq!(json["locales"].as_array().unwrap().len(), 5);
	assert_eq!(json["dictionary_source"], "embedded");
}

#[tokio::test]
async fn test_client_config_passes_script_sheet_url_through() {
	let mut config = ServerConfig::default();
	config.integrations.script_sheet_url = Some("https://script.example/exec?x=1".to_string());

	let response = get(app_with(config), "/api/config", None).await;
	assert_eq!(response.status(), StatusCode::OK);
	let json = body_json(response).await;
	assert_eq!(json["script_sheet_url"], "https://script.example/exec?x=1");
	assert_eq!(json["locales"][1]["code"], "ar");
	assert_eq!(json["locales"][1]["dir"], "rtl");
}

#[tokio::test]
async fn test_static_assets_bypass_locale_routing() {
	let dir = tempfile::tempdir().unwrap();
	std::fs::write(dir.path().join("site.css"), "body{}").unwrap();
	let mut config = ServerConfig::default();
	config.assets.dir = dir.path().to_path_buf();

	let response = get(app_with(config.clone()), "/_assets/site.css", Some("fr")).await;
	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(body_string(response).await, "body{}");

	let response = get(app_with(config), "/_assets/missing.png", Some("fr")).await;
	assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_contact_placeholder_accepts_valid_submission() {
	let request = Request::builder()
		.method(Method::POST)
		.uri("/api/contact")
		.header(header::CONTENT_TYPE, "application/json")
		.body(Body::from(
			r#"{"name":"Amal","email":"amal@example.com","message":"Hello"}"#,
		))
		.unwrap();
	let response = app().oneshot(request).await.unwrap();
	assert_eq!(response.status(), StatusCode::ACCEPTED);
	let json = body_json(response).await;
	assert_eq!(json["status"], "received");
}

#[tokio::test]
async fn test_contact_placeholder_rejects_invalid_submission() {
	let request = Request::builder()
		.method(Method::POST)
		.uri("/api/contact")
		.header(header::CONTENT_TYPE, "application/json")
		.body(Body::from(r#"{"name":"Amal","email":"","message":"Hello"}"#))
		.unwrap();
	let response = app().oneshot(request).await.unwrap();
	assert_eq!(response.status(), StatusCode::BAD_REQUEST);
	let json = body_json(response).await;
	assert_eq!(json["error"], "bad_request");

	let request = Request::builder()
		.method(Method::POST)
		.uri("/api/contact")
		.header(header::CONTENT_TYPE, "application/json")
		.body(Body::from("{not json"))
		.unwrap();
	let response = app().oneshot(request).await.unwrap();
	assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_directory_bundles_override_embedded_copy() {
	let dir = tempfile::tempdir().unwrap();
	std::fs::write(
		dir.path().join("en.json"),
		r#"{"hero":{"title":"Custom headline"}}"#,
	)
	.unwrap();
	let mut config = ServerConfig::default();
	config.i18n.locales = vec!["en".to_string(), "fr".to_string()];
	config.i18n.default_locale = "en".to_string();
	config.i18n.bundle_dir = Some(dir.path().to_path_buf());

	let html = body_string(get(app_with(config.clone()), "/en", None).await).await;
	assert!(html.contains("Custom headline"));

	// fr.json is absent: the page still renders with built-in defaults.
	let response = get(app_with(config), "/fr", None).await;
	assert_eq!(response.status(), StatusCode::OK);
	assert!(body_string(response).await.contains("Your Future Starts Abroad"));
}

#[tokio::test]
async fn test_strict_bundles_fail_startup_when_bundle_missing() {
	let dir = tempfile::tempdir().unwrap();
	std::fs::write(dir.path().join("en.json"), "{}").unwrap();
	let mut config = ServerConfig::default();
	config.i18n.locales = vec!["en".to_string(), "fr".to_string()];
	config.i18n.default_locale = "en".to_string();
	config.i18n.bundle_dir = Some(dir.path().to_path_buf());
	config.i18n.strict_bundles = true;

	let err = create_app_state(&config).err().unwrap();
	assert!(err.to_string().contains("fr"));
}
