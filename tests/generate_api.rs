use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App};
use pagegen::config::{AppConfig, PromptTemplate};
use pagegen::AppState;
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL: &str = "gemini-2.5-flash";
const GENERATE_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

fn app_state(api_base: &str, api_key: Option<&str>) -> web::Data<AppState> {
    web::Data::new(AppState::new(AppConfig {
        api_key: api_key.map(str::to_string),
        model: MODEL.to_string(),
        api_base: api_base.to_string(),
        template: PromptTemplate::Interactive,
        addr: "127.0.0.1:0".to_string(),
    }))
}

async fn service(
    api_base: &str,
    api_key: Option<&str>,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> + use<> {
    test::init_service(
        App::new()
            .app_data(app_state(api_base, api_key))
            .configure(pagegen::routes),
    )
    .await
}

fn gemini_reply(text: &str) -> Value {
    json!({
        "candidates": [
            { "content": { "parts": [ { "text": text } ] } }
        ]
    })
}

#[actix_web::test]
async fn generates_a_page_and_strips_fences() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [ { "parts": [ {} ] } ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply(
            "```html\n<div class=\"p-8\"><h1>Dashboard</h1></div>\n```",
        )))
        .expect(1)
        .mount(&upstream)
        .await;

    let app = service(&upstream.uri(), Some("test-key")).await;
    let req = test::TestRequest::post()
        .uri("/api/generate")
        .set_json(json!({ "phrase": "dashboard" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    let code = body["code"].as_str().unwrap();
    assert_eq!(code, "<div class=\"p-8\"><h1>Dashboard</h1></div>");
    assert!(!code.contains("<html>"));
    assert!(!code.contains("<head>"));
    assert!(!code.contains("<body>"));
    assert!(body.get("error").is_none());
}

#[actix_web::test]
async fn prompt_carries_the_phrase_to_the_model() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply("<div>cats</div>")))
        .expect(1)
        .mount(&upstream)
        .await;

    let app = service(&upstream.uri(), Some("test-key")).await;
    let req = test::TestRequest::post()
        .uri("/api/generate")
        .set_json(json!({ "phrase": "a blog about cats" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let requests = upstream.received_requests().await.unwrap();
    let sent: Value = serde_json::from_slice(&requests[0].body).unwrap();
    let prompt = sent["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("\"a blog about cats\""));
}

#[actix_web::test]
async fn empty_phrase_is_rejected_before_calling_the_model() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&upstream)
        .await;

    let app = service(&upstream.uri(), Some("test-key")).await;
    for body in [json!({ "phrase": "" }), json!({ "phrase": "   " }), json!({})] {
        let req = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "Phrase is required" }));
    }
}

#[actix_web::test]
async fn malformed_body_is_rejected_with_the_json_error_shape() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&upstream)
        .await;

    let app = service(&upstream.uri(), Some("test-key")).await;
    let req = test::TestRequest::post()
        .uri("/api/generate")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "Invalid request body" }));
}

#[actix_web::test]
async fn missing_api_key_fails_every_request_without_calling_the_model() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&upstream)
        .await;

    let app = service(&upstream.uri(), None).await;
    for body in [json!({ "phrase": "dashboard" }), json!({ "phrase": "" })] {
        let req = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({ "error": "Server configuration error: API key not found." })
        );
    }
}

#[actix_web::test]
async fn upstream_failure_is_a_generic_500() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(
            ResponseTemplate::new(503).set_body_string("quota exhausted for key AIza-secret"),
        )
        .expect(1)
        .mount(&upstream)
        .await;

    let app = service(&upstream.uri(), Some("test-key")).await;
    let req = test::TestRequest::post()
        .uri("/api/generate")
        .set_json(json!({ "phrase": "dashboard" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);

    let raw = test::read_body(resp).await;
    let raw = std::str::from_utf8(&raw).unwrap();
    assert!(!raw.contains("AIza-secret"));
    assert!(!raw.contains("quota"));
    let body: Value = serde_json::from_str(raw).unwrap();
    assert_eq!(body, json!({ "error": "Failed to generate page" }));
}

#[actix_web::test]
async fn upstream_reply_without_candidates_is_a_generic_500() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .expect(1)
        .mount(&upstream)
        .await;

    let app = service(&upstream.uri(), Some("test-key")).await;
    let req = test::TestRequest::post()
        .uri("/api/generate")
        .set_json(json!({ "phrase": "dashboard" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "Failed to generate page" }));
}

#[actix_web::test]
async fn pages_are_served_for_root_and_phrase_routes() {
    let upstream = MockServer::start().await;
    let app = service(&upstream.uri(), Some("test-key")).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), 200);
    let content_type = resp.headers().get("content-type").unwrap();
    assert!(content_type.to_str().unwrap().starts_with("text/html"));
    let html = test::read_body(resp).await;
    let html = std::str::from_utf8(&html).unwrap();
    assert!(html.contains("Generate a Page with AI"));
    assert!(html.contains("encodeURIComponent"));

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/a%20blog%20about%20cats")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let html = test::read_body(resp).await;
    let html = std::str::from_utf8(&html).unwrap();
    assert!(html.contains(r#"const PHRASE = "a blog about cats";"#));
    assert!(html.contains("/api/generate"));
}
