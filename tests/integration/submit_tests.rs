use robots_checker::api::{AnalysisTransport, HttpAnalysisClient};
use robots_checker::config::ApiConfig;
use robots_checker::render::BufferedResultsArea;
use robots_checker::{CheckerError, FormController, FormState, SubmitOutcome};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpAnalysisClient {
    let config = ApiConfig {
        base_url: server.uri(),
        timeout_secs: 5,
    };
    HttpAnalysisClient::new(&config).expect("Failed to build client")
}

fn agent_options() -> Vec<String> {
    vec!["*".to_string(), "Googlebot".to_string(), "Bingbot".to_string()]
}

fn sample_result() -> serde_json::Value {
    json!({
        "status": {"code": 200, "message": "Content provided directly", "size": 48},
        "groups": [
            {
                "user_agent": "*",
                "allow_rules": ["/admin/public"],
                "disallow_rules": ["/admin"],
                "sitemaps": ["https://example.com/sitemap.xml"]
            }
        ],
        "test_results": [
            {"path": "/admin", "user_agent": "*", "allowed": false, "matched_rule": "Disallow: /admin"},
            {"path": "/", "user_agent": "*", "allowed": true, "matched_rule": null}
        ],
        "warnings": ["Directive ignored by Google: crawl-delay"]
    })
}

#[tokio::test]
async fn test_content_submission_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/analyze"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "user_agents": ["*"],
            "test_paths": ["/admin", "/"],
            "content": "User-agent: *\nDisallow: /admin"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_result()))
        .expect(1)
        .mount(&server)
        .await;

    let mut form = FormState::new(agent_options());
    form.edit_content("User-agent: *\nDisallow: /admin");
    form.user_agents_mut().select("*").unwrap();
    form.set_test_paths("/admin\n\n/\n");

    let mut controller = FormController::new(client_for(&server), BufferedResultsArea::new());
    let outcome = controller.submit(&form).await;

    match outcome {
        SubmitOutcome::Rendered(result) => {
            assert_eq!(result.test_results.len(), 2);
            assert_eq!(result.groups.len(), 1);
        }
        other => panic!("Expected rendered result, got {:?}", other),
    }

    let html = controller.area().html();
    assert!(html.contains("Disallow: /admin"));
    assert!(html.contains("No specific rule"));
    assert!(html.contains("Size: 48 characters"));
    assert!(html.contains("Directive ignored by Google: crawl-delay"));
    assert!(html.contains("id=\"groups\""));
}

#[tokio::test]
async fn test_url_submission_is_normalized() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/analyze"))
        .and(body_json(json!({
            "user_agents": ["Googlebot", "*"],
            "test_paths": [],
            "url": "https://example.com/robots.txt"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": {"code": 200, "message": "OK", "size": 10},
            "groups": [],
            "test_results": [],
            "warnings": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut form = FormState::new(agent_options());
    form.edit_url("https://example.com/");
    form.blur_url();
    form.user_agents_mut().select("Googlebot").unwrap();
    form.user_agents_mut().select("*").unwrap();

    let mut controller = FormController::new(client_for(&server), BufferedResultsArea::new());
    let outcome = controller.submit(&form).await;

    assert!(!outcome.is_error());
    let html = controller.area().html();
    assert!(!html.contains("id=\"groups\""));
    assert!(!html.contains("id=\"warnings\""));
    assert!(!html.contains("id=\"test-results\""));
}

#[tokio::test]
async fn test_http_404_surfaces_status_code() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let mut form = FormState::new(agent_options());
    form.edit_url("https://example.com");
    form.user_agents_mut().select("*").unwrap();

    let mut controller = FormController::new(client_for(&server), BufferedResultsArea::new());
    let outcome = controller.submit(&form).await;

    assert!(matches!(
        outcome,
        SubmitOutcome::Failed(CheckerError::Http { status: 404 })
    ));
    assert!(controller.area().html().contains("404"));
}

#[tokio::test]
async fn test_malformed_json_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut form = FormState::new(agent_options());
    form.edit_content("User-agent: *");
    form.user_agents_mut().select("*").unwrap();

    let request = form.to_request().unwrap();
    let result = client.analyze(&request).await;
    assert!(matches!(result, Err(CheckerError::Decode(_))));

    let mut controller = FormController::new(client, BufferedResultsArea::new());
    let outcome = controller.submit(&form).await;
    assert!(outcome.is_error());
    assert!(controller.area().html().contains("Invalid response body"));
}

#[tokio::test]
async fn test_network_failure_is_reported() {
    // Port 1 is reserved; connecting to it is refused
    let config = ApiConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        timeout_secs: 5,
    };
    let client = HttpAnalysisClient::new(&config).unwrap();

    let mut form = FormState::new(agent_options());
    form.edit_content("User-agent: *");
    form.user_agents_mut().select("*").unwrap();

    let mut controller = FormController::new(client, BufferedResultsArea::new());
    let outcome = controller.submit(&form).await;

    assert!(matches!(outcome, SubmitOutcome::Failed(CheckerError::Transport(_))));
    assert!(controller.area().html().contains("Analysis failed"));
}

#[tokio::test]
async fn test_validation_failure_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_result()))
        .expect(0)
        .mount(&server)
        .await;

    let mut controller = FormController::new(client_for(&server), BufferedResultsArea::new());

    let mut form = FormState::new(agent_options());
    form.user_agents_mut().select("*").unwrap();
    assert!(controller.submit(&form).await.is_error());

    let mut form = FormState::new(agent_options());
    form.edit_url("https://example.com");
    assert!(controller.submit(&form).await.is_error());

    server.verify().await;
}
