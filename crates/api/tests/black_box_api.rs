use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::{json, Value as JsonValue};

use soiree_api::app::services::AppServices;
use soiree_core::{FixedClock, SystemClock};
use soiree_infra::config::AppConfig;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        let config = AppConfig::from_lookup(|name| match name {
            "BUDGET_TABLE" => Some("budget".to_string()),
            "LOGISTICS_TABLE" => Some("logistics".to_string()),
            _ => None,
        })
        .expect("test config");

        // Build app (same router as prod) with in-memory tables, bound to an ephemeral port.
        let services = AppServices::in_memory(&config, Arc::new(SystemClock));
        let app = soiree_api::app::build_app(Arc::new(services));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn structured(function: &str, parameters: JsonValue) -> JsonValue {
    json!({
        "messageVersion": "1.0",
        "actionGroup": "planning-tools",
        "function": function,
        "sessionId": "session-1",
        "inputText": "what is left in the budget?",
        "parameters": parameters,
    })
}

/// Payload carried inside a function-response envelope.
fn payload(envelope: &JsonValue) -> JsonValue {
    let body = envelope["response"]["functionResponse"]["responseBody"]["TEXT"]["body"]
        .as_str()
        .expect("envelope body is text");
    serde_json::from_str(body).expect("body is JSON")
}

async fn invoke(client: &reqwest::Client, base_url: &str, call: &JsonValue) -> JsonValue {
    let res = client
        .post(format!("{}/invoke", base_url))
        .json(call)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    res.json().await.unwrap()
}

#[tokio::test]
async fn health_is_public() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn seeded_budget_and_party_round_trip() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/admin/seed", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let seeded: JsonValue = res.json().await.unwrap();
    assert_eq!(seeded["seeded"], true);

    let saved = invoke(
        &client,
        &srv.base_url,
        &structured(
            "save-party",
            json!([
                {"name": "partyDate", "type": "string", "value": "2024-07-04"},
                {"name": "partyName", "type": "string", "value": "Summer Bash"},
                {"name": "partyCost", "type": "number", "value": 450}
            ]),
        ),
    )
    .await;
    assert_eq!(saved["messageVersion"], "1.0");
    assert_eq!(saved["response"]["actionGroup"], "planning-tools");
    assert_eq!(saved["response"]["function"], "save-party");
    assert_eq!(payload(&saved), json!({"message": "Party saved successfully"}));

    let budget = invoke(&client, &srv.base_url, &structured("get-budget", json!([]))).await;
    assert_eq!(
        payload(&budget),
        json!({
            "annualBudget": 3000,
            "parties": [{"name": "Summer Bash", "amount": 450, "date": "2024-07-04"}]
        })
    );

    let inventory = invoke(&client, &srv.base_url, &structured("get-inventory", json!([]))).await;
    assert_eq!(
        payload(&inventory),
        json!([
            {"name": "chair", "quantity": 50},
            {"name": "projector", "quantity": 2},
            {"name": "speaker_system", "quantity": 1}
        ])
    );
}

#[tokio::test]
async fn direct_call_through_named_route() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/functions/save-party", srv.base_url))
        .json(&json!({"partyDate": "2024-10-31", "partyName": "Costume Party", "partyCost": 275}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let envelope: JsonValue = res.json().await.unwrap();
    assert!(envelope["response"].get("actionGroup").is_none());
    assert_eq!(payload(&envelope), json!({"message": "Party saved successfully"}));

    let res = client
        .post(format!("{}/functions/get_budget", srv.base_url))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    let envelope: JsonValue = res.json().await.unwrap();
    assert_eq!(
        payload(&envelope),
        json!({
            "annualBudget": 5000,
            "parties": [{"name": "Costume Party", "amount": 275, "date": "2024-10-31"}]
        })
    );
}

#[tokio::test]
async fn unknown_and_missing_functions_are_rejected() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/invoke", srv.base_url))
        .json(&structured("create-graphic", json!([])))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: JsonValue = res.json().await.unwrap();
    assert_eq!(body["error"], "unknown_function");

    let res = client
        .post(format!("{}/invoke", srv.base_url))
        .json(&json!({"partyName": "no function here"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: JsonValue = res.json().await.unwrap();
    assert_eq!(body["error"], "missing_function");
}

#[tokio::test]
async fn fixed_clock_scopes_the_ledger_year() {
    let config = AppConfig::from_lookup(|name| match name {
        "BUDGET_TABLE" => Some("budget".to_string()),
        "LOGISTICS_TABLE" => Some("logistics".to_string()),
        _ => None,
    })
    .unwrap();
    let services = AppServices::in_memory(&config, Arc::new(FixedClock::in_year(2031).unwrap()));

    services.seeder.seed(services.clock().current_year()).await.unwrap();

    let call = serde_json::from_value(structured("get-budget", json!([]))).unwrap();
    let envelope = services.dispatcher.dispatch_invocation(&call).await.unwrap();
    assert_eq!(
        envelope.payload::<JsonValue>().unwrap(),
        json!({"annualBudget": 3000, "parties": []})
    );
}
