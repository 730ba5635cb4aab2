use std::{net::SocketAddr, time::Duration};

use axum::{
    Form, Json, Router,
    extract::Query,
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use gigya::auth::SignatureBase;
use gigya::{ClientConfig, GigyaClient, GigyaError, HttpMethod, Params};
use serde_json::{Value, json};

const SECRET: &str = "c2VjcmV0";

/// Recomputes the signature the way the service does.
fn verify(http_method: HttpMethod, method: &str, pairs: Vec<(String, String)>) -> Json<Value> {
    let params: Params = pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
    let Some(sig) = params.get("sig") else {
        return Json(json!({"errorCode": 400002, "errorMessage": "missing sig"}));
    };
    let signed: Params = params.iter().filter(|(k, _)| *k != "sig").collect();
    let expected = SignatureBase {
        http_method,
        secure: false,
        service: "socialize",
        domain: "gigya.com",
        method,
        params: &signed,
    }
    .sign(SECRET)
    .unwrap();

    if expected == sig {
        Json(json!({"statusCode": 200, "UID": params.get("UID")}))
    } else {
        Json(json!({"errorCode": 403003, "errorMessage": "Invalid request signature"}))
    }
}

async fn get_user_info(Query(pairs): Query<Vec<(String, String)>>) -> Json<Value> {
    verify(HttpMethod::Get, "getUserInfo", pairs)
}

async fn set_status(headers: HeaderMap, Form(pairs): Form<Vec<(String, String)>>) -> Json<Value> {
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    if content_type != "application/x-www-form-urlencoded" {
        return Json(json!({"errorCode": 400001, "errorMessage": "bad content type"}));
    }
    verify(HttpMethod::Post, "setStatus", pairs)
}

async fn always_fails() -> (StatusCode, &'static str) {
    (
        StatusCode::FORBIDDEN,
        r#"{"errorCode":403,"errorMessage":"bad sig"}"#,
    )
}

async fn not_json() -> &'static str {
    "<html>upstream unavailable</html>"
}

async fn slow() -> &'static str {
    tokio::time::sleep(Duration::from_secs(5)).await;
    "{}"
}

async fn spawn_server() -> SocketAddr {
    let app = Router::new()
        .route("/socialize.getUserInfo", get(get_user_info))
        .route("/socialize.setStatus", post(set_status))
        .route("/socialize.logout", get(always_fails))
        .route("/socialize.getSessionInfo", get(not_json))
        .route("/socialize.getFeed", get(slow));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client_for(addr: SocketAddr, config: ClientConfig) -> GigyaClient {
    let http = reqwest::Client::builder()
        .resolve("socialize.gigya.com", addr)
        .build()
        .unwrap();
    GigyaClient::with_http_client(config, http).unwrap()
}

fn config() -> ClientConfig {
    ClientConfig::new("K", SECRET)
}

#[tokio::test]
async fn test_signed_get_accepted_by_server() {
    let addr = spawn_server().await;
    let client = client_for(addr, config());

    let result = client
        .socialize()
        .call("getUserInfo", Params::from([("UID", "u1 (test)!")]))
        .await
        .unwrap();

    assert_eq!(result, json!({"statusCode": 200, "UID": "u1 (test)!"}));
}

#[tokio::test]
async fn test_signed_post_accepted_by_server() {
    let addr = spawn_server().await;
    let client = client_for(addr, config().with_req_method(HttpMethod::Post));

    let result = client
        .socialize()
        .call(
            "setStatus",
            Params::new().with("UID", "u1").with("status", "hello, world*"),
        )
        .await
        .unwrap();

    assert_eq!(result["statusCode"], 200);
}

#[tokio::test]
async fn test_service_error_from_server() {
    let addr = spawn_server().await;
    let client = client_for(addr, config());

    match client.socialize().call("logout", Params::new()).await {
        Err(GigyaError::Service(err)) => {
            assert_eq!(err.body, json!({"errorCode": 403, "errorMessage": "bad sig"}));
        }
        other => panic!("expected service error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_non_json_body_from_server() {
    let addr = spawn_server().await;
    let client = client_for(addr, config());

    match client.socialize().call("getSessionInfo", Params::new()).await {
        Err(GigyaError::Parse { body, .. }) => {
            assert_eq!(body, "<html>upstream unavailable</html>");
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_timeout_elapses() {
    let addr = spawn_server().await;
    let client = client_for(addr, config().with_timeout(1));

    let result = client.socialize().call("getFeed", Params::new()).await;
    assert!(matches!(result, Err(GigyaError::Timeout)));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(addr, config());
    let result = client.socialize().call("getUserInfo", Params::new()).await;
    assert!(matches!(result, Err(GigyaError::Transport(_))));
}
