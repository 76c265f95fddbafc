use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, TOKEN_HEADER};
use serde_json::Value;
use tower::ServiceExt;

const TOKEN: &str = "secret";

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .header(TOKEN_HEADER, TOKEN)
        .body(body.to_string())
        .unwrap()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn delete(uri: &str) -> Request<String> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .header(TOKEN_HEADER, TOKEN)
        .body(String::new())
        .unwrap()
}

// --- ping ---

#[tokio::test]
async fn ping_answers_pong() {
    let resp = app(TOKEN).oneshot(get("/ping")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["data"], "Pong!");
}

// --- auth ---

#[tokio::test]
async fn write_without_token_is_unauthorized() {
    let req = Request::builder()
        .method("POST")
        .uri("/components")
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(r#"{"name":"API","status":1}"#.to_string())
        .unwrap();
    let resp = app(TOKEN).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn write_with_wrong_token_is_unauthorized() {
    let req = Request::builder()
        .method("DELETE")
        .uri("/components/1")
        .header(TOKEN_HEADER, "nope")
        .body(String::new())
        .unwrap();
    let resp = app(TOKEN).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn reads_do_not_need_token() {
    let resp = app(TOKEN).oneshot(get("/components")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["data"], serde_json::json!([]));
}

// --- create ---

#[tokio::test]
async fn create_component_missing_status_returns_422() {
    let resp = app(TOKEN)
        .oneshot(json_request("POST", "/components", r#"{"name":"API"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_group_does_not_land_in_components() {
    let app = app(TOKEN);
    let resp = app
        .clone()
        .oneshot(json_request("POST", "/components/groups", r#"{"name":"Backend"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app.oneshot(get("/components")).await.unwrap();
    assert_eq!(body_json(resp).await["data"], serde_json::json!([]));
}

// --- get / update / delete ---

#[tokio::test]
async fn get_component_not_found() {
    let resp = app(TOKEN).oneshot(get("/components/99")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_component_bad_id_returns_400() {
    let resp = app(TOKEN).oneshot(get("/components/not-a-number")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_incident_not_found() {
    let resp = app(TOKEN)
        .oneshot(json_request("PUT", "/incidents/99", r#"{"status":4}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_subscriber_not_found() {
    let resp = app(TOKEN).oneshot(delete("/subscribers/99")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- metric points ---

#[tokio::test]
async fn points_of_missing_metric_are_not_found() {
    let resp = app(TOKEN).oneshot(get("/metrics/99/points")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn point_lifecycle() {
    let app = app(TOKEN);

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/metrics",
            r#"{"name":"Latency","suffix":"ms","description":"API latency","default_value":0}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let metric_id = body_json(resp).await["data"]["id"].as_u64().unwrap();

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/metrics/{metric_id}/points"),
            r#"{"value":12}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let point = body_json(resp).await["data"].clone();
    assert_eq!(point["metric_id"], metric_id);
    let point_id = point["id"].as_u64().unwrap();

    let resp = app
        .clone()
        .oneshot(delete(&format!("/metrics/{metric_id}/points/{point_id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());

    let resp = app
        .oneshot(get(&format!("/metrics/{metric_id}/points")))
        .await
        .unwrap();
    assert_eq!(body_json(resp).await["data"], serde_json::json!([]));
}

// --- full CRUD lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    use tower::Service;

    let mut app = app(TOKEN).into_service();

    // create
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/components",
            r#"{"name":"API","status":1,"enabled":true}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let created = body_json(resp).await["data"].clone();
    assert_eq!(created["name"], "API");
    let id = created["id"].as_u64().unwrap();

    // search — filter on a stored boolean
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get("/components?enabled=1&order=desc"))
        .await
        .unwrap();
    let found = body_json(resp).await["data"].clone();
    assert_eq!(found.as_array().unwrap().len(), 1);

    // update — partial
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("PUT", &format!("/components/{id}"), r#"{"status":4}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated = body_json(resp).await["data"].clone();
    assert_eq!(updated["status"], 4);
    assert_eq!(updated["name"], "API"); // unchanged

    // delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(delete(&format!("/components/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    // get after delete — 404
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get(&format!("/components/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
