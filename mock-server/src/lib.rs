//! In-memory stand-in for the Cachet v1 API.
//!
//! Covers the endpoints `cachet-core` talks to. Reads are public; every
//! other verb requires the `X-Cachet-Token` header to match the token the
//! app was built with. Payloads are stored as loose JSON objects, wrapped in
//! Cachet's `{"data": ...}` envelope on the way out.

use std::{
    cmp::Ordering,
    collections::{BTreeMap, HashMap},
    sync::Arc,
};

use axum::{
    extract::{Path, Query, Request, State},
    http::{Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use serde_json::{json, Map, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;

pub const TOKEN_HEADER: &str = "X-Cachet-Token";

pub type Id = u32;
type Filters = HashMap<String, String>;

/// Every stored resource, keyed by collection then id. Metric points are
/// keyed by their metric.
#[derive(Debug, Default)]
pub struct Store {
    next_id: Id,
    collections: HashMap<&'static str, BTreeMap<Id, Value>>,
    points: HashMap<Id, BTreeMap<Id, Value>>,
}

impl Store {
    fn allocate_id(&mut self) -> Id {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Clone)]
pub struct AppState {
    token: Arc<str>,
    store: Arc<RwLock<Store>>,
}

/// Required body fields per collection, checked on create.
fn required_fields(collection: &str) -> &'static [&'static str] {
    match collection {
        "components" => &["name", "status"],
        "groups" => &["name"],
        "incidents" => &["name", "message", "status", "visible"],
        "metrics" => &["name", "suffix", "description", "default_value"],
        "subscribers" => &["email"],
        "points" => &["value"],
        _ => &[],
    }
}

pub fn app(token: &str) -> Router {
    let state = AppState {
        token: Arc::from(token),
        store: Arc::new(RwLock::new(Store::default())),
    };

    let router = Router::new().route("/ping", get(ping));
    let router = resource(router, "/components", "components");
    let router = resource(router, "/components/groups", "groups");
    let router = resource(router, "/incidents", "incidents");
    let router = resource(router, "/metrics", "metrics");
    let router = resource(router, "/subscribers", "subscribers");

    router
        .route("/metrics/{id}/points", get(list_points).post(create_point))
        .route("/metrics/{id}/points/{point_id}", delete(delete_point))
        .layer(middleware::from_fn_with_state(state.clone(), require_token))
        .with_state(state)
}

pub async fn run(listener: TcpListener, token: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app(token)).await
}

/// Collection and member routes for one resource.
fn resource(router: Router<AppState>, path: &str, collection: &'static str) -> Router<AppState> {
    router
        .route(
            path,
            get(move |State(state): State<AppState>, Query(query): Query<Filters>| {
                list(state, collection, query)
            })
            .post(move |State(state): State<AppState>, Json(body): Json<Value>| {
                create(state, collection, body)
            }),
        )
        .route(
            &format!("{path}/{{id}}"),
            get(move |State(state): State<AppState>, Path(id): Path<Id>| show(state, collection, id))
                .put(
                    move |State(state): State<AppState>, Path(id): Path<Id>, Json(body): Json<Value>| {
                        update(state, collection, id, body)
                    },
                )
                .delete(move |State(state): State<AppState>, Path(id): Path<Id>| {
                    destroy(state, collection, id)
                }),
        )
}

async fn require_token(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if request.method() != Method::GET {
        let token = request
            .headers()
            .get(TOKEN_HEADER)
            .and_then(|value| value.to_str().ok());
        if token != Some(&*state.token) {
            debug!(method = %request.method(), uri = %request.uri(), "rejected request without valid token");
            return error(StatusCode::UNAUTHORIZED, "Unauthorized").into_response();
        }
    }
    next.run(request).await
}

fn error(status: StatusCode, detail: &str) -> (StatusCode, Json<Value>) {
    (
        status,
        Json(json!({"errors": [{"status": status.as_u16(), "detail": detail}]})),
    )
}

fn data(value: Value) -> Json<Value> {
    Json(json!({ "data": value }))
}

async fn ping() -> Json<Value> {
    data(json!("Pong!"))
}

async fn list(state: AppState, collection: &'static str, query: Filters) -> Json<Value> {
    let store = state.store.read().await;
    let items: Vec<Value> = store
        .collections
        .get(collection)
        .map(|items| items.values().cloned().collect())
        .unwrap_or_default();
    data(Value::Array(filter_and_sort(items, &query)))
}

async fn create(
    state: AppState,
    collection: &'static str,
    body: Value,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let fields = validate(collection, body)?;
    let mut store = state.store.write().await;
    let id = store.allocate_id();
    let item = with_id(id, fields);
    store
        .collections
        .entry(collection)
        .or_default()
        .insert(id, item.clone());
    Ok((StatusCode::OK, data(item)))
}

async fn show(state: AppState, collection: &'static str, id: Id) -> Result<Json<Value>, StatusCode> {
    let store = state.store.read().await;
    store
        .collections
        .get(collection)
        .and_then(|items| items.get(&id))
        .cloned()
        .map(data)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update(state: AppState, collection: &'static str, id: Id, body: Value) -> Result<Json<Value>, StatusCode> {
    let Value::Object(fields) = body else {
        return Err(StatusCode::BAD_REQUEST);
    };
    let mut store = state.store.write().await;
    let item = store
        .collections
        .get_mut(collection)
        .and_then(|items| items.get_mut(&id))
        .ok_or(StatusCode::NOT_FOUND)?;
    if let Value::Object(existing) = item {
        for (key, value) in fields {
            if key != "id" {
                existing.insert(key, value);
            }
        }
    }
    Ok(data(item.clone()))
}

async fn destroy(state: AppState, collection: &'static str, id: Id) -> StatusCode {
    let mut store = state.store.write().await;
    let removed = store
        .collections
        .get_mut(collection)
        .and_then(|items| items.remove(&id))
        .is_some();
    if !removed {
        return StatusCode::NOT_FOUND;
    }
    if collection == "metrics" {
        store.points.remove(&id);
    }
    StatusCode::NO_CONTENT
}

fn metric_exists(store: &Store, id: Id) -> bool {
    store
        .collections
        .get("metrics")
        .is_some_and(|metrics| metrics.contains_key(&id))
}

async fn list_points(State(state): State<AppState>, Path(id): Path<Id>) -> Result<Json<Value>, StatusCode> {
    let store = state.store.read().await;
    if !metric_exists(&store, id) {
        return Err(StatusCode::NOT_FOUND);
    }
    let points: Vec<Value> = store
        .points
        .get(&id)
        .map(|points| points.values().cloned().collect())
        .unwrap_or_default();
    Ok(data(Value::Array(points)))
}

async fn create_point(
    State(state): State<AppState>,
    Path(id): Path<Id>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let mut fields = validate("points", body)?;
    let mut store = state.store.write().await;
    if !metric_exists(&store, id) {
        return Err(error(StatusCode::NOT_FOUND, "Metric not found"));
    }
    fields.insert("metric_id".to_string(), json!(id));
    let point_id = store.allocate_id();
    let point = with_id(point_id, fields);
    store.points.entry(id).or_default().insert(point_id, point.clone());
    Ok(data(point))
}

async fn delete_point(State(state): State<AppState>, Path((id, point_id)): Path<(Id, Id)>) -> StatusCode {
    let mut store = state.store.write().await;
    let removed = store
        .points
        .get_mut(&id)
        .and_then(|points| points.remove(&point_id))
        .is_some();
    if removed {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

/// Check the body is an object carrying every required field.
fn validate(collection: &str, body: Value) -> Result<Map<String, Value>, (StatusCode, Json<Value>)> {
    let Value::Object(fields) = body else {
        return Err(error(StatusCode::BAD_REQUEST, "Body must be a JSON object"));
    };
    let missing: Vec<&str> = required_fields(collection)
        .iter()
        .copied()
        .filter(|field| fields.get(*field).map_or(true, Value::is_null))
        .collect();
    if !missing.is_empty() {
        let detail = format!("Missing required fields: {}", missing.join(", "));
        return Err(error(StatusCode::UNPROCESSABLE_ENTITY, &detail));
    }
    Ok(fields)
}

fn with_id(id: Id, mut fields: Map<String, Value>) -> Value {
    fields.insert("id".to_string(), json!(id));
    Value::Object(fields)
}

/// Apply equality filters, then `sort`/`order`, then `per_page`.
fn filter_and_sort(mut items: Vec<Value>, query: &Filters) -> Vec<Value> {
    items.retain(|item| {
        query
            .iter()
            .filter(|(key, _)| !matches!(key.as_str(), "sort" | "order" | "per_page" | "page"))
            .all(|(key, expected)| item.get(key).is_some_and(|value| query_repr(value) == *expected))
    });

    let sort = query.get("sort").map(String::as_str).unwrap_or("id");
    items.sort_by(|a, b| compare(a.get(sort), b.get(sort)));
    if query.get("order").is_some_and(|order| order.eq_ignore_ascii_case("desc")) {
        items.reverse();
    }

    if let Some(per_page) = query.get("per_page").and_then(|n| n.parse::<usize>().ok()) {
        items.truncate(per_page);
    }
    items
}

/// How a stored value is written in a query string.
fn query_repr(value: &Value) -> String {
    match value {
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) => "0".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn compare(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a.and_then(Value::as_f64), b.and_then(Value::as_f64)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => {
            let a = a.map(query_repr).unwrap_or_default();
            let b = b.map(query_repr).unwrap_or_default();
            a.cmp(&b)
        }
    }
}
