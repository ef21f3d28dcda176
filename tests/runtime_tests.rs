//! Integration tests for the startup fetch and the action loop.
//!
//! A local axum server stands in for the remote feed.

use axum::{extract::Query, http::StatusCode, routing::get, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::time::Duration;
use todo_state::builder::{SourceConfig, SourceConfigBuilder};
use todo_state::core::{Action, Composer, TodoId, TodoItem};
use todo_state::effects::{FetchError, HttpSource, Runtime, TodoSource};
use todo_state::todos;

#[derive(Deserialize)]
struct Limit {
    #[serde(rename = "_limit")]
    limit: usize,
}

async fn todos_feed(Query(params): Query<Limit>) -> Json<Value> {
    let items: Vec<Value> = (1..=20)
        .take(params.limit)
        .map(|id| {
            json!({
                "userId": 1,
                "id": id,
                "title": format!("todo {id}"),
                "completed": id % 2 == 0,
            })
        })
        .collect();
    Json(json!(items))
}

async fn broken_feed() -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "boom" })),
    )
}

async fn partial_feed() -> Json<Value> {
    Json(json!([
        { "id": 1, "title": "A" },
        { "title": "no id" },
        { "id": 3 },
    ]))
}

async fn object_feed() -> Json<Value> {
    Json(json!({ "id": 1, "title": "not a list" }))
}

async fn garbage_feed() -> &'static str {
    "<html>not json</html>"
}

async fn slow_feed() -> Json<Value> {
    tokio::time::sleep(Duration::from_secs(5)).await;
    Json(json!([]))
}

async fn serve() -> SocketAddr {
    let app = Router::new()
        .route("/todos", get(todos_feed))
        .route("/broken", get(broken_feed))
        .route("/partial", get(partial_feed))
        .route("/object", get(object_feed))
        .route("/garbage", get(garbage_feed))
        .route("/slow", get(slow_feed));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn config_for(addr: SocketAddr, path: &str) -> SourceConfig {
    SourceConfigBuilder::new()
        .endpoint(format!("http://{addr}{path}"))
        .timeout(Duration::from_millis(500))
        .build()
        .unwrap()
}

async fn wait_until_loaded(runtime: &Runtime) {
    tokio::time::timeout(Duration::from_secs(5), async {
        while runtime.is_loading() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn http_source_requests_limited_list() {
    let addr = serve().await;
    let source = HttpSource::new(config_for(addr, "/todos")).unwrap();

    let items = source.fetch().await.unwrap();

    assert_eq!(items.len(), 5);
    assert_eq!(items[0], TodoItem::new(1, "todo 1"));
    assert_eq!(items[4].id, TodoId::Int(5));
}

#[tokio::test]
async fn http_source_reports_status_errors() {
    let addr = serve().await;
    let source = HttpSource::new(config_for(addr, "/broken")).unwrap();

    let err = source.fetch().await.unwrap_err();
    assert!(matches!(err, FetchError::Status(500)));
}

#[tokio::test]
async fn http_source_reports_decode_errors() {
    let addr = serve().await;
    let source = HttpSource::new(config_for(addr, "/garbage")).unwrap();

    let err = source.fetch().await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn http_source_keeps_malformed_items() {
    let addr = serve().await;
    let source = HttpSource::new(config_for(addr, "/partial")).unwrap();

    let items = source.fetch().await.unwrap();

    assert_eq!(
        items,
        vec![
            TodoItem::new(1, "A"),
            TodoItem::new(TodoId::Missing, "no id"),
            TodoItem::new(3, ""),
        ]
    );
}

#[tokio::test]
async fn http_source_rejects_non_array_feed() {
    let addr = serve().await;
    let source = HttpSource::new(config_for(addr, "/object")).unwrap();

    let err = source.fetch().await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn http_source_times_out() {
    let addr = serve().await;
    let source = HttpSource::new(config_for(addr, "/slow")).unwrap();

    let err = source.fetch().await.unwrap_err();
    assert!(matches!(err, FetchError::Timeout));
}

#[tokio::test]
async fn runtime_loads_feed_then_applies_user_actions() {
    let addr = serve().await;
    let runtime = Runtime::from_config(config_for(addr, "/todos")).unwrap();
    let dispatcher = runtime.dispatcher();
    let mut snapshots = runtime.snapshots();

    let loaded = snapshots.wait_for(|s| s.len() == 5).await.unwrap();
    assert_eq!(loaded.todos()[0].title, "todo 1");

    let mut composer = Composer::new();
    composer.set_draft("write tests");
    dispatcher.dispatch(composer.submit(&loaded)).unwrap();

    composer.begin_edit(&loaded.todos()[1]);
    composer.set_draft("todo 2, revised");
    dispatcher.dispatch(composer.submit(&loaded)).unwrap();

    dispatcher.dispatch(Action::Delete(TodoId::Int(1))).unwrap();

    let store = runtime.shutdown().await.unwrap();
    let titles: Vec<&str> = store
        .snapshot()
        .todos()
        .iter()
        .map(|t| t.title.as_str())
        .collect();

    assert_eq!(
        titles,
        vec!["todo 2, revised", "todo 3", "todo 4", "todo 5", "write tests"]
    );
    assert_eq!(
        store.snapshot().todos().last().map(|t| &t.id),
        Some(&TodoId::Int(6))
    );
    assert_eq!(
        store.log().names(),
        vec!["SET_TODOS", "ADD_TODO", "UPDATE_TODO", "DELETE_TODO"]
    );
}

#[tokio::test]
async fn runtime_loads_feed_with_missing_ids() {
    let addr = serve().await;
    let runtime = Runtime::from_config(config_for(addr, "/partial")).unwrap();

    wait_until_loaded(&runtime).await;

    let store = runtime.shutdown().await.unwrap();
    assert_eq!(store.snapshot().len(), 3);
    assert_eq!(store.snapshot().todos()[1].title, "no id");
    assert!(store.snapshot().todos()[1].id.is_missing());
    assert_eq!(store.log().names(), vec!["SET_TODOS"]);
}

#[tokio::test]
async fn runtime_ignores_failed_feed() {
    let addr = serve().await;
    let runtime = Runtime::from_config(config_for(addr, "/broken")).unwrap();

    wait_until_loaded(&runtime).await;

    runtime
        .dispatcher()
        .dispatch(Action::Add(TodoItem::new(1, "offline")))
        .unwrap();

    let store = runtime.shutdown().await.unwrap();
    assert_eq!(store.snapshot().todos(), todos![1 => "offline"].as_slice());
    assert_eq!(store.log().names(), vec!["ADD_TODO"]);
}

#[tokio::test]
async fn runtime_survives_unreachable_feed() {
    // Port 9 (discard) on localhost is expected to refuse connections
    let config = SourceConfigBuilder::new()
        .endpoint("http://127.0.0.1:9/todos")
        .timeout(Duration::from_millis(500))
        .build()
        .unwrap();
    let runtime = Runtime::from_config(config).unwrap();

    wait_until_loaded(&runtime).await;

    let store = runtime.shutdown().await.unwrap();
    assert!(store.snapshot().is_empty());
    assert!(store.log().is_empty());
}
