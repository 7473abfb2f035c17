use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use axum::{Extension, Router, extract::Query, response::Json, routing::get};
use serde_json::{Value, json};

use sprofcli::cli::load_saved_tracks;

// Local stand-in for the Web API: answers /me/tracks with as many items as
// requested and counts how many requests were made.
async fn saved_tracks(
    Query(params): Query<HashMap<String, String>>,
    Extension(hits): Extension<Arc<AtomicUsize>>,
) -> Json<Value> {
    hits.fetch_add(1, Ordering::SeqCst);

    let limit: usize = params
        .get("limit")
        .and_then(|l| l.parse().ok())
        .unwrap_or(20);

    let items: Vec<Value> = (0..limit)
        .map(|i| {
            json!({
                "added_at": format!("2023-10-{:02}T12:00:00Z", (i % 28) + 1),
                "track": {
                    "id": format!("id{}", i),
                    "name": format!("Track {}", i),
                    "popularity": 10,
                    "artists": [{ "id": "a1", "name": "Artist A" }]
                }
            })
        })
        .collect();

    Json(json!({ "items": items, "next": null, "total": 100 }))
}

async fn start_api_stand_in(hits: Arc<AtomicUsize>) -> SocketAddr {
    let app = Router::new().route("/me/tracks", get(saved_tracks).layer(Extension(hits)));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

#[tokio::test]
async fn test_capped_fetch_skips_the_sizing_request() {
    let hits = Arc::new(AtomicUsize::new(0));
    let addr = start_api_stand_in(Arc::clone(&hits)).await;

    unsafe {
        std::env::set_var("SPOTIFY_API_URL", format!("http://{}", addr));
    }

    // A --limit within one page should issue exactly one request
    let items = load_saved_tracks("test_token", Some(3)).await.unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(hits.load(Ordering::SeqCst), 1);

    // An uncapped fetch sizes the library first, then pages
    hits.store(0, Ordering::SeqCst);
    let items = load_saved_tracks("test_token", None).await.unwrap();
    assert_eq!(items.len(), 50);
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}
