use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::Html;
use std::sync::Arc;
use std::time::Instant;

use crate::metrics::{REQUEST_LATENCY, STORAGE_ERRORS, VISIT_TOTAL};
use crate::state::AppState;

// Counts a visit for the request's path and reports the running total.
// The key is the path plus query string, used verbatim.
pub async fn visit_handler(
    State(state): State<Arc<AppState>>,
    uri: Uri,
) -> Result<Html<String>, (StatusCode, String)> {
    VISIT_TOTAL.inc();
    let start_time = Instant::now();

    let key = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());

    let visits = state.store.record_visit(key).await.map_err(|e| {
        STORAGE_ERRORS.inc();
        tracing::error!("storage error for {}: {}", key, e);
        (StatusCode::INTERNAL_SERVER_ERROR, format!("storage error: {}", e))
    })?;

    REQUEST_LATENCY.observe(start_time.elapsed().as_secs_f64());

    Ok(Html(format!(
        "visit-counter {}.<br /><br />This page has been accessed {} time(s).",
        env!("CARGO_PKG_VERSION"),
        visits
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SqliteVisitStore;

    async fn test_state() -> Arc<AppState> {
        let store = SqliteVisitStore::open_in_memory().await.unwrap();
        Arc::new(AppState {
            store: Arc::new(store),
        })
    }

    #[tokio::test]
    async fn response_reports_count_and_version() {
        let state = test_state().await;
        let uri: Uri = "/home".parse().unwrap();

        let Html(body) = visit_handler(State(Arc::clone(&state)), uri.clone())
            .await
            .unwrap();
        assert!(body.contains(env!("CARGO_PKG_VERSION")));
        assert!(body.contains("This page has been accessed 1 time(s)."));

        let Html(body) = visit_handler(State(state), uri).await.unwrap();
        assert!(body.contains("This page has been accessed 2 time(s)."));
    }

    #[tokio::test]
    async fn query_string_is_part_of_the_key() {
        let state = test_state().await;

        let first: Uri = "/page?id=1".parse().unwrap();
        let second: Uri = "/page?id=2".parse().unwrap();

        visit_handler(State(Arc::clone(&state)), first.clone())
            .await
            .unwrap();
        visit_handler(State(Arc::clone(&state)), first.clone())
            .await
            .unwrap();

        let Html(body) = visit_handler(State(Arc::clone(&state)), second)
            .await
            .unwrap();
        assert!(body.contains("accessed 1 time(s)"));

        let Html(body) = visit_handler(State(state), first).await.unwrap();
        assert!(body.contains("accessed 3 time(s)"));
    }
}
