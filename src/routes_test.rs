use super::*;
use axum::body::{Body, to_bytes};
use axum::http::Request;
use tower::ServiceExt;

fn dist() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<html>admin shell</html>").unwrap();
    std::fs::write(dir.path().join("client-abc123.js"), "export default 1;").unwrap();
    dir
}

async fn get_body(dir: &Path, uri: &str) -> (StatusCode, String) {
    let response = app(dir)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

// =============================================================
// healthz
// =============================================================

#[tokio::test]
async fn healthz_is_ok() {
    let dir = dist();
    let (status, _) = get_body(dir.path(), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
}

// =============================================================
// static bundle
// =============================================================

#[tokio::test]
async fn root_serves_index() {
    let dir = dist();
    let (status, body) = get_body(dir.path(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("admin shell"));
}

#[tokio::test]
async fn bundle_files_are_served_directly() {
    let dir = dist();
    let (status, body) = get_body(dir.path(), "/client-abc123.js").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "export default 1;");
}

// =============================================================
// client-side routes
// =============================================================

#[tokio::test]
async fn client_routes_fall_back_to_index() {
    let dir = dist();
    for uri in ["/userlist", "/quizzes", "/login?from=%2Fcontacts", "/no/such/page"] {
        let (status, body) = get_body(dir.path(), uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(body.contains("admin shell"), "{uri}");
    }
}
