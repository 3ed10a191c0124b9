use axum::http::StatusCode;
use axum::response::Html;

pub async fn not_found() -> (StatusCode, Html<&'static str>) {
    (StatusCode::NOT_FOUND, Html(include_str!("not_found.html")))
}
