use axum::response::Html;

pub async fn privacy_policy() -> Html<&'static str> {
    Html(include_str!("privacy_policy.html"))
}
