use axum::response::Html;

/// GET /
/// The trainer page. It keeps the current puzzle client-side.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
