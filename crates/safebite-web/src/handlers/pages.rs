//! Page handlers serving the single page application shell

use axum::response::Html;

/// The SPA shell. Every page route serves the same document; the
/// client-side router picks the view from the path.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../templates/index.html"))
}

#[cfg(test)]
mod tests {
    #[tokio::test]
    async fn test_index_serves_the_shell() {
        let page = super::index().await;
        assert!(page.0.contains("SafeBite"));
        assert!(page.0.contains("/pkg/safebite_app.js"));
    }
}
