//! Server-rendered pages.
//!
//! Each request renders [`SitePage`] for its path with the configured nav
//! tree and CTA, then wraps the markup in a full HTML document.

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse},
};
use dioxus::prelude::*;

use crate::api::AppState;
use crate::app::SitePage;

const SITE_TITLE: &str = "Zypp - Sustainable Last-Mile Delivery Solutions";
const SITE_DESCRIPTION: &str = "Zypp Electric provides sustainable last-mile delivery with electric vehicles, trained riders and smart routing.";

/// HTML document wrapper
fn html_doc(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{SITE_TITLE}</title>
    <meta name="description" content="{SITE_DESCRIPTION}">
    <meta property="og:title" content="{SITE_TITLE}">
    <meta property="og:type" content="website">
    <link rel="icon" href="/favicon.ico">
</head>
<body>
{body}
</body>
</html>"#
    )
}

/// Render the page for `path` to a complete document.
pub fn render_page(state: &AppState, path: &str) -> String {
    let body = dioxus::ssr::render_element(rsx! {
        SitePage {
            path: path.to_string(),
            tree: state.nav.clone(),
            cta: state.cta.clone(),
        }
    });
    html_doc(&body)
}

/// GET /
pub async fn home_page(State(state): State<AppState>) -> impl IntoResponse {
    Html(render_page(&state, "/"))
}

/// GET /{*path}
pub async fn section_page(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> impl IntoResponse {
    Html(render_page(&state, &format!("/{}", path)))
}
