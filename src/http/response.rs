//! Turning route outcomes into HTTP responses.
//!
//! # Design Decisions
//! - A redirect answers 307 with the final path, so the address bar shows
//!   the same location a client-side redirect would
//! - The query string survives a redirect
//! - Not-found is a 404 with a placeholder page, never an empty body

use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::routing::RouteMatch;
use crate::views::render_not_found;

/// Characters escaped in a path placed into a `Location` header.
const PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Respond to a resolved outcome, carrying `query` over to a redirect target.
pub fn page_response(outcome: RouteMatch, query: Option<&str>) -> Response {
    match outcome {
        RouteMatch::Found {
            path,
            redirected_from: Some(_),
            ..
        } => Redirect::temporary(&location(&path, query)).into_response(),
        other => other.into_response(),
    }
}

/// Build a `Location` value: the encoded path plus the raw query, if any.
pub fn location(path: &str, query: Option<&str>) -> String {
    let path = utf8_percent_encode(path, PATH).to_string();
    match query {
        Some(q) if !q.is_empty() => format!("{}?{}", path, q),
        _ => path,
    }
}

impl IntoResponse for RouteMatch {
    fn into_response(self) -> Response {
        match self {
            RouteMatch::Found {
                path,
                redirected_from: Some(_),
                ..
            } => Redirect::temporary(&location(&path, None)).into_response(),
            RouteMatch::Found { view, .. } => (
                [(header::CACHE_CONTROL, "no-cache")],
                Html(view.render()),
            )
                .into_response(),
            RouteMatch::NotFound { path } => {
                (StatusCode::NOT_FOUND, Html(render_not_found(&path))).into_response()
            }
        }
    }
}
