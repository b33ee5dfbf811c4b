//! View identifiers and their placeholder pages.
//!
//! # Responsibilities
//! - Enumerate every view the router can display
//! - Bind each identifier to its page at compile time
//! - Provide the not-found placeholder for unmatched paths
//!
//! # Design Decisions
//! - Views are a closed enum, not string-keyed lookups
//! - The router only holds a `ViewId`; rendering lives here

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifies a view the router can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewId {
    Test1,
    Test2,
    Test3,
}

impl ViewId {
    /// All known views, in declaration order.
    pub const ALL: [ViewId; 3] = [ViewId::Test1, ViewId::Test2, ViewId::Test3];

    /// Identifier as written in config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewId::Test1 => "Test1",
            ViewId::Test2 => "Test2",
            ViewId::Test3 => "Test3",
        }
    }

    /// Page heading shown when the view is active.
    pub fn title(&self) -> &'static str {
        match self {
            ViewId::Test1 => "Test Page One",
            ViewId::Test2 => "Test Page Two",
            ViewId::Test3 => "Test Page Three",
        }
    }

    /// Render the placeholder page for this view.
    pub fn render(&self) -> String {
        page(
            self.title(),
            &format!(
                r#"<main data-view="{}"><h1>{}</h1></main>"#,
                self.as_str(),
                self.title()
            ),
        )
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known view.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown view: {0}")]
pub struct UnknownView(pub String);

impl FromStr for ViewId {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewId::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownView(s.to_string()))
    }
}

/// Render the placeholder page for a path with no route.
pub fn render_not_found(path: &str) -> String {
    page(
        "Not Found",
        &format!(
            r#"<main data-view="NotFound"><h1>Not Found</h1><p>No page at <code>{}</code></p></main>"#,
            escape_html(path)
        ),
    )
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>{}</title></head><body>{}</body></html>\n",
        title, body
    )
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
