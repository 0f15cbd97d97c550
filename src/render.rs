//! Server-side page rendering.
//!
//! Pure mapping from the trending repository list to a static HTML document:
//! a title, a subtitle, one link card per repository in input order, and a
//! fixed footer. No templating engine; the markup is small enough to build
//! directly into a `String`.
//!
//! All upstream-sourced text goes through `escape_html` before landing in the
//! document, for element bodies and attribute values alike.

use crate::models::{Contributor, TrendingRepo};

const PAGE_TITLE: &str = "Trending Repos";
const PAGE_SUBTITLE: &str = "Find latest trending GitHub repositories.";
const CREDIT_URL: &str = "https://github.com/ptosbc";
const CREDIT_NAME: &str = "PTOS B. C.";

/// Render the full page for the given repository list.
pub fn render_page(repos: &[TrendingRepo]) -> String {
    let mut html = String::with_capacity(2048 + repos.len() * 512);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>");
    html.push_str(PAGE_TITLE);
    html.push_str("</title>\n");
    html.push_str("<link rel=\"stylesheet\" href=\"/assets/styles.css\">\n");
    html.push_str("</head>\n<body>\n<main>\n");

    html.push_str("<h1>");
    html.push_str(PAGE_TITLE);
    html.push_str("</h1>\n<p class=\"subtitle\">");
    html.push_str(PAGE_SUBTITLE);
    html.push_str("</p>\n");

    for repo in repos {
        render_card(&mut html, repo);
    }

    html.push_str("<footer>Made with ");
    html.push_str("<img class=\"heart\" src=\"/assets/heart.svg\" alt=\"love\" width=\"25\" height=\"25\">");
    html.push_str(" by <a href=\"");
    html.push_str(CREDIT_URL);
    html.push_str("\">");
    html.push_str(CREDIT_NAME);
    html.push_str("</a></footer>\n");

    html.push_str("</main>\n</body>\n</html>\n");
    html
}

/// Render one link card: identity, description, star and fork lines, avatars.
fn render_card(html: &mut String, repo: &TrendingRepo) {
    html.push_str("<a class=\"card\" href=\"");
    html.push_str(&escape_html(&repo.url));
    html.push_str("\">\n<h2>");
    html.push_str(&escape_html(&repo.author));
    html.push('/');
    html.push_str(&escape_html(&repo.name));
    html.push_str("</h2>\n<p class=\"description\">");
    html.push_str(&escape_html(&repo.description));
    html.push_str("</p>\n<p>Stars: ");
    html.push_str(&repo.stars.to_string());
    html.push_str(" (+");
    html.push_str(&escape_html(&repo.current_period_stars));
    html.push_str(")</p>\n<p>Forks: ");
    html.push_str(&escape_html(&repo.forks));
    html.push_str("</p>\n<div class=\"avatars\">");

    for contributor in &repo.built_by {
        render_avatar(html, contributor);
    }

    html.push_str("</div>\n</a>\n");
}

fn render_avatar(html: &mut String, contributor: &Contributor) {
    html.push_str("<a href=\"");
    html.push_str(&escape_html(&contributor.href));
    html.push_str("\"><img src=\"");
    html.push_str(&escape_html(&contributor.avatar));
    html.push_str("\" alt=\"");
    html.push_str(&escape_html(&contributor.username));
    html.push_str("\" width=\"32\" height=\"32\"></a>");
}

/// Minimal HTML escaping, safe for both text nodes and quoted attributes.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
