//! CLI output formatting.
//!
//! Each command has a `format_*` function that returns lines, and a
//! `print_*` wrapper that writes them to stdout. Format functions are pure
//! so the display can be tested without capturing stdout.
//!
//! ## Render
//!
//! ```text
//! ==> about.toml (4 tags)
//! <title>About | Site</title>
//! <meta name="description" content="About us">
//! <meta name="robots" content="index, follow">
//! <link rel="canonical" href="https://example.com/about/">
//! ```
//!
//! ## Check
//!
//! ```text
//! about.toml
//!     Title: About | Site
//!     Robots: index, follow
//!     Favicons: 2
//!     Open Graph: 3 tags
//! ```

use crate::element::Element;
use crate::head::Head;
use crate::tags::HeadTags;
use maud::Render;

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn tag_count(n: usize) -> String {
    match n {
        1 => "1 tag".to_string(),
        n => format!("{n} tags"),
    }
}

/// Format rendered elements as HTML, one element per line.
pub fn format_render_output(label: &str, elements: &[Element]) -> Vec<String> {
    let mut lines = vec![format!("==> {} ({})", label, tag_count(elements.len()))];
    lines.extend(elements.iter().map(|el| el.render().into_string()));
    lines
}

/// Print rendered elements to stdout.
pub fn print_render_output(label: &str, elements: &[Element]) {
    for line in format_render_output(label, elements) {
        println!("{}", line);
    }
}

/// Format a summary of which families a head populates.
pub fn format_check_output(label: &str, head: &Head) -> Vec<String> {
    let mut lines = vec![label.to_string()];
    let mut field = |name: &str, value: String| {
        lines.push(format!("{}{}: {}", indent(1), name, value));
    };

    if let Some(title) = head.title_tag() {
        field("Title", title.text());
    }
    if let Some(description) = &head.description {
        field("Description", description.clone());
    }
    if !head.keywords.is_empty() {
        field("Keywords", head.keywords.join(", "));
    }
    if let Some(author) = &head.author {
        field("Author", author.clone());
    }
    if let Some(robots) = head.robots().content() {
        field("Robots", robots);
    }
    if let Some(canonical) = &head.canonical {
        field("Canonical", canonical.clone());
    }
    if let Some(color) = &head.theme_color {
        field("Theme color", color.clone());
    }
    if !head.favicons.is_empty() {
        field("Favicons", head.favicons.len().to_string());
    }
    if let Some(og) = head.open_graph_tags() {
        field("Open Graph", tag_count(og.tags().len()));
    }
    if let Some(twitter) = head.twitter_tags() {
        field("Twitter", tag_count(twitter.tags().len()));
    }
    if !head.meta.is_empty() {
        field("Meta", head.meta.len().to_string());
    }
    if !head.links.is_empty() {
        field("Links", head.links.len().to_string());
    }
    if !head.scripts.is_empty() {
        field("Scripts", head.scripts.len().to_string());
    }

    if lines.len() == 1 {
        lines.push(format!("{}(empty)", indent(1)));
    }
    lines
}

/// Print a head summary to stdout.
pub fn print_check_output(label: &str, head: &Head) {
    for line in format_check_output(label, head) {
        println!("{}", line);
    }
}
