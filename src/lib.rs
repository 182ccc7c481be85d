//! # headkit
//!
//! Typed builders for the contents of an HTML `<head>`: meta tags, links,
//! scripts, the title, robots directives, favicons, canonical URLs, and Open
//! Graph / Twitter cards.
//!
//! # Architecture: Props → Descriptors → Markup
//!
//! ```text
//! 1. Props        Title, Link, Favicon, Head, ...   (typed values or TOML)
//! 2. Descriptors  Vec<Element>                       (tag, attributes, body)
//! 3. Markup       maud::Markup                       (escaped HTML)
//! ```
//!
//! Every family implements [`tags::HeadTags`]. Rendering is a pure function:
//! no state, no I/O, no failure path. Absent fields produce no attribute or
//! no element at all; constraints such as "a meta has exactly one of
//! `charset`, `name`, `property`, `http-equiv`" live in the types.
//!
//! ```rust
//! use headkit::head::Head;
//! use headkit::tags::render_html;
//!
//! let head = Head {
//!     title: Some("Home".into()),
//!     template: Some("%s | My Site".into()),
//!     index: Some(true),
//!     follow: Some(false),
//!     ..Head::default()
//! };
//! assert_eq!(
//!     render_html(&head).into_string(),
//!     r#"<title>Home | My Site</title><meta name="robots" content="index, nofollow">"#,
//! );
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`element`] | `Element` descriptor and its `maud::Render` serialization |
//! | [`tags`] | The `HeadTags` trait and one module per tag family |
//! | [`head`] | `Head`, the aggregate of every family |
//! | [`types`] | Shared attribute enumerations (`As`, `CrossOrigin`, ...) |
//! | [`config`] | Layered `head.toml` loading, merging, and validation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Descriptors Before Text
//!
//! Families return `Element` values rather than strings, so callers can
//! inspect, filter, or reorder tags before serializing, and tests can assert
//! on attributes instead of substrings.
//!
//! ## Maud for Serialization
//!
//! `Element` implements `maud::Render`. Descriptors interpolate into any
//! maud template, and all attribute values and title text go through maud's
//! escaper. Inline script bodies are the one raw path.

pub mod config;
pub mod element;
pub mod head;
pub mod output;
pub mod tags;
pub mod types;
