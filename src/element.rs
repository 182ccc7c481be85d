//! Element descriptors.
//!
//! An [`Element`] is the output of every tag family: a tag name, an ordered
//! list of attributes and an optional body. Descriptors are plain values.
//! They are built once by a family's [`HeadTags`](crate::tags::HeadTags)
//! implementation and never changed afterwards.
//!
//! ## Serialization
//!
//! `Element` implements [`maud::Render`], so it can be interpolated directly
//! into a maud template:
//!
//! ```rust
//! use headkit::element::Element;
//! use maud::html;
//!
//! let meta = Element::new("meta")
//!     .with_attr("name", "author")
//!     .with_attr("content", "Ada");
//! let markup = html! { head { (meta) } };
//! assert_eq!(markup.into_string(), r#"<head><meta name="author" content="Ada"></head>"#);
//! ```
//!
//! Attribute values and text bodies go through maud's escaper. Raw bodies
//! (inline scripts) are written verbatim.

use maud::Render;
use serde::Serialize;

/// Elements that never carry a body or a closing tag.
const VOID_TAGS: &[&str] = &["base", "link", "meta"];

/// One attribute on an element.
///
/// `value: None` is a boolean attribute rendered as a bare flag
/// (`<script async>`), never as `async="true"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attr {
    pub name: &'static str,
    pub value: Option<String>,
}

/// Element body content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "lowercase")]
pub enum Body {
    /// Text that is HTML-escaped on serialization.
    Text(String),
    /// Text written as-is (inline script source, import maps).
    Raw(String),
}

/// An immutable description of one HTML element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<Attr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<Body>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            body: None,
        }
    }

    /// Add an attribute with a value.
    pub fn with_attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push(Attr {
            name,
            value: Some(value.into()),
        });
        self
    }

    /// Add an attribute only when a value is present.
    pub fn with_opt_attr<S: AsRef<str>>(self, name: &'static str, value: Option<S>) -> Self {
        match value {
            Some(v) => self.with_attr(name, v.as_ref()),
            None => self,
        }
    }

    /// Add a boolean attribute when `on` is true.
    pub fn with_flag(mut self, name: &'static str, on: bool) -> Self {
        if on {
            self.attrs.push(Attr { name, value: None });
        }
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.body = Some(Body::Text(text.into()));
        self
    }

    pub fn with_raw(mut self, raw: impl Into<String>) -> Self {
        self.body = Some(Body::Raw(raw.into()));
        self
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }

    /// Value of the first attribute called `name`.
    ///
    /// Returns `Some(None)` for a flag attribute and `None` when the
    /// attribute is missing.
    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_deref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn body(&self) -> Option<&Body> {
        self.body.as_ref()
    }

    /// Body text, escaped or raw.
    pub fn text(&self) -> Option<&str> {
        match &self.body {
            Some(Body::Text(t)) | Some(Body::Raw(t)) => Some(t),
            None => None,
        }
    }

    fn is_void(&self) -> bool {
        VOID_TAGS.contains(&self.tag)
    }
}

impl Render for Element {
    fn render_to(&self, buffer: &mut String) {
        buffer.push('<');
        buffer.push_str(self.tag);
        for attr in &self.attrs {
            buffer.push(' ');
            buffer.push_str(attr.name);
            if let Some(value) = &attr.value {
                buffer.push_str("=\"");
                value.as_str().render_to(buffer);
                buffer.push('"');
            }
        }
        buffer.push('>');

        if self.is_void() {
            return;
        }
        match &self.body {
            Some(Body::Text(text)) => text.as_str().render_to(buffer),
            Some(Body::Raw(raw)) => buffer.push_str(raw),
            None => {}
        }
        buffer.push_str("</");
        buffer.push_str(self.tag);
        buffer.push('>');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn html(element: &Element) -> String {
        element.render().into_string()
    }

    #[test]
    fn void_element_has_no_closing_tag() {
        let el = Element::new("link")
            .with_attr("rel", "canonical")
            .with_attr("href", "https://example.com/");
        assert_eq!(html(&el), r#"<link rel="canonical" href="https://example.com/">"#);
    }

    #[test]
    fn attributes_keep_insertion_order() {
        let el = Element::new("meta")
            .with_attr("property", "og:title")
            .with_attr("content", "Home");
        let names: Vec<_> = el.attrs().iter().map(|a| a.name).collect();
        assert_eq!(names, ["property", "content"]);
    }

    #[test]
    fn optional_attribute_skipped_when_absent() {
        let el = Element::new("link")
            .with_opt_attr("media", None::<&str>)
            .with_opt_attr("title", Some("Feed"));
        assert!(!el.has("media"));
        assert_eq!(el.get("title"), Some(Some("Feed")));
    }

    #[test]
    fn flag_renders_bare() {
        let el = Element::new("script")
            .with_attr("src", "/app.js")
            .with_flag("async", true)
            .with_flag("defer", false);
        assert_eq!(html(&el), r#"<script src="/app.js" async></script>"#);
        assert_eq!(el.get("async"), Some(None));
        assert!(!el.has("defer"));
    }

    #[test]
    fn attribute_values_are_escaped() {
        let el = Element::new("meta")
            .with_attr("name", "description")
            .with_attr("content", r#"Fish & "Chips" <3"#);
        assert_eq!(
            html(&el),
            r#"<meta name="description" content="Fish &amp; &quot;Chips&quot; &lt;3">"#
        );
    }

    #[test]
    fn text_body_is_escaped() {
        let el = Element::new("title").with_text("<b>Home</b>");
        assert_eq!(html(&el), "<title>&lt;b&gt;Home&lt;/b&gt;</title>");
    }

    #[test]
    fn raw_body_is_verbatim() {
        let el = Element::new("script")
            .with_attr("type", "importmap")
            .with_raw(r#"{"imports":{"a":"/a.js"}}"#);
        assert_eq!(
            html(&el),
            r#"<script type="importmap">{"imports":{"a":"/a.js"}}</script>"#
        );
        assert_eq!(el.text(), Some(r#"{"imports":{"a":"/a.js"}}"#));
    }

    #[test]
    fn empty_attribute_value_rendered_as_is() {
        let el = Element::new("link").with_attr("rel", "icon").with_attr("href", "");
        assert_eq!(html(&el), r#"<link rel="icon" href="">"#);
    }

    #[test]
    fn serializes_to_json() {
        let el = Element::new("title").with_text("Home");
        let json = serde_json::to_value(&el).unwrap();
        assert_eq!(json["tag"], "title");
        assert_eq!(json["body"]["kind"], "text");
        assert_eq!(json["body"]["content"], "Home");
    }
}
