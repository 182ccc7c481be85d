//! The markup assembler: one module per tag family.
//!
//! Every family is a plain property struct implementing [`HeadTags`]. A
//! family appends zero or more [`Element`]s for its populated fields and
//! skips everything that is absent. There is no runtime validation here;
//! the types carry the constraints, and rendering cannot fail.
//!
//! | Module | Families |
//! |--------|----------|
//! | [`meta`] | `Meta` (charset, name, property, http-equiv) |
//! | [`link`] | `Link` |
//! | [`script`] | `Script` |
//! | [`title`] | `Title` with optional `%s` template |
//! | [`seo`] | `Description`, `Keywords`, `Author`, `Canonical`, `ThemeColor` |
//! | [`robots`] | `Robots`, `Index`, `Follow` |
//! | [`favicon`] | `Favicon` presets |
//! | [`social`] | `OpenGraph`, `Twitter` |

pub mod favicon;
pub mod link;
pub mod meta;
pub mod robots;
pub mod script;
pub mod seo;
pub mod social;
pub mod title;

use crate::element::Element;
use maud::{Markup, html};

pub use favicon::Favicon;
pub use link::Link;
pub use meta::{Meta, MetaError, MetaKey};
pub use robots::{Follow, Index, Robots};
pub use script::Script;
pub use seo::{Author, Canonical, Description, Keywords, ThemeColor};
pub use social::{OpenGraph, Twitter};
pub use title::Title;

/// A property object that maps onto head elements.
pub trait HeadTags {
    /// Append this value's elements to `out`, in document order.
    fn push_tags(&self, out: &mut Vec<Element>);

    fn tags(&self) -> Vec<Element> {
        let mut out = Vec::new();
        self.push_tags(&mut out);
        out
    }
}

impl<T: HeadTags + ?Sized> HeadTags for &T {
    fn push_tags(&self, out: &mut Vec<Element>) {
        (**self).push_tags(out);
    }
}

/// An absent family renders nothing.
impl<T: HeadTags> HeadTags for Option<T> {
    fn push_tags(&self, out: &mut Vec<Element>) {
        if let Some(props) = self {
            props.push_tags(out);
        }
    }
}

impl<T: HeadTags> HeadTags for [T] {
    fn push_tags(&self, out: &mut Vec<Element>) {
        for props in self {
            props.push_tags(out);
        }
    }
}

impl<T: HeadTags> HeadTags for Vec<T> {
    fn push_tags(&self, out: &mut Vec<Element>) {
        self.as_slice().push_tags(out);
    }
}

/// Render a property object into element descriptors.
pub fn render<T: HeadTags + ?Sized>(props: &T) -> Vec<Element> {
    props.tags()
}

/// Render a property object straight to markup.
pub fn render_html<T: HeadTags + ?Sized>(props: &T) -> Markup {
    let elements = props.tags();
    html! {
        @for element in &elements {
            (element)
        }
    }
}

/// `<meta name="..." content="...">`, the shape most families share.
pub(crate) fn named_meta(name: &'static str, content: impl Into<String>) -> Element {
    Element::new("meta")
        .with_attr("name", name)
        .with_attr("content", content)
}
