//! The `Head` aggregate.
//!
//! One struct with an optional field per family, so a page can describe its
//! whole `<head>` in one value (or one TOML file) instead of composing many
//! render calls. Each field maps onto the family of the same name; absent
//! fields render nothing.
//!
//! ## Document order
//!
//! ```text
//! meta*            extra <meta> entries (charset, viewport, ...)
//! title            <title>, templated
//! description      <meta name="description">
//! keywords         <meta name="keywords">
//! author           <meta name="author">
//! index/follow     <meta name="robots">
//! canonical        <link rel="canonical">
//! theme_color      <meta name="theme-color">
//! favicons*        <link rel="icon" ...>
//! open_graph       <meta property="og:*">
//! twitter          <meta name="twitter:*">
//! links*           extra <link> entries
//! scripts*         extra <script> entries
//! ```
//!
//! ## Social fallbacks
//!
//! When `open_graph` or `twitter` is present, their missing `title`,
//! `description` and `image` are taken from the page-level `title` (the raw
//! value, not the templated text), `description` and `image`. Without an
//! `open_graph`/`twitter` table no social tags are emitted at all.

use crate::element::Element;
use crate::tags::{
    Author, Canonical, Description, Favicon, HeadTags, Keywords, Link, Meta, OpenGraph, Robots,
    Script, ThemeColor, Title, Twitter,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Head {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Title template, e.g. `"%s | My Site"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Page image used as the social fallback.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_color: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub favicons: Vec<Favicon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph: Option<OpenGraph>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<Twitter>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub meta: Vec<Meta>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scripts: Vec<Script>,
}

impl Head {
    pub fn title_tag(&self) -> Option<Title> {
        self.title.as_ref().map(|value| Title {
            value: value.clone(),
            template: self.template.clone(),
        })
    }

    pub fn robots(&self) -> Robots {
        Robots::new(self.index, self.follow)
    }

    /// Open Graph table with page-level fallbacks applied.
    pub fn open_graph_tags(&self) -> Option<OpenGraph> {
        self.open_graph.as_ref().map(|og| {
            og.or_fallback(
                self.title.as_deref(),
                self.description.as_deref(),
                self.image.as_deref(),
            )
        })
    }

    /// Twitter table with page-level fallbacks applied.
    pub fn twitter_tags(&self) -> Option<Twitter> {
        self.twitter.as_ref().map(|twitter| {
            twitter.or_fallback(
                self.title.as_deref(),
                self.description.as_deref(),
                self.image.as_deref(),
            )
        })
    }
}

impl HeadTags for Head {
    fn push_tags(&self, out: &mut Vec<Element>) {
        self.meta.push_tags(out);
        self.title_tag().push_tags(out);
        Description {
            value: self.description.clone(),
        }
        .push_tags(out);
        Keywords {
            value: self.keywords.clone(),
        }
        .push_tags(out);
        Author {
            value: self.author.clone(),
        }
        .push_tags(out);
        self.robots().push_tags(out);
        Canonical {
            value: self.canonical.clone(),
        }
        .push_tags(out);
        self.theme_color.clone().map(ThemeColor::new).push_tags(out);
        self.favicons.push_tags(out);
        self.open_graph_tags().push_tags(out);
        self.twitter_tags().push_tags(out);
        self.links.push_tags(out);
        self.scripts.push_tags(out);
    }
}
