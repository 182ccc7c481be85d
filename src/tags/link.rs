//! `<link>` elements.

use super::HeadTags;
use crate::element::Element;
use crate::types::{As, CrossOrigin, FetchPriority, ReferrerPolicy};
use serde::{Deserialize, Serialize};

/// A `<link>`. `rel` and `href` are always emitted, everything else only when set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Link {
    pub rel: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#as: Option<As>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocking: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crossorigin: Option<CrossOrigin>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetchpriority: Option<FetchPriority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hreflang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imagesizes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imagesrcset: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integrity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referrerpolicy: Option<ReferrerPolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
}

impl Link {
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
            r#as: None,
            blocking: None,
            crossorigin: None,
            disabled: None,
            fetchpriority: None,
            hreflang: None,
            imagesizes: None,
            imagesrcset: None,
            integrity: None,
            media: None,
            referrerpolicy: None,
            sizes: None,
            title: None,
            r#type: None,
        }
    }

    pub fn to_element(&self) -> Element {
        let link = Element::new("link")
            .with_attr("rel", &self.rel)
            .with_attr("href", &self.href)
            .with_opt_attr("as", self.r#as.map(As::as_str))
            .with_opt_attr("blocking", self.blocking.as_ref());
        with_crossorigin(link, self.crossorigin)
            .with_flag("disabled", self.disabled.unwrap_or(false))
            .with_opt_attr("fetchpriority", self.fetchpriority.map(FetchPriority::as_str))
            .with_opt_attr("hreflang", self.hreflang.as_ref())
            .with_opt_attr("imagesizes", self.imagesizes.as_ref())
            .with_opt_attr("imagesrcset", self.imagesrcset.as_ref())
            .with_opt_attr("integrity", self.integrity.as_ref())
            .with_opt_attr("media", self.media.as_ref())
            .with_opt_attr(
                "referrerpolicy",
                self.referrerpolicy.map(ReferrerPolicy::as_str),
            )
            .with_opt_attr("sizes", self.sizes.as_ref())
            .with_opt_attr("title", self.title.as_ref())
            .with_opt_attr("type", self.r#type.as_ref())
    }
}

impl HeadTags for Link {
    fn push_tags(&self, out: &mut Vec<Element>) {
        out.push(self.to_element());
    }
}

/// Apply `crossorigin` to any element, bare when the mode is [`CrossOrigin::Empty`].
pub(crate) fn with_crossorigin(element: Element, mode: Option<CrossOrigin>) -> Element {
    match mode.map(CrossOrigin::value) {
        Some(Some(value)) => element.with_attr("crossorigin", value),
        Some(None) => element.with_flag("crossorigin", true),
        None => element,
    }
}
