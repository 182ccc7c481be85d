//! Open Graph and Twitter card tags.
//!
//! Every populated field becomes exactly one meta element. Open Graph uses
//! `property="og:*"`, Twitter uses `name="twitter:*"`.

use super::{HeadTags, named_meta};
use crate::element::Element;
use crate::types::TwitterCard;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OpenGraph {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
}

impl OpenGraph {
    /// Fill absent title, description and image from page-level values.
    pub fn or_fallback(
        &self,
        title: Option<&str>,
        description: Option<&str>,
        image: Option<&str>,
    ) -> Self {
        Self {
            title: fallback(&self.title, title),
            description: fallback(&self.description, description),
            image: fallback(&self.image, image),
            ..self.clone()
        }
    }
}

impl HeadTags for OpenGraph {
    fn push_tags(&self, out: &mut Vec<Element>) {
        let fields = [
            ("og:title", &self.title),
            ("og:description", &self.description),
            ("og:image", &self.image),
            ("og:url", &self.url),
            ("og:type", &self.r#type),
        ];
        for (property, value) in fields {
            if let Some(content) = value {
                out.push(
                    Element::new("meta")
                        .with_attr("property", property)
                        .with_attr("content", content),
                );
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Twitter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<TwitterCard>,
}

impl Twitter {
    /// Fill absent title, description and image from page-level values.
    pub fn or_fallback(
        &self,
        title: Option<&str>,
        description: Option<&str>,
        image: Option<&str>,
    ) -> Self {
        Self {
            title: fallback(&self.title, title),
            description: fallback(&self.description, description),
            image: fallback(&self.image, image),
            card: self.card,
        }
    }
}

impl HeadTags for Twitter {
    fn push_tags(&self, out: &mut Vec<Element>) {
        let fields = [
            ("twitter:title", self.title.as_deref()),
            ("twitter:description", self.description.as_deref()),
            ("twitter:image", self.image.as_deref()),
            ("twitter:card", self.card.map(TwitterCard::as_str)),
        ];
        for (name, value) in fields {
            if let Some(content) = value {
                out.push(named_meta(name, content));
            }
        }
    }
}

fn fallback(own: &Option<String>, page: Option<&str>) -> Option<String> {
    own.clone().or_else(|| page.map(str::to_string))
}
