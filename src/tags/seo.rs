//! Single-value families: description, keywords, author, canonical URL and
//! theme color.
//!
//! Each wraps one value. The optional ones render nothing when empty.

use super::{HeadTags, named_meta};
use crate::element::Element;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Description {
    pub value: Option<String>,
}

impl Description {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}

impl HeadTags for Description {
    fn push_tags(&self, out: &mut Vec<Element>) {
        if let Some(value) = &self.value {
            out.push(named_meta("description", value));
        }
    }
}

/// Keywords, rendered as one comma-separated `content`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Keywords {
    pub value: Vec<String>,
}

impl Keywords {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            value: keywords.into_iter().map(Into::into).collect(),
        }
    }
}

impl HeadTags for Keywords {
    fn push_tags(&self, out: &mut Vec<Element>) {
        if !self.value.is_empty() {
            out.push(named_meta("keywords", self.value.join(", ")));
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Author {
    pub value: Option<String>,
}

impl Author {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}

impl HeadTags for Author {
    fn push_tags(&self, out: &mut Vec<Element>) {
        if let Some(value) = &self.value {
            out.push(named_meta("author", value));
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Canonical {
    pub value: Option<String>,
}

impl Canonical {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}

impl HeadTags for Canonical {
    fn push_tags(&self, out: &mut Vec<Element>) {
        if let Some(href) = &self.value {
            out.push(
                Element::new("link")
                    .with_attr("rel", "canonical")
                    .with_attr("href", href),
            );
        }
    }
}

/// Browser UI color. Unlike the others, a value is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeColor {
    pub value: String,
}

impl ThemeColor {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl HeadTags for ThemeColor {
    fn push_tags(&self, out: &mut Vec<Element>) {
        out.push(named_meta("theme-color", &self.value));
    }
}
