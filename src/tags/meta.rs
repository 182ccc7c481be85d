//! Generic `<meta>` directives.
//!
//! A meta element is identified by exactly one of `charset`, `name`,
//! `property` or `http-equiv`, and all but `charset` need a `content`.
//! [`MetaKey`] makes any other combination unrepresentable. Values read from
//! TOML go through [`RawMeta`] and are checked once, at deserialization.

use super::HeadTags;
use crate::element::Element;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetaError {
    #[error("meta needs one of charset, name, property or http_equiv")]
    MissingKey,
    #[error("meta sets more than one of {0}; pick one")]
    ConflictingKeys(String),
    #[error("meta {0} requires content")]
    MissingContent(&'static str),
    #[error("meta charset does not take content")]
    ContentWithCharset,
}

/// The identifying attribute pair of a meta element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaKey {
    Charset(String),
    Name { name: String, content: String },
    Property { property: String, content: String },
    HttpEquiv { http_equiv: String, content: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMeta", into = "RawMeta")]
pub struct Meta {
    pub key: MetaKey,
    pub media: Option<String>,
}

impl Meta {
    pub fn charset(charset: impl Into<String>) -> Self {
        Self::from_key(MetaKey::Charset(charset.into()))
    }

    pub fn name(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self::from_key(MetaKey::Name {
            name: name.into(),
            content: content.into(),
        })
    }

    pub fn property(property: impl Into<String>, content: impl Into<String>) -> Self {
        Self::from_key(MetaKey::Property {
            property: property.into(),
            content: content.into(),
        })
    }

    pub fn http_equiv(http_equiv: impl Into<String>, content: impl Into<String>) -> Self {
        Self::from_key(MetaKey::HttpEquiv {
            http_equiv: http_equiv.into(),
            content: content.into(),
        })
    }

    pub fn with_media(mut self, media: impl Into<String>) -> Self {
        self.media = Some(media.into());
        self
    }

    fn from_key(key: MetaKey) -> Self {
        Self { key, media: None }
    }
}

impl HeadTags for Meta {
    fn push_tags(&self, out: &mut Vec<Element>) {
        let meta = Element::new("meta");
        let meta = match &self.key {
            MetaKey::Charset(charset) => meta.with_attr("charset", charset),
            MetaKey::Name { name, content } => {
                meta.with_attr("name", name).with_attr("content", content)
            }
            MetaKey::Property { property, content } => meta
                .with_attr("property", property)
                .with_attr("content", content),
            MetaKey::HttpEquiv {
                http_equiv,
                content,
            } => meta
                .with_attr("http-equiv", http_equiv)
                .with_attr("content", content),
        };
        out.push(meta.with_opt_attr("media", self.media.as_ref()));
    }
}

/// The flat, all-optional shape of a meta entry in a config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charset: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_equiv: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
}

impl TryFrom<RawMeta> for Meta {
    type Error = MetaError;

    fn try_from(raw: RawMeta) -> Result<Self, Self::Error> {
        let present: Vec<&str> = [
            ("charset", raw.charset.is_some()),
            ("name", raw.name.is_some()),
            ("property", raw.property.is_some()),
            ("http_equiv", raw.http_equiv.is_some()),
        ]
        .into_iter()
        .filter_map(|(field, set)| set.then_some(field))
        .collect();
        if present.len() > 1 {
            return Err(MetaError::ConflictingKeys(present.join(", ")));
        }

        let key = match (raw.charset, raw.name, raw.property, raw.http_equiv) {
            (Some(charset), _, _, _) => {
                if raw.content.is_some() {
                    return Err(MetaError::ContentWithCharset);
                }
                MetaKey::Charset(charset)
            }
            (_, Some(name), _, _) => MetaKey::Name {
                name,
                content: raw.content.ok_or(MetaError::MissingContent("name"))?,
            },
            (_, _, Some(property), _) => MetaKey::Property {
                property,
                content: raw.content.ok_or(MetaError::MissingContent("property"))?,
            },
            (_, _, _, Some(http_equiv)) => MetaKey::HttpEquiv {
                http_equiv,
                content: raw.content.ok_or(MetaError::MissingContent("http_equiv"))?,
            },
            (None, None, None, None) => return Err(MetaError::MissingKey),
        };
        Ok(Meta {
            key,
            media: raw.media,
        })
    }
}

impl From<Meta> for RawMeta {
    fn from(meta: Meta) -> Self {
        let mut raw = RawMeta {
            media: meta.media,
            ..RawMeta::default()
        };
        match meta.key {
            MetaKey::Charset(charset) => raw.charset = Some(charset),
            MetaKey::Name { name, content } => {
                raw.name = Some(name);
                raw.content = Some(content);
            }
            MetaKey::Property { property, content } => {
                raw.property = Some(property);
                raw.content = Some(content);
            }
            MetaKey::HttpEquiv {
                http_equiv,
                content,
            } => {
                raw.http_equiv = Some(http_equiv);
                raw.content = Some(content);
            }
        }
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maud::Render;

    fn html(meta: &Meta) -> String {
        meta.tags()[0].render().into_string()
    }

    #[test]
    fn charset_meta() {
        assert_eq!(html(&Meta::charset("utf-8")), r#"<meta charset="utf-8">"#);
    }

    #[test]
    fn name_meta_with_media() {
        let meta = Meta::name("color-scheme", "dark").with_media("(prefers-color-scheme: dark)");
        assert_eq!(
            html(&meta),
            r#"<meta name="color-scheme" content="dark" media="(prefers-color-scheme: dark)">"#
        );
    }

    #[test]
    fn http_equiv_uses_hyphenated_attribute() {
        let meta = Meta::http_equiv("refresh", "30");
        assert_eq!(html(&meta), r#"<meta http-equiv="refresh" content="30">"#);
    }

    #[test]
    fn one_meta_one_element() {
        assert_eq!(Meta::property("og:locale", "en_GB").tags().len(), 1);
    }

    #[test]
    fn parses_property_meta() {
        let meta: Meta = toml::from_str(
            r#"
property = "og:site_name"
content = "Example"
"#,
        )
        .unwrap();
        assert_eq!(meta, Meta::property("og:site_name", "Example"));
    }

    #[test]
    fn rejects_two_keys() {
        let raw = RawMeta {
            name: Some("a".into()),
            property: Some("b".into()),
            content: Some("c".into()),
            ..RawMeta::default()
        };
        assert_eq!(
            Meta::try_from(raw),
            Err(MetaError::ConflictingKeys("name, property".into()))
        );
    }

    #[test]
    fn rejects_missing_content() {
        let raw = RawMeta {
            name: Some("author".into()),
            ..RawMeta::default()
        };
        assert_eq!(Meta::try_from(raw), Err(MetaError::MissingContent("name")));
    }

    #[test]
    fn rejects_content_with_charset() {
        let raw = RawMeta {
            charset: Some("utf-8".into()),
            content: Some("x".into()),
            ..RawMeta::default()
        };
        assert_eq!(Meta::try_from(raw), Err(MetaError::ContentWithCharset));
    }

    #[test]
    fn rejects_empty_entry() {
        assert_eq!(Meta::try_from(RawMeta::default()), Err(MetaError::MissingKey));
    }

    #[test]
    fn toml_error_mentions_meta_problem() {
        let err = toml::from_str::<Meta>(r#"name = "author""#).unwrap_err();
        assert!(err.to_string().contains("requires content"));
    }
}
