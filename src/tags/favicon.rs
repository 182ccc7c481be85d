//! Favicons.
//!
//! A favicon is a [`Link`] whose `rel`, `type` and `sizes` come from a
//! [`FaviconPreset`] unless set explicitly:
//!
//! | Preset | rel | type | sizes |
//! |--------|-----|------|-------|
//! | `ico` | `icon` | `image/x-icon` | `any` |
//! | `png` | `icon` | `image/png` | |
//! | `svg` | `icon` | `image/svg+xml` | |
//! | `apple` | `apple-touch-icon` | | |
//!
//! `sizes` resolves as: explicit `sizes`, else `size` as `NxN`, else the
//! preset default.

use super::HeadTags;
use super::link::Link;
use crate::element::Element;
use crate::types::{As, CrossOrigin, FaviconPreset, FetchPriority, ReferrerPolicy};
use serde::{Deserialize, Serialize};

/// A favicon link. Carries every optional [`Link`] attribute; `rel`, `type`
/// and `sizes` fall back to the preset when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Favicon {
    pub preset: FaviconPreset,
    pub href: String,
    /// Square edge length in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,
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

impl FaviconPreset {
    fn rel(self) -> &'static str {
        match self {
            FaviconPreset::Apple => "apple-touch-icon",
            _ => "icon",
        }
    }

    fn mime(self) -> Option<&'static str> {
        match self {
            FaviconPreset::Ico => Some("image/x-icon"),
            FaviconPreset::Png => Some("image/png"),
            FaviconPreset::Svg => Some("image/svg+xml"),
            FaviconPreset::Apple => None,
        }
    }

    fn sizes(self) -> Option<&'static str> {
        match self {
            FaviconPreset::Ico => Some("any"),
            _ => None,
        }
    }
}

impl Favicon {
    pub fn new(preset: FaviconPreset, href: impl Into<String>) -> Self {
        Self {
            preset,
            href: href.into(),
            size: None,
            rel: None,
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

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// The link this favicon resolves to once preset defaults are applied.
    pub fn to_link(&self) -> Link {
        let sizes = self
            .sizes
            .clone()
            .or_else(|| self.size.map(|px| format!("{px}x{px}")))
            .or_else(|| self.preset.sizes().map(str::to_string));
        Link {
            r#type: self
                .r#type
                .clone()
                .or_else(|| self.preset.mime().map(str::to_string)),
            sizes,
            r#as: self.r#as,
            blocking: self.blocking.clone(),
            crossorigin: self.crossorigin,
            disabled: self.disabled,
            fetchpriority: self.fetchpriority,
            hreflang: self.hreflang.clone(),
            imagesizes: self.imagesizes.clone(),
            imagesrcset: self.imagesrcset.clone(),
            integrity: self.integrity.clone(),
            media: self.media.clone(),
            referrerpolicy: self.referrerpolicy,
            title: self.title.clone(),
            rel: self
                .rel
                .clone()
                .unwrap_or_else(|| self.preset.rel().to_string()),
            href: self.href.clone(),
        }
    }
}

impl HeadTags for Favicon {
    fn push_tags(&self, out: &mut Vec<Element>) {
        self.to_link().push_tags(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::render_html;

    #[test]
    fn apple_without_size_has_no_sizes() {
        let link = Favicon::new(FaviconPreset::Apple, "/apple-touch-icon.png").to_link();
        assert_eq!(link.rel, "apple-touch-icon");
        assert_eq!(link.sizes, None);
        assert_eq!(link.r#type, None);
    }

    #[test]
    fn png_with_size() {
        let favicon = Favicon::new(FaviconPreset::Png, "/favicon-32.png").with_size(32);
        assert_eq!(
            render_html(&favicon).into_string(),
            r#"<link rel="icon" href="/favicon-32.png" sizes="32x32" type="image/png">"#
        );
    }

    #[test]
    fn ico_defaults() {
        let link = Favicon::new(FaviconPreset::Ico, "/favicon.ico").to_link();
        assert_eq!(link.rel, "icon");
        assert_eq!(link.r#type.as_deref(), Some("image/x-icon"));
        assert_eq!(link.sizes.as_deref(), Some("any"));
    }

    #[test]
    fn svg_defaults() {
        let link = Favicon::new(FaviconPreset::Svg, "/icon.svg").to_link();
        assert_eq!(link.r#type.as_deref(), Some("image/svg+xml"));
        assert_eq!(link.sizes, None);
    }

    #[test]
    fn size_overrides_preset_sizes() {
        let link = Favicon::new(FaviconPreset::Ico, "/favicon.ico")
            .with_size(48)
            .to_link();
        assert_eq!(link.sizes.as_deref(), Some("48x48"));
    }

    #[test]
    fn explicit_fields_win() {
        let favicon = Favicon {
            rel: Some("mask-icon".to_string()),
            r#type: Some("image/svg+xml".to_string()),
            sizes: Some("16x16 32x32".to_string()),
            ..Favicon::new(FaviconPreset::Png, "/mask.svg").with_size(32)
        };
        let link = favicon.to_link();
        assert_eq!(link.rel, "mask-icon");
        assert_eq!(link.sizes.as_deref(), Some("16x16 32x32"));
    }

    #[test]
    fn link_attributes_pass_through() {
        let favicon: Favicon = toml::from_str(
            r#"
preset = "png"
href = "/f.png"
crossorigin = ""
fetchpriority = "high"
title = "Logo"
"#,
        )
        .unwrap();
        assert_eq!(favicon.crossorigin, Some(CrossOrigin::Empty));
        assert_eq!(
            render_html(&favicon).into_string(),
            r#"<link rel="icon" href="/f.png" crossorigin fetchpriority="high" title="Logo" type="image/png">"#
        );
    }

    #[test]
    fn anonymous_crossorigin_on_apple_icon() {
        let favicon = Favicon {
            crossorigin: Some(CrossOrigin::Anonymous),
            ..Favicon::new(FaviconPreset::Apple, "/apple.png")
        };
        let link = favicon.to_link();
        assert_eq!(link.crossorigin, Some(CrossOrigin::Anonymous));
        assert_eq!(link.rel, "apple-touch-icon");
    }

    #[test]
    fn parses_from_toml() {
        let favicon: Favicon = toml::from_str(
            r#"
preset = "apple"
href = "/apple.png"
size = 180
"#,
        )
        .unwrap();
        assert_eq!(favicon.preset, FaviconPreset::Apple);
        assert_eq!(favicon.to_link().sizes.as_deref(), Some("180x180"));
    }
}
