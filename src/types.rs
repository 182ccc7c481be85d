//! Shared attribute enumerations.
//!
//! These are the closed value sets that several tag families accept
//! (`crossorigin` appears on both links and scripts, for example). Each one
//! deserializes from, and renders as, its exact HTML attribute spelling.

use serde::{Deserialize, Serialize};

/// Resource destination for `<link rel="preload" as="...">`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum As {
    Audio,
    Document,
    Embed,
    Fetch,
    Font,
    Image,
    Object,
    Script,
    Style,
    Track,
    Video,
    Worker,
}

impl As {
    pub fn as_str(self) -> &'static str {
        match self {
            As::Audio => "audio",
            As::Document => "document",
            As::Embed => "embed",
            As::Fetch => "fetch",
            As::Font => "font",
            As::Image => "image",
            As::Object => "object",
            As::Script => "script",
            As::Style => "style",
            As::Track => "track",
            As::Video => "video",
            As::Worker => "worker",
        }
    }
}

/// CORS mode. `Empty` is the bare attribute, equivalent to `anonymous`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrossOrigin {
    #[serde(rename = "anonymous")]
    Anonymous,
    #[serde(rename = "use-credentials")]
    UseCredentials,
    #[serde(rename = "")]
    Empty,
}

impl CrossOrigin {
    /// Attribute value, or `None` for the bare form.
    pub fn value(self) -> Option<&'static str> {
        match self {
            CrossOrigin::Anonymous => Some("anonymous"),
            CrossOrigin::UseCredentials => Some("use-credentials"),
            CrossOrigin::Empty => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchPriority {
    High,
    Low,
    Auto,
}

impl FetchPriority {
    pub fn as_str(self) -> &'static str {
        match self {
            FetchPriority::High => "high",
            FetchPriority::Low => "low",
            FetchPriority::Auto => "auto",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferrerPolicy {
    NoReferrer,
    NoReferrerWhenDowngrade,
    Origin,
    OriginWhenCrossOrigin,
    SameOrigin,
    StrictOrigin,
    StrictOriginWhenCrossOrigin,
    UnsafeUrl,
}

impl ReferrerPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            ReferrerPolicy::NoReferrer => "no-referrer",
            ReferrerPolicy::NoReferrerWhenDowngrade => "no-referrer-when-downgrade",
            ReferrerPolicy::Origin => "origin",
            ReferrerPolicy::OriginWhenCrossOrigin => "origin-when-cross-origin",
            ReferrerPolicy::SameOrigin => "same-origin",
            ReferrerPolicy::StrictOrigin => "strict-origin",
            ReferrerPolicy::StrictOriginWhenCrossOrigin => "strict-origin-when-cross-origin",
            ReferrerPolicy::UnsafeUrl => "unsafe-url",
        }
    }
}

/// `<script type>`: the three special values, or any MIME type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ScriptType {
    ImportMap,
    Module,
    SpeculationRules,
    Other(String),
}

impl ScriptType {
    pub fn as_str(&self) -> &str {
        match self {
            ScriptType::ImportMap => "importmap",
            ScriptType::Module => "module",
            ScriptType::SpeculationRules => "speculationrules",
            ScriptType::Other(mime) => mime,
        }
    }
}

impl From<String> for ScriptType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "importmap" => ScriptType::ImportMap,
            "module" => ScriptType::Module,
            "speculationrules" => ScriptType::SpeculationRules,
            _ => ScriptType::Other(value),
        }
    }
}

impl From<&str> for ScriptType {
    fn from(value: &str) -> Self {
        ScriptType::from(value.to_string())
    }
}

impl From<ScriptType> for String {
    fn from(value: ScriptType) -> Self {
        match value {
            ScriptType::Other(mime) => mime,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TwitterCard {
    Summary,
    SummaryLargeImage,
}

impl TwitterCard {
    pub fn as_str(self) -> &'static str {
        match self {
            TwitterCard::Summary => "summary",
            TwitterCard::SummaryLargeImage => "summary_large_image",
        }
    }
}

/// Favicon variant. Selects the default `rel`, `type` and `sizes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaviconPreset {
    Ico,
    Png,
    Svg,
    Apple,
}
