//! `<script>` elements, external or inline.

use super::HeadTags;
use super::link::with_crossorigin;
use crate::element::Element;
use crate::types::{CrossOrigin, FetchPriority, ReferrerPolicy, ScriptType};
use serde::{Deserialize, Serialize};

/// A script. `body` is inline source and is written without escaping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Script {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<ScriptType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#async: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crossorigin: Option<CrossOrigin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integrity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributionsrc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocking: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetchpriority: Option<FetchPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nomodule: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrerpolicy: Option<ReferrerPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl Script {
    pub fn external(src: impl Into<String>) -> Self {
        Self {
            src: Some(src.into()),
            ..Self::default()
        }
    }

    pub fn inline(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
            ..Self::default()
        }
    }

    pub fn module(src: impl Into<String>) -> Self {
        Self {
            r#type: Some(ScriptType::Module),
            ..Self::external(src)
        }
    }
}

impl HeadTags for Script {
    /// A script with neither `src` nor `body` has nothing to run and emits nothing.
    fn push_tags(&self, out: &mut Vec<Element>) {
        if self.src.is_none() && self.body.is_none() {
            return;
        }
        let script = Element::new("script")
            .with_opt_attr("src", self.src.as_ref())
            .with_opt_attr("type", self.r#type.as_ref().map(ScriptType::as_str))
            .with_flag("async", self.r#async.unwrap_or(false))
            .with_flag("defer", self.defer.unwrap_or(false));
        let script = with_crossorigin(script, self.crossorigin)
            .with_opt_attr("integrity", self.integrity.as_ref())
            .with_opt_attr("attributionsrc", self.attributionsrc.as_ref())
            .with_opt_attr("blocking", self.blocking.as_ref())
            .with_opt_attr("fetchpriority", self.fetchpriority.map(FetchPriority::as_str))
            .with_flag("nomodule", self.nomodule.unwrap_or(false))
            .with_opt_attr("nonce", self.nonce.as_ref())
            .with_opt_attr(
                "referrerpolicy",
                self.referrerpolicy.map(ReferrerPolicy::as_str),
            );
        out.push(match &self.body {
            Some(body) => script.with_raw(body),
            None => script,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::render_html;

    #[test]
    fn empty_script_renders_nothing() {
        assert!(Script::default().tags().is_empty());
    }

    #[test]
    fn external_module_with_flags() {
        let script = Script {
            r#async: Some(true),
            defer: Some(false),
            crossorigin: Some(CrossOrigin::Anonymous),
            ..Script::module("/app.js")
        };
        assert_eq!(
            render_html(&script).into_string(),
            r#"<script src="/app.js" type="module" async crossorigin="anonymous"></script>"#
        );
    }

    #[test]
    fn inline_body_not_escaped() {
        let script = Script {
            r#type: Some(ScriptType::ImportMap),
            ..Script::inline(r#"{"imports":{"lit":"/lit.js"}}"#)
        };
        assert_eq!(
            render_html(&script).into_string(),
            r#"<script type="importmap">{"imports":{"lit":"/lit.js"}}</script>"#
        );
    }

    #[test]
    fn nomodule_and_nonce() {
        let script = Script {
            nomodule: Some(true),
            nonce: Some("abc123".to_string()),
            ..Script::external("/legacy.js")
        };
        let el = &script.tags()[0];
        assert_eq!(el.get("nomodule"), Some(None));
        assert_eq!(el.get("nonce"), Some(Some("abc123")));
    }

    #[test]
    fn custom_type_from_toml() {
        let script: Script = toml::from_str(
            r#"
src = "/analytics.js"
type = "text/partytown"
defer = true
"#,
        )
        .unwrap();
        assert_eq!(
            script.r#type,
            Some(ScriptType::Other("text/partytown".to_string()))
        );
        assert_eq!(
            render_html(&script).into_string(),
            r#"<script src="/analytics.js" type="text/partytown" defer></script>"#
        );
    }
}
