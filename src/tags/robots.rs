//! Robots directives.
//!
//! `index` and `follow` are two independent switches that share one element:
//!
//! ```text
//! index: true,  follow: false  →  <meta name="robots" content="index, nofollow">
//! index: false, follow: true   →  <meta name="robots" content="noindex, follow">
//! index: false                 →  <meta name="robots" content="noindex">
//! (neither)                    →  nothing
//! ```

use super::{HeadTags, named_meta};
use crate::element::Element;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Robots {
    pub index: Option<bool>,
    pub follow: Option<bool>,
}

impl Robots {
    pub fn new(index: Option<bool>, follow: Option<bool>) -> Self {
        Self { index, follow }
    }

    /// The `content` string, or `None` when no directive is set.
    pub fn content(&self) -> Option<String> {
        let tokens: Vec<&str> = [
            self.index.map(|on| if on { "index" } else { "noindex" }),
            self.follow.map(|on| if on { "follow" } else { "nofollow" }),
        ]
        .into_iter()
        .flatten()
        .collect();
        (!tokens.is_empty()).then(|| tokens.join(", "))
    }
}

impl HeadTags for Robots {
    fn push_tags(&self, out: &mut Vec<Element>) {
        if let Some(content) = self.content() {
            out.push(named_meta("robots", content));
        }
    }
}

/// The `index`/`noindex` directive on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Index {
    pub value: bool,
}

impl HeadTags for Index {
    fn push_tags(&self, out: &mut Vec<Element>) {
        Robots::new(Some(self.value), None).push_tags(out);
    }
}

/// The `follow`/`nofollow` directive on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Follow {
    pub value: bool,
}

impl HeadTags for Follow {
    fn push_tags(&self, out: &mut Vec<Element>) {
        Robots::new(None, Some(self.value)).push_tags(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::render;

    fn content(robots: Robots) -> Option<String> {
        render(&robots)
            .first()
            .and_then(|el| el.get("content").flatten().map(str::to_string))
    }

    #[test]
    fn index_nofollow() {
        assert_eq!(
            content(Robots::new(Some(true), Some(false))).as_deref(),
            Some("index, nofollow")
        );
    }

    #[test]
    fn noindex_follow() {
        assert_eq!(
            content(Robots::new(Some(false), Some(true))).as_deref(),
            Some("noindex, follow")
        );
    }

    #[test]
    fn both_absent_emits_nothing() {
        assert!(render(&Robots::default()).is_empty());
    }

    #[test]
    fn single_directive() {
        assert_eq!(
            content(Robots::new(None, Some(false))).as_deref(),
            Some("nofollow")
        );
    }

    #[test]
    fn standalone_index_and_follow() {
        let index = render(&Index { value: false });
        assert_eq!(index[0].get("name"), Some(Some("robots")));
        assert_eq!(index[0].get("content"), Some(Some("noindex")));

        let follow = render(&Follow { value: true });
        assert_eq!(follow[0].get("content"), Some(Some("follow")));
    }

    #[test]
    fn parses_from_toml() {
        let robots: Robots = toml::from_str("follow = false").unwrap();
        assert_eq!(robots, Robots::new(None, Some(false)));
        let index: Index = toml::from_str("value = true").unwrap();
        assert_eq!(index, Index { value: true });
    }

    #[test]
    fn unknown_keys_rejected() {
        assert!(toml::from_str::<Robots>("indx = true").is_err());
        assert!(toml::from_str::<Index>("value = true\nfollow = true").is_err());
        assert!(toml::from_str::<Follow>("follw = false").is_err());
    }
}
