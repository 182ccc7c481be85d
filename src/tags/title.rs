//! The document `<title>`.

use super::HeadTags;
use crate::element::Element;
use serde::{Deserialize, Serialize};

/// Placeholder in a title template that receives the page title.
pub const PLACEHOLDER: &str = "%s";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Title {
    pub value: String,
    /// Pattern such as `"%s | My Site"`. Every `%s` receives `value`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

impl Title {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            template: None,
        }
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// The text that ends up inside `<title>`.
    pub fn text(&self) -> String {
        match &self.template {
            Some(template) => template.replace(PLACEHOLDER, &self.value),
            None => self.value.clone(),
        }
    }
}

impl HeadTags for Title {
    fn push_tags(&self, out: &mut Vec<Element>) {
        out.push(Element::new("title").with_text(self.text()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::render_html;

    #[test]
    fn plain_value() {
        let title = Title::new("Home");
        assert_eq!(title.text(), "Home");
        assert_eq!(render_html(&title).into_string(), "<title>Home</title>");
    }

    #[test]
    fn template_substitutes_value() {
        let title = Title::new("Home").with_template("%s – MySite");
        assert_eq!(title.text(), "Home – MySite");
    }

    #[test]
    fn template_without_placeholder_is_used_verbatim() {
        let title = Title::new("Home").with_template("MySite");
        assert_eq!(title.text(), "MySite");
    }

    #[test]
    fn every_placeholder_is_filled() {
        let title = Title::new("Docs").with_template("%s · %s");
        assert_eq!(title.text(), "Docs · Docs");
    }

    #[test]
    fn title_text_is_escaped() {
        let title = Title::new("Q&A").with_template("%s | <Site>");
        assert_eq!(
            render_html(&title).into_string(),
            "<title>Q&amp;A | &lt;Site&gt;</title>"
        );
    }
}
