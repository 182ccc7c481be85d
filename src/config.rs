//! Head configuration files.
//!
//! A [`Head`] can be written as TOML. Configuration is layered: a site-wide
//! file holds what every page shares (template, favicons, theme color), and a
//! page file overrides or adds to it.
//!
//! ```text
//! head.toml            ← site (overrides stock defaults)
//! pages/about.toml     ← page (overrides site)
//! ```
//!
//! ## Example
//!
//! ```toml
//! template = "%s | My Site"
//! theme_color = "#0a0a0a"
//! index = true
//! follow = true
//!
//! [[favicons]]
//! preset = "svg"
//! href = "/icon.svg"
//!
//! [open_graph]
//! type = "website"
//! ```
//!
//! ## Merging
//!
//! Tables merge key by key, so a page that sets `[open_graph] title` keeps
//! the site's `[open_graph] type`. Anything else, arrays included, is
//! replaced: a page that lists `[[favicons]]` replaces the site's list.
//!
//! Unknown keys are rejected to catch typos early.

use crate::head::Head;
use crate::tags::title::PLACEHOLDER;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
    #[error("Config file not found: {0}")]
    NotFound(String),
}

impl Head {
    /// Check values the type system cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(template) = &self.template
            && !template.contains(PLACEHOLDER)
        {
            return Err(ConfigError::Validation(format!(
                "template must contain {PLACEHOLDER}, got {template:?}"
            )));
        }
        if let Some(favicon) = self.favicons.iter().find(|f| f.size == Some(0)) {
            return Err(ConfigError::Validation(format!(
                "favicon {} has size 0",
                favicon.href
            )));
        }
        if self.theme_color.as_deref().is_some_and(str::is_empty) {
            return Err(ConfigError::Validation(
                "theme_color must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a head config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_head(base: toml::Value, overlay: Option<toml::Value>) -> Result<Head, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let head: Head = merged.try_into()?;
    head.validate()?;
    Ok(head)
}

/// Load the site head, optionally layered under a page file.
///
/// A missing site file means "no shared values". A page path that does not
/// exist is an error, since the caller named it explicitly.
pub fn load_head(site: &Path, page: Option<&Path>) -> Result<Head, ConfigError> {
    let base = load_raw_config(site)?
        .unwrap_or_else(|| toml::Value::Table(toml::Table::new()));
    let overlay = match page {
        Some(page) => Some(
            load_raw_config(page)?
                .ok_or_else(|| ConfigError::NotFound(page.display().to_string()))?,
        ),
        None => None,
    };
    resolve_head(base, overlay)
}

/// Returns a fully-commented stock `head.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Head Configuration
# ==================
# Every key is optional. Uncomment the ones you need.
#
# A site-wide head.toml can be layered under per-page files:
#   head.toml            -> shared by every page
#   pages/about.toml     -> overrides the shared values for one page
#
# Tables merge key by key; lists replace the whole list.
# Unknown keys will cause an error.

# Page title, and an optional template. Every %s receives the title.
# title = "Home"
# template = "%s | My Site"

# <meta name="description">, <meta name="keywords">, <meta name="author">
# description = "Photographs and notes"
# keywords = ["photography", "travel"]
# author = "Jane Doe"

# Image used by open_graph / twitter when they don't set their own.
# image = "https://example.com/cover.jpg"

# Robots directives, combined into one <meta name="robots">.
# index = true
# follow = true

# <link rel="canonical">
# canonical = "https://example.com/"

# <meta name="theme-color">
# theme_color = "#0a0a0a"

# ---------------------------------------------------------------------------
# Favicons
# ---------------------------------------------------------------------------
# preset: ico | png | svg | apple. Sets rel, type and sizes defaults.
# size: square edge in pixels, rendered as sizes="NxN".
#
# [[favicons]]
# preset = "svg"
# href = "/icon.svg"
#
# [[favicons]]
# preset = "apple"
# href = "/apple-touch-icon.png"
# size = 180

# ---------------------------------------------------------------------------
# Social cards
# ---------------------------------------------------------------------------
# Missing title/description/image fall back to the page values above.
#
# [open_graph]
# type = "website"
# url = "https://example.com/"
#
# [twitter]
# card = "summary_large_image"

# ---------------------------------------------------------------------------
# Extra elements
# ---------------------------------------------------------------------------
# [[meta]]
# charset = "utf-8"
#
# [[meta]]
# name = "viewport"
# content = "width=device-width, initial-scale=1"
#
# [[links]]
# rel = "preload"
# href = "/fonts/inter.woff2"
# as = "font"
# type = "font/woff2"
# crossorigin = "anonymous"
#
# [[scripts]]
# src = "/app.js"
# type = "module"
"##
}
