use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Rendering options for one pager. Deserialized from the `[pager]` table of
/// `config.toml` for site-wide defaults and overlaid per call by the Tera
/// `pager` function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PagerOptions {
    /// Cap on the number of pages considered real. 0 = unlimited.
    #[serde(default)]
    pub maximum_page_number: i64,
    /// Width of the numeric page window. Non-positive disables numeric items.
    #[serde(default = "default_numeric_pager_item_count")]
    pub numeric_pager_item_count: i64,
    #[serde(default = "default_true")]
    pub show_first_last: bool,
    #[serde(default = "default_true")]
    pub show_prev_next: bool,
    #[serde(default = "default_true")]
    pub show_more_pager_items: bool,
    #[serde(default = "default_true")]
    pub show_numeric_pager_items: bool,
    /// When false, disabled first/prev/next/last items are left out entirely.
    #[serde(default = "default_true")]
    pub show_disabled_pager_items: bool,
    /// Suppress every item when there is at most one page.
    #[serde(default = "default_true")]
    pub auto_hide: bool,

    #[serde(default = "default_first_page_text")]
    pub first_page_text: String,
    #[serde(default = "default_prev_page_text")]
    pub prev_page_text: String,
    #[serde(default = "default_next_page_text")]
    pub next_page_text: String,
    #[serde(default = "default_last_page_text")]
    pub last_page_text: String,
    #[serde(default = "default_more_pager_item_text")]
    pub more_pager_item_text: String,
    /// Format for page numbers, `{0}` is replaced by the number.
    #[serde(default)]
    pub page_number_format_string: Option<String>,
    /// Format for the current page number, falls back to `page_number_format_string`.
    #[serde(default)]
    pub current_page_number_format_string: Option<String>,

    // Item templates, `{0}` is replaced by the item's inner markup.
    #[serde(default)]
    pub pager_item_template: Option<String>,
    #[serde(default)]
    pub numeric_pager_item_template: Option<String>,
    #[serde(default)]
    pub navigation_pager_item_template: Option<String>,
    #[serde(default)]
    pub current_pager_item_template: Option<String>,
    #[serde(default)]
    pub disabled_pager_item_template: Option<String>,
    #[serde(default)]
    pub more_pager_item_template: Option<String>,

    #[serde(default = "default_tag_name")]
    pub tag_name: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub css_class: Option<String>,

    #[serde(default = "default_page_index_parameter_name")]
    pub page_index_parameter_name: String,
    /// Extra route values added to every page link, serialized in key order.
    #[serde(default)]
    pub route_values: BTreeMap<String, String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub controller: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    /// Explicit link path, overrides area/controller/action.
    #[serde(default)]
    pub route_path: Option<String>,

    /// Emit markup meant for partial, script-driven replacement.
    #[serde(default)]
    pub ajax_enabled: bool,
    #[serde(default)]
    pub ajax_update_target_id: Option<String>,
}

impl Default for PagerOptions {
    fn default() -> Self {
        Self {
            maximum_page_number: 0,
            numeric_pager_item_count: default_numeric_pager_item_count(),
            show_first_last: true,
            show_prev_next: true,
            show_more_pager_items: true,
            show_numeric_pager_items: true,
            show_disabled_pager_items: true,
            auto_hide: true,
            first_page_text: default_first_page_text(),
            prev_page_text: default_prev_page_text(),
            next_page_text: default_next_page_text(),
            last_page_text: default_last_page_text(),
            more_pager_item_text: default_more_pager_item_text(),
            page_number_format_string: None,
            current_page_number_format_string: None,
            pager_item_template: None,
            numeric_pager_item_template: None,
            navigation_pager_item_template: None,
            current_pager_item_template: None,
            disabled_pager_item_template: None,
            more_pager_item_template: None,
            tag_name: default_tag_name(),
            id: None,
            css_class: None,
            page_index_parameter_name: default_page_index_parameter_name(),
            route_values: BTreeMap::new(),
            area: None,
            controller: None,
            action: None,
            route_path: None,
            ajax_enabled: false,
            ajax_update_target_id: None,
        }
    }
}

impl PagerOptions {
    /// Effective format for non-current page numbers.
    pub fn page_number_format(&self) -> Option<&str> {
        non_blank(self.page_number_format_string.as_deref())
    }

    /// Effective format for the current page number.
    pub fn current_page_number_format(&self) -> Option<&str> {
        non_blank(self.current_page_number_format_string.as_deref())
            .or_else(|| self.page_number_format())
    }

    /// Tag name of the wrapping element, `div` when blank.
    pub fn wrapper_tag(&self) -> &str {
        let tag = self.tag_name.trim();
        if tag.is_empty() { "div" } else { tag }
    }
}

/// Treat empty and whitespace-only strings as unset.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

// Default value functions

fn default_true() -> bool {
    true
}

fn default_numeric_pager_item_count() -> i64 {
    10
}

fn default_first_page_text() -> String {
    "<<".to_string()
}

fn default_prev_page_text() -> String {
    "<".to_string()
}

fn default_next_page_text() -> String {
    ">".to_string()
}

fn default_last_page_text() -> String {
    ">>".to_string()
}

fn default_more_pager_item_text() -> String {
    "...".to_string()
}

fn default_tag_name() -> String {
    "div".to_string()
}

fn default_page_index_parameter_name() -> String {
    "pageindex".to_string()
}
