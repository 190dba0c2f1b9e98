use std::borrow::Cow;

use super::item::{PagerItem, PagerItemKind};
use super::options::{PagerOptions, non_blank};
use super::url::PageUrlBuilder;

/// Placeholder used by item templates and page number formats.
pub const PLACEHOLDER: &str = "{0}";

/// Render planned items in order, concatenated with no separator.
pub fn render_items(items: &[PagerItem], options: &PagerOptions, urls: &PageUrlBuilder) -> String {
    items
        .iter()
        .map(|item| render_item(item, options, urls))
        .collect()
}

/// Render one item: its inner markup wrapped by the resolved template.
pub fn render_item(item: &PagerItem, options: &PagerOptions, urls: &PageUrlBuilder) -> String {
    let text = escape(&item_text(item, options)).into_owned();
    let inner = match item.target {
        Some(page) => format!(r#"<a href="{}">{text}</a>"#, escape(&urls.url_for(page))),
        None => text,
    };
    match resolve_template(item, options) {
        Some(template) => template.replace(PLACEHOLDER, &inner),
        None => inner,
    }
}

/// Pick the template for an item, most specific first:
/// disabled, current, kind-specific, then the generic item template.
pub fn resolve_template<'a>(item: &PagerItem, options: &'a PagerOptions) -> Option<&'a str> {
    let specific = if item.disabled {
        &options.disabled_pager_item_template
    } else if item.current {
        &options.current_pager_item_template
    } else {
        match item.kind {
            PagerItemKind::NumericPage(_) => &options.numeric_pager_item_template,
            PagerItemKind::More => &options.more_pager_item_template,
            _ => &options.navigation_pager_item_template,
        }
    };
    non_blank(specific.as_deref()).or_else(|| non_blank(options.pager_item_template.as_deref()))
}

/// Unescaped display text of an item.
pub fn item_text<'a>(item: &PagerItem, options: &'a PagerOptions) -> Cow<'a, str> {
    match item.kind {
        PagerItemKind::First => Cow::Borrowed(&options.first_page_text),
        PagerItemKind::Prev => Cow::Borrowed(&options.prev_page_text),
        PagerItemKind::Next => Cow::Borrowed(&options.next_page_text),
        PagerItemKind::Last => Cow::Borrowed(&options.last_page_text),
        PagerItemKind::More => Cow::Borrowed(&options.more_pager_item_text),
        PagerItemKind::NumericPage(page) => {
            let format = if item.current {
                options.current_page_number_format()
            } else {
                options.page_number_format()
            };
            Cow::Owned(format_page_number(page, format))
        }
    }
}

/// Substitute `page` into `format`. A format without the placeholder falls
/// back to the bare number.
pub fn format_page_number(page: i64, format: Option<&str>) -> String {
    match format {
        Some(f) if f.contains(PLACEHOLDER) => f.replace(PLACEHOLDER, &page.to_string()),
        Some(f) => {
            tracing::warn!(format = f, "page number format has no {{0}} placeholder, ignoring it");
            page.to_string()
        }
        None => page.to_string(),
    }
}

/// HTML-escape text and attribute values.
pub fn escape(raw: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(raw)
}
