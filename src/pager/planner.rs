use super::item::{PagerItem, PagerItemKind};
use super::options::PagerOptions;

/// Inclusive range of page numbers shown as numeric items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericWindow {
    pub start: i64,
    pub end: i64,
}

impl NumericWindow {
    /// Window of `width` pages centered on `current` within `[1, total_pages]`,
    /// kept at full width near either boundary.
    pub fn centered(total_pages: i64, current: i64, width: i64) -> Option<Self> {
        if width <= 0 || total_pages <= 0 {
            return None;
        }
        let width = width.min(total_pages);
        let start = current.saturating_sub((width - 1) / 2).max(1);
        let end = start.saturating_add(width - 1).min(total_pages);
        let start = (end - width + 1).max(1);
        Some(Self { start, end })
    }

    pub fn len(&self) -> i64 {
        self.end - self.start + 1
    }

    pub fn contains(&self, page: i64) -> bool {
        (self.start..=self.end).contains(&page)
    }
}

/// Decide which items the pager shows and in what order.
///
/// `total_pages` is already capped by `maximum_page_number` and `current` is
/// already clamped into `[1, total_pages]`.
pub fn plan(total_pages: i64, current: i64, options: &PagerOptions) -> Vec<PagerItem> {
    if options.auto_hide && total_pages <= 1 {
        return Vec::new();
    }

    let mut items = Vec::new();
    let push_nav = |items: &mut Vec<PagerItem>, kind: PagerItemKind, target: i64, disabled: bool| {
        if !disabled || options.show_disabled_pager_items {
            items.push(PagerItem::navigation(kind, target, disabled));
        }
    };

    let at_first = current <= 1;
    let at_last = current >= total_pages;

    if options.show_first_last {
        push_nav(&mut items, PagerItemKind::First, 1, at_first);
    }
    if options.show_prev_next {
        push_nav(&mut items, PagerItemKind::Prev, current.saturating_sub(1), at_first);
    }

    if options.show_numeric_pager_items
        && let Some(window) =
            NumericWindow::centered(total_pages, current, options.numeric_pager_item_count)
    {
        items.extend(
            (window.start..=window.end).map(|page| PagerItem::numeric(page, page == current)),
        );
        if options.show_more_pager_items && window.end < total_pages {
            items.push(PagerItem::more(window.end + 1));
        }
    }

    if options.show_prev_next {
        push_nav(&mut items, PagerItemKind::Next, current.saturating_add(1), at_last);
    }
    if options.show_first_last {
        push_nav(&mut items, PagerItemKind::Last, total_pages, at_last);
    }

    tracing::debug!(total_pages, current, items = items.len(), "pager items planned");
    items
}
