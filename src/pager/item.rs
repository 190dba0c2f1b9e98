use serde::Serialize;

/// What a pager item navigates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "page", rename_all = "snake_case")]
pub enum PagerItemKind {
    First,
    Prev,
    NumericPage(i64),
    More,
    Next,
    Last,
}

impl PagerItemKind {
    /// First/prev/next/last share the navigation template.
    pub fn is_navigation(self) -> bool {
        matches!(self, Self::First | Self::Prev | Self::Next | Self::Last)
    }
}

/// One planned unit of the pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PagerItem {
    pub kind: PagerItemKind,
    pub disabled: bool,
    pub current: bool,
    /// Page index the item links to. `None` for disabled items and the current page.
    pub target: Option<i64>,
}

impl PagerItem {
    /// A navigation item pointing at `target`, disabled when `disabled` holds.
    pub(crate) fn navigation(kind: PagerItemKind, target: i64, disabled: bool) -> Self {
        Self {
            kind,
            disabled,
            current: false,
            target: (!disabled).then_some(target),
        }
    }

    pub(crate) fn numeric(page: i64, current: bool) -> Self {
        Self {
            kind: PagerItemKind::NumericPage(page),
            disabled: false,
            current,
            target: (!current).then_some(page),
        }
    }

    pub(crate) fn more(target: i64) -> Self {
        Self {
            kind: PagerItemKind::More,
            disabled: false,
            current: false,
            target: Some(target),
        }
    }

    /// Page number shown for numeric items.
    pub fn display_number(&self) -> Option<i64> {
        match self.kind {
            PagerItemKind::NumericPage(page) => Some(page),
            _ => None,
        }
    }

    /// Whether the item renders as a link.
    pub fn is_link(&self) -> bool {
        self.target.is_some()
    }
}
