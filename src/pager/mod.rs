//! Pagination control rendering: plan the visible items, then render them.

pub mod item;
pub mod options;
pub mod paging;
pub mod planner;
pub mod render;
pub mod url;

use std::fmt::Write as _;

pub use item::{PagerItem, PagerItemKind};
pub use options::PagerOptions;
pub use paging::{PagedList, PagingState};
pub use url::{PageUrlBuilder, RequestContext};

use render::escape;

#[derive(Debug, thiserror::Error)]
pub enum PagerError {
    #[error("paging model is required to render a pager")]
    MissingPagingState,

    #[error("page size must be positive, got {0}")]
    InvalidPageSize(i64),

    #[error("total item count must not be negative, got {0}")]
    NegativeItemCount(i64),

    #[error("invalid pager argument `{name}`: {source}")]
    InvalidArgument {
        name: String,
        source: serde_json::Error,
    },
}

/// One render of a pager for a given paging state.
pub struct Pager<'a> {
    options: &'a PagerOptions,
    urls: &'a PageUrlBuilder,
    total_pages: i64,
    current: i64,
}

impl<'a> Pager<'a> {
    pub fn new(paging: &PagingState, options: &'a PagerOptions, urls: &'a PageUrlBuilder) -> Self {
        let mut total_pages = paging.total_pages();
        if options.maximum_page_number > 0 && options.maximum_page_number < total_pages {
            total_pages = options.maximum_page_number;
        }
        let requested = paging.current_page_index();
        let current = requested.clamp(1, total_pages);
        if current != requested {
            tracing::warn!(requested, total_pages, "page index out of range, clamped");
        }
        Self {
            options,
            urls,
            total_pages,
            current,
        }
    }

    pub fn total_pages(&self) -> i64 {
        self.total_pages
    }

    /// Page index used for rendering, clamped into `[1, total_pages]`.
    pub fn current_page(&self) -> i64 {
        self.current
    }

    pub fn items(&self) -> Vec<PagerItem> {
        planner::plan(self.total_pages, self.current, self.options)
    }

    /// Full pager markup: the wrapping element and every rendered item.
    pub fn to_html(&self) -> String {
        let items = self.items();
        let tag = self.options.wrapper_tag();
        let mut html = self.start_tag(tag);
        html.push_str(&render::render_items(&items, self.options, self.urls));
        let _ = write!(html, "</{tag}>");
        tracing::debug!(
            total_pages = self.total_pages,
            current = self.current,
            bytes = html.len(),
            "pager rendered"
        );
        html
    }

    fn start_tag(&self, tag: &str) -> String {
        let opts = self.options;
        let mut out = format!("<{tag}");
        if let Some(id) = options::non_blank(opts.id.as_deref()) {
            let _ = write!(out, r#" id="{}""#, escape(id));
        }
        if let Some(class) = options::non_blank(opts.css_class.as_deref()) {
            let _ = write!(out, r#" class="{}""#, escape(class));
        }
        let _ = write!(
            out,
            r#" data-pagecount="{}" data-pageindex="{}""#,
            self.total_pages, self.current
        );
        if opts.ajax_enabled {
            let _ = write!(
                out,
                r#" data-ajax="true" data-pageparameter="{}" data-urlformat="{}" data-firstpageurl="{}""#,
                escape(self.urls.page_parameter()),
                escape(&self.urls.url_format()),
                escape(&self.urls.url_for(1)),
            );
            if let Some(target) = options::non_blank(opts.ajax_update_target_id.as_deref()) {
                let _ = write!(out, r##" data-ajax-update="#{}""##, escape(target));
            }
        }
        out.push('>');
        out
    }
}
