use std::borrow::Cow;

use super::options::{PagerOptions, non_blank};

/// Placeholder substituted for the page index in `PageUrlBuilder::url_format`.
pub const PAGE_INDEX_PLACEHOLDER: &str = "__pageindex__";

/// What the host knows about the request being rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// Request path without query string, e.g. `/orders/search`.
    pub path: String,
    /// Raw query string without the leading `?`.
    pub query: String,
    // Ambient route values of the current request.
    pub area: Option<String>,
    pub controller: Option<String>,
    pub action: Option<String>,
}

impl RequestContext {
    /// Split a request target like `/orders?page=2#top` into path and query.
    pub fn from_uri(uri: &str) -> Self {
        let uri = uri.split('#').next().unwrap_or_default();
        let (path, query) = uri.split_once('?').unwrap_or((uri, ""));
        let path = if path.is_empty() { "/" } else { path };
        Self {
            path: path.to_string(),
            query: query.to_string(),
            ..Default::default()
        }
    }

    pub fn with_route(mut self, controller: Option<String>, action: Option<String>) -> Self {
        self.controller = controller;
        self.action = action;
        self
    }
}

/// Builds page links that keep the current query string and route values.
#[derive(Debug, Clone)]
pub struct PageUrlBuilder {
    base_path: String,
    /// Query pairs carried over from the request, kept verbatim.
    preserved: Vec<String>,
    /// Declared route values, already query-escaped.
    route_values: Vec<String>,
    page_parameter: String,
}

impl PageUrlBuilder {
    pub fn new(request: &RequestContext, options: &PagerOptions) -> Self {
        let page_parameter = non_blank(Some(options.page_index_parameter_name.as_str()))
            .unwrap_or("pageindex")
            .to_string();

        let resolved = resolve_base_path(request, options);
        let (base_path, route_query) = split_query(&resolved);

        let preserved = route_query
            .split('&')
            .chain(request.query.split('&'))
            .filter(|pair| !pair.is_empty())
            .filter(|pair| {
                let key = decode_key(pair);
                !key.eq_ignore_ascii_case(&page_parameter)
                    && !options
                        .route_values
                        .keys()
                        .any(|k| k.eq_ignore_ascii_case(&key))
            })
            .map(str::to_string)
            .collect();

        let route_values = options
            .route_values
            .iter()
            .filter(|(k, _)| !k.eq_ignore_ascii_case(&page_parameter))
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect();

        Self {
            base_path: if base_path.is_empty() { "/" } else { base_path }.to_string(),
            preserved,
            route_values,
            page_parameter,
        }
    }

    pub fn page_parameter(&self) -> &str {
        &self.page_parameter
    }

    /// Link to page `page`.
    pub fn url_for(&self, page: i64) -> String {
        self.build(&page.to_string())
    }

    /// Link with `__pageindex__` in place of the page number, for client scripts.
    pub fn url_format(&self) -> String {
        self.build(PAGE_INDEX_PLACEHOLDER)
    }

    fn build(&self, page_value: &str) -> String {
        let mut url = self.base_path.clone();
        url.push('?');
        for pair in self.preserved.iter().chain(&self.route_values) {
            url.push_str(pair);
            url.push('&');
        }
        url.push_str(&urlencoding::encode(&self.page_parameter));
        url.push('=');
        url.push_str(page_value);
        url
    }
}

fn decode_key(pair: &str) -> String {
    let key = pair.split_once('=').map_or(pair, |(k, _)| k);
    urlencoding::decode(key)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| key.to_string())
}

/// Splits a resolved base path into path and query, dropping any fragment.
/// The query of an explicit `route_path` is kept ahead of the request's own.
fn split_query(path: &str) -> (&str, &str) {
    let path = path.split('#').next().unwrap_or_default();
    path.split_once('?').unwrap_or((path, ""))
}

/// Explicit path, else `/{area}/{controller}/{action}` with ambient fallbacks,
/// else the request path.
fn resolve_base_path(request: &RequestContext, options: &PagerOptions) -> String {
    if let Some(path) = non_blank(options.route_path.as_deref()) {
        return path.to_string();
    }

    let pick = |configured: &Option<String>, ambient: &Option<String>| {
        non_blank(configured.as_deref())
            .or_else(|| non_blank(ambient.as_deref()))
            .map(|s| s.trim().to_string())
    };
    let segments: Vec<String> = [
        pick(&options.area, &request.area),
        pick(&options.controller, &request.controller),
        pick(&options.action, &request.action),
    ]
    .into_iter()
    .flatten()
    .map(|s| urlencoding::encode(&s).into_owned())
    .collect();

    if segments.is_empty() {
        if request.path.is_empty() {
            "/".to_string()
        } else {
            request.path.clone()
        }
    } else {
        format!("/{}", segments.join("/"))
    }
}
