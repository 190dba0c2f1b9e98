use std::collections::HashMap;

use axum::extract::{OriginalUri, Query, State};
use axum::http::HeaderMap;
use axum::response::Html;
use tera::Context;

use crate::error::AppError;
use crate::orders::{self, Order};
use crate::pager::PagedList;
use crate::state::AppState;

const ORDER_LIST_TEMPLATE: &str = "orders/_order_list.html";

/// Page parameter of the Bootstrap-styled list, in place of the configured one.
pub const BOOTSTRAP_PAGE_PARAMETER: &str = "id";

/// Full orders page.
pub async fn index(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Html<String>, AppError> {
    let page_parameter = state.config.pager.page_index_parameter_name.as_str();
    let list = paged_orders(&state, &params, page_parameter, state.orders.to_vec())?;
    let ctx = list_context(&list, &uri.to_string(), "index", page_parameter);
    render(&state.tera, "orders/index.html", &ctx)
}

/// Orders page whose pager updates the list in place. Script-driven requests
/// (`X-Requested-With: XMLHttpRequest`) get only the list fragment.
pub async fn ajax(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Html<String>, AppError> {
    let page_parameter = state.config.pager.page_index_parameter_name.as_str();
    let list = paged_orders(&state, &params, page_parameter, state.orders.to_vec())?;
    let mut ctx = list_context(&list, &uri.to_string(), "ajax", page_parameter);
    ctx.insert("ajax", &true);
    render(&state.tera, partial_or(&headers, "orders/ajax.html"), &ctx)
}

/// Orders filtered by company name; the pager keeps the filter in its links.
pub async fn search(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Html<String>, AppError> {
    let page_parameter = state.config.pager.page_index_parameter_name.as_str();
    let company_name = company_filter(&params);
    let found = orders::search(&state.orders, company_name);
    tracing::debug!(company_name, matches = found.len(), "order search");
    let list = paged_orders(&state, &params, page_parameter, found)?;
    let mut ctx = list_context(&list, &uri.to_string(), "search", page_parameter);
    ctx.insert("company_name", company_name);
    render(&state.tera, "orders/search.html", &ctx)
}

/// Search whose results page in place, keeping the filter in every link.
pub async fn ajax_search(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Html<String>, AppError> {
    let page_parameter = state.config.pager.page_index_parameter_name.as_str();
    let company_name = company_filter(&params);
    let found = orders::search(&state.orders, company_name);
    tracing::debug!(company_name, matches = found.len(), "order search (partial update)");
    let list = paged_orders(&state, &params, page_parameter, found)?;
    let mut ctx = list_context(&list, &uri.to_string(), "ajax_search", page_parameter);
    ctx.insert("ajax", &true);
    ctx.insert("company_name", company_name);
    render(&state.tera, partial_or(&headers, "orders/ajax_search.html"), &ctx)
}

/// Orders with a Bootstrap `ul.pagination` pager paging through `?id=`.
pub async fn bootstrap(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Html<String>, AppError> {
    let list = paged_orders(&state, &params, BOOTSTRAP_PAGE_PARAMETER, state.orders.to_vec())?;
    let ctx = list_context(&list, &uri.to_string(), "bootstrap", BOOTSTRAP_PAGE_PARAMETER);
    render(&state.tera, "orders/bootstrap.html", &ctx)
}

/// Page index from the `name` query parameter, page 1 when absent or malformed.
pub(crate) fn requested_page(params: &HashMap<String, String>, name: &str) -> i64 {
    params
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .and_then(|(_, v)| v.trim().parse().ok())
        .unwrap_or(1)
}

fn company_filter(params: &HashMap<String, String>) -> &str {
    params.get("company_name").map(String::as_str).unwrap_or("")
}

fn paged_orders(
    state: &AppState,
    params: &HashMap<String, String>,
    page_parameter: &str,
    orders: Vec<Order>,
) -> Result<PagedList<Order>, AppError> {
    let page = requested_page(params, page_parameter);
    Ok(PagedList::from_items(orders, page, state.config.demo.page_size)?)
}

fn list_context(
    list: &PagedList<Order>,
    request_url: &str,
    active_page: &str,
    page_parameter: &str,
) -> Context {
    let mut ctx = Context::new();
    ctx.insert("orders", &list.items);
    ctx.insert("paging", list.paging());
    ctx.insert("request_url", request_url);
    ctx.insert("page_parameter", page_parameter);
    ctx.insert("active_page", active_page);
    ctx.insert("ajax", &false);
    ctx.insert("version", env!("CARGO_PKG_VERSION"));
    ctx
}

pub(crate) fn is_partial_request(headers: &HeaderMap) -> bool {
    headers
        .get("x-requested-with")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case("XMLHttpRequest"))
}

/// The list fragment for script-driven requests, `page` otherwise.
fn partial_or<'a>(headers: &HeaderMap, page: &'a str) -> &'a str {
    if is_partial_request(headers) {
        ORDER_LIST_TEMPLATE
    } else {
        page
    }
}

pub(crate) fn render(tera: &tera::Tera, template: &str, ctx: &Context) -> Result<Html<String>, AppError> {
    tera.render(template, ctx).map(Html).map_err(|e| {
        tracing::error!("Template render error ({}): {}", template, e);
        AppError::Template(e)
    })
}
