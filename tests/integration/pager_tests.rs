use rpager::pager::{PageUrlBuilder, PagedList, Pager, PagerOptions, PagingState, RequestContext};

fn paging(total: i64, page_index: i64, page_size: i64) -> PagingState {
    *PagedList::from_items((1..=total).collect::<Vec<_>>(), page_index, page_size)
        .unwrap()
        .paging()
}

/// Render for a request routed to `Home/test` with the given query string.
fn render_home(paging: PagingState, options: &PagerOptions, query: &str) -> String {
    let request = RequestContext {
        path: "/".to_string(),
        query: query.to_string(),
        controller: Some("Home".to_string()),
        action: Some("test".to_string()),
        ..Default::default()
    };
    let urls = PageUrlBuilder::new(&request, options);
    Pager::new(&paging, options, &urls).to_html()
}

fn start_tag(pages: i64, tag: &str, current: i64) -> String {
    format!(r#"<{tag} data-pagecount="{pages}" data-pageindex="{current}">"#)
}

#[derive(Default)]
struct NumericLinks<'a> {
    number_format: Option<&'a str>,
    current_format: Option<&'a str>,
    template: Option<&'a str>,
    num_template: Option<&'a str>,
    current_template: Option<&'a str>,
}

impl NumericLinks<'_> {
    fn render(&self, from: i64, to: i64, current: i64, url: &str) -> String {
        let fmt = |format: Option<&str>, page: i64| match format {
            Some(f) => f.replace("{0}", &page.to_string()),
            None => page.to_string(),
        };
        (from..=to)
            .map(|page| {
                let (inner, template) = if page == current {
                    (
                        fmt(self.current_format.or(self.number_format), page),
                        self.current_template.or(self.template),
                    )
                } else {
                    (
                        format!(
                            r#"<a href="{}">{}</a>"#,
                            url.replace("{0}", &page.to_string()),
                            fmt(self.number_format, page)
                        ),
                        self.num_template.or(self.template),
                    )
                };
                match template {
                    Some(t) => t.replace("{0}", &inner),
                    None => inner,
                }
            })
            .collect()
    }
}

const HOME_URL: &str = "/Home/test?pageindex={0}";

#[test]
fn default_settings_output() {
    let html = render_home(paging(88, 1, 5), &PagerOptions::default(), "");
    let num_links = NumericLinks::default().render(1, 10, 1, HOME_URL);
    let expected = format!(
        r#"{}&lt;&lt;&lt;{num_links}<a href="/Home/test?pageindex=11">...</a><a href="/Home/test?pageindex=2">&gt;</a><a href="/Home/test?pageindex=18">&gt;&gt;</a></div>"#,
        start_tag(18, "div", 1)
    );
    assert_eq!(html, expected);
}

#[test]
fn navigation_item_text() {
    let cases = [
        ("first", "prev", "next", "last"),
        ("首页", "上页", "下页", "尾页"),
        ("First Page", "Prev Page", "Next Page", "Last Page"),
    ];
    for (first, prev, next, last) in cases {
        let options = PagerOptions {
            first_page_text: first.to_string(),
            prev_page_text: prev.to_string(),
            next_page_text: next.to_string(),
            last_page_text: last.to_string(),
            ..Default::default()
        };
        let html = render_home(paging(88, 1, 5), &options, "");
        let num_links = NumericLinks::default().render(1, 10, 1, HOME_URL);
        let expected = format!(
            r#"{}{first}{prev}{num_links}<a href="/Home/test?pageindex=11">...</a><a href="/Home/test?pageindex=2">{next}</a><a href="/Home/test?pageindex=18">{last}</a></div>"#,
            start_tag(18, "div", 1)
        );
        assert_eq!(html, expected);
    }
}

#[test]
fn show_first_last_false() {
    let options = PagerOptions {
        show_first_last: false,
        ..Default::default()
    };
    let html = render_home(paging(88, 1, 5), &options, "");
    let num_links = NumericLinks::default().render(1, 10, 1, HOME_URL);
    let expected = format!(
        r#"{}&lt;{num_links}<a href="/Home/test?pageindex=11">...</a><a href="/Home/test?pageindex=2">&gt;</a></div>"#,
        start_tag(18, "div", 1)
    );
    assert_eq!(html, expected);
}

#[test]
fn hide_all_navigation_items() {
    let options = PagerOptions {
        show_prev_next: false,
        show_first_last: false,
        show_more_pager_items: false,
        ..Default::default()
    };
    let html = render_home(paging(88, 1, 5), &options, "");
    let num_links = NumericLinks::default().render(1, 10, 1, HOME_URL);
    assert_eq!(html, format!("{}{num_links}</div>", start_tag(18, "div", 1)));
}

#[test]
fn numeric_items_hidden() {
    let options = PagerOptions {
        show_numeric_pager_items: false,
        ..Default::default()
    };
    let html = render_home(paging(88, 1, 5), &options, "");
    let expected = format!(
        r#"{}&lt;&lt;&lt;<a href="/Home/test?pageindex=2">&gt;</a><a href="/Home/test?pageindex=18">&gt;&gt;</a></div>"#,
        start_tag(18, "div", 1)
    );
    assert_eq!(html, expected);
}

#[test]
fn auto_hide_outputs_empty_tag_for_single_page() {
    let html = render_home(paging(8, 1, 10), &PagerOptions::default(), "");
    assert_eq!(html, format!("{}</div>", start_tag(1, "div", 1)));
}

#[test]
fn current_page_larger_than_one() {
    let html = render_home(paging(88, 3, 5), &PagerOptions::default(), "");
    let num_links = NumericLinks::default().render(1, 10, 3, HOME_URL);
    let expected = format!(
        r#"{}<a href="/Home/test?pageindex=1">&lt;&lt;</a><a href="/Home/test?pageindex=2">&lt;</a>{num_links}<a href="/Home/test?pageindex=11">...</a><a href="/Home/test?pageindex=4">&gt;</a><a href="/Home/test?pageindex=18">&gt;&gt;</a></div>"#,
        start_tag(18, "div", 3)
    );
    assert_eq!(html, expected);
}

#[test]
fn page_number_formatting() {
    let cases = [
        ("[{0}]", None),
        ("[{0}]", Some("[{0}]")),
        ("【{0}】", None),
        ("-{0}-", Some("［{0}］")),
        ("【{0}】", Some("-{0}-")),
    ];
    for (number_format, current_format) in cases {
        let options = PagerOptions {
            page_number_format_string: Some(number_format.to_string()),
            current_page_number_format_string: current_format.map(str::to_string),
            ..Default::default()
        };
        let html = render_home(paging(88, 1, 5), &options, "");
        let num_links = NumericLinks {
            number_format: Some(number_format),
            current_format,
            ..Default::default()
        }
        .render(1, 10, 1, HOME_URL);
        let expected = format!(
            r#"{}&lt;&lt;&lt;{num_links}<a href="/Home/test?pageindex=11">...</a><a href="/Home/test?pageindex=2">&gt;</a><a href="/Home/test?pageindex=18">&gt;&gt;</a></div>"#,
            start_tag(18, "div", 1)
        );
        assert_eq!(html, expected, "format {number_format} / {current_format:?}");
    }
}

#[test]
fn generic_item_template() {
    let template = "<span>{0}</span>";
    let options = PagerOptions {
        pager_item_template: Some(template.to_string()),
        ..Default::default()
    };
    let html = render_home(paging(88, 1, 5), &options, "");
    let num_links = NumericLinks {
        template: Some(template),
        ..Default::default()
    }
    .render(1, 10, 1, HOME_URL);
    let expected = format!(
        r#"{}<span>&lt;&lt;</span><span>&lt;</span>{num_links}<span><a href="/Home/test?pageindex=11">...</a></span><span><a href="/Home/test?pageindex=2">&gt;</a></span><span><a href="/Home/test?pageindex=18">&gt;&gt;</a></span></div>"#,
        start_tag(18, "div", 1)
    );
    assert_eq!(html, expected);
}

#[test]
fn specific_templates_override_generic_template() {
    let template = "<span>{0}</span>";
    let num_temp = "<li>{0}</li>";
    let nav_temp = "<div>{0}</div>";
    let cur_temp = r#"<span class="active">{0}</span>"#;
    let dis_temp = r#"<button class="disabled">{0}</button>"#;
    let more_temp = r#"<span class="more">{0}</span>"#;
    let options = PagerOptions {
        pager_item_template: Some(template.to_string()),
        numeric_pager_item_template: Some(num_temp.to_string()),
        navigation_pager_item_template: Some(nav_temp.to_string()),
        current_pager_item_template: Some(cur_temp.to_string()),
        disabled_pager_item_template: Some(dis_temp.to_string()),
        more_pager_item_template: Some(more_temp.to_string()),
        ..Default::default()
    };
    let html = render_home(paging(99, 1, 9), &options, "");
    let num_links = NumericLinks {
        template: Some(template),
        num_template: Some(num_temp),
        current_template: Some(cur_temp),
        ..Default::default()
    }
    .render(1, 10, 1, HOME_URL);
    let expected = format!(
        r#"{}<button class="disabled">&lt;&lt;</button><button class="disabled">&lt;</button>{num_links}<span class="more"><a href="/Home/test?pageindex=11">...</a></span><div><a href="/Home/test?pageindex=2">&gt;</a></div><div><a href="/Home/test?pageindex=11">&gt;&gt;</a></div></div>"#,
        start_tag(11, "div", 1)
    );
    assert_eq!(html, expected);
}

#[test]
fn tag_name_and_item_template() {
    let template = "<li>{0}</li>";
    let options = PagerOptions {
        tag_name: "ul".to_string(),
        pager_item_template: Some(template.to_string()),
        ..Default::default()
    };
    let html = render_home(paging(108, 5, 10), &options, "");
    let num_links = NumericLinks {
        template: Some(template),
        ..Default::default()
    }
    .render(1, 10, 5, HOME_URL);
    let expected = format!(
        r#"{}<li><a href="/Home/test?pageindex=1">&lt;&lt;</a></li><li><a href="/Home/test?pageindex=4">&lt;</a></li>{num_links}<li><a href="/Home/test?pageindex=11">...</a></li><li><a href="/Home/test?pageindex=6">&gt;</a></li><li><a href="/Home/test?pageindex=11">&gt;&gt;</a></li></ul>"#,
        start_tag(11, "ul", 5)
    );
    assert_eq!(html, expected);
}

#[test]
fn numeric_item_count_setting() {
    for count in [5, 6, 8, 10] {
        let options = PagerOptions {
            numeric_pager_item_count: count,
            ..Default::default()
        };
        let html = render_home(paging(101, 1, 10), &options, "");
        let num_links = NumericLinks::default().render(1, count, 1, HOME_URL);
        let expected = format!(
            r#"{}&lt;&lt;&lt;{num_links}<a href="/Home/test?pageindex={}">...</a><a href="/Home/test?pageindex=2">&gt;</a><a href="/Home/test?pageindex=11">&gt;&gt;</a></div>"#,
            start_tag(11, "div", 1),
            count + 1
        );
        assert_eq!(html, expected, "numeric_pager_item_count = {count}");
    }
}

#[test]
fn query_string_is_preserved() {
    let html = render_home(paging(108, 5, 10), &PagerOptions::default(), "type=news&class=local");
    let url = "/Home/test?type=news&amp;class=local&amp;pageindex={0}";
    let link = |page: i64| url.replace("{0}", &page.to_string());
    let num_links = NumericLinks::default().render(1, 10, 5, url);
    let expected = format!(
        r#"{}<a href="{}">&lt;&lt;</a><a href="{}">&lt;</a>{num_links}<a href="{}">...</a><a href="{}">&gt;</a><a href="{}">&gt;&gt;</a></div>"#,
        start_tag(11, "div", 5),
        link(1),
        link(4),
        link(11),
        link(6),
        link(11)
    );
    assert_eq!(html, expected);
}

#[test]
fn rendering_twice_is_byte_identical() {
    let options = PagerOptions {
        pager_item_template: Some("<li>{0}</li>".to_string()),
        ..Default::default()
    };
    let first = render_home(paging(88, 7, 5), &options, "type=news");
    let second = render_home(paging(88, 7, 5), &options, "type=news");
    assert_eq!(first, second);
}
