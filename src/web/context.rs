use std::collections::HashMap;

use tera::Value;

use crate::pager::{PageUrlBuilder, Pager, PagerError, PagerOptions, PagingState, RequestContext};

/// Arguments of the `pager` function that are not pager options.
const RESERVED_ARGS: &[&str] = &["paging", "url", "ambient_controller", "ambient_action"];

/// Register the custom Tera functions, with `defaults` as the site-wide pager options.
pub fn register_functions(tera: &mut tera::Tera, defaults: PagerOptions) {
    tera.register_function("pager", PagerFunction::new(defaults));
}

/// Tera function rendering a pager:
///
/// ```text
/// {{ pager(paging=paging, url=request_url, tag_name="ul") }}
/// ```
///
/// `paging` is required. `url` is the current request path and query.
/// Every other argument overrides the matching [`PagerOptions`] field.
pub struct PagerFunction {
    defaults: PagerOptions,
}

impl PagerFunction {
    pub fn new(defaults: PagerOptions) -> Self {
        Self { defaults }
    }

    pub fn render(&self, args: &HashMap<String, Value>) -> Result<String, PagerError> {
        let paging: PagingState = match args.get("paging") {
            None | Some(Value::Null) => return Err(PagerError::MissingPagingState),
            Some(value) => serde_json::from_value(value.clone()).map_err(|source| {
                PagerError::InvalidArgument {
                    name: "paging".to_string(),
                    source,
                }
            })?,
        };
        let options = self.options_with(args)?;
        let url = args.get("url").and_then(Value::as_str).unwrap_or("/");
        let request = RequestContext::from_uri(url).with_route(
            string_arg(args, "ambient_controller"),
            string_arg(args, "ambient_action"),
        );
        let urls = PageUrlBuilder::new(&request, &options);
        Ok(Pager::new(&paging, &options, &urls).to_html())
    }

    /// Site-wide defaults overlaid with the call's option arguments.
    fn options_with(&self, args: &HashMap<String, Value>) -> Result<PagerOptions, PagerError> {
        let invalid = |source| PagerError::InvalidArgument {
            name: "options".to_string(),
            source,
        };
        let mut merged = serde_json::to_value(&self.defaults).map_err(invalid)?;
        if let Value::Object(map) = &mut merged {
            for (name, value) in args {
                if !RESERVED_ARGS.contains(&name.as_str()) {
                    map.insert(name.clone(), value.clone());
                }
            }
        }
        serde_json::from_value(merged).map_err(invalid)
    }
}

impl tera::Function for PagerFunction {
    fn call(&self, args: &HashMap<String, Value>) -> tera::Result<Value> {
        self.render(args)
            .map(Value::String)
            .map_err(|e| tera::Error::msg(e.to_string()))
    }

    fn is_safe(&self) -> bool {
        true
    }
}

fn string_arg(args: &HashMap<String, Value>, name: &str) -> Option<String> {
    args.get(name).and_then(Value::as_str).map(str::to_string)
}
