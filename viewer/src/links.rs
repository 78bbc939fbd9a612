use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

use crate::model::ComponentKey;

/// Everything outside `encodeURIComponent`'s unreserved set gets escaped,
/// so keys embed into queries and path segments the same way the web
/// frontend embeds them.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Parameters applied to every window the header opens.
pub const WINDOW_PARAMS: &str = "resizable=1,scrollbars=1,status=1";

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

fn at_path(base: &Url, path: &str, query: String) -> Url {
    let mut url = base.clone();
    url.set_path(&format!("{}{}", base.path().trim_end_matches('/'), path));
    url.set_query(Some(&query));

    url
}

/// Stable, shareable URL reopening the same view, carrying the highlighted
/// line when there is one.
pub fn permalink(base: &Url, key: &ComponentKey, highlighted_line: Option<u32>) -> Url {
    let mut query = format!("id={}", encode_component(key.value()));
    if let Some(line) = highlighted_line {
        query.push_str(&format!("&line={}", line));
    }

    at_path(base, "/component/index", query)
}

pub fn raw_source(base: &Url, key: &ComponentKey) -> Url {
    at_path(
        base,
        "/api/sources/raw",
        format!("key={}", encode_component(key.value())),
    )
}
