//! Links that carry view state in the query string.
//!
//! Every interactive control on the page is a link (or a GET form) to
//! `/events` carrying the current [`ViewState`] plus the action to apply.
//! After applying it the server redirects to the canonical page URL.

use likha_core::ViewState;

/// Path of the event endpoint.
pub const EVENTS_PATH: &str = "/events";

/// Query parameters for a view state, in canonical order.
#[must_use]
pub fn state_params(state: &ViewState) -> Vec<(&'static str, String)> {
    let mut params = Vec::with_capacity(5);
    if let Some(category) = &state.category {
        params.push(("category", category.clone()));
    }
    if let Some(item) = state.item {
        params.push(("item", item.to_string()));
    }
    if let Some(qty) = state.qty {
        params.push(("qty", qty.to_string()));
    }
    if let Some(slide) = state.slide {
        params.push(("slide", slide.to_string()));
    }
    if let Some(seed) = state.seed {
        params.push(("seed", seed.to_string()));
    }
    params
}

/// Encode `key=value` pairs as a query string (without the leading `?`).
#[must_use]
pub fn encode_query<K: AsRef<str>, V: AsRef<str>>(params: &[(K, V)]) -> String {
    params
        .iter()
        .map(|(k, v)| {
            format!(
                "{}={}",
                urlencoding::encode(k.as_ref()),
                urlencoding::encode(v.as_ref())
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Canonical page URL for a view state, with an optional fragment.
#[must_use]
pub fn page_href(state: &ViewState, anchor: Option<&str>) -> String {
    let query = encode_query(&state_params(state));
    let mut href = if query.is_empty() {
        "/".to_string()
    } else {
        format!("/?{query}")
    };
    if let Some(anchor) = anchor {
        href.push('#');
        href.push_str(anchor);
    }
    href
}

/// URL that applies `action` (with extra `params`) to a view state.
#[must_use]
pub fn event_href(state: &ViewState, action: &str, params: &[(&str, &str)]) -> String {
    let mut all: Vec<(&str, String)> = state_params(state);
    all.push(("action", action.to_string()));
    all.extend(params.iter().map(|(k, v)| (*k, (*v).to_string())));
    format!("{EVENTS_PATH}?{}", encode_query(&all))
}
