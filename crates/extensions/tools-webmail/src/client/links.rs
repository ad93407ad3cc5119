//! URL helpers.

use url::form_urlencoded;
use url::Url;

/// Prefix `https://` when `raw` carries no scheme.
pub fn normalize_url(raw: &str) -> String {
    let raw = raw.trim();
    if raw.contains("://") || raw.starts_with("about:") || raw.starts_with("data:") {
        raw.to_string()
    } else {
        format!("https://{}", raw)
    }
}

/// Host component of `raw`, after normalization.
pub fn host_of(raw: &str) -> Option<String> {
    Url::parse(&normalize_url(raw))
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
}

/// Web search URL for `query` on the given market's domain. `us` maps to
/// `google.com`.
pub fn search_url(query: &str, market: &str) -> String {
    let market = market.trim().to_ascii_lowercase();
    let domain = if market.is_empty() || market == "us" {
        "com".to_string()
    } else {
        market
    };
    let encoded: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
    format!("https://www.google.{}/search?q={}", domain, encoded)
}
