//! Derivations applied to the storage response: canonical object URL and ETag.

/// Strip the query component (presigned signature) from an upload URL.
///
/// Truncates at the first `?`; a URL without one is returned unchanged.
pub fn canonical_object_url(url: &str) -> &str {
    match url.find('?') {
        Some(idx) => &url[..idx],
        None => url,
    }
}

/// Remove every `"` from a raw `ETag` header value.
///
/// Only an empty header counts as absent; a value made of quotes alone yields `Some("")`.
pub fn normalize_etag(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.replace('"', ""))
    }
}
