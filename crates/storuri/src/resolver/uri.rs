//! Lexical URI splitting for storage URIs.
//!
//! Generic URL parsers mishandle the dialects used here: local paths may
//! contain colons and backslashes, and non-standard schemes carry
//! authority components a strict parser rejects. Components are therefore
//! split lexically, and only query and fragment strings go through a real
//! percent decoder.

use std::path::{Component, Path, PathBuf};

use url::form_urlencoded;

use crate::resolver::kwargs::{ParamValue, RawParams};

/// Components of a storage URI, split lexically and not percent-decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UriParts {
    pub scheme: String,
    pub authority: Option<String>,
    pub path: String,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

/// Split a URI into scheme, authority, path, query and fragment.
///
/// Returns `None` when the input carries no scheme separator.
pub fn split_uri(uri: &str) -> Option<UriParts> {
    let (scheme, rest) = uri.split_once(':')?;
    let mut parts = UriParts {
        scheme: scheme.to_string(),
        ..Default::default()
    };

    let rest = match rest.split_once('#') {
        Some((head, fragment)) => {
            parts.fragment = Some(fragment.to_string());
            head
        }
        None => rest,
    };
    let rest = match rest.split_once('?') {
        Some((head, query)) => {
            parts.query = Some(query.to_string());
            head
        }
        None => rest,
    };
    let rest = if let Some(after) = rest.strip_prefix("//") {
        let (authority, path) = match after.find('/') {
            Some(idx) => (&after[..idx], &after[idx..]),
            None => (after, ""),
        };
        parts.authority = Some(authority.to_string());
        path
    } else {
        rest
    };

    parts.path = rest.to_string();
    Some(parts)
}

/// Percent-decode a query or fragment string into ordered key=value
/// pairs. On duplicate keys the last occurrence wins; pairs with a blank
/// value are dropped.
pub fn parse_query(query: &str) -> RawParams {
    let mut params = RawParams::new();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        if value.is_empty() {
            continue;
        }
        params.insert(key.into_owned(), ParamValue::Text(value.into_owned()));
    }
    params
}

/// Resolve `.` and `..` segments lexically. Symlinks are not followed and
/// the path need not exist.
pub fn normalize_path(path: &str) -> PathBuf {
    let has_root = Path::new(path).has_root();
    let mut normalized = PathBuf::new();

    for component in Path::new(path).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // a leading run of ".." must be kept, not popped
                let popped = match normalized.components().next_back() {
                    Some(Component::Normal(_)) => normalized.pop(),
                    _ => false,
                };
                if !popped && !has_root {
                    normalized.push(Component::ParentDir.as_os_str());
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }

    if normalized.as_os_str().is_empty() {
        normalized.push(".");
    }
    normalized
}
