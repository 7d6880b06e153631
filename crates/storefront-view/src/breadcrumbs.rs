//! Breadcrumb trail for the current path.

use serde::Serialize;
use storefront_commerce::catalog::capitalize_first;

/// One step of the trail. The home link is implicit and not included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Crumb {
    pub label: String,
    /// Link target, `/` + segments up to this one.
    pub path: String,
    /// The last crumb is the current page and is not rendered as a link.
    pub is_current: bool,
}

/// Build crumbs from a path such as `/phones/apple-iphone-11`.
pub fn breadcrumbs(path: &str) -> Vec<Crumb> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    segments
        .iter()
        .enumerate()
        .map(|(index, segment)| Crumb {
            label: segment_label(segment),
            path: format!("/{}", segments[..=index].join("/")),
            is_current: index + 1 == segments.len(),
        })
        .collect()
}

/// `"apple-iphone-11"` becomes `"Apple Iphone 11"`.
fn segment_label(segment: &str) -> String {
    segment
        .split('-')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}
