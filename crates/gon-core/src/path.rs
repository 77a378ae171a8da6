//! Dotted path lookup -- resolve `window.size.0` style paths against a tree.
//!
//! # Path syntax
//!
//! - `"width"` -- the top-level member named "width"
//! - `"window.width"` -- "width" inside the object under "window"
//! - `"sizes.1"` -- the second element of the array under "sizes"
//! - `"levels.0.name"` -- segments mix freely
//!
//! Empty segments are skipped, so `""` and `"."` resolve to the starting
//! value. Lookups never report errors: any segment that cannot be followed
//! (missing key, non-numeric index into an array, descending into a scalar)
//! yields the shared Null value.

use crate::types::Kind;
use crate::value::Value;

/// A path split on dots, empty segments removed.
#[derive(Debug, Clone)]
struct Path<'p> {
    segments: Vec<&'p str>,
}

impl<'p> Path<'p> {
    fn parse(path: &'p str) -> Self {
        Self {
            segments: path.split('.').filter(|s| !s.is_empty()).collect(),
        }
    }
}

/// Walk `path` from `start`.
pub(crate) fn lookup<'a>(start: Value<'a>, path: &str) -> Value<'a> {
    let null = start.document().null();
    let mut current = start;
    for segment in Path::parse(path).segments {
        let next = match current.kind() {
            Kind::Object => current.member(segment),
            Kind::Array => segment
                .parse::<usize>()
                .ok()
                .and_then(|index| current.element(index)),
            _ => None,
        };
        match next {
            Some(value) => current = value,
            None => return null,
        }
    }
    current
}
