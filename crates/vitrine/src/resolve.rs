//! Upfront element lookup
//!
//! Every widget resolves all of its required elements in a single step and
//! either gets a complete bundle or a [`ResolveError`]. Initializers log the
//! error and skip the widget; nothing downstream re-checks for missing nodes.

use crate::dom::Dom;

/// Why a widget could not find its elements
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// A required single element is absent
    #[error("required element `.{class}` not found")]
    Missing {
        /// Class name that was queried
        class: &'static str,
    },
    /// A required collection matched nothing
    #[error("no `.{class}` elements found")]
    Empty {
        /// Class name that was queried
        class: &'static str,
    },
}

/// Document-wide lookup of a required element
pub fn require<D: Dom>(dom: &D, class: &'static str) -> Result<D::Element, ResolveError> {
    dom.query(class).ok_or(ResolveError::Missing { class })
}

/// Lookup of a required descendant of `scope`
pub fn require_within<D: Dom>(
    dom: &D,
    scope: &D::Element,
    class: &'static str,
) -> Result<D::Element, ResolveError> {
    dom.query_within(scope, class)
        .ok_or(ResolveError::Missing { class })
}

/// Lookup of a required, non-empty collection under `scope`
pub fn require_all_within<D: Dom>(
    dom: &D,
    scope: &D::Element,
    class: &'static str,
) -> Result<Vec<D::Element>, ResolveError> {
    let found = dom.query_all_within(scope, class);
    if found.is_empty() {
        Err(ResolveError::Empty { class })
    } else {
        Ok(found)
    }
}
