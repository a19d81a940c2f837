//! Smooth scrolling to a region anchor. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! A nav id with no matching anchor used to be an unhandled fault in the old
//! site; here it is a recoverable `ScrollError` logged as a warning, so a
//! content typo degrades to a dead link instead of a crash. SSR paths safely
//! no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use std::fmt;

/// Failure modes of anchor navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScrollError {
    /// No rendered region carries the requested anchor id.
    MissingAnchor(String),
}

impl fmt::Display for ScrollError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAnchor(id) => write!(f, "no region anchor matches #{id}"),
        }
    }
}

/// Smoothly scroll the region with anchor id `id` to the top of the viewport.
///
/// Fire-and-forget: the scroll animation has no completion callback. Outside
/// a browser (SSR, native tests) this is a no-op.
///
/// # Errors
///
/// Returns `ScrollError::MissingAnchor` when no element carries `id`; the
/// miss is also logged as a warning. Callers may ignore the error — the page
/// simply stays where it is.
pub fn scroll_to_section(id: &str) -> Result<(), ScrollError> {
    #[cfg(feature = "hydrate")]
    {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id));

        match element {
            Some(el) => {
                let options = web_sys::ScrollIntoViewOptions::new();
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                el.scroll_into_view_with_scroll_into_view_options(&options);
                Ok(())
            }
            None => {
                let err = ScrollError::MissingAnchor(id.to_owned());
                log::warn!("{err}; navigation skipped");
                Err(err)
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Ok(())
    }
}
