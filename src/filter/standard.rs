//! Standard reusable filters
//!
//! Both reject at the original checkpoint only and take an optional
//! reporter invoked exactly once per rejection.

use super::traits::{FilterReporter, ResourceFilter};
use crate::resource::{ResourceContext, UniformResource};
use tracing::debug;

/// URI scheme prefixes a browser cannot navigate to.
const NON_TRAVERSIBLE_SCHEMES: &[&str] = &["mailto:"];

/// Rejects resources whose label is missing or zero-length.
#[derive(Default)]
pub struct BlankLabelFilter {
    reporter: Option<FilterReporter>,
}

impl BlankLabelFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reporter(reporter: FilterReporter) -> Self {
        Self {
            reporter: Some(reporter),
        }
    }
}

impl ResourceFilter for BlankLabelFilter {
    fn retain_original(&self, ctx: &ResourceContext, resource: &UniformResource) -> bool {
        let blank = resource.label.as_deref().map_or(true, str::is_empty);
        if blank {
            debug!(uri = %resource.uri, "rejecting resource with blank label");
            if let Some(reporter) = &self.reporter {
                reporter(ctx, resource);
            }
            return false;
        }
        true
    }
}

/// Rejects resources whose URI uses a scheme a browser cannot traverse
/// (e.g. `mailto:`).
#[derive(Default)]
pub struct BrowserTraversibleFilter {
    reporter: Option<FilterReporter>,
}

impl BrowserTraversibleFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reporter(reporter: FilterReporter) -> Self {
        Self {
            reporter: Some(reporter),
        }
    }
}

impl ResourceFilter for BrowserTraversibleFilter {
    fn retain_original(&self, ctx: &ResourceContext, resource: &UniformResource) -> bool {
        let blocked = NON_TRAVERSIBLE_SCHEMES
            .iter()
            .any(|scheme| resource.uri.starts_with(scheme));
        if blocked {
            debug!(uri = %resource.uri, "rejecting non-traversible resource");
            if let Some(reporter) = &self.reporter {
                reporter(ctx, resource);
            }
            return false;
        }
        true
    }
}
