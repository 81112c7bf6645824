//! FilterPipe: ordered all-must-pass composition of filters
//!
//! Each checkpoint evaluates children in list order and stops at the first
//! rejection, so later filters (and their reporters) never see a resource an
//! earlier filter already rejected. That keeps ordering meaningful — cheap
//! structural checks first — and keeps removal tallies mutually exclusive:
//! every rejected resource is attributed to exactly one filter.

use super::traits::ResourceFilter;
use crate::resource::{Resource, ResourceContext, UniformResource};
use std::sync::Arc;

/// An ordered list of filters composed into one filter with short-circuit
/// AND semantics, independently at each checkpoint.
pub struct FilterPipe {
    filters: Vec<Arc<dyn ResourceFilter>>,
}

impl FilterPipe {
    pub fn new(filters: Vec<Arc<dyn ResourceFilter>>) -> Self {
        Self { filters }
    }

    /// Create an empty pipe (retains everything).
    pub fn empty() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Append a filter to the end of the pipe.
    pub fn with_filter(mut self, filter: Arc<dyn ResourceFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl ResourceFilter for FilterPipe {
    fn retain_original(&self, ctx: &ResourceContext, resource: &UniformResource) -> bool {
        for filter in &self.filters {
            if !filter.retain_original(ctx, resource) {
                return false;
            }
        }
        true
    }

    fn retain_transformed(&self, ctx: &ResourceContext, resource: &Resource) -> bool {
        for filter in &self.filters {
            if !filter.retain_transformed(ctx, resource) {
                return false;
            }
        }
        true
    }
}
