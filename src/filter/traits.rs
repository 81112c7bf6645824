//! ResourceFilter trait — the contract filters implement
//!
//! A filter is a predicate over a resource, evaluated at up to two
//! checkpoints: "original" (freshly built, untransformed) and "transformed"
//! (after the transformer pipeline). Both hooks default to retaining, so a
//! filter implements only the checkpoints it cares about and composes
//! uniformly in a chain.

use crate::resource::{Resource, ResourceContext, UniformResource};
use std::sync::Arc;

/// Callback a filter invokes exactly once per rejected resource, before
/// returning `false`. Reporters must not panic.
pub type FilterReporter = Arc<dyn Fn(&ResourceContext, &UniformResource) + Send + Sync>;

/// The contract filters implement.
///
/// Filters never mutate the resource and never fail — both are enforced
/// by the signatures. A hook left defaulted retains everything at that
/// checkpoint.
pub trait ResourceFilter: Send + Sync {
    /// Checkpoint one: the freshly built resource, before any transformation.
    fn retain_original(&self, _ctx: &ResourceContext, _resource: &UniformResource) -> bool {
        true
    }

    /// Checkpoint two: the resource after the transformer pipeline has run.
    fn retain_transformed(&self, _ctx: &ResourceContext, _resource: &Resource) -> bool {
        true
    }
}
