//! Supplier layer: anchor discovery → filter → transform → filter → deliver
//!
//! A supplier resolves one anchor at a time through a fixed per-anchor
//! sequence and, when bound to a content source, drives every discovered
//! anchor through that sequence in document order, strictly sequentially.

mod email;
mod html;
mod typical;

pub use email::EmailMessageResourcesSupplier;
pub use html::{HtmlContentResourcesSupplier, QueryableAnchors};
pub use typical::{SupplierOptions, TypicalResourcesSupplier};

use crate::resource::{HtmlAnchor, ProvenanceUrn, Resource, ResourceContext};
use crate::transform::TransformError;
use async_trait::async_trait;
use thiserror::Error;

/// Errors from resource supply.
///
/// Filters cannot fail and resource construction is a pure copy, so the only
/// failure source is the transformer pipeline — propagated uncaught
/// (fail-fast), aborting any in-progress whole-source iteration.
#[derive(Debug, Error)]
pub enum SupplyError {
    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// Callback receiving each emitted resource, invoked synchronously once per
/// resource that survives both checkpoints, in anchor order. The consumer
/// must not retain the context beyond the call.
pub type ResourceConsumer<'a> = &'a mut (dyn FnMut(Resource) + Send);

/// The contract suppliers implement: per-anchor resolution.
#[async_trait]
pub trait ResourcesSupplier: Send + Sync {
    /// The provenance identity stamped on every resource this supplier builds.
    fn provenance(&self) -> &ProvenanceUrn;

    /// Resolve one anchor: build the original resource, filter it, run the
    /// transformer pipeline if configured, filter again, and return the
    /// survivor. `Ok(None)` means the anchor was dropped at a checkpoint.
    async fn resource_from_anchor(
        &self,
        ctx: &ResourceContext,
        anchor: &HtmlAnchor,
    ) -> Result<Option<Resource>, SupplyError>;
}

/// A supplier bound to a content source, able to drive every discovered
/// anchor through per-anchor resolution.
#[async_trait]
pub trait ContentResourcesSupplier: ResourcesSupplier {
    /// Resolve every anchor the content source exposes, in document order,
    /// invoking `consume` once per emitted resource. No batching,
    /// deduplication, or reordering; anchor N+1 is not touched until
    /// anchor N reaches emission or drop. A transform failure aborts the
    /// iteration — resources already consumed stay delivered.
    async fn for_each_resource(
        &self,
        ctx: &ResourceContext,
        consume: ResourceConsumer<'_>,
    ) -> Result<(), SupplyError>;
}
