//! HtmlContentResourcesSupplier: whole-source iteration over parsed content
//!
//! Binds per-anchor resolution to a content source's anchor list. Anchors
//! are processed strictly sequentially in document order; a transform
//! failure mid-iteration aborts it, leaving earlier deliveries in place.

use super::typical::{SupplierOptions, TypicalResourcesSupplier};
use super::{ContentResourcesSupplier, ResourceConsumer, ResourcesSupplier, SupplyError};
use crate::resource::{HtmlAnchor, ProvenanceUrn, Resource, ResourceContext};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Parsed content that can enumerate its hyperlinks in document order.
///
/// The parsing itself is an external collaborator; the supplier consumes
/// only this contract.
pub trait QueryableAnchors: Send + Sync {
    fn anchors(&self) -> Vec<HtmlAnchor>;
}

/// A pre-extracted anchor list is itself a valid content source.
impl QueryableAnchors for Vec<HtmlAnchor> {
    fn anchors(&self) -> Vec<HtmlAnchor> {
        self.clone()
    }
}

/// A supplier bound to parsed HTML content.
pub struct HtmlContentResourcesSupplier {
    content: Arc<dyn QueryableAnchors>,
    inner: TypicalResourcesSupplier,
}

impl HtmlContentResourcesSupplier {
    pub fn new(content: Arc<dyn QueryableAnchors>, options: SupplierOptions) -> Self {
        Self {
            content,
            inner: TypicalResourcesSupplier::new(options),
        }
    }
}

#[async_trait]
impl ResourcesSupplier for HtmlContentResourcesSupplier {
    fn provenance(&self) -> &ProvenanceUrn {
        self.inner.provenance()
    }

    async fn resource_from_anchor(
        &self,
        ctx: &ResourceContext,
        anchor: &HtmlAnchor,
    ) -> Result<Option<Resource>, SupplyError> {
        self.inner.resource_from_anchor(ctx, anchor).await
    }
}

#[async_trait]
impl ContentResourcesSupplier for HtmlContentResourcesSupplier {
    async fn for_each_resource(
        &self,
        ctx: &ResourceContext,
        consume: ResourceConsumer<'_>,
    ) -> Result<(), SupplyError> {
        let anchors = self.content.anchors();
        debug!(
            provenance = %self.provenance(),
            anchors = anchors.len(),
            "iterating content source"
        );
        for anchor in &anchors {
            if let Some(resource) = self.resource_from_anchor(ctx, anchor).await? {
                consume(resource);
            }
        }
        Ok(())
    }
}
