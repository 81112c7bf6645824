//! EmailMessageResourcesSupplier: HTML supply with e-mail provenance
//!
//! Structurally identical to [`HtmlContentResourcesSupplier`] — an e-mail
//! body is HTML content; only the semantic labeling of its provenance
//! differs, not the algorithm.

use super::html::{HtmlContentResourcesSupplier, QueryableAnchors};
use super::typical::SupplierOptions;
use super::{ContentResourcesSupplier, ResourceConsumer, ResourcesSupplier, SupplyError};
use crate::resource::{HtmlAnchor, ProvenanceUrn, Resource, ResourceContext};
use async_trait::async_trait;
use std::sync::Arc;

/// A supplier bound to the HTML body of an e-mail message.
pub struct EmailMessageResourcesSupplier {
    inner: HtmlContentResourcesSupplier,
}

impl EmailMessageResourcesSupplier {
    pub fn new(content: Arc<dyn QueryableAnchors>, options: SupplierOptions) -> Self {
        Self {
            inner: HtmlContentResourcesSupplier::new(content, options),
        }
    }
}

#[async_trait]
impl ResourcesSupplier for EmailMessageResourcesSupplier {
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
impl ContentResourcesSupplier for EmailMessageResourcesSupplier {
    async fn for_each_resource(
        &self,
        ctx: &ResourceContext,
        consume: ResourceConsumer<'_>,
    ) -> Result<(), SupplyError> {
        self.inner.for_each_resource(ctx, consume).await
    }
}
