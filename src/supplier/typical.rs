//! TypicalResourcesSupplier: the per-anchor resolution sequence
//!
//! Build original → filter (original checkpoint) → transform if configured →
//! filter (transformed checkpoint) → emit. Terminal after one traversal;
//! a rejection at the original checkpoint skips transformation entirely.

use super::{ResourcesSupplier, SupplyError};
use crate::filter::ResourceFilter;
use crate::resource::{HtmlAnchor, ProvenanceUrn, Resource, ResourceContext, UniformResource};
use crate::transform::ResourceTransformer;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, trace};

/// Options for building a supplier: the provenance identity plus the
/// optional filter and transformer collaborators.
pub struct SupplierOptions {
    pub provenance: ProvenanceUrn,
    pub filter: Option<Arc<dyn ResourceFilter>>,
    pub transformer: Option<Arc<dyn ResourceTransformer>>,
}

impl SupplierOptions {
    pub fn new(provenance: impl Into<ProvenanceUrn>) -> Self {
        Self {
            provenance: provenance.into(),
            filter: None,
            transformer: None,
        }
    }

    pub fn with_filter(mut self, filter: Arc<dyn ResourceFilter>) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn with_transformer(mut self, transformer: Arc<dyn ResourceTransformer>) -> Self {
        self.transformer = Some(transformer);
        self
    }
}

/// A supplier resolving anchors against a fixed provenance identity.
pub struct TypicalResourcesSupplier {
    provenance: ProvenanceUrn,
    filter: Option<Arc<dyn ResourceFilter>>,
    transformer: Option<Arc<dyn ResourceTransformer>>,
}

impl TypicalResourcesSupplier {
    pub fn new(options: SupplierOptions) -> Self {
        Self {
            provenance: options.provenance,
            filter: options.filter,
            transformer: options.transformer,
        }
    }
}

#[async_trait]
impl ResourcesSupplier for TypicalResourcesSupplier {
    fn provenance(&self) -> &ProvenanceUrn {
        &self.provenance
    }

    async fn resource_from_anchor(
        &self,
        ctx: &ResourceContext,
        anchor: &HtmlAnchor,
    ) -> Result<Option<Resource>, SupplyError> {
        let original = UniformResource::from_anchor(anchor, &self.provenance);
        trace!(uri = %original.uri, "built original resource");

        if let Some(filter) = &self.filter {
            if !filter.retain_original(ctx, &original) {
                debug!(uri = %original.uri, "dropped at original checkpoint");
                return Ok(None);
            }
        }

        match &self.transformer {
            Some(transformer) => {
                let transformed = transformer.flow(ctx, Resource::Plain(original)).await?;
                if let Some(filter) = &self.filter {
                    if !filter.retain_transformed(ctx, &transformed) {
                        debug!(uri = %transformed.uri(), "dropped at transformed checkpoint");
                        return Ok(None);
                    }
                }
                Ok(Some(transformed))
            }
            None => Ok(Some(Resource::Plain(original))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{BlankLabelFilter, FilterPipe};
    use crate::transform::TransformError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingTransformer {
        invoked: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl ResourceTransformer for CountingTransformer {
        async fn flow(
            &self,
            _ctx: &ResourceContext,
            resource: Resource,
        ) -> Result<Resource, TransformError> {
            self.invoked.fetch_add(1, Ordering::SeqCst);
            Ok(resource.with_remark("counted"))
        }
    }

    /// Rejects everything at the transformed checkpoint.
    struct RejectTransformed;

    impl ResourceFilter for RejectTransformed {
        fn retain_transformed(&self, _ctx: &ResourceContext, _resource: &Resource) -> bool {
            false
        }
    }

    fn supplier(options: SupplierOptions) -> TypicalResourcesSupplier {
        TypicalResourcesSupplier::new(options)
    }

    #[tokio::test]
    async fn no_filter_no_transformer_emits_plain_copy() {
        let ctx = ResourceContext::new();
        let s = supplier(SupplierOptions::new("urn:test:doc"));
        let anchor = HtmlAnchor::labeled("https://example.com/a", "A");

        let resource = s.resource_from_anchor(&ctx, &anchor).await.unwrap().unwrap();
        assert!(!resource.is_transformed());
        assert_eq!(resource.uri(), "https://example.com/a");
        assert_eq!(resource.label(), Some("A"));
        assert_eq!(resource.provenance().as_str(), "urn:test:doc");
    }

    #[tokio::test]
    async fn original_checkpoint_rejection_skips_transformer() {
        let ctx = ResourceContext::new();
        let invoked = Arc::new(AtomicUsize::new(0));
        let s = supplier(
            SupplierOptions::new("urn:test:doc")
                .with_filter(Arc::new(BlankLabelFilter::new()))
                .with_transformer(Arc::new(CountingTransformer {
                    invoked: invoked.clone(),
                })),
        );

        let dropped = s
            .resource_from_anchor(&ctx, &HtmlAnchor::unlabeled("https://example.com"))
            .await
            .unwrap();
        assert!(dropped.is_none());
        assert_eq!(invoked.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn transformed_checkpoint_rejection_discards_transform_result() {
        let ctx = ResourceContext::new();
        let invoked = Arc::new(AtomicUsize::new(0));
        let s = supplier(
            SupplierOptions::new("urn:test:doc")
                .with_filter(Arc::new(
                    FilterPipe::empty().with_filter(Arc::new(RejectTransformed)),
                ))
                .with_transformer(Arc::new(CountingTransformer {
                    invoked: invoked.clone(),
                })),
        );

        let dropped = s
            .resource_from_anchor(&ctx, &HtmlAnchor::labeled("https://example.com", "x"))
            .await
            .unwrap();
        assert!(dropped.is_none());
        // Transformation ran; its result was discarded afterwards.
        assert_eq!(invoked.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn transformer_output_carries_remarks() {
        let ctx = ResourceContext::new();
        let s = supplier(SupplierOptions::new("urn:test:doc").with_transformer(Arc::new(
            CountingTransformer {
                invoked: Arc::new(AtomicUsize::new(0)),
            },
        )));

        let resource = s
            .resource_from_anchor(&ctx, &HtmlAnchor::labeled("https://example.com", "x"))
            .await
            .unwrap()
            .unwrap();
        assert!(resource.is_transformed());
        assert_eq!(resource.remarks(), ["counted"]);
    }

    #[tokio::test]
    async fn transform_failure_propagates_out() {
        struct Failing;

        #[async_trait]
        impl ResourceTransformer for Failing {
            async fn flow(
                &self,
                _ctx: &ResourceContext,
                _resource: Resource,
            ) -> Result<Resource, TransformError> {
                Err(TransformError::step_failed("redirects", "connection reset"))
            }
        }

        let ctx = ResourceContext::new();
        let s = supplier(SupplierOptions::new("urn:test:doc").with_transformer(Arc::new(Failing)));

        let err = s
            .resource_from_anchor(&ctx, &HtmlAnchor::labeled("https://example.com", "x"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SupplyError::Transform(TransformError::StepFailed { .. })
        ));
    }
}
