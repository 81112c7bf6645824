//! Transformer pipeline: ordered async enrichment of one resource
//!
//! Transformation internals (redirect following, label cleanup, tracking-code
//! stripping) live outside this crate; what lives here is the composition
//! contract and the pipe that sequences externally supplied steps over a
//! single resource. Steps may suspend — each performs collaborating work —
//! and a failing step propagates out unmodified, aborting the per-anchor
//! operation.

use crate::resource::{Resource, ResourceContext};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Errors from transformer steps.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("transform step '{step}' failed: {message}")]
    StepFailed { step: String, message: String },

    #[error("transform error: {0}")]
    Internal(String),
}

impl TransformError {
    pub fn step_failed(step: impl Into<String>, message: impl Into<String>) -> Self {
        Self::StepFailed {
            step: step.into(),
            message: message.into(),
        }
    }
}

/// One enrichment step over a resource.
///
/// Each call is independent and may suspend while awaiting an external
/// collaborator. A step that changes the resource records a remark via
/// [`Resource::with_remark`]; a step with nothing to do returns the
/// resource unchanged.
#[async_trait]
pub trait ResourceTransformer: Send + Sync {
    async fn flow(&self, ctx: &ResourceContext, resource: Resource)
        -> Result<Resource, TransformError>;
}

/// An ordered sequence of transformer steps applied to one resource.
///
/// Steps run strictly in order; after each step a transformed resource's
/// `pipe_position` is stamped with the number of steps that have run. The
/// pipe catches nothing: the first step error ends the flow.
pub struct TransformerPipe {
    steps: Vec<Arc<dyn ResourceTransformer>>,
}

impl TransformerPipe {
    pub fn new(steps: Vec<Arc<dyn ResourceTransformer>>) -> Self {
        Self { steps }
    }

    /// Append a step to the end of the pipe.
    pub fn with_step(mut self, step: Arc<dyn ResourceTransformer>) -> Self {
        self.steps.push(step);
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[async_trait]
impl ResourceTransformer for TransformerPipe {
    async fn flow(
        &self,
        ctx: &ResourceContext,
        mut resource: Resource,
    ) -> Result<Resource, TransformError> {
        for (position, step) in self.steps.iter().enumerate() {
            resource = step.flow(ctx, resource).await?;
            if let Resource::Transformed(t) = &mut resource {
                t.pipe_position = position + 1;
            }
        }
        Ok(resource)
    }
}
