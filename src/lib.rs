//! Uniform Resource: filter/transform composition for extracted hyperlinks
//!
//! Takes the anchors a content parser discovered in an HTML page or e-mail
//! body, normalizes each into a uniform resource record, and drives it
//! through a two-stage pipeline — filter, transform, filter again — before
//! delivering survivors to a consumer.
//!
//! # Core Concepts
//!
//! - **Anchors**: discovered hyperlinks with an href and display label
//! - **Filters**: capability-typed predicates at two checkpoints, composed
//!   with short-circuit AND semantics and per-step rejection counting
//! - **Suppliers**: orchestrate per-anchor resolution and whole-source
//!   iteration, in document order
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use uniform_resource::{
//!     BlankLabelFilter, BrowserTraversibleFilter, FilterPipe,
//!     FilteredResourcesCounter,
//! };
//!
//! let counter = FilteredResourcesCounter::new();
//! let filter = FilterPipe::empty()
//!     .with_filter(Arc::new(BlankLabelFilter::with_reporter(
//!         counter.reporter("Blank label"),
//!     )))
//!     .with_filter(Arc::new(BrowserTraversibleFilter::with_reporter(
//!         counter.reporter("Not traversible"),
//!     )));
//! assert_eq!(filter.len(), 2);
//! assert_eq!(counter.count("Blank label"), Ok(0));
//! ```

pub mod filter;
pub mod resource;
pub mod supplier;
pub mod transform;

pub use filter::{
    BlankLabelFilter, BrowserTraversibleFilter, CounterError, FilterPipe, FilterReporter,
    FilteredResourcesCounter, ResourceFilter,
};
pub use resource::{
    HtmlAnchor, ProvenanceUrn, Resource, ResourceContext, TransformedResource, UniformResource,
};
pub use supplier::{
    ContentResourcesSupplier, EmailMessageResourcesSupplier, HtmlContentResourcesSupplier,
    QueryableAnchors, ResourceConsumer, ResourcesSupplier, SupplierOptions, SupplyError,
    TypicalResourcesSupplier,
};
pub use transform::{ResourceTransformer, TransformError, TransformerPipe};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
