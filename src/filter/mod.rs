//! Filter layer: chainable predicates over resources
//!
//! Filters decide, at two checkpoints (original and transformed), whether a
//! resource continues through the supply pipeline. Composition is ordered
//! short-circuit AND via [`FilterPipe`]; rejections are attributed through
//! reporter closures handed out by [`FilteredResourcesCounter`].

mod chain;
mod counter;
mod standard;
mod traits;

pub use chain::FilterPipe;
pub use counter::{CounterError, FilteredResourcesCounter};
pub use standard::{BlankLabelFilter, BrowserTraversibleFilter};
pub use traits::{FilterReporter, ResourceFilter};
