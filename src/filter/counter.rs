//! FilteredResourcesCounter: named tallies of filter rejections
//!
//! Each named filter step registers a reporter once per measurement run and
//! hands the returned closure to its filter. The counter owns the tallies;
//! filters hold only the closure, so counter and filter lifetimes stay
//! independent.

use super::traits::FilterReporter;
use dashmap::DashMap;
use std::sync::Arc;
use thiserror::Error;

/// Errors from counter lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CounterError {
    #[error("no reporter registered for label '{0}'")]
    UnregisteredLabel(String),
}

/// Mutable tally of how many resources each named filter step rejected.
///
/// Entries are created lazily on registration and only ever incremented —
/// re-registering a label starts a fresh measurement by zeroing its entry
/// (last registration wins).
#[derive(Debug, Default)]
pub struct FilteredResourcesCounter {
    tallies: Arc<DashMap<String, usize>>,
}

impl FilteredResourcesCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `label` and return the reporter closure for it.
    ///
    /// The closure increments the label's tally on every invocation. It
    /// resolves the label at call time, so a closure from a superseded
    /// registration keeps feeding the current entry.
    pub fn reporter(&self, label: impl Into<String>) -> FilterReporter {
        let label = label.into();
        self.tallies.insert(label.clone(), 0);
        let tallies = Arc::clone(&self.tallies);
        Arc::new(move |_ctx, _resource| {
            if let Some(mut entry) = tallies.get_mut(&label) {
                *entry += 1;
            }
        })
    }

    /// Current tally for `label`.
    ///
    /// A label that was never registered is an error, not zero — callers
    /// must register every label they intend to query.
    pub fn count(&self, label: &str) -> Result<usize, CounterError> {
        self.tallies
            .get(label)
            .map(|entry| *entry)
            .ok_or_else(|| CounterError::UnregisteredLabel(label.to_string()))
    }
}
