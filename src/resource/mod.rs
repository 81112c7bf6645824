//! Resource data model: anchors, uniform resources, and transformation state
//!
//! An anchor is what the content parser discovered; a uniform resource is the
//! normalized record a supplier builds from it. A resource is either plain or
//! transformed — exactly one of the two, expressed as a tagged enum so
//! downstream code pattern-matches instead of probing optional fields.

use serde::{Deserialize, Serialize};

/// A hyperlink discovered in parsed content, prior to any normalization.
///
/// Produced by the content-parsing collaborator, one per hyperlink,
/// in document order. `label` is `None` when the markup carried no
/// display text for the link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlAnchor {
    pub href: String,
    #[serde(default)]
    pub label: Option<String>,
}

impl HtmlAnchor {
    pub fn new(href: impl Into<String>, label: Option<&str>) -> Self {
        Self {
            href: href.into(),
            label: label.map(|l| l.to_string()),
        }
    }

    /// Anchor with a display label.
    pub fn labeled(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: Some(label.into()),
        }
    }

    /// Anchor whose markup carried no label text.
    pub fn unlabeled(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: None,
        }
    }
}

/// Identity of the supplier a resource came from.
///
/// Serializes as a plain string (e.g. "urn:email:newsletter-2024-03").
/// This is lookup identity only — it never owns or borrows the supplier,
/// so a resource can outlive the supplier that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProvenanceUrn(String);

impl ProvenanceUrn {
    pub fn new(urn: impl Into<String>) -> Self {
        Self(urn.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProvenanceUrn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProvenanceUrn {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ProvenanceUrn {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A normalized resource built from one retained anchor.
///
/// Construction is a pure copy of the anchor's fields plus the supplier's
/// provenance identity; it cannot fail. `uri` is always non-empty as
/// provided by the content source; whether an empty `label` is acceptable
/// is filter policy, not a property of the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniformResource {
    pub uri: String,
    pub label: Option<String>,
    pub provenance: ProvenanceUrn,
}

impl UniformResource {
    /// Build a resource from an anchor and the provenance of its supplier.
    pub fn from_anchor(anchor: &HtmlAnchor, provenance: &ProvenanceUrn) -> Self {
        Self {
            uri: anchor.href.clone(),
            label: anchor.label.clone(),
            provenance: provenance.clone(),
        }
    }
}

/// A uniform resource after the transformer pipeline has modified it.
///
/// Carries the enriched resource plus transformation provenance: one
/// human-readable remark per change, and how many pipeline steps ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformedResource {
    pub resource: UniformResource,
    pub remarks: Vec<String>,
    pub pipe_position: usize,
}

/// Plain or transformed — a resource is exactly one of the two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Resource {
    Plain(UniformResource),
    Transformed(TransformedResource),
}

impl Resource {
    pub fn uri(&self) -> &str {
        &self.inner().uri
    }

    pub fn label(&self) -> Option<&str> {
        self.inner().label.as_deref()
    }

    pub fn provenance(&self) -> &ProvenanceUrn {
        &self.inner().provenance
    }

    pub fn is_transformed(&self) -> bool {
        matches!(self, Resource::Transformed(_))
    }

    /// All transformation remarks accumulated so far, oldest first.
    /// Empty for a plain resource.
    pub fn remarks(&self) -> &[String] {
        match self {
            Resource::Plain(_) => &[],
            Resource::Transformed(t) => &t.remarks,
        }
    }

    /// The underlying uniform resource, whichever variant this is.
    pub fn inner(&self) -> &UniformResource {
        match self {
            Resource::Plain(r) => r,
            Resource::Transformed(t) => &t.resource,
        }
    }

    /// Mutable access for transformer steps rewriting `uri` or `label`.
    pub fn inner_mut(&mut self) -> &mut UniformResource {
        match self {
            Resource::Plain(r) => r,
            Resource::Transformed(t) => &mut t.resource,
        }
    }

    /// Record a transformation remark, converting a plain resource into a
    /// transformed one on first use and accumulating on later uses.
    ///
    /// `pipe_position` starts at zero; the transformer pipe stamps it as
    /// steps complete.
    pub fn with_remark(self, remark: impl Into<String>) -> Resource {
        match self {
            Resource::Plain(resource) => Resource::Transformed(TransformedResource {
                resource,
                remarks: vec![remark.into()],
                pipe_position: 0,
            }),
            Resource::Transformed(mut t) => {
                t.remarks.push(remark.into());
                Resource::Transformed(t)
            }
        }
    }
}

/// Ambient context threaded through filtering, transformation, and supply.
///
/// Collaborators receive it by reference and must not retain it beyond
/// the call.
#[derive(Debug, Clone, Default)]
pub struct ResourceContext {
    /// Optional identifier for this run, surfaced in log output.
    pub run_id: Option<String>,
}

impl ResourceContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_run_id(run_id: impl Into<String>) -> Self {
        Self {
            run_id: Some(run_id.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(uri: &str, label: Option<&str>) -> UniformResource {
        UniformResource::from_anchor(
            &HtmlAnchor::new(uri, label),
            &ProvenanceUrn::from("urn:test:doc"),
        )
    }

    #[test]
    fn from_anchor_copies_fields() {
        let r = resource("https://example.com/a", Some("Example"));
        assert_eq!(r.uri, "https://example.com/a");
        assert_eq!(r.label.as_deref(), Some("Example"));
        assert_eq!(r.provenance.as_str(), "urn:test:doc");
    }

    #[test]
    fn plain_resource_has_no_remarks() {
        let r = Resource::Plain(resource("https://example.com", None));
        assert!(!r.is_transformed());
        assert!(r.remarks().is_empty());
    }

    #[test]
    fn with_remark_promotes_plain_to_transformed() {
        let r = Resource::Plain(resource("https://example.com", Some("x")));
        let r = r.with_remark("followed redirect");
        assert!(r.is_transformed());
        assert_eq!(r.remarks(), ["followed redirect"]);
    }

    #[test]
    fn with_remark_accumulates_in_order() {
        let r = Resource::Plain(resource("https://example.com", Some("x")))
            .with_remark("first")
            .with_remark("second");
        assert_eq!(r.remarks(), ["first", "second"]);
    }

    #[test]
    fn inner_mut_rewrites_through_either_variant() {
        let mut r = Resource::Plain(resource("https://example.com", Some("  x  ")));
        r.inner_mut().label = Some("x".to_string());
        assert_eq!(r.label(), Some("x"));

        let mut r = r.with_remark("trimmed label");
        r.inner_mut().uri = "https://example.com/final".to_string();
        assert_eq!(r.uri(), "https://example.com/final");
    }

    #[test]
    fn resource_serializes_with_state_tag() {
        let plain = Resource::Plain(resource("https://example.com", Some("x")));
        let json = serde_json::to_value(&plain).unwrap();
        assert_eq!(json["state"], "plain");

        let transformed = plain.with_remark("cleaned");
        let json = serde_json::to_value(&transformed).unwrap();
        assert_eq!(json["state"], "transformed");
        assert_eq!(json["remarks"][0], "cleaned");
    }

    #[test]
    fn provenance_urn_round_trips_as_plain_string() {
        let urn = ProvenanceUrn::from("urn:test:mail");
        let json = serde_json::to_string(&urn).unwrap();
        assert_eq!(json, "\"urn:test:mail\"");
        let back: ProvenanceUrn = serde_json::from_str(&json).unwrap();
        assert_eq!(back, urn);
    }
}
