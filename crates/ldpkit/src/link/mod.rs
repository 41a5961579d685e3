//! HTTP `Link` header handling (RFC 5988)
//!
//! ```text
//! raw header values ──► split_links ──► LinkValue::parse ──► resolve_if_relative
//! ```
//!
//! Everything here is pure and stateless.

mod resolve;
mod tokenizer;
mod value;

pub use resolve::{contains_link, first_link_for_relation, resolve_if_relative, LinkHeader};
pub use tokenizer::split_links;
pub use value::LinkValue;

/// `Link` response header name
pub const LINK: &str = "Link";

/// Relation advertising the interaction model of a resource
pub const REL_TYPE: &str = "type";

/// Relation pointing at a description of a non-RDF resource
pub const REL_DESCRIBEDBY: &str = "describedby";

/// Relation pointing at server constraints
pub const REL_CONSTRAINED_BY: &str = "http://www.w3.org/ns/ldp#constrainedBy";
