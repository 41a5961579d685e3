//! LDP vocabulary terms that show up in `Link` and `Prefer` headers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// LDP namespace
pub const LDP_NS: &str = "http://www.w3.org/ns/ldp#";

/// Include/omit containment triples
pub const PREFER_CONTAINMENT: &str = "http://www.w3.org/ns/ldp#PreferContainment";
/// Include/omit membership triples
pub const PREFER_MEMBERSHIP: &str = "http://www.w3.org/ns/ldp#PreferMembership";
/// Include/omit everything but the minimal container triples
pub const PREFER_MINIMAL_CONTAINER: &str = "http://www.w3.org/ns/ldp#PreferMinimalContainer";
/// Older spelling of [`PREFER_MINIMAL_CONTAINER`]
pub const PREFER_EMPTY_CONTAINER: &str = "http://www.w3.org/ns/ldp#PreferEmptyContainer";

/// LDP interaction models advertised with `rel="type"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InteractionModel {
    /// `ldp:Resource`
    Resource,
    /// `ldp:RDFSource`
    RdfSource,
    /// `ldp:NonRDFSource`
    NonRdfSource,
    /// `ldp:Container`
    Container,
    /// `ldp:BasicContainer`
    BasicContainer,
    /// `ldp:DirectContainer`
    DirectContainer,
    /// `ldp:IndirectContainer`
    IndirectContainer,
}

impl InteractionModel {
    /// All models, most general first
    pub const ALL: [Self; 7] = [
        Self::Resource,
        Self::RdfSource,
        Self::NonRdfSource,
        Self::Container,
        Self::BasicContainer,
        Self::DirectContainer,
        Self::IndirectContainer,
    ];

    /// Local name in the LDP namespace
    #[must_use]
    pub const fn local_name(self) -> &'static str {
        match self {
            Self::Resource => "Resource",
            Self::RdfSource => "RDFSource",
            Self::NonRdfSource => "NonRDFSource",
            Self::Container => "Container",
            Self::BasicContainer => "BasicContainer",
            Self::DirectContainer => "DirectContainer",
            Self::IndirectContainer => "IndirectContainer",
        }
    }

    /// Full URI
    #[must_use]
    pub fn uri(self) -> String {
        format!("{LDP_NS}{}", self.local_name())
    }

    /// Recognize a type URI
    #[must_use]
    pub fn from_uri(uri: &str) -> Option<Self> {
        let local = uri.strip_prefix(LDP_NS)?;
        Self::ALL.into_iter().find(|m| m.local_name() == local)
    }

    /// Check if the model is a container type
    #[must_use]
    pub const fn is_container(self) -> bool {
        matches!(
            self,
            Self::Container | Self::BasicContainer | Self::DirectContainer | Self::IndirectContainer
        )
    }
}

impl fmt::Display for InteractionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ldp:{}", self.local_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_uri() {
        for model in InteractionModel::ALL {
            assert_eq!(InteractionModel::from_uri(&model.uri()), Some(model));
        }
    }

    #[test]
    fn test_unknown_uri() {
        assert_eq!(InteractionModel::from_uri("http://www.w3.org/ns/ldp#Thing"), None);
        assert_eq!(InteractionModel::from_uri("http://example.com/Resource"), None);
    }

    #[test]
    fn test_is_container() {
        assert!(InteractionModel::BasicContainer.is_container());
        assert!(!InteractionModel::NonRdfSource.is_container());
    }

    #[test]
    fn test_display() {
        assert_eq!(InteractionModel::RdfSource.to_string(), "ldp:RDFSource");
    }
}
