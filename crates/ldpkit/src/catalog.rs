//! Test catalog: discovery of requirement-tagged test methods.
//!
//! A [`TestModule`] lists its methods together with the annotations a
//! conformance harness attaches to them. [`extract_records`] turns an ordered
//! set of modules into normalized [`TestMethodRecord`]s. Module order, then
//! declaration order, is preserved because it decides which record claims a
//! requirement first.
//!
//! [`SuiteCatalog`] is the file-backed implementation: a YAML or JSON
//! declaration of modules and methods.

use crate::requirement::{ApprovalStatus, ImplementationStatus, RequirementLevel, TestMethodRecord};
use crate::result::{LdpError, LdpResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Canonical module order of the LDP test suite
pub const LDP_MODULE_ORDER: [&str; 7] = [
    "RdfSourceTest",
    "BasicContainerTest",
    "CommonContainerTest",
    "CommonResourceTest",
    "NonRDFSourceTest",
    "IndirectContainerTest",
    "DirectContainerTest",
];

/// Test-runner annotation: enablement, description and groups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestAnnotation {
    /// Whether the test runs
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Description shown in reports
    #[serde(default)]
    pub description: String,
    /// Group tags (requirement levels and free-form groups)
    #[serde(default)]
    pub groups: Vec<String>,
}

const fn default_enabled() -> bool {
    true
}

impl Default for TestAnnotation {
    fn default() -> Self {
        Self {
            enabled: true,
            description: String::new(),
            groups: Vec::new(),
        }
    }
}

/// Requirement annotation: which clause, how it is tested, review state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecAnnotation {
    /// Normative reference (usually a URI with a fragment)
    pub spec_ref: String,
    /// How the test exercises the clause
    pub implementation: ImplementationStatus,
    /// Working-group review state
    pub approval: ApprovalStatus,
}

/// A test method as exposed by its module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    /// Method name
    pub name: String,
    /// Test-runner annotation, if any
    #[serde(default)]
    pub test: Option<TestAnnotation>,
    /// Requirement annotation, if any
    #[serde(default)]
    pub spec: Option<SpecAnnotation>,
}

impl MethodDescriptor {
    /// Create a method with both annotations present
    #[must_use]
    pub fn annotated(name: impl Into<String>, test: TestAnnotation, spec: SpecAnnotation) -> Self {
        Self {
            name: name.into(),
            test: Some(test),
            spec: Some(spec),
        }
    }

    /// Create a method without annotations (helpers, fixtures)
    #[must_use]
    pub fn plain(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            test: None,
            spec: None,
        }
    }

    /// Normalize into a record, or `None` when an annotation is missing
    #[must_use]
    pub fn to_record(&self, module: &str) -> Option<TestMethodRecord> {
        let (test, spec) = match (&self.test, &self.spec) {
            (Some(test), Some(spec)) => (test, spec),
            _ => return None,
        };

        Some(TestMethodRecord {
            module: module.to_string(),
            name: self.name.clone(),
            description: test.description.clone(),
            groups: test.groups.clone(),
            enabled: test.enabled,
            levels: test
                .groups
                .iter()
                .filter_map(|g| RequirementLevel::from_group(g))
                .collect(),
            spec_ref: spec.spec_ref.clone(),
            implementation: spec.implementation,
            approval: spec.approval,
        })
    }
}

/// Capability of a test module: list its requirement-tagged methods
pub trait TestModule {
    /// Module name, used for grouping and anchors in reports
    fn name(&self) -> &str;

    /// Methods in declaration order
    fn methods(&self) -> Vec<MethodDescriptor>;
}

/// Extract normalized records from modules, in module then declaration order.
///
/// Methods missing either annotation are skipped.
#[must_use]
pub fn extract_records(modules: &[&dyn TestModule]) -> Vec<TestMethodRecord> {
    let mut records = Vec::new();
    for module in modules {
        for method in module.methods() {
            match method.to_record(module.name()) {
                Some(record) => records.push(record),
                None => tracing::trace!(
                    module = module.name(),
                    method = %method.name,
                    "skipping method without requirement metadata"
                ),
            }
        }
    }
    records
}

/// A module declared in a catalog file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogModule {
    /// Module name
    pub name: String,
    /// Methods in declaration order
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
}

impl TestModule for CatalogModule {
    fn name(&self) -> &str {
        &self.name
    }

    fn methods(&self) -> Vec<MethodDescriptor> {
        self.methods.clone()
    }
}

/// File-backed suite declaration
///
/// ```yaml
/// modules:
///   - name: BasicContainerTest
///     methods:
///       - name: testContainerSupportsHttpLinkHeader
///         test: { groups: [MUST], description: "..." }
///         spec:
///           spec_ref: "http://www.w3.org/TR/ldp#ldpr-gen-linktypehdr"
///           implementation: AUTOMATED
///           approval: WG_APPROVED
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteCatalog {
    /// Suite title used in reports
    #[serde(default)]
    pub title: Option<String>,
    /// Modules in processing order
    #[serde(default)]
    pub modules: Vec<CatalogModule>,
}

impl SuiteCatalog {
    /// Parse a YAML catalog
    pub fn from_yaml_str(source: &str) -> LdpResult<Self> {
        let catalog: Self = serde_yaml_ng::from_str(source)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse a JSON catalog
    pub fn from_json_str(source: &str) -> LdpResult<Self> {
        let catalog: Self = serde_json::from_str(source)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog file; `.json` files are read as JSON, anything else as YAML
    pub fn load(path: &Path) -> LdpResult<Self> {
        let source = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&source)
        } else {
            Self::from_yaml_str(&source)
        }
    }

    fn validate(&self) -> LdpResult<()> {
        for (index, module) in self.modules.iter().enumerate() {
            if module.name.trim().is_empty() {
                return Err(LdpError::catalog(format!("module #{index} has no name")));
            }
            if let Some(method) = module.methods.iter().find(|m| m.name.trim().is_empty()) {
                return Err(LdpError::catalog(format!(
                    "module '{}' declares a method without a name ({:?})",
                    module.name, method
                )));
            }
        }
        Ok(())
    }

    /// Reorder modules into [`LDP_MODULE_ORDER`]; unknown modules follow in file order
    #[must_use]
    pub fn in_ldp_order(mut self) -> Self {
        let rank = |name: &str| {
            LDP_MODULE_ORDER
                .iter()
                .position(|known| *known == name)
                .unwrap_or(LDP_MODULE_ORDER.len())
        };
        // stable sort keeps file order among unknown modules
        self.modules.sort_by_key(|m| rank(&m.name));
        self
    }

    /// Modules as trait objects, in catalog order
    #[must_use]
    pub fn modules(&self) -> Vec<&dyn TestModule> {
        self.modules.iter().map(|m| m as &dyn TestModule).collect()
    }

    /// Extract records from every module
    #[must_use]
    pub fn records(&self) -> Vec<TestMethodRecord> {
        extract_records(&self.modules())
    }
}
