//! Report model and renderers for conformance coverage.
//!
//! [`build_report_model`] runs the tally pass once, then the detail pass over
//! the same records, and bundles the results for rendering. Rendering is pure
//! string building; writing the artifact is left to the caller.

use crate::catalog::LDP_MODULE_ORDER;
use crate::coverage::{build_details, AggregationRun, CoverageSummary, RequirementDetail, Tally};
use crate::requirement::{RequirementLevel, TestMethodRecord};
use crate::result::LdpResult;
use serde::{Deserialize, Serialize};

/// Default report title
pub const DEFAULT_TITLE: &str = "LDP Test Suite: Test Cases Report";

/// Everything a renderer needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportModel {
    /// Report title
    pub title: String,
    /// Final counters
    pub summary: CoverageSummary,
    /// Per-method entries, in record order
    pub details: Vec<RequirementDetail>,
    /// Manual test names
    pub manual_tests: Vec<String>,
    /// Client-only test names
    pub client_tests: Vec<String>,
}

/// Run both aggregation passes over `records` and bundle the result
#[must_use]
pub fn build_report_model(records: &[TestMethodRecord]) -> ReportModel {
    let tally = AggregationRun::new(records).tally();
    ReportModel::new(records, tally)
}

impl ReportModel {
    /// Assemble a model from a finished tally and the records it counted
    #[must_use]
    pub fn new(records: &[TestMethodRecord], tally: Tally) -> Self {
        let details = build_details(records, &tally.summary);
        Self {
            title: DEFAULT_TITLE.to_string(),
            summary: tally.summary,
            details,
            manual_tests: tally.manual_tests,
            client_tests: tally.client_tests,
        }
    }

    /// Set the title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Details grouped by module, modules in first-seen order
    #[must_use]
    pub fn modules(&self) -> Vec<(&str, Vec<&RequirementDetail>)> {
        let mut modules: Vec<(&str, Vec<&RequirementDetail>)> = Vec::new();
        for detail in &self.details {
            match modules.iter_mut().find(|(name, _)| *name == detail.module) {
                Some((_, entries)) => entries.push(detail),
                None => modules.push((detail.module.as_str(), vec![detail])),
            }
        }
        modules
    }

    /// Module names for the class index: suite classes in canonical order,
    /// then any other module in first-seen order
    #[must_use]
    pub fn implemented_classes(&self) -> Vec<&str> {
        let seen: Vec<&str> = self.modules().into_iter().map(|(name, _)| name).collect();
        let mut classes: Vec<&str> = LDP_MODULE_ORDER
            .iter()
            .copied()
            .filter(|known| seen.contains(known))
            .collect();
        classes.extend(seen.iter().filter(|name| !LDP_MODULE_ORDER.contains(*name)));
        classes
    }

    /// Render as pretty JSON
    pub fn render_json(&self) -> LdpResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render as Markdown
    #[must_use]
    pub fn render_markdown(&self) -> String {
        let s = &self.summary;
        let mut md = String::new();

        md.push_str(&format!("# {}\n\n", self.title));
        md.push_str("## Summary\n\n");
        md.push_str("| Metric | Count |\n|---|---|\n");
        md.push_str(&format!("| Total tests | {} |\n", s.total_tests));
        md.push_str(&format!(
            "| Implemented | {}/{} |\n",
            s.total_implemented, s.total_tests
        ));
        md.push_str(&format!("| Unimplemented | {} |\n", s.unimplemented));
        md.push_str(&format!("| Disabled | {} |\n", s.disabled));
        md.push_str(&format!("| Client-only | {} |\n", s.client_only));
        md.push_str(&format!("| Manual | {} |\n", s.manual));
        md.push_str(&format!("| Requirements covered | {} |\n", s.requirements_covered));
        md.push_str(&format!("| Requirements implemented | {} |\n", s.requirements_implemented));
        md.push_str(&format!(
            "| Requirements not implemented | {} |\n",
            s.requirements_not_implemented
        ));
        md.push_str(&format!("| Pending / approved | {} / {} |\n\n", s.pending, s.approved));

        md.push_str("| Level | Total | Implemented | Not implemented |\n|---|---|---|---|\n");
        for level in RequirementLevel::ALL {
            let counts = s.level(level);
            md.push_str(&format!(
                "| {level} | {} | {} | {} |\n",
                counts.total, counts.implemented, counts.not_implemented
            ));
        }

        push_markdown_list(&mut md, "Tests that Must be Tested Manually", &self.manual_tests);
        push_markdown_list(&mut md, "Client-Based Test Cases", &self.client_tests);

        for (module, entries) in self.modules() {
            md.push_str(&format!("\n## Test Class: {module}\n\n"));
            for d in entries {
                md.push_str(&format!(
                    "- **{}**: {} ([{}]({})) `{}` `{}`{}\n",
                    d.name,
                    d.description,
                    d.spec_ref,
                    d.spec_ref,
                    d.implementation,
                    d.approval,
                    if d.enabled { "" } else { " (disabled)" }
                ));
            }
        }

        md
    }

    /// Render as a standalone HTML page
    #[must_use]
    pub fn render_html(&self) -> String {
        let mut html = String::new();

        html.push_str(&format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>{}</title>
    <style>
        body {{ font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 20px; }}
        table.summary {{ border-collapse: collapse; width: 100%; }}
        table.summary td, table.summary th {{ border: 1px solid #ddd; padding: 10px; vertical-align: top; }}
        table.annotation {{ border-collapse: collapse; margin: 6px 0; }}
        table.annotation td, table.annotation th {{ border: 1px solid #eee; padding: 4px 8px; }}
        .disabled {{ color: #999; }}
        .totop, .totest {{ font-size: 0.85em; }}
    </style>
</head>
<body>
<a name="top"></a>
<h1>{}</h1>
"#,
            escape_html(&self.title),
            escape_html(&self.title)
        ));

        self.push_html_summary(&mut html);
        html.push_str(r##"<p class="totop"><a href="#top">Back to Top</a></p>
"##);

        let modules = self.modules();
        html.push_str("<h2>Implemented Test Classes</h2>\n<ul>\n");
        for module in self.implemented_classes() {
            let module = escape_html(module);
            html.push_str(&format!("    <li><a href=\"#{module}\">{module}</a></li>\n"));
        }
        html.push_str("</ul>\n");

        html.push_str("<h2><a name=\"manualTests\">Tests that Must be Tested Manually</a></h2>\n");
        push_html_list(&mut html, &self.manual_tests);
        html.push_str("<h2><a name=\"clientTests\">Client-Based Test Cases</a></h2>\n");
        push_html_list(&mut html, &self.client_tests);

        for (module, entries) in &modules {
            push_html_module(&mut html, module, entries);
        }

        html.push_str("</body>\n</html>\n");
        html
    }

    fn push_html_summary(&self, html: &mut String) {
        let s = &self.summary;
        html.push_str("<h2>Summary of Test Methods</h2>\n<table class=\"summary\">\n");
        html.push_str(
            "<tr><th>Total Tests</th><th>Overall Coverage</th><th>Unimplemented Methods</th></tr>\n<tr>\n",
        );

        html.push_str(&format!(
            "<td><b>{}</b> Total Tests Running Against Specifications<br><b>{}</b> Tests pending, <b>{}</b> Tests approved\n",
            s.total_tests, s.pending, s.approved
        ));
        html.push_str(&format!(
            "<ul><li><b>{}</b> Requirements Covered</li><ul>\n",
            s.requirements_covered
        ));
        for level in RequirementLevel::ALL {
            html.push_str(&format!("<li><b>{}</b> {level}</li>\n", s.level(level).total));
        }
        html.push_str("</ul></ul></td>\n");

        html.push_str(&format!(
            "<td><b>{}/{}</b> of Total Tests Implemented\n<ul><li><b>{}</b> Requirements Implemented</li><ul>\n",
            s.total_implemented, s.total_tests, s.requirements_implemented
        ));
        for level in RequirementLevel::ALL {
            let counts = s.level(level);
            html.push_str(&format!(
                "<li><b>{}/{}</b> of {level} Tests Implemented</li>\n",
                counts.implemented, counts.total
            ));
        }
        html.push_str("</ul></ul></td>\n");

        html.push_str(&format!(
            "<td><b>{}</b> of the Total Tests\n<ul>\n<li><b>{}</b> of the Total Tests not enabled</li>\n",
            s.unimplemented, s.disabled
        ));
        html.push_str(&format!(
            "<li><b>{}</b> of the Total are <a href=\"#clientTests\">Client-Based Tests</a></li>\n",
            s.client_only
        ));
        html.push_str(&format!(
            "<li><b>{}</b> of the Total must be Tested <a href=\"#manualTests\">Manually</a></li>\n</ul>\n",
            s.manual
        ));
        html.push_str(&format!(
            "From the Total,\n<ul><li><b>{}</b> Requirements not Implemented</li><ul>\n",
            s.requirements_not_implemented
        ));
        for level in RequirementLevel::ALL {
            html.push_str(&format!(
                "<li><b>{}</b> {level}</li>\n",
                s.level(level).not_implemented
            ));
        }
        html.push_str("</ul></ul></td>\n</tr>\n</table>\n");
    }
}

fn push_markdown_list(md: &mut String, heading: &str, names: &[String]) {
    md.push_str(&format!("\n## {heading}\n\n"));
    if names.is_empty() {
        md.push_str("_None_\n");
    }
    for name in names {
        md.push_str(&format!("- {name}\n"));
    }
}

fn push_html_list(html: &mut String, names: &[String]) {
    html.push_str("<ul>\n");
    for name in names {
        let name = escape_html(name);
        html.push_str(&format!("    <li><a href=\"#{name}\">{name}</a></li>\n"));
    }
    html.push_str("</ul>\n");
}

fn push_html_module(html: &mut String, module: &str, entries: &[&RequirementDetail]) {
    let module = escape_html(module);
    html.push_str(&format!(
        "<h2><a name=\"{module}\">Test Class: {module}</a></h2>\n<ul>\n"
    ));
    for d in entries {
        let name = escape_html(&d.name);
        let spec_ref = escape_html(&d.spec_ref);
        let class = if d.enabled { "" } else { " class=\"disabled\"" };
        html.push_str(&format!(
            "<li{class}><b><a name=\"{name}\">{name}: </a></b>\n<table class=\"annotation\">\n"
        ));
        html.push_str(&format!(
            "<tr><td><b>Description:</b> {}<br><b>Groups:</b> [{}]<br><b>Enabled:</b> {}</td></tr>\n",
            escape_html(&d.description),
            escape_html(&d.groups.join(", ")),
            d.enabled
        ));
        html.push_str(&format!(
            "<tr><td><b>Reference URI:</b> <a href=\"{spec_ref}\">{spec_ref}</a><br><b>Status:</b> {}<br><b>Test Case Implementation:</b> {}</td></tr>\n",
            d.approval, d.implementation
        ));
        html.push_str(&format!(
            "</table>\n<p class=\"totest\"><a href=\"#{module}\">Back to Main Test Class</a></p>\n</li>\n"
        ));
    }
    html.push_str("</ul>\n<p class=\"totop\"><a href=\"#top\">Back to Top</a></p>\n");
}

/// Escape HTML special characters
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirement::{ApprovalStatus, ImplementationStatus};

    fn records() -> Vec<TestMethodRecord> {
        vec![
            TestMethodRecord::new("RdfSourceTest", "testGetResource", "http://www.w3.org/TR/ldp#ldprs-get")
                .with_level(RequirementLevel::Must)
                .with_description("GET on an LDP-RS returns its state"),
            TestMethodRecord::new("BasicContainerTest", "testClientOnly", "http://www.w3.org/TR/ldp#client")
                .with_level(RequirementLevel::Should)
                .with_implementation(ImplementationStatus::ClientOnly)
                .with_approval(ApprovalStatus::Pending),
            TestMethodRecord::new("BasicContainerTest", "testManual", "http://www.w3.org/TR/ldp#manual")
                .with_level(RequirementLevel::May)
                .with_implementation(ImplementationStatus::Manual)
                .with_description("needs <human> eyes"),
            TestMethodRecord::new("RdfSourceTest", "testDisabled", "http://www.w3.org/TR/ldp#ldprs-get")
                .with_enabled(false),
        ]
    }

    mod model_tests {
        use super::*;

        #[test]
        fn test_build_report_model() {
            let records = records();
            let model = build_report_model(&records);

            assert_eq!(model.title, DEFAULT_TITLE);
            assert_eq!(model.summary.total_tests, 4);
            assert_eq!(model.summary.requirements_covered, 3);
            assert_eq!(model.details.len(), 4);
            assert_eq!(model.manual_tests, vec!["testManual"]);
            assert_eq!(model.client_tests, vec!["testClientOnly"]);
        }

        #[test]
        fn test_modules_first_seen_order() {
            let records = records();
            let model = build_report_model(&records);
            let modules = model.modules();

            assert_eq!(modules.len(), 2);
            assert_eq!(modules[0].0, "RdfSourceTest");
            assert_eq!(modules[0].1.len(), 2);
            assert_eq!(modules[1].0, "BasicContainerTest");
        }

        #[test]
        fn test_implemented_classes_canonical_order() {
            let mut records = records();
            records.insert(
                0,
                TestMethodRecord::new("CustomTest", "testExtra", "http://example.org/spec#x"),
            );
            records.push(TestMethodRecord::new("NonRDFSourceTest", "testBinary", "spec#nr"));
            let model = build_report_model(&records);

            assert_eq!(
                model.implemented_classes(),
                ["RdfSourceTest", "BasicContainerTest", "NonRDFSourceTest", "CustomTest"]
            );
        }

        #[test]
        fn test_with_title() {
            let model = build_report_model(&[]).with_title("Custom");
            assert_eq!(model.title, "Custom");
            assert!(model.details.is_empty());
        }
    }

    mod render_tests {
        use super::*;

        #[test]
        fn test_render_html() {
            let records = records();
            let html = build_report_model(&records).render_html();

            assert!(html.starts_with("<!DOCTYPE html>"));
            assert!(html.contains("Summary of Test Methods"));
            assert!(html.contains("<b>4</b> Total Tests Running Against Specifications"));
            assert!(html.contains("<b>1/1</b> of MUST Tests Implemented"));
            assert!(html.contains("Test Class: RdfSourceTest"));
            assert!(html.contains("href=\"#testManual\""));
            assert!(html.contains("needs &lt;human&gt; eyes"));
            assert!(!html.contains("needs <human> eyes"));
        }

        #[test]
        fn test_render_html_class_index_in_suite_order() {
            let records: Vec<TestMethodRecord> = records()
                .into_iter()
                .filter(|r| r.name != "testDisabled")
                .rev()
                .collect();
            let model = build_report_model(&records);
            assert_eq!(model.modules()[0].0, "BasicContainerTest");
            let html = model.render_html();

            let rdf = html.find("<li><a href=\"#RdfSourceTest\">").unwrap();
            let basic = html.find("<li><a href=\"#BasicContainerTest\">").unwrap();
            assert!(rdf < basic);
        }

        #[test]
        fn test_render_markdown() {
            let records = records();
            let md = build_report_model(&records).render_markdown();

            assert!(md.contains("| Total tests | 4 |"));
            assert!(md.contains("| MUST | 1 | 1 | 0 |"));
            assert!(md.contains("- testManual"));
            assert!(md.contains("(disabled)"));
        }

        #[test]
        fn test_render_markdown_empty_lists() {
            let md = build_report_model(&[]).render_markdown();
            assert!(md.contains("_None_"));
        }

        #[test]
        fn test_render_json() {
            let records = records();
            let json = build_report_model(&records).render_json().unwrap();
            let value: serde_json::Value = serde_json::from_str(&json).unwrap();

            assert_eq!(value["summary"]["total_tests"], 4);
            assert_eq!(value["summary"]["must"]["implemented"], 1);
            assert_eq!(value["details"][1]["implementation"], "CLIENT_ONLY");
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a & <b> \"c\" 'd'"), "a &amp; &lt;b&gt; &quot;c&quot; &#39;d&#39;");
    }
}
