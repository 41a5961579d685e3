//! `Prefer` / `Preference-Applied` headers (RFC 7240).

use crate::result::{LdpError, LdpResult};
use regex::Regex;
use std::sync::OnceLock;

/// `Prefer` request header name
pub const PREFER: &str = "Prefer";

/// `Preference-Applied` response header name
pub const PREFERENCE_APPLIED: &str = "Preference-Applied";

/// LDP `include` preference parameter
pub const PREFERENCE_INCLUDE: &str = "include";

/// LDP `omit` preference parameter
pub const PREFERENCE_OMIT: &str = "omit";

fn return_representation() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // optional whitespace, optional quotes, other directives on either side
    PATTERN.get_or_init(|| {
        Regex::new(r#"^(?:|.*[ ;])return *= *"?representation"?(?:|[ ;].*)$"#)
            .expect("return=representation pattern compiles")
    })
}

/// Check if any `Preference-Applied` value acknowledges `return=representation`
#[must_use]
pub fn has_return_representation<S: AsRef<str>>(header_values: &[S]) -> bool {
    let pattern = return_representation();
    header_values.iter().any(|v| pattern.is_match(v.as_ref()))
}

/// Assert a response honours `return=representation`, if it says anything at all.
///
/// The header is optional: no values means nothing to violate.
///
/// # Errors
///
/// [`LdpError::AssertionFailed`] when values are present but none match.
pub fn check_preference_applied<S: AsRef<str>>(header_values: &[S]) -> LdpResult<()> {
    if header_values.is_empty() || has_return_representation(header_values) {
        return Ok(());
    }
    Err(LdpError::assertion(
        "Server responded with a Preference-Applied header, but it did not contain return=representation",
    ))
}

/// `Prefer` value asking to include the given preference URIs
#[must_use]
pub fn include(preferences: &[&str]) -> String {
    ldp_preference(PREFERENCE_INCLUDE, preferences)
}

/// `Prefer` value asking to omit the given preference URIs
#[must_use]
pub fn omit(preferences: &[&str]) -> String {
    ldp_preference(PREFERENCE_OMIT, preferences)
}

fn ldp_preference(name: &str, values: &[&str]) -> String {
    format!("return=representation; {name}=\"{}\"", values.join(" "))
}
