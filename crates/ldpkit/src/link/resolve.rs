//! Link target resolution and relation lookup.

use super::tokenizer::split_links;
use super::value::LinkValue;
use crate::result::{LdpError, LdpResult};
use std::ops::Range;
use url::Url;

/// Resolve `target` against `base` unless it is already absolute.
///
/// Absolute targets are returned unchanged. Without a base, a relative
/// target is returned as-is after syntax validation.
///
/// # Errors
///
/// [`LdpError::MalformedUri`] when the target or base is not a valid URI.
/// Callers treat this as a hard failure: it means the server sent garbage.
pub fn resolve_if_relative(base: Option<&str>, target: &str) -> LdpResult<String> {
    validate_reference(target)?;

    match Url::parse(target) {
        Ok(_) => return Ok(target.to_string()),
        Err(url::ParseError::RelativeUrlWithoutBase) => {}
        Err(e) => return Err(LdpError::malformed_uri(target, e.to_string())),
    }

    let Some(base) = base else {
        return Ok(target.to_string());
    };

    validate_reference(base)?;
    let base_url = Url::parse(base).map_err(|e| match e {
        url::ParseError::RelativeUrlWithoutBase => {
            LdpError::malformed_uri(base, "base URI must be absolute")
        }
        other => LdpError::malformed_uri(base, other.to_string()),
    })?;

    if base_url.cannot_be_a_base() {
        return Ok(resolve_against_opaque(&base_url, target));
    }

    base_url
        .join(target)
        .map(String::from)
        .map_err(|e| LdpError::malformed_uri(target, e.to_string()))
}

/// RFC 3986 §5.2.2 for bases without a hierarchical part (`urn:x`, `mailto:a`).
fn resolve_against_opaque(base: &Url, target: &str) -> String {
    let (rest, fragment) = match target.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (target, None),
    };
    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    };

    let (path, query) = if path.starts_with("//") {
        (path.to_string(), query)
    } else if path.is_empty() {
        (base.path().to_string(), query.or_else(|| base.query()))
    } else if path.starts_with('/') {
        (remove_dot_segments(path), query)
    } else {
        // merge: no authority, so the reference replaces the last base segment
        let base_path = base.path();
        let prefix = base_path.rfind('/').map_or("", |slash| &base_path[..=slash]);
        (remove_dot_segments(&format!("{prefix}{path}")), query)
    };

    let mut resolved = format!("{}:{path}", base.scheme());
    if let Some(query) = query {
        resolved.push('?');
        resolved.push_str(query);
    }
    if let Some(fragment) = fragment {
        resolved.push('#');
        resolved.push_str(fragment);
    }
    resolved
}

/// RFC 3986 §5.2.4
fn remove_dot_segments(path: &str) -> String {
    let mut input = path;
    let mut output = String::with_capacity(path.len());

    while !input.is_empty() {
        if let Some(rest) = input.strip_prefix("../").or_else(|| input.strip_prefix("./")) {
            input = rest;
        } else if input.starts_with("/./") {
            input = &input[2..];
        } else if input == "/." {
            input = "/";
        } else if input.starts_with("/../") || input == "/.." {
            input = if input == "/.." { "/" } else { &input[3..] };
            output.truncate(output.rfind('/').unwrap_or(0));
        } else if input == "." || input == ".." {
            input = "";
        } else {
            let skip = usize::from(input.starts_with('/'));
            let end = input[skip..].find('/').map_or(input.len(), |i| i + skip);
            output.push_str(&input[..end]);
            input = &input[end..];
        }
    }
    output
}

/// Reject text that cannot be a URI-Reference (RFC 3986 §2, §3).
///
/// Non-ASCII characters are tolerated as IRI text. Square brackets are only
/// legal around an IP-literal host, and a fragment may not contain `#`.
fn validate_reference(uri: &str) -> LdpResult<()> {
    let authority = authority_range(uri);
    if let Some(range) = &authority {
        validate_host_brackets(uri, &uri[range.clone()])?;
    }

    let bytes = uri.as_bytes();
    let mut in_fragment = false;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        match b {
            b'%' => {
                let hex = bytes.get(i + 1..i + 3).unwrap_or_default();
                if hex.len() != 2 || !hex.iter().all(u8::is_ascii_hexdigit) {
                    return Err(LdpError::malformed_uri(uri, "invalid percent-encoding"));
                }
                i += 3;
                continue;
            }
            b'#' if in_fragment => {
                return Err(LdpError::malformed_uri(
                    uri,
                    format!("'#' inside the fragment at index {i}"),
                ));
            }
            b'#' => in_fragment = true,
            b'[' | b']' if !authority.as_ref().is_some_and(|r| r.contains(&i)) => {
                return Err(LdpError::malformed_uri(
                    uri,
                    format!("'{}' outside an IP-literal host at index {i}", b as char),
                ));
            }
            b' ' | b'"' | b'<' | b'>' | b'\\' | b'^' | b'`' | b'{' | b'|' | b'}' => {
                return Err(LdpError::malformed_uri(
                    uri,
                    format!("illegal character '{}' at index {i}", b as char),
                ));
            }
            _ if b.is_ascii_control() => {
                return Err(LdpError::malformed_uri(
                    uri,
                    format!("control character at index {i}"),
                ));
            }
            _ => {}
        }
        i += 1;
    }
    Ok(())
}

/// Byte range of the authority component, if the reference has one
fn authority_range(uri: &str) -> Option<Range<usize>> {
    let hier_start = match uri.find(':') {
        Some(colon) if is_scheme(&uri[..colon]) => colon + 1,
        _ => 0,
    };
    let after = uri[hier_start..].strip_prefix("//")?;
    let start = hier_start + 2;
    let len = after
        .find(|c| matches!(c, '/' | '?' | '#'))
        .unwrap_or(after.len());
    Some(start..start + len)
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Brackets in an authority must enclose the whole host: `[` right after
/// any userinfo, one `]` followed by the end or a port
fn validate_host_brackets(uri: &str, authority: &str) -> LdpResult<()> {
    let is_bracket = |c: char| c == '[' || c == ']';
    if !authority.contains(is_bracket) {
        return Ok(());
    }
    let host = authority.rfind('@').map_or(authority, |at| &authority[at + 1..]);

    let well_formed = host.strip_prefix('[').is_some_and(|inner| {
        inner.find(']').is_some_and(|close| {
            let literal = &inner[..close];
            let tail = &inner[close + 1..];
            !literal.is_empty()
                && !literal.contains('[')
                && !tail.contains(is_bracket)
                && (tail.is_empty() || tail.starts_with(':'))
        })
    }) && !authority[..authority.len() - host.len()].contains(is_bracket);

    if well_formed {
        Ok(())
    } else {
        Err(LdpError::malformed_uri(uri, "malformed IP-literal host"))
    }
}

/// Lazily parse every non-empty link-value of every header value
fn link_values<'a, S: AsRef<str>>(
    header_values: &'a [S],
) -> impl Iterator<Item = LdpResult<LinkValue>> + 'a {
    header_values
        .iter()
        .flat_map(|value| split_links(value.as_ref()))
        .filter(|link| !link.is_empty())
        .map(|link| LinkValue::parse(&link))
}

/// Check if any `Link` header value carries `expected_uri` with relation `expected_rel`.
///
/// Targets are resolved against `base` before comparison. Only links with
/// the expected relation are resolved.
///
/// # Errors
///
/// Malformed link-values, and malformed URIs of links with the expected relation.
pub fn contains_link<S: AsRef<str>>(
    expected_uri: &str,
    expected_rel: &str,
    base: Option<&str>,
    header_values: &[S],
) -> LdpResult<bool> {
    for link in link_values(header_values) {
        let link = link?;
        if link.has_rel(expected_rel) && resolve_if_relative(base, &link.target)? == expected_uri {
            return Ok(true);
        }
    }
    Ok(false)
}

/// First link target with relation `rel`, resolved against `base`.
///
/// # Errors
///
/// Malformed link-values before the match, or a malformed matching target.
pub fn first_link_for_relation<S: AsRef<str>>(
    rel: &str,
    base: Option<&str>,
    header_values: &[S],
) -> LdpResult<Option<String>> {
    for link in link_values(header_values) {
        let link = link?;
        if link.has_rel(rel) {
            return resolve_if_relative(base, &link.target).map(Some);
        }
    }
    Ok(None)
}

/// All link-values of a response, parsed up front
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkHeader {
    links: Vec<LinkValue>,
}

impl LinkHeader {
    /// Parse all `Link` header values; any malformed link-value fails the whole header
    pub fn parse<S: AsRef<str>>(header_values: &[S]) -> LdpResult<Self> {
        let links = link_values(header_values).collect::<LdpResult<Vec<_>>>()?;
        Ok(Self { links })
    }

    /// Parsed link-values in header order
    #[must_use]
    pub fn links(&self) -> &[LinkValue] {
        &self.links
    }

    /// Number of link-values
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Check if the header carried no links
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Links carrying a relation
    pub fn with_rel<'a>(&'a self, rel: &'a str) -> impl Iterator<Item = &'a LinkValue> + 'a {
        self.links.iter().filter(move |link| link.has_rel(rel))
    }

    /// See [`contains_link`]
    pub fn contains(&self, expected_uri: &str, expected_rel: &str, base: Option<&str>) -> LdpResult<bool> {
        for link in self.with_rel(expected_rel) {
            if resolve_if_relative(base, &link.target)? == expected_uri {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// See [`first_link_for_relation`]
    pub fn first_for_relation(&self, rel: &str, base: Option<&str>) -> LdpResult<Option<String>> {
        self.with_rel(rel)
            .next()
            .map(|link| resolve_if_relative(base, &link.target))
            .transpose()
    }
}
