//! RFC 5988 link-value parsing.
//!
//! ```text
//! link-value = "<" URI-Reference ">" *( OWS ";" OWS link-param )
//! link-param = token [ OWS "=" OWS ( token / quoted-string ) ]
//! ```

use crate::result::{LdpError, LdpResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One parsed link-value of a `Link` header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkValue {
    /// Target URI-Reference, possibly relative
    pub target: String,
    /// Parameters keyed by lower-cased name; the first occurrence wins
    pub params: BTreeMap<String, String>,
}

impl LinkValue {
    /// Create a link with a `rel` parameter
    #[must_use]
    pub fn new(target: impl Into<String>, rel: impl Into<String>) -> Self {
        let mut params = BTreeMap::new();
        params.insert("rel".to_string(), rel.into());
        Self {
            target: target.into(),
            params,
        }
    }

    /// Parse a single link-value (as produced by [`super::split_links`])
    pub fn parse(value: &str) -> LdpResult<Self> {
        let mut cursor = Cursor::new(value.trim());

        if cursor.bump() != Some('<') {
            return Err(LdpError::malformed_link(value, "expected '<' before the target"));
        }
        let target = cursor.take_until(|c| c == '>');
        if cursor.bump() != Some('>') {
            return Err(LdpError::malformed_link(value, "unterminated '<' target"));
        }

        let mut params = BTreeMap::new();
        loop {
            cursor.skip_ows();
            match cursor.bump() {
                None => break,
                Some(';') => {}
                Some(c) => {
                    return Err(LdpError::malformed_link(
                        value,
                        format!("expected ';' but found '{c}'"),
                    ));
                }
            }
            cursor.skip_ows();
            if cursor.is_empty() {
                // trailing ';'
                break;
            }

            let name = cursor.take_until(|c| c == '=' || c == ';' || is_ows(c));
            if name.is_empty() {
                return Err(LdpError::malformed_link(value, "empty parameter name"));
            }
            cursor.skip_ows();

            let param_value = if cursor.peek() == Some('=') {
                cursor.bump();
                cursor.skip_ows();
                if cursor.peek() == Some('"') {
                    cursor
                        .quoted_string()
                        .ok_or_else(|| LdpError::malformed_link(value, "unterminated quoted-string"))?
                } else {
                    cursor.take_until(|c| c == ';' || is_ows(c)).to_string()
                }
            } else {
                String::new()
            };

            params
                .entry(name.to_ascii_lowercase())
                .or_insert(param_value);
        }

        Ok(Self {
            target: target.trim().to_string(),
            params,
        })
    }

    /// The `rel` parameter, verbatim
    #[must_use]
    pub fn rel(&self) -> Option<&str> {
        self.param("rel")
    }

    /// Relation types of a space-separated `rel`
    pub fn rels(&self) -> impl Iterator<Item = &str> {
        self.rel().into_iter().flat_map(str::split_whitespace)
    }

    /// Check if the link carries a relation, either as the whole `rel` or as one of its types
    #[must_use]
    pub fn has_rel(&self, expected: &str) -> bool {
        self.rel() == Some(expected) || self.rels().any(|rel| rel == expected)
    }

    /// Look up a parameter (case-insensitive name)
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

impl fmt::Display for LinkValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.target)?;
        for (name, value) in &self.params {
            let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
            write!(f, "; {name}=\"{escaped}\"")?;
        }
        Ok(())
    }
}

const fn is_ows(c: char) -> bool {
    matches!(c, ' ' | '\t')
}

struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    const fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn is_empty(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_ows(&mut self) {
        while self.peek().is_some_and(is_ows) {
            self.pos += 1;
        }
    }

    fn take_until(&mut self, stop: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if stop(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        &self.src[start..self.pos]
    }

    /// Read a quoted-string starting at `"`; `None` when unterminated
    fn quoted_string(&mut self) -> Option<String> {
        self.bump();
        let mut out = String::new();
        loop {
            match self.bump()? {
                '"' => return Some(out),
                '\\' => out.push(self.bump()?),
                c => out.push(c),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod parse_tests {
        use super::*;

        #[test]
        fn test_quoted_rel() {
            let link = LinkValue::parse(r#"<http://example.com/a>; rel="next""#).unwrap();
            assert_eq!(link.target, "http://example.com/a");
            assert_eq!(link.rel(), Some("next"));
        }

        #[test]
        fn test_token_rel_and_params() {
            let link =
                LinkValue::parse(r##"<member1> ;rel=type ; title="A \"quoted\" title";anchor="#it""##)
                    .unwrap();
            assert_eq!(link.target, "member1");
            assert_eq!(link.rel(), Some("type"));
            assert_eq!(link.param("title"), Some(r#"A "quoted" title"#));
            assert_eq!(link.param("ANCHOR"), Some("#it"));
        }

        #[test]
        fn test_param_names_case_insensitive_first_wins() {
            let link = LinkValue::parse("<a>; REL=first; rel=second").unwrap();
            assert_eq!(link.rel(), Some("first"));
        }

        #[test]
        fn test_valueless_param_and_trailing_semicolon() {
            let link = LinkValue::parse("<a>; rel=x; crossorigin;").unwrap();
            assert_eq!(link.param("crossorigin"), Some(""));
        }

        #[test]
        fn test_missing_open_bracket() {
            let err = LinkValue::parse("http://example.com; rel=next").unwrap_err();
            assert!(matches!(err, LdpError::MalformedLinkValue { .. }));
        }

        #[test]
        fn test_unterminated_target() {
            assert!(LinkValue::parse("<http://example.com; rel=next").is_err());
        }

        #[test]
        fn test_garbage_after_target() {
            assert!(LinkValue::parse("<a> rel=next").is_err());
        }

        #[test]
        fn test_unterminated_quote() {
            assert!(LinkValue::parse(r#"<a>; rel="next"#).is_err());
        }

        #[test]
        fn test_no_params() {
            let link = LinkValue::parse("<http://example.com/>").unwrap();
            assert!(link.params.is_empty());
            assert_eq!(link.rel(), None);
        }
    }

    mod rel_tests {
        use super::*;

        #[test]
        fn test_has_rel_multi_valued() {
            let link = LinkValue::new("a", "type describedby");
            assert!(link.has_rel("type"));
            assert!(link.has_rel("describedby"));
            assert!(link.has_rel("type describedby"));
            assert!(!link.has_rel("next"));
            assert_eq!(link.rels().count(), 2);
        }

        #[test]
        fn test_display_reparses() {
            let link = LinkValue::new("http://www.w3.org/ns/ldp#Resource", "type");
            let text = link.to_string();
            assert_eq!(text, r#"<http://www.w3.org/ns/ldp#Resource>; rel="type""#);
            assert_eq!(LinkValue::parse(&text).unwrap(), link);
        }
    }
}
