//! Splitting of multi-value `Link` headers.

/// Split a `Link` header value into its link-values.
///
/// Commas separate link-values only outside a `<...>` URI-Reference; angle
/// brackets cannot appear inside a URI (RFC 3986 §2), so they do not nest.
/// An unmatched `<` keeps the rest of the value inside the reference. Every
/// element is trimmed and the text after the last separator is always
/// emitted, even when empty.
///
/// ```
/// use ldpkit::link::split_links;
///
/// let links = split_links(r#"<http://example.com/a>; rel="next", <http://example.com/b,c>; rel="prev""#);
/// assert_eq!(links.len(), 2);
/// assert_eq!(links[1], r#"<http://example.com/b,c>; rel="prev""#);
/// ```
#[must_use]
pub fn split_links(value: &str) -> Vec<String> {
    let mut links = Vec::new();
    let mut begin = 0;
    let mut in_uri_ref = false;

    for (i, c) in value.char_indices() {
        match c {
            ',' if !in_uri_ref => {
                links.push(value[begin..i].trim().to_string());
                begin = i + 1;
            }
            '<' => in_uri_ref = true,
            '>' => in_uri_ref = false,
            _ => {}
        }
    }

    links.push(value[begin..].trim().to_string());
    links
}
