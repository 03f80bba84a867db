//! Wire escaping for parameter values.
//!
//! Rendered parameter values are joined with commas (chain links, filter
//! values) and colons (field/operator/value separators). Any user-supplied
//! string has to be escaped before joining, otherwise the serialized query
//! string is ambiguous.

use std::borrow::Cow;

/// Percent-escape a value destined for the wire.
///
/// Escapes every reserved character, including the comma and colon
/// delimiters used by the parameter serialization.
///
/// ```rust
/// use opine_query::escape::escape;
///
/// assert_eq!(escape("4,5"), "4%2C5");
/// assert_eq!(escape("a:b"), "a%3Ab");
/// ```
pub fn escape(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}

/// Recover the original string from an escaped value.
///
/// Malformed escape sequences are returned unchanged rather than failing;
/// this is a total function over any input.
pub fn unescape(input: &str) -> String {
    urlencoding::decode(input)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| input.to_owned())
}
