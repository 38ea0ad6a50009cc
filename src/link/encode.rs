use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything except the RFC 3986 unreserved characters.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encodes a query component.
///
/// Letters, digits and `-_.~` pass through, every other byte becomes `%XX`.
/// Space is encoded as `%20`, never `+`.
#[must_use]
pub fn percent_encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}
