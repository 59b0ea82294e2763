use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

// Encode sets follow https://url.spec.whatwg.org/#urlencoded-serializing

/// Form-urlencoded percent-encode set: everything except ASCII
/// alphanumerics and `-`, `_`, `.`, `~`. Space is excluded from the set
/// and mapped to `+` after encoding.
pub const FORM_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b' ');

/// Percent-encode one key or value for the query string.
pub fn encode_component(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    for chunk in utf8_percent_encode(input, FORM_SET) {
        result.push_str(chunk);
    }
    if result.contains(' ') {
        result = result.replace(' ', "+");
    }
    result
}

/// Decode one key or value from the query string.
///
/// `+` decodes to a space. Malformed percent escapes pass through
/// literally; invalid UTF-8 decodes lossily.
pub fn decode_component(input: &str) -> String {
    let spaced = input.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}
