use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use std::borrow::Cow;

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::new(["&", "<", ">", "\"", "'"]).expect("static escape patterns are valid")
});

/// Whether `c` matches the XML 1.0 `Char` production.
#[inline]
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..)
}

/// Drop characters that XML 1.0 cannot represent, even as references.
///
/// Borrows when `s` is already clean.
pub fn strip_invalid_xml_chars(s: &str) -> Cow<'_, str> {
    if s.chars().all(is_xml_char) {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(s.chars().filter(|&c| is_xml_char(c)).collect())
    }
}

/// Escape XML special characters for use in text nodes and attribute values.
///
/// Characters outside the XML 1.0 character range are removed.
///
/// # Examples
///
/// ```
/// use pixsheet::common::xml::escape_xml;
/// assert_eq!(escape_xml("cat & dog"), "cat &amp; dog");
/// assert_eq!(escape_xml("<\"pixel\">"), "&lt;&quot;pixel&quot;&gt;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(&strip_invalid_xml_chars(s), &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
}
