use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use std::sync::OnceLock;

/// Characters `encodeURIComponent` leaves alone, so links match the ones
/// browsers build for the same message.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

static NON_DIGITS: OnceLock<Regex> = OnceLock::new();

/// Build a click-to-chat link: `https://wa.me/<digits>?text=<message>`.
///
/// Formatting in the number (spaces, `+`, dashes, parentheses) is dropped.
/// An empty message leaves out the `text` parameter.
pub fn whatsapp_url(number: &str, message: &str) -> String {
    let regex = NON_DIGITS.get_or_init(|| Regex::new(r"\D").unwrap());
    let digits = regex.replace_all(number, "");

    if message.is_empty() {
        format!("https://wa.me/{}", digits)
    } else {
        format!(
            "https://wa.me/{}?text={}",
            digits,
            utf8_percent_encode(message, URI_COMPONENT)
        )
    }
}
