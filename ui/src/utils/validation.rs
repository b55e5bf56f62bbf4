use regex::Regex;
use std::sync::LazyLock;

// Address grammar used by browsers for `<input type="email">`, with at least
// one dot required in the domain.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("email pattern is a valid regex")
});

/// Returns true when `email` matches the standard address grammar.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn field_input_class(has_error: bool) -> &'static str {
    if has_error {
        "input-field input-invalid"
    } else {
        "input-field"
    }
}

pub fn field_input_style(has_error: bool) -> &'static str {
    if has_error {
        "border: 2px solid #ef4444; background-color: #fef2f2;"
    } else {
        ""
    }
}
