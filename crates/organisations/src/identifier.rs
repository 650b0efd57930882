use regex::Regex;
use std::sync::LazyLock;

static VALID_UUID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$",
    )
    .expect("UUID pattern compiles")
});

static TRAILING_UUID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$",
    )
    .expect("UUID pattern compiles")
});

/// True when `value` is exactly one UUID in 8-4-4-4-12 hex form.
pub fn is_valid_uuid(value: &str) -> bool {
    VALID_UUID.is_match(value)
}

/// The UUID that terminates a concept identifier such as
/// `http://api.ft.com/things/<uuid>`.
pub fn canonical_uuid(id: &str) -> Option<&str> {
    TRAILING_UUID.find(id).map(|m| m.as_str())
}
