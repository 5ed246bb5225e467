/// Library version, shared by every crate in the workspace.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version() -> &'static str {
    VERSION
}

/// Whether this library is at least `required` (dotted integers, e.g. "1.0.0").
/// Unparsable input is never compatible.
pub fn check_compatibility(required: &str) -> bool {
    is_at_least(VERSION, required)
}

pub fn is_at_least(current: &str, required: &str) -> bool {
    match (parse(current), parse(required)) {
        (Some(current), Some(required)) => current >= required,
        _ => false,
    }
}

/// Components are signed integers and may carry surrounding whitespace, so
/// `"5. 0"` and `"1.-1"` parse. Empty components and anything else make the
/// whole version unparsable.
fn parse(version: &str) -> Option<Vec<i64>> {
    version
        .split('.')
        .map(|part| part.trim().parse().ok())
        .collect()
}
