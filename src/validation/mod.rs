pub mod dishes;
pub mod orders;

use crate::errors::ValidationError;

/// Evaluate an ordered list of checks against `ctx`. The first failing
/// check decides the outcome; nothing after it runs, so a rejected request
/// carries exactly one error signal.
pub fn run<C>(
    ctx: &C,
    checks: &[&dyn Fn(&C) -> Result<(), ValidationError>],
) -> Result<(), ValidationError> {
    for check in checks {
        check(ctx)?;
    }
    Ok(())
}

/// Presence check for string fields. Mirrors the API contract's
/// truthiness: an empty string counts as missing.
fn require_str(value: Option<&str>, field: &'static str) -> Result<(), ValidationError> {
    match value {
        Some(s) if !s.is_empty() => Ok(()),
        _ => Err(ValidationError::MissingField(field)),
    }
}

/// A payload may omit its `id`; if it carries one, it must agree with the
/// id the route addresses.
fn id_matches_route(
    resource: &'static str,
    payload_id: Option<&str>,
    route_id: &str,
) -> Result<(), ValidationError> {
    match payload_id {
        None | Some("") => Ok(()),
        Some(id) if id == route_id => Ok(()),
        Some(id) => Err(ValidationError::IdMismatch {
            resource,
            payload_id: id.to_string(),
            route_id: route_id.to_string(),
        }),
    }
}
