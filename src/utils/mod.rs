use uuid::Uuid;

/// Id for a newly created record. Random v4 uuids keep ids unique within a
/// collection and never reused, even across restarts.
pub fn next_id() -> String {
    Uuid::new_v4().to_string()
}
