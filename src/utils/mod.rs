use uuid::Uuid;

/// Random decimal identifier, prefixed with `prefix` when given.
#[must_use]
pub fn unique_id(prefix: Option<&str>) -> String {
    let random = Uuid::new_v4().as_u128();
    format!("{}{random}", prefix.unwrap_or_default())
}
