//! Name rules for entities and attributes.

/// Checks an entity (element) name.
///
/// The first character must be a letter or `_`; every character must be a
/// letter, a digit, `-`, `_` or `.`.
pub fn is_valid_entity_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => return false,
    }
    name.chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

/// Checks an attribute name: non-empty and a single token (no space character).
pub fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(' ')
}
