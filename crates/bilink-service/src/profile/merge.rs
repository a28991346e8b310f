//! Shallow top-level merge of a partial profile into the stored document.

use serde_json::{Map, Value};

use bilink_core::error::AppError;
use bilink_entity::profile::ProfileDocument;

/// Older clients send these keys; they are folded into the current names
/// before merging so the two spellings never collide.
const LEGACY_KEYS: &[(&str, &str)] = &[("avatar", "avatarUrl")];

/// Merge `partial` over `current`.
///
/// Every top-level key present in `partial` replaces the stored value
/// wholesale (nested objects such as `contact` are not merged); absent
/// keys keep their stored value; unknown keys are ignored. `name` must be
/// present and non-blank. The result is validated and normalized.
///
/// The merged map is parsed back into the typed document, so a replaced
/// value comes back in canonical form: optional fields missing from a
/// nested object are filled with their defaults (`{"email": "a@b"}` is
/// stored as `{"email": "a@b", "location": ""}`, a skill without `icon`
/// gains `"icon": ""`). Supplied keys round-trip exactly only when their
/// nested objects are fully specified.
pub fn shallow_merge(
    current: &ProfileDocument,
    partial: &Map<String, Value>,
) -> Result<ProfileDocument, AppError> {
    match partial.get("name") {
        Some(Value::String(name)) if !name.trim().is_empty() => {}
        _ => return Err(AppError::validation("Name cannot be empty")),
    }

    let mut merged = match serde_json::to_value(current)? {
        Value::Object(map) => map,
        _ => return Err(AppError::internal("Profile did not serialize to an object")),
    };

    for (key, value) in partial {
        if let Some(key) = canonical_key(key, partial) {
            merged.insert(key.to_string(), value.clone());
        }
    }

    let mut document: ProfileDocument = serde_json::from_value(Value::Object(merged))
        .map_err(|e| AppError::validation(format!("Invalid profile document: {e}")))?;

    document.normalize();
    document.validate()?;
    Ok(document)
}

/// Map a legacy key to its current name, or drop it when the partial
/// also carries the current name.
fn canonical_key<'a>(key: &'a str, partial: &Map<String, Value>) -> Option<&'a str> {
    for (legacy, current) in LEGACY_KEYS {
        if key == *legacy {
            return (!partial.contains_key(*current)).then_some(*current);
        }
    }
    Some(key)
}
