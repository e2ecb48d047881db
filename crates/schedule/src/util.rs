use serde_json::Value;

/// Extracts the list of items from an API response
///
/// Paginated endpoints wrap the list as `{ "results": [...] }`, the others
/// return the bare array.
///
/// # Arguments
/// * `value` - The parsed response body
///
/// # Returns
/// The items, or an empty slice for any other shape
pub fn list_items(value: &Value) -> &[Value] {
    match value {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => match map.get("results") {
            Some(Value::Array(items)) => items.as_slice(),
            _ => &[],
        },
        _ => &[],
    }
}

/// Follows a path of object keys, treating `null` as missing
///
/// # Arguments
/// * `value` - The JSON value to descend into
/// * `path` - Object keys, outermost first
///
/// # Returns
/// `Some(value)` if every key exists and the final value is not `null`
pub fn get_path<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let found = path
        .iter()
        .try_fold(value, |current, key| current.as_object()?.get(*key))?;

    (!found.is_null()).then_some(found)
}

/// Reads an identifier at `path`
///
/// Accepts non-negative JSON integers and numeric strings.
pub fn get_id(value: &Value, path: &[&str]) -> Option<u32> {
    match get_path(value, path)? {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Reads a display string at `path`
///
/// Strings are trimmed and dropped if empty; numbers are rendered as text
/// since some rooms are stored as plain numbers.
pub fn get_string(value: &Value, path: &[&str]) -> Option<String> {
    match get_path(value, path)? {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_owned())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Returns the first identifier found among `paths`
pub fn first_id(value: &Value, paths: &[&[&str]]) -> Option<u32> {
    paths.iter().find_map(|path| get_id(value, path))
}

/// Returns the first display string found among `paths`
pub fn first_string(value: &Value, paths: &[&[&str]]) -> Option<String> {
    paths.iter().find_map(|path| get_string(value, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_items() {
        assert_eq!(list_items(&json!([1, 2])).len(), 2);
        assert_eq!(list_items(&json!({ "results": [1, 2, 3] })).len(), 3);
        assert!(list_items(&json!({ "results": null })).is_empty());
        assert!(list_items(&json!({ "count": 4 })).is_empty());
        assert!(list_items(&Value::Null).is_empty());
        assert!(list_items(&json!("schedules")).is_empty());
    }

    #[test]
    fn test_get_path() {
        let value = json!({ "subject": { "teacher": { "id": 4 }, "name": null } });
        assert_eq!(get_path(&value, &["subject", "teacher", "id"]), Some(&json!(4)));
        assert_eq!(get_path(&value, &["subject", "name"]), None);
        assert_eq!(get_path(&value, &["subject", "teacher", "id", "x"]), None);
        assert_eq!(get_path(&value, &["group"]), None);
    }

    #[test]
    fn test_get_id() {
        let value = json!({ "a": 3, "b": "12", "c": -1, "d": 1.5, "e": "x", "f": true });
        assert_eq!(get_id(&value, &["a"]), Some(3));
        assert_eq!(get_id(&value, &["b"]), Some(12));
        assert_eq!(get_id(&value, &["c"]), None);
        assert_eq!(get_id(&value, &["d"]), None);
        assert_eq!(get_id(&value, &["e"]), None);
        assert_eq!(get_id(&value, &["f"]), None);
    }

    #[test]
    fn test_get_string() {
        let value = json!({ "room": 204, "name": "  Algebra ", "blank": "   " });
        assert_eq!(get_string(&value, &["room"]), Some("204".to_string()));
        assert_eq!(get_string(&value, &["name"]), Some("Algebra".to_string()));
        assert_eq!(get_string(&value, &["blank"]), None);
    }

    #[test]
    fn test_first_wins() {
        let value = json!({ "time_slot": { "id": 2 }, "time_slot_id": 5 });
        assert_eq!(
            first_id(&value, &[&["time_slot", "id"], &["time_slot_id"]]),
            Some(2)
        );
        assert_eq!(
            first_id(&value, &[&["missing"], &["time_slot_id"]]),
            Some(5)
        );
        assert_eq!(first_string(&value, &[&["missing"]]), None);
    }
}
