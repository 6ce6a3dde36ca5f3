//! Flag derivation: merging extracted properties with static configuration.
//!
//! The merged mapping feeds the consumer's flag mapper, whose output is handed
//! opaquely to the program's `init`. A merge with zero keys produces an absent
//! flags value rather than an empty object, so programs that distinguish the
//! two behave correctly.

use crate::props::PropMap;
use serde_json::{Map, Value};

/// Consumer-supplied flags, set at registration time. These win over
/// extracted attributes on key collision.
pub type StaticFlags = Map<String, Value>;

/// Initialization payload for the wrapped program.
///
/// `None` means "no flags at all", which is distinct from
/// `Some(Value::Object(empty))`.
pub type Flags = Option<Value>;

/// Merge extracted properties with static flags.
///
/// Extracted values enter as JSON strings (no type coercion); static flags
/// override on key collision. Returns `None` when the merged mapping has zero
/// keys.
pub fn merge(props: PropMap, static_flags: &StaticFlags) -> Flags {
    let mut merged = Map::with_capacity(props.len() + static_flags.len());
    for (key, value) in props {
        merged.insert(key, Value::String(value));
    }
    for (key, value) in static_flags {
        merged.insert(key.clone(), value.clone());
    }
    if merged.is_empty() {
        None
    } else {
        Some(Value::Object(merged))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_empty_is_absent_not_empty_object() {
        let flags = merge(PropMap::new(), &StaticFlags::new());
        assert_eq!(flags, None);
    }

    #[test]
    fn test_merge_props_only() {
        let mut props = PropMap::new();
        props.insert("count".to_string(), "5".to_string());

        let flags = merge(props, &StaticFlags::new());
        assert_eq!(flags, Some(json!({ "count": "5" })));
    }

    #[test]
    fn test_merge_empty_props_with_static_flags_yields_static_flags() {
        let mut static_flags = StaticFlags::new();
        static_flags.insert("mode".to_string(), json!("dark"));
        static_flags.insert("retries".to_string(), json!(3));

        let flags = merge(PropMap::new(), &static_flags);
        assert_eq!(flags, Some(json!({ "mode": "dark", "retries": 3 })));
    }

    #[test]
    fn test_static_flags_win_on_collision() {
        let mut props = PropMap::new();
        props.insert("mode".to_string(), "light".to_string());
        props.insert("label".to_string(), "Hi".to_string());

        let mut static_flags = StaticFlags::new();
        static_flags.insert("mode".to_string(), json!("dark"));

        let flags = merge(props, &static_flags);
        assert_eq!(flags, Some(json!({ "mode": "dark", "label": "Hi" })));
    }
}
