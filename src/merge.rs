//! Deep merge over configuration trees.
//!
//! Nested objects merge key by key; every other combination is settled by
//! the overlay replacing the base outright. Arrays are atomic: an overlay
//! array replaces a base array wholesale, never element-wise.

use crate::model::{ConfigMap, ConfigValue};
use indexmap::IndexMap;

/// Merge `overlay` onto `base`, producing a fresh value.
///
/// Neither input is mutated; original sources stay inspectable after the
/// merge. Untouched base keys keep their relative order, and keys new in
/// the overlay append in overlay order.
///
/// Merge is total: any two valid values combine without error.
///
/// # Examples
///
/// ```rust
/// use configcast::merge::merge;
/// use configcast::model::ConfigValue;
///
/// let base = ConfigValue::from("defaults");
/// let overlay = ConfigValue::from(443i64);
/// assert_eq!(merge(&base, &overlay), ConfigValue::Integer(443));
/// ```
pub fn merge(base: &ConfigValue, overlay: &ConfigValue) -> ConfigValue {
    match (base, overlay) {
        (ConfigValue::Object(base), ConfigValue::Object(overlay)) => {
            let mut merged = base.clone();
            merge_into(&mut merged, overlay);
            ConfigValue::Object(merged)
        }
        _ => overlay.clone(),
    }
}

/// Merge two maps at the root, producing a fresh [`ConfigMap`].
pub fn merge_maps(base: &ConfigMap, overlay: &ConfigMap) -> ConfigMap {
    let mut merged = base.as_object().clone();
    merge_into(&mut merged, overlay.as_object());
    ConfigMap::from_object(merged)
}

fn merge_into(
    merged: &mut IndexMap<String, ConfigValue>,
    overlay: &IndexMap<String, ConfigValue>,
) {
    for (key, incoming) in overlay {
        let combined = match merged.get(key) {
            Some(existing @ ConfigValue::Object(_)) if incoming.is_object() => {
                merge(existing, incoming)
            }
            _ => incoming.clone(),
        };
        // Re-inserting an existing key keeps its original position.
        merged.insert(key.clone(), combined);
    }
}
