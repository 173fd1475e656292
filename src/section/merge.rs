//! Object merging for optimistic updates.

use crate::JsonObject;

/// Overwrite `target` keys with those of `partial`. One level deep only:
/// a nested object in `partial` replaces the whole nested object in `target`.
pub fn shallow_merge(target: &mut JsonObject, partial: &JsonObject) {
    for (key, value) in partial {
        target.insert(key.clone(), value.clone());
    }
}
