//! Persists the bulk selection of a stage screen in `localStorage`.
//!
//! Entries live under `selection:<entity>` as `{ "fingerprint": .., "ids": [..] }`.
//! A stored selection is only trusted when it was made on the very same dataset.

use contracts::domain::common::RecordId;
use serde::{Deserialize, Serialize};
use web_sys::Storage;

pub const KEY_PREFIX: &str = "selection:";

pub fn storage_key(entity: &str) -> String {
    format!("{}{}", KEY_PREFIX, entity.trim_start_matches('/'))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSelection {
    pub fingerprint: String,
    pub ids: Vec<RecordId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Restore {
    /// Stored entry matches the dataset.
    Ids(Vec<RecordId>),
    /// Stored entry belongs to another dataset or is unreadable; it must be removed.
    Stale,
    Missing,
}

/// Decides what to do with the raw stored value for a dataset fingerprint.
pub fn restore(raw: Option<&str>, fingerprint: &str) -> Restore {
    let Some(raw) = raw else {
        return Restore::Missing;
    };
    match serde_json::from_str::<PersistedSelection>(raw) {
        Ok(stored) if stored.fingerprint == fingerprint => Restore::Ids(stored.ids),
        _ => Restore::Stale,
    }
}

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Reads the selection of `entity` for the dataset identified by `fingerprint`.
/// Stale entries are removed on the way.
pub fn load(entity: &str, fingerprint: &str) -> Vec<RecordId> {
    let Some(storage) = local_storage() else {
        return Vec::new();
    };
    let key = storage_key(entity);
    let raw = storage.get_item(&key).ok().flatten();
    match restore(raw.as_deref(), fingerprint) {
        Restore::Ids(ids) => ids,
        Restore::Stale => {
            log::debug!("dropping stale selection {}", key);
            let _ = storage.remove_item(&key);
            Vec::new()
        }
        Restore::Missing => Vec::new(),
    }
}

/// Writes the selection; an empty selection removes the entry.
pub fn save(entity: &str, fingerprint: &str, ids: &[RecordId]) {
    let Some(storage) = local_storage() else {
        return;
    };
    let key = storage_key(entity);
    if ids.is_empty() {
        let _ = storage.remove_item(&key);
        return;
    }
    let entry = PersistedSelection {
        fingerprint: fingerprint.to_string(),
        ids: ids.to_vec(),
    };
    match serde_json::to_string(&entry) {
        Ok(json) => {
            if let Err(e) = storage.set_item(&key, &json) {
                log::warn!("failed to persist {}: {:?}", key, e);
            }
        }
        Err(e) => log::warn!("failed to encode {}: {}", key, e),
    }
}

pub fn clear(entity: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(&storage_key(entity));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_key() {
        assert_eq!(storage_key("/pencetakan"), "selection:pencetakan");
        assert_eq!(storage_key("packing"), "selection:packing");
    }

    #[test]
    fn test_restore_matching_fingerprint() {
        let raw = r#"{"fingerprint":"3:abc","ids":[4,9]}"#;
        assert_eq!(restore(Some(raw), "3:abc"), Restore::Ids(vec![4, 9]));
    }

    #[test]
    fn test_restore_rejects_other_dataset() {
        let raw = r#"{"fingerprint":"3:abc","ids":[4,9]}"#;
        assert_eq!(restore(Some(raw), "4:def"), Restore::Stale);
    }

    #[test]
    fn test_restore_rejects_garbage_and_missing() {
        assert_eq!(restore(Some("[1,2"), "1:x"), Restore::Stale);
        assert_eq!(restore(None, "1:x"), Restore::Missing);
    }

    #[test]
    fn test_persisted_shape() {
        let entry = PersistedSelection {
            fingerprint: "2:ff".into(),
            ids: vec![1, 2],
        };
        assert_eq!(
            serde_json::to_string(&entry).unwrap(),
            r#"{"fingerprint":"2:ff","ids":[1,2]}"#
        );
    }
}
