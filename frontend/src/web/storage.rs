//! LocalStorage 适配
//!
//! 通过 `gloo-storage` 取得浏览器 Storage 句柄，以原始字符串读写，
//! 这样凭据以未加引号的形式保存在 `"token"` 键下。

use civicsync::{KeyValueStorage, StorageError};
use gloo_storage::{LocalStorage, Storage};

/// 零大小的句柄，随处可以重新构造
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })
    }

    fn remove(&self, key: &str) {
        if let Err(e) = LocalStorage::raw().remove_item(key) {
            tracing::warn!(key, error = ?e, "failed to remove storage entry");
        }
    }
}
