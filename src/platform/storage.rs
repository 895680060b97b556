//! LocalStorage access

use crate::best_time::{BestTimeStore, STORAGE_KEY, parse_best_time};

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
}

/// Read a raw string value
pub fn get_item(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

/// Write a raw string value; returns false if storage is unavailable
pub fn set_item(key: &str, value: &str) -> bool {
    let Some(storage) = local_storage() else {
        log::warn!("LocalStorage unavailable, not saving {}", key);
        return false;
    };
    match storage.set_item(key, value) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Failed to write {}: {:?}", key, e);
            false
        }
    }
}

/// Best time kept under a fixed LocalStorage key
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl BestTimeStore for LocalStorageStore {
    fn get_best_time(&self) -> Option<u64> {
        let raw = get_item(STORAGE_KEY)?;
        let best = parse_best_time(&raw);
        if best.is_none() {
            log::warn!("Ignoring malformed best time {:?}", raw);
        }
        best
    }

    fn set_best_time(&mut self, ms: u64) {
        if set_item(STORAGE_KEY, &ms.to_string()) {
            log::info!("Best time saved ({} ms)", ms);
        }
    }
}
