use gloo_storage::{LocalStorage, Storage};

use sf_core::session::SessionStore;

/// The browser's local storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl SessionStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|err| anyhow::anyhow!("Unable to store {key}: {err:?}"))
    }

    fn delete(&self, key: &str) {
        LocalStorage::delete(key);
    }
}
