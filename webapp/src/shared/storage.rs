use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage};

use common::stars::KeyValueStore;

// window.localStorage as a plain string store
//
// values go in and come out verbatim (no json wrapping by gloo), so the stored format
// is whatever the caller serialized
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        match LocalStorage::raw().get_item(key) {
            Ok(value) => value,
            Err(err) => {
                console_error!(format!("Failed to fetch local storage {key}: {err:?}"));
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        LocalStorage::raw().set_item(key, value).map_err(|err| {
            console_error!(format!("Failed to set local storage {key}: {err:?}"));
            anyhow::Error::msg("Local storage failure, see console log")
        })
    }
}
