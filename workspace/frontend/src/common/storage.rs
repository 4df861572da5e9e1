use compute::error::{ComputeError, Result};
use compute::theme::KeyValueStore;
use wasm_bindgen::JsValue;
use web_sys::{window, Storage};

/// [`KeyValueStore`] over `window.localStorage`.
///
/// Every call looks the storage up again, so a browser that blocks storage
/// yields an error per call instead of a failure at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocalStorage;

fn js_reason(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn storage() -> std::result::Result<Storage, String> {
    let window = window().ok_or_else(|| "no window".to_string())?;
    window
        .local_storage()
        .map_err(|e| js_reason(&e))?
        .ok_or_else(|| "localStorage unavailable".to_string())
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let read_error = |reason: String| ComputeError::StorageRead {
            key: key.to_string(),
            reason,
        };
        storage()
            .map_err(read_error)?
            .get_item(key)
            .map_err(|e| read_error(js_reason(&e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let write_error = |reason: String| ComputeError::StorageWrite {
            key: key.to_string(),
            reason,
        };
        storage()
            .map_err(write_error)?
            .set_item(key, value)
            .map_err(|e| write_error(js_reason(&e)))
    }
}
