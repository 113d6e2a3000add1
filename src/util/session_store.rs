//! Browser sessionStorage helpers for tab-scoped auth flags.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guest-mode and alternate-auth flags live in sessionStorage so they
//! die with the tab. These helpers centralize the hydrate-only web-sys glue;
//! on the server (and in native tests) reads return `None` and writes no-op,
//! so session resolution degrades to the signed-out default.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

#[cfg(feature = "hydrate")]
fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

/// Read a string value from sessionStorage for `key`.
pub fn get_item(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        session_storage().and_then(|s| s.get_item(key).ok().flatten())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Write a string value to sessionStorage for `key`.
pub fn set_item(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = session_storage() {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Remove `key` from sessionStorage.
pub fn remove_item(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = session_storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
