//! Cross-Page Selection Store
//!
//! Single-slot hand-off carrying the picked service from the services page
//! to the enquiry form. Backed by window.localStorage in the browser and by
//! a plain slot in tests, so the read-once semantics stay testable without
//! a browser storage backend.

pub const SELECTED_SERVICE_KEY: &str = "selectedService";

/// One string-valued slot: write overwrites, read consumes.
pub trait SelectionStore {
    /// Store a selection, replacing any prior value
    fn write(&self, service: &str);

    /// Take the current selection, leaving the slot empty. Two calls in
    /// immediate succession never both see a value.
    fn read_and_clear(&self) -> Option<String>;
}

/// localStorage-backed store used on the live pages
pub struct BrowserStore;

impl SelectionStore for BrowserStore {
    fn write(&self, service: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(SELECTED_SERVICE_KEY, service);
        }
    }

    fn read_and_clear(&self) -> Option<String> {
        let storage = local_storage()?;
        let value = storage.get_item(SELECTED_SERVICE_KEY).ok().flatten()?;
        let _ = storage.remove_item(SELECTED_SERVICE_KEY);
        Some(value)
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// In-memory stand-in with the same single-slot semantics
    #[derive(Default)]
    struct MemoryStore {
        slot: RefCell<Option<String>>,
    }

    impl SelectionStore for MemoryStore {
        fn write(&self, service: &str) {
            *self.slot.borrow_mut() = Some(service.to_string());
        }

        fn read_and_clear(&self) -> Option<String> {
            self.slot.borrow_mut().take()
        }
    }

    #[test]
    fn test_write_then_read_and_clear() {
        let store = MemoryStore::default();
        store.write("Furniture Delivery");

        assert_eq!(store.read_and_clear().as_deref(), Some("Furniture Delivery"));
        // The slot is consumed by the first read
        assert_eq!(store.read_and_clear(), None);
    }

    #[test]
    fn test_last_write_wins() {
        let store = MemoryStore::default();
        store.write("Parcel Delivery");
        store.write("Event Help");

        assert_eq!(store.read_and_clear().as_deref(), Some("Event Help"));
    }

    #[test]
    fn test_read_of_empty_slot() {
        let store = MemoryStore::default();
        assert_eq!(store.read_and_clear(), None);
    }
}
