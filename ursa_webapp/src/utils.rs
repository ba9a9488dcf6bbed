use gloo::storage::{LocalStorage, Storage};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// localStorage namespace for a persisted value.
pub(crate) trait StorageKey {
    const KEY: &'static str;
}

pub(crate) trait LocalOrDefault: Sized {
    fn local_or_default() -> Self;
}

pub(crate) trait LocalSave {
    fn local_save(&self);
}

impl<T: StorageKey + DeserializeOwned> LocalOrDefault for Option<T> {
    fn local_or_default() -> Self {
        LocalStorage::get(T::KEY).ok()
    }
}

impl<T: StorageKey + Serialize> LocalSave for Option<T> {
    fn local_save(&self) {
        match self {
            Some(value) => {
                if let Err(err) = LocalStorage::set(T::KEY, value) {
                    log::error!("could not save {}: {:?}", T::KEY, err);
                }
            }
            None => LocalStorage::delete(T::KEY),
        }
    }
}

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    let hi = (random() * f64::from(u32::MAX)) as u64;
    let lo = (random() * f64::from(u32::MAX)) as u64;
    (hi << 32) | lo
}
