use egui::util::hash;
use serde::{Deserialize, Serialize};
use std::{
    hash::{Hash, Hasher},
    ops::Deref,
};

/// Value with its precomputed content hash
///
/// The hash stands in for the value in cache keys, so a cached computation
/// is redone exactly when the content changes.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub(crate) struct Hashed<T> {
    pub(crate) value: T,
    pub(crate) hash: u64,
}

impl<T: Hash> Hashed<T> {
    pub(crate) fn new(value: T) -> Self {
        let hash = hash(&value);
        Self { value, hash }
    }

    /// Produces a new hashed value from the current one.
    pub(crate) fn update(&mut self, f: impl FnOnce(&mut T)) {
        f(&mut self.value);
        self.hash = hash(&self.value);
    }
}

impl<T> Deref for Hashed<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<T> Hash for Hashed<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_rehashes() {
        let mut hashed = Hashed::new(vec![1, 2]);
        let before = hashed.hash;
        hashed.update(|value| value.push(3));
        assert_ne!(hashed.hash, before);
        assert_eq!(*hashed, vec![1, 2, 3]);
    }

    #[test]
    fn equal_values_share_hash() {
        let mut hashed = Hashed::new(vec![1]);
        hashed.update(|value| {
            value.push(2);
            value.pop();
        });
        assert_eq!(hashed, Hashed::new(vec![1]));
    }
}
