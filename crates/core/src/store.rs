//! In-memory collection store.
//!
//! Each collection sits behind its own mutex, so a find-then-mutate sequence
//! (replace/remove by value) runs atomically with respect to other writers of
//! the same collection while the other collection stays available.

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;

use crate::{Kind, StoreError, StoreResult};

/// Point-in-time copy of both collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub users: Vec<i64>,
    pub posts: Vec<i64>,
}

/// Process-wide store holding the `users` and `posts` collections.
#[derive(Debug)]
pub struct CollectionStore {
    users: Mutex<Vec<i64>>,
    posts: Mutex<Vec<i64>>,
}

impl CollectionStore {
    /// Store with the fixed startup contents (`users`: 1..=10, `posts`: 11..=20).
    pub fn seeded() -> Self {
        Self::with_contents((1..=10).collect(), (11..=20).collect())
    }

    pub fn with_contents(users: Vec<i64>, posts: Vec<i64>) -> Self {
        Self {
            users: Mutex::new(users),
            posts: Mutex::new(posts),
        }
    }

    /// Returns a copy of the collection's current contents.
    pub fn get(&self, kind: Kind) -> Vec<i64> {
        self.lock(kind).clone()
    }

    /// Copies both collections. Locks are taken in a fixed order (users, then posts).
    pub fn snapshot(&self) -> Snapshot {
        let users = self.lock(Kind::Users).clone();
        let posts = self.lock(Kind::Posts).clone();
        Snapshot { users, posts }
    }

    /// Appends `value` and returns the updated collection.
    pub fn append(&self, kind: Kind, value: i64) -> Vec<i64> {
        let mut items = self.lock(kind);
        items.push(value);
        tracing::debug!(%kind, value, len = items.len(), "appended value");
        items.clone()
    }

    /// Replaces the first occurrence of `old` with `new`.
    ///
    /// Later occurrences of `old` are left untouched. Fails with
    /// [`StoreError::NotFound`] (and changes nothing) when `old` is absent.
    pub fn replace_first(&self, kind: Kind, old: i64, new: i64) -> StoreResult<Vec<i64>> {
        let mut items = self.lock(kind);
        let slot = items
            .iter_mut()
            .find(|v| **v == old)
            .ok_or(StoreError::NotFound)?;
        *slot = new;
        tracing::debug!(%kind, old, new, "replaced value");
        Ok(items.clone())
    }

    /// Removes the first occurrence of `value`.
    pub fn remove_first(&self, kind: Kind, value: i64) -> StoreResult<Vec<i64>> {
        let mut items = self.lock(kind);
        let idx = items
            .iter()
            .position(|v| *v == value)
            .ok_or(StoreError::NotFound)?;
        items.remove(idx);
        tracing::debug!(%kind, value, len = items.len(), "removed value");
        Ok(items.clone())
    }

    fn lock(&self, kind: Kind) -> MutexGuard<'_, Vec<i64>> {
        let cell = match kind {
            Kind::Users => &self.users,
            Kind::Posts => &self.posts,
        };
        // Every mutation is a single Vec operation, so a poisoned list is still consistent.
        cell.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for CollectionStore {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use proptest::prelude::*;

    use super::*;

    #[test]
    fn seeded_contents() {
        let store = CollectionStore::seeded();
        assert_eq!(store.get(Kind::Users), (1..=10).collect::<Vec<_>>());
        assert_eq!(store.get(Kind::Posts), (11..=20).collect::<Vec<_>>());
    }

    #[test]
    fn append_adds_to_the_end() {
        let store = CollectionStore::seeded();
        let updated = store.append(Kind::Users, 99);
        assert_eq!(updated.last(), Some(&99));
        assert_eq!(store.get(Kind::Users).last(), Some(&99));
        assert_eq!(store.get(Kind::Posts).len(), 10);
    }

    #[test]
    fn replace_touches_only_first_occurrence() {
        let store = CollectionStore::with_contents(vec![5, 1, 7, 1], vec![]);
        let updated = store.replace_first(Kind::Users, 1, 42).unwrap();
        assert_eq!(updated, vec![5, 42, 7, 1]);

        let updated = store.replace_first(Kind::Users, 1, 43).unwrap();
        assert_eq!(updated, vec![5, 42, 7, 43]);
    }

    #[test]
    fn replace_missing_value_leaves_collection_untouched() {
        let store = CollectionStore::seeded();
        store.replace_first(Kind::Users, 1, 42).unwrap();

        let before = store.get(Kind::Users);
        let err = store.replace_first(Kind::Users, 1, 42).unwrap_err();
        assert_eq!(err, StoreError::NotFound);
        assert_eq!(store.get(Kind::Users), before);
    }

    #[test]
    fn remove_first_then_missing() {
        let store = CollectionStore::seeded();
        let updated = store.remove_first(Kind::Posts, 11).unwrap();
        assert!(!updated.contains(&11));
        assert_eq!(updated.len(), 9);

        assert_eq!(store.remove_first(Kind::Posts, 11), Err(StoreError::NotFound));
        assert_eq!(store.get(Kind::Posts).len(), 9);
    }

    #[test]
    fn get_returns_a_detached_copy() {
        let store = CollectionStore::seeded();
        let mut copy = store.get(Kind::Users);
        copy.clear();
        assert_eq!(store.get(Kind::Users).len(), 10);
    }

    #[test]
    fn snapshot_contains_both_collections() {
        let store = CollectionStore::seeded();
        store.append(Kind::Posts, 21);
        let snap = store.snapshot();
        assert_eq!(snap.users.len(), 10);
        assert_eq!(snap.posts.last(), Some(&21));
    }

    #[test]
    fn concurrent_appends_are_not_lost() {
        let store = Arc::new(CollectionStore::with_contents(vec![], vec![]));
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = store.clone();
                thread::spawn(move || {
                    for i in 0..250 {
                        store.append(Kind::Users, t * 1000 + i);
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(store.get(Kind::Users).len(), 2000);
    }

    #[test]
    fn concurrent_removals_take_each_value_once() {
        let values: Vec<i64> = (0..1000).collect();
        let store = Arc::new(CollectionStore::with_contents(values.clone(), vec![]));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let store = store.clone();
                let values = values.clone();
                thread::spawn(move || {
                    values
                        .iter()
                        .filter(|v| store.remove_first(Kind::Users, **v).is_ok())
                        .count()
                })
            })
            .collect();
        let removed: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(removed, 1000);
        assert!(store.get(Kind::Users).is_empty());
    }

    proptest! {
        #[test]
        fn replace_first_matches_reference(
            items in prop::collection::vec(0i64..8, 0..32),
            old in 0i64..8,
            new in 0i64..8,
        ) {
            let store = CollectionStore::with_contents(items.clone(), vec![]);
            let result = store.replace_first(Kind::Users, old, new);

            match items.iter().position(|v| *v == old) {
                Some(idx) => {
                    let mut expected = items.clone();
                    expected[idx] = new;
                    prop_assert_eq!(result, Ok(expected));
                }
                None => {
                    prop_assert_eq!(result, Err(StoreError::NotFound));
                    prop_assert_eq!(store.get(Kind::Users), items);
                }
            }
        }

        #[test]
        fn remove_first_matches_reference(
            items in prop::collection::vec(0i64..8, 0..32),
            value in 0i64..8,
        ) {
            let store = CollectionStore::with_contents(items.clone(), vec![]);
            let result = store.remove_first(Kind::Users, value);

            match items.iter().position(|v| *v == value) {
                Some(idx) => {
                    let mut expected = items.clone();
                    expected.remove(idx);
                    prop_assert_eq!(result, Ok(expected));
                }
                None => prop_assert_eq!(result, Err(StoreError::NotFound)),
            }
        }
    }
}
