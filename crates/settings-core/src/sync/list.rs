//! Entity List
//!
//! Ordered, newest-first collection with unique identities.

use std::collections::HashSet;

use crate::domain::{Entity, Resource};
use crate::remote::{RemoteResult, ResourceClient};

/// Cached, possibly stale mirror of a server collection
#[derive(Debug, Clone, PartialEq)]
pub struct EntityList<T> {
    items: Vec<T>,
}

impl<T> Default for EntityList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity> EntityList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from server order, dropping repeated identities
    pub fn from_vec(items: Vec<T>) -> Self {
        let mut list = Self::new();
        list.replace_all(items);
        list
    }

    /// Replaces the whole collection (keeps the first element per identity)
    pub fn replace_all(&mut self, items: Vec<T>) {
        let total = items.len();
        let mut seen = HashSet::with_capacity(total);
        self.items = items.into_iter().filter(|item| seen.insert(item.id().clone())).collect();
        if self.items.len() != total {
            log::warn!("Dropped {} entities with repeated ids", total - self.items.len());
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Prepends a newly created entity.
    ///
    /// If the identity is already present the stale copy is removed first,
    /// so the list never holds the same id twice.
    pub fn apply_create(&mut self, entity: T) {
        if self.apply_delete(entity.id()) {
            log::warn!("Created entity {} was already cached, replacing it", entity.id());
        }
        self.items.insert(0, entity);
    }

    /// Replaces the entity with the same identity in place.
    ///
    /// Returns `false` and leaves the list unchanged when no element matches.
    pub fn apply_update(&mut self, entity: T) -> bool {
        match self.items.iter_mut().find(|item| item.id() == entity.id()) {
            Some(slot) => {
                *slot = entity;
                true
            }
            None => {
                log::debug!("Update for unknown entity {} ignored", entity.id());
                false
            }
        }
    }

    /// Removes the entity with the given identity; `false` when absent
    pub fn apply_delete(&mut self, id: &T::Id) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.get(id).is_some()
    }

    pub fn position(&self, id: &T::Id) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Resource> EntityList<T> {
    /// Replaces the collection with `list_all()`.
    ///
    /// On failure the collection is left empty and the error is returned
    /// for the caller to surface.
    pub async fn load<C>(&mut self, client: &C) -> RemoteResult<usize>
    where
        C: ResourceClient<T> + ?Sized,
    {
        match client.list_all().await {
            Ok(items) => {
                self.replace_all(items);
                log::info!("Loaded {} {}", self.len(), T::COLLECTION);
                Ok(self.len())
            }
            Err(e) => {
                self.clear();
                log::error!("Failed to load {}: {}", T::COLLECTION, e);
                Err(e)
            }
        }
    }
}

impl<'a, T> IntoIterator for &'a EntityList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use crate::testing::{FakeClient, Fail};
    use pretty_assertions::assert_eq;

    fn cat(id: &str, value: &str) -> Category {
        Category::new(id, value.to_uppercase(), value)
    }

    fn ids(list: &EntityList<Category>) -> Vec<&str> {
        list.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_most_recent_create_is_first() {
        let mut list = EntityList::new();
        for (i, value) in ["a", "b", "c", "d"].iter().enumerate() {
            list.apply_create(cat(&i.to_string(), value));
            assert_eq!(list.iter().next().map(|c| c.value.as_str()), Some(*value));
        }
        assert_eq!(ids(&list), vec!["3", "2", "1", "0"]);
    }

    #[test]
    fn test_create_with_cached_id_keeps_identities_unique() {
        let mut list = EntityList::from_vec(vec![cat("1", "a"), cat("2", "b")]);
        list.apply_create(cat("2", "b2"));
        assert_eq!(ids(&list), vec!["2", "1"]);
        assert_eq!(list.get(&"2".to_string()).map(|c| c.value.as_str()), Some("b2"));
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut list = EntityList::from_vec(vec![cat("1", "a"), cat("2", "b"), cat("3", "c")]);
        let mut edited = cat("2", "bee");
        edited.description = Some("renamed".into());

        assert!(list.apply_update(edited.clone()));
        assert_eq!(ids(&list), vec!["1", "2", "3"]);
        assert_eq!(list.as_slice()[1], edited);
        assert_eq!(list.as_slice()[0], cat("1", "a"));
        assert_eq!(list.as_slice()[2], cat("3", "c"));
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut list = EntityList::from_vec(vec![cat("1", "a")]);
        let before = list.clone();
        assert!(!list.apply_update(cat("9", "z")));
        assert_eq!(list, before);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut list = EntityList::from_vec(vec![cat("1", "a"), cat("2", "b"), cat("3", "c")]);
        assert!(list.apply_delete(&"2".to_string()));
        assert_eq!(ids(&list), vec!["1", "3"]);

        let before = list.clone();
        assert!(!list.apply_delete(&"2".to_string()));
        assert_eq!(list, before);
    }

    #[test]
    fn test_replace_all_drops_repeated_ids() {
        let list = EntityList::from_vec(vec![cat("1", "a"), cat("1", "dup"), cat("2", "b")]);
        assert_eq!(ids(&list), vec!["1", "2"]);
        assert_eq!(list.as_slice()[0].value, "a");
    }

    #[tokio::test]
    async fn test_load_replaces_collection() {
        let client = FakeClient::with(vec![cat("1", "a"), cat("2", "b")]);
        let mut list = EntityList::from_vec(vec![cat("old", "x")]);

        assert_eq!(list.load(&client).await.unwrap(), 2);
        assert_eq!(ids(&list), vec!["1", "2"]);
    }

    #[tokio::test]
    async fn test_load_failure_leaves_empty() {
        let client = FakeClient::with(vec![cat("1", "a")]);
        client.fail(Fail::ListAll);
        let mut list = EntityList::from_vec(vec![cat("old", "x")]);

        assert!(list.load(&client).await.is_err());
        assert!(list.is_empty());
    }
}
