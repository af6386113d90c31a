//! Banned mint capability identities

use serde::Serialize;
use std::collections::BTreeSet;
use treasury_core::ObjectId;

/// Set of mint capability ids that may not mint
///
/// Inserting a present id or removing an absent one is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RevocationSet {
    banned: BTreeSet<ObjectId>,
}

impl RevocationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `id` was not banned before
    pub fn insert(&mut self, id: ObjectId) -> bool {
        self.banned.insert(id)
    }

    /// Returns true if `id` was banned before
    pub fn remove(&mut self, id: &ObjectId) -> bool {
        self.banned.remove(id)
    }

    pub fn contains(&self, id: &ObjectId) -> bool {
        self.banned.contains(id)
    }

    pub fn len(&self) -> usize {
        self.banned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.banned.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ObjectId> {
        self.banned.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove_idempotent() {
        let mut set = RevocationSet::new();
        let id = ObjectId::random();

        assert!(set.insert(id));
        assert!(!set.insert(id));
        assert_eq!(set.len(), 1);
        assert!(set.contains(&id));

        assert!(set.remove(&id));
        assert!(!set.remove(&id));
        assert!(set.is_empty());
    }

    #[test]
    fn test_remove_never_banned() {
        let mut set = RevocationSet::new();
        let banned = ObjectId::random();
        set.insert(banned);

        let before = set.clone();
        assert!(!set.remove(&ObjectId::random()));
        assert_eq!(set, before);
    }

    #[test]
    fn test_serializes_as_list() {
        let mut set = RevocationSet::new();
        let id = ObjectId::random();
        set.insert(id);

        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json, serde_json::json!([id.to_string()]));
    }
}
