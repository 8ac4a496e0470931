use std::collections::BTreeSet;

/// Observation ids the user has liked
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LikedSet {
    ids: BTreeSet<u64>,
}

impl LikedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ids(ids: impl IntoIterator<Item = u64>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    /// Flip membership of `id`. Returns whether it is liked afterwards.
    pub fn toggle(&mut self, id: u64) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn contains(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    /// Ids in ascending order, as persisted
    pub fn to_vec(&self) -> Vec<u64> {
        self.ids.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores() {
        let mut liked = LikedSet::from_ids([3, 1]);
        let before = liked.clone();

        assert!(liked.toggle(42));
        assert!(!liked.toggle(42));
        assert_eq!(liked, before);

        assert!(!liked.toggle(3));
        assert!(liked.toggle(3));
        assert_eq!(liked, before);
    }

    #[test]
    fn test_duplicates_collapse() {
        let liked = LikedSet::from_ids([5, 5, 2]);
        assert_eq!(liked.to_vec(), vec![2, 5]);
    }
}
