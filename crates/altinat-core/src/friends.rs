//! Ordered set of tracked friends

/// Friend logins in insertion order, unique by exact match
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FriendList {
    names: Vec<String>,
}

impl FriendList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from persisted entries. Entries are trimmed; blanks and repeats
    /// are dropped, keeping the first occurrence.
    pub fn from_persisted(entries: Vec<String>) -> Self {
        let mut list = Self::new();
        for entry in entries {
            list.add(&entry);
        }
        list
    }

    /// Append `name` after trimming. Returns false when the trimmed name is
    /// empty or already tracked.
    pub fn add(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    /// Remove every exact match of `name`. Returns false if nothing matched.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        self.names.len() != before
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
