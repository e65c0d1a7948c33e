use indexmap::IndexMap;

/// Frequency table that remembers the order keys were first seen in.
///
/// The filter menu lists entries in this order, so a plain `HashMap` won't do.
/// Equality compares entries in order.
#[derive(Debug, Clone, Default)]
pub struct Tally {
    entries: IndexMap<String, usize>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the count for `key`, creating the entry at zero first
    pub fn add(&mut self, key: &str) {
        match self.entries.get_mut(key) {
            Some(count) => *count += 1,
            None => {
                self.entries.insert(key.to_string(), 1);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<usize> {
        self.entries.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.entries.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(k, count)| (k.as_str(), *count))
    }
}

impl PartialEq for Tally {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for Tally {}

impl<'a> FromIterator<(&'a str, usize)> for Tally {
    fn from_iter<I: IntoIterator<Item = (&'a str, usize)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, count)| (k.to_string(), count))
                .collect(),
        }
    }
}
