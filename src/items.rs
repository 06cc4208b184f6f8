use crate::error::ItemError;

pub const MIN_ITEMS: usize = 2;
pub const MAX_ITEMS: usize = 12;

/// Ordered labels on the wheel. Always holds between `MIN_ITEMS` and
/// `MAX_ITEMS` entries; duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemList {
    labels: Vec<String>,
}

impl ItemList {
    pub fn new<I, S>(seed: I) -> Result<Self, ItemError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let labels: Vec<String> = seed
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .collect();
        let len = labels.len();
        if !(MIN_ITEMS..=MAX_ITEMS).contains(&len) || labels.iter().any(|l| l.is_empty()) {
            return Err(ItemError::InvalidSeed {
                len,
                min: MIN_ITEMS,
                max: MAX_ITEMS,
            });
        }
        Ok(Self { labels })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.labels.len() >= MAX_ITEMS
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.labels
    }

    /// Whether `add(label)` would be accepted.
    pub fn can_add(&self, label: &str) -> bool {
        !self.is_full() && !label.trim().is_empty()
    }

    pub fn can_remove(&self) -> bool {
        self.labels.len() > MIN_ITEMS
    }

    /// Append a trimmed label.
    pub fn add(&mut self, label: &str) -> Result<(), ItemError> {
        let label = label.trim();
        if label.is_empty() {
            return Err(ItemError::EmptyLabel);
        }
        if self.is_full() {
            return Err(ItemError::Full { max: MAX_ITEMS });
        }
        self.labels.push(label.to_string());
        Ok(())
    }

    /// Remove the label at `index`, keeping the order of the rest.
    pub fn remove(&mut self, index: usize) -> Result<String, ItemError> {
        if !self.can_remove() {
            return Err(ItemError::TooFew { min: MIN_ITEMS });
        }
        if index >= self.labels.len() {
            return Err(ItemError::OutOfRange {
                index,
                len: self.labels.len(),
            });
        }
        Ok(self.labels.remove(index))
    }
}
