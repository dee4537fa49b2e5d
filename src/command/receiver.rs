use super::CommandError;

/// Ordered list of string items that every command mutates.
///
/// Duplicates are allowed. Out-of-range indices are rejected with
/// [`CommandError::InvalidIndex`] and leave the list untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemList {
    items: Vec<String>,
}

impl ItemList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<String>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Owned copy of the current state, unaffected by later mutations.
    pub fn snapshot(&self) -> Vec<String> {
        self.items.clone()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn add(&mut self, item: String) {
        self.items.push(item);
    }

    pub fn remove(&mut self, index: usize) -> Result<String, CommandError> {
        if index >= self.items.len() {
            return Err(CommandError::InvalidIndex {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    /// Inserts `item` before `index`; `index == len` appends.
    pub fn insert(&mut self, index: usize, item: String) -> Result<(), CommandError> {
        if index > self.items.len() {
            return Err(CommandError::InvalidIndex {
                index,
                len: self.items.len(),
            });
        }
        self.items.insert(index, item);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn replace(&mut self, items: Vec<String>) {
        self.items = items;
    }
}
