use std::collections::HashSet;

use crate::models::VocabEntry;

/// Distinct categories in order of first appearance.
pub fn active_categories(entries: &[VocabEntry]) -> Vec<String> {
    let mut seen = HashSet::new();
    entries
        .iter()
        .filter(|e| seen.insert(e.category.as_str()))
        .map(|e| e.category.clone())
        .collect()
}

/// Entries whose category is selected, in original order.
///
/// An empty selection yields nothing. There is no "All" wildcard: expand it
/// with [`active_categories`] before calling.
pub fn filter(entries: &[VocabEntry], selected: &HashSet<String>) -> Vec<VocabEntry> {
    if selected.is_empty() {
        return Vec::new();
    }
    entries
        .iter()
        .filter(|e| selected.contains(&e.category))
        .cloned()
        .collect()
}

/// The quiz page's category checkboxes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySelection {
    selected: HashSet<String>,
}

impl CategorySelection {
    /// Nothing selected.
    pub fn none() -> Self {
        Self::default()
    }

    /// Every category in `categories` selected.
    pub fn all<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CategorySelection {
            selected: categories.into_iter().map(Into::into).collect(),
        }
    }

    pub fn toggle(&mut self, category: &str, on: bool) {
        if on {
            self.selected.insert(category.to_string());
        } else {
            self.selected.remove(category);
        }
    }

    pub fn select_all<I, S>(&mut self, categories: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        *self = Self::all(categories);
    }

    pub fn clear_all(&mut self) {
        self.selected.clear();
    }

    pub fn contains(&self, category: &str) -> bool {
        self.selected.contains(category)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn as_set(&self) -> &HashSet<String> {
        &self.selected
    }

    /// Shorthand for `filter(entries, self.as_set())`.
    pub fn apply(&self, entries: &[VocabEntry]) -> Vec<VocabEntry> {
        filter(entries, &self.selected)
    }
}
