//! Dictionary editor: a per-category table view and manual entry drafts.
//!
//! Drafts carry Hanzi, English and Category; Pinyin is derived through a
//! [`PinyinSource`].

use std::collections::HashMap;

use log::debug;

use crate::error::{DraftError, EditorError};
use crate::models::{EntryId, VocabEntry};
use crate::vocabulary::repository::VocabularyRepository;
use crate::vocabulary::store::VocabularyStore;

// ---------------------------------------------------------------------------
// Pinyin derivation
// ---------------------------------------------------------------------------

pub trait PinyinSource {
    /// Pinyin for `hanzi`, or `None` if any character is unknown.
    fn pinyin_for(&self, hanzi: &str) -> Option<String>;
}

/// Per-character readings learned from existing entries.
///
/// Only entries with one syllable per character teach anything; the first
/// reading seen for a character wins.
#[derive(Debug, Clone, Default)]
pub struct LearnedPinyin {
    readings: HashMap<char, String>,
}

impl LearnedPinyin {
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a VocabEntry>) -> Self {
        let mut learned = LearnedPinyin::default();
        for entry in entries {
            learned.learn(entry);
        }
        learned
    }

    pub fn learn(&mut self, entry: &VocabEntry) {
        let chars: Vec<char> = entry.hanzi.chars().filter(|c| !c.is_whitespace()).collect();
        let syllables: Vec<&str> = entry.pinyin.split_whitespace().collect();
        if chars.is_empty() || chars.len() != syllables.len() {
            return;
        }
        for (c, s) in chars.into_iter().zip(syllables) {
            self.readings.entry(c).or_insert_with(|| s.to_string());
        }
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

impl PinyinSource for LearnedPinyin {
    fn pinyin_for(&self, hanzi: &str) -> Option<String> {
        let syllables = hanzi
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| self.readings.get(&c).map(String::as_str))
            .collect::<Option<Vec<_>>>()?;
        if syllables.is_empty() {
            return None;
        }
        Some(syllables.join(" "))
    }
}

// ---------------------------------------------------------------------------
// Drafts
// ---------------------------------------------------------------------------

/// The manual-entry form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    pub hanzi: String,
    pub english: String,
    pub category: String,
}

impl EntryDraft {
    pub fn new(hanzi: impl Into<String>, english: impl Into<String>, category: impl Into<String>) -> Self {
        EntryDraft {
            hanzi: hanzi.into(),
            english: english.into(),
            category: category.into(),
        }
    }

    pub fn validate(&self) -> Result<(), DraftError> {
        if self.hanzi.trim().is_empty() {
            return Err(DraftError::EmptyHanzi);
        }
        if self.english.trim().is_empty() {
            return Err(DraftError::EmptyEnglish);
        }
        if self.category.trim().is_empty() {
            return Err(DraftError::EmptyCategory);
        }
        Ok(())
    }

    /// Validate and complete the draft with derived Pinyin.
    pub fn into_entry(self, source: &dyn PinyinSource) -> Result<VocabEntry, DraftError> {
        self.validate()?;
        let hanzi = self.hanzi.trim().to_string();
        let pinyin = source
            .pinyin_for(&hanzi)
            .ok_or_else(|| DraftError::UnknownPinyin(hanzi.clone()))?;
        Ok(VocabEntry {
            hanzi,
            pinyin,
            english: self.english.trim().to_string(),
            category: self.category.trim().to_string(),
        })
    }
}

/// Add a draft to the store, persisting it.
pub fn submit_draft<P: VocabularyRepository>(
    store: &mut VocabularyStore<P>,
    draft: EntryDraft,
    source: &dyn PinyinSource,
) -> Result<EntryId, EditorError> {
    let entry = draft.into_entry(source)?;
    debug!("submitting draft {entry}");
    Ok(store.add(entry)?)
}

// ---------------------------------------------------------------------------
// Table view
// ---------------------------------------------------------------------------

/// The editor's single-category table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DictionaryView {
    selected: Option<String>,
}

impl DictionaryView {
    /// Starts on the store's first category.
    pub fn new<P: VocabularyRepository>(store: &VocabularyStore<P>) -> Self {
        DictionaryView {
            selected: store.categories().into_iter().next(),
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn select_category(&mut self, category: impl Into<String>) {
        self.selected = Some(category.into());
    }

    pub fn categories<P: VocabularyRepository>(&self, store: &VocabularyStore<P>) -> Vec<String> {
        store.categories()
    }

    /// Rows of the selected category, in store order.
    pub fn rows<'s, P: VocabularyRepository>(
        &self,
        store: &'s VocabularyStore<P>,
    ) -> Vec<(EntryId, &'s VocabEntry)> {
        let Some(selected) = self.selected.as_deref() else {
            return Vec::new();
        };
        store.iter().filter(|(_, e)| e.category == selected).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::repository::{KeyValueRepository, MemoryKeyValueStore};

    fn entries() -> Vec<VocabEntry> {
        vec![
            VocabEntry::new("你好", "ni3 hao3", "hello", "Greetings"),
            VocabEntry::new("好人", "hao3 ren2", "good person", "People"),
            VocabEntry::new("中国人", "zhong1guo2ren2", "Chinese person", "People"),
            VocabEntry::new("你", "ni2", "you", "Pronouns"),
        ]
    }

    #[test]
    fn learned_pinyin_uses_first_aligned_reading() {
        let learned = LearnedPinyin::from_entries(&entries());
        assert_eq!(learned.pinyin_for("你好").as_deref(), Some("ni3 hao3"));
        assert_eq!(learned.pinyin_for("好人").as_deref(), Some("hao3 ren2"));
        assert_eq!(learned.pinyin_for("人好").as_deref(), Some("ren2 hao3"));
        // Unaligned entry taught nothing about 中 or 国.
        assert_eq!(learned.pinyin_for("中国"), None);
        assert_eq!(learned.pinyin_for(""), None);
        assert_eq!(learned.len(), 3);
    }

    #[test]
    fn draft_validation() {
        let learned = LearnedPinyin::from_entries(&entries());
        assert_eq!(EntryDraft::new(" ", "x", "c").validate(), Err(DraftError::EmptyHanzi));
        assert_eq!(EntryDraft::new("你", "x", "").validate(), Err(DraftError::EmptyCategory));
        assert_eq!(EntryDraft::new("你", "  ", "People").validate(), Err(DraftError::EmptyEnglish));
        assert_eq!(
            EntryDraft::new("你好", "", "Greetings").into_entry(&learned),
            Err(DraftError::EmptyEnglish)
        );
        assert_eq!(
            EntryDraft::new("猫", "cat", "Animals").into_entry(&learned),
            Err(DraftError::UnknownPinyin("猫".to_string()))
        );
        assert_eq!(
            EntryDraft::new(" 你好 ", "hi", "Greetings").into_entry(&learned),
            Ok(VocabEntry::new("你好", "ni3 hao3", "hi", "Greetings"))
        );
    }

    #[test]
    fn submitted_draft_is_persisted_and_listed() {
        let kv = MemoryKeyValueStore::new();
        let repo = KeyValueRepository::new(&kv);
        let mut store = VocabularyStore::from_entries(&repo, entries());
        let learned = LearnedPinyin::from_entries(store.entries());

        let mut view = DictionaryView::new(&store);
        assert_eq!(view.selected(), Some("Greetings"));

        let id = submit_draft(&mut store, EntryDraft::new("人", "person", "People"), &learned).unwrap();
        assert_eq!(repo.load().unwrap().map(|v| v.len()), Some(5));

        view.select_category("People");
        let rows = view.rows(&store);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows.last().map(|(i, e)| (*i, e.pinyin.as_str())), Some((id, "ren2")));

        let bad = submit_draft(&mut store, EntryDraft::new("", "x", "People"), &learned);
        assert!(matches!(bad, Err(EditorError::Draft(DraftError::EmptyHanzi))));
    }
}
