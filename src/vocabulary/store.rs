use std::path::Path;

use log::{info, warn};

use crate::error::{LoadError, StoreError};
use crate::models::{EntryId, VocabEntry};
use crate::vocabulary::category_filter::active_categories;
use crate::vocabulary::csv_source::{parse_csv, read_csv_path, CsvImport};
use crate::vocabulary::repository::VocabularyRepository;

/// The authoritative, ordered vocabulary list.
///
/// Every mutation saves the complete updated list through the repository
/// before it is applied in memory, so readers only ever observe persisted
/// states. A failed save leaves the list as it was.
///
/// A store produced by a failed [`load_or_empty`](Self::load_or_empty) is
/// *degraded*: it reads as empty and refuses every mutation with
/// [`StoreError::Degraded`] until [`reload`](Self::reload) succeeds, so the
/// unreadable payload is never overwritten.
#[derive(Debug)]
pub struct VocabularyStore<P> {
    repository: P,
    ids: Vec<EntryId>,
    entries: Vec<VocabEntry>,
    next_id: u64,
    degraded: bool,
}

impl<P: VocabularyRepository> VocabularyStore<P> {
    /// Restore from `repository`, or parse `csv_text` when nothing is persisted.
    pub fn load(repository: P, csv_text: &str) -> Result<Self, LoadError> {
        Self::load_with(repository, || parse_csv(csv_text))
    }

    /// Like [`load`](Self::load) but reads the CSV from a file.
    pub fn load_from_path(repository: P, csv_path: impl AsRef<Path>) -> Result<Self, LoadError> {
        Self::load_with(repository, || read_csv_path(csv_path))
    }

    /// Boundary helper: log a failed load and start empty instead.
    pub fn load_or_empty(repository: P, csv_text: &str) -> Self {
        match fetch(&repository, || parse_csv(csv_text)) {
            Ok(entries) => Self::from_entries(repository, entries),
            Err(e) => {
                warn!("vocabulary unavailable, starting empty and read-only: {e}");
                let mut store = Self::from_entries(repository, Vec::new());
                store.degraded = true;
                store
            }
        }
    }

    /// Load again from the repository (or `csv_text`), replacing the list.
    ///
    /// Clears the degraded flag on success; on failure the store is unchanged.
    pub fn reload(&mut self, csv_text: &str) -> Result<(), LoadError> {
        let entries = fetch(&self.repository, || parse_csv(csv_text))?;
        let first = self.next_id;
        self.ids = (first..first + entries.len() as u64).map(EntryId).collect();
        self.next_id = first + entries.len() as u64;
        self.entries = entries;
        if self.degraded {
            info!("vocabulary reloaded, edits enabled again");
        }
        self.degraded = false;
        Ok(())
    }

    /// Wrap an in-memory list without touching the repository.
    pub fn from_entries(repository: P, entries: Vec<VocabEntry>) -> Self {
        let ids = (0..entries.len() as u64).map(EntryId).collect();
        VocabularyStore {
            repository,
            ids,
            next_id: entries.len() as u64,
            entries,
            degraded: false,
        }
    }

    fn load_with<F>(repository: P, csv: F) -> Result<Self, LoadError>
    where
        F: FnOnce() -> Result<CsvImport, LoadError>,
    {
        let entries = fetch(&repository, csv)?;
        Ok(Self::from_entries(repository, entries))
    }

    // -- reads ---------------------------------------------------------------

    pub fn entries(&self) -> &[VocabEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: EntryId) -> Option<&VocabEntry> {
        self.index_of(id).map(|i| &self.entries[i])
    }

    pub fn id_at(&self, index: usize) -> Option<EntryId> {
        self.ids.get(index).copied()
    }

    /// `(id, entry)` pairs in list order.
    pub fn iter(&self) -> impl Iterator<Item = (EntryId, &VocabEntry)> + '_ {
        self.ids.iter().copied().zip(self.entries.iter())
    }

    pub fn categories(&self) -> Vec<String> {
        active_categories(&self.entries)
    }

    pub fn repository(&self) -> &P {
        &self.repository
    }

    /// Whether the last load failed and mutations are refused.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    fn index_of(&self, id: EntryId) -> Option<usize> {
        self.ids.iter().position(|&i| i == id)
    }

    fn writable(&self) -> Result<(), StoreError> {
        if self.degraded {
            return Err(StoreError::Degraded);
        }
        Ok(())
    }

    fn check_entry(entry: &VocabEntry) -> Result<(), StoreError> {
        if entry.hanzi.trim().is_empty() {
            return Err(StoreError::EmptyHanzi);
        }
        Ok(())
    }

    // -- mutations -----------------------------------------------------------

    pub fn add(&mut self, entry: VocabEntry) -> Result<EntryId, StoreError> {
        self.writable()?;
        Self::check_entry(&entry)?;
        let mut next = self.entries.clone();
        next.push(entry);
        self.repository.save(&next)?;

        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.entries = next;
        self.ids.push(id);
        info!("added vocabulary entry {id}");
        Ok(id)
    }

    pub fn update(&mut self, id: EntryId, entry: VocabEntry) -> Result<(), StoreError> {
        let index = self.index_of(id).ok_or(StoreError::NotFound(id))?;
        self.update_at(index, entry)
    }

    pub fn update_at(&mut self, index: usize, entry: VocabEntry) -> Result<(), StoreError> {
        self.writable()?;
        Self::check_entry(&entry)?;
        if index >= self.entries.len() {
            return Err(StoreError::IndexOutOfRange(index));
        }
        let mut next = self.entries.clone();
        next[index] = entry;
        self.repository.save(&next)?;
        self.entries = next;
        info!("updated vocabulary entry {}", self.ids[index]);
        Ok(())
    }

    pub fn remove(&mut self, id: EntryId) -> Result<VocabEntry, StoreError> {
        let index = self.index_of(id).ok_or(StoreError::NotFound(id))?;
        self.remove_at(index)
    }

    pub fn remove_at(&mut self, index: usize) -> Result<VocabEntry, StoreError> {
        self.writable()?;
        if index >= self.entries.len() {
            return Err(StoreError::IndexOutOfRange(index));
        }
        let mut next = self.entries.clone();
        let removed = next.remove(index);
        self.repository.save(&next)?;
        self.entries = next;
        let id = self.ids.remove(index);
        info!("removed vocabulary entry {id}");
        Ok(removed)
    }
}

/// Persisted entries first, the CSV import otherwise.
fn fetch<P, F>(repository: &P, csv: F) -> Result<Vec<VocabEntry>, LoadError>
where
    P: VocabularyRepository,
    F: FnOnce() -> Result<CsvImport, LoadError>,
{
    if let Some(entries) = repository.load()? {
        return Ok(entries);
    }
    let import = csv()?;
    info!(
        "loaded {} entries from CSV ({} rows skipped)",
        import.entries.len(),
        import.skipped.len()
    );
    Ok(import.entries)
}
