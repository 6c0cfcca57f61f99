//! Vocabulary data: where entries come from, where they are kept, and how
//! they are narrowed down for the quiz.
//!
//! | Module            | Purpose |
//! |-------------------|---------|
//! | `csv_source`      | Dictionary CSV import with per-row error reporting |
//! | `repository`      | `KeyValueStore` / `VocabularyRepository` seams and backends |
//! | `store`           | The authoritative entry list with persist-on-write CRUD |
//! | `category_filter` | Category listing, filtering and the checkbox selection |
//! | `editor`          | Dictionary editor view, drafts and Pinyin derivation |

pub mod category_filter;
pub mod csv_source;
pub mod editor;
pub mod repository;
pub mod store;

pub use category_filter::{active_categories, filter, CategorySelection};
pub use csv_source::{parse_csv, read_csv, read_csv_path, CsvImport};
pub use editor::{submit_draft, DictionaryView, EntryDraft, LearnedPinyin, PinyinSource};
pub use repository::{
    JsonFileRepository, KeyValueRepository, KeyValueStore, MemoryKeyValueStore,
    VocabularyRepository, VOCABULARY_KEY,
};
pub use store::VocabularyStore;
