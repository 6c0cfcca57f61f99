//! # hanzi_quiz
//!
//! A Chinese vocabulary study library: a multiple-choice quiz plus a
//! dictionary editor, backed by a CSV dataset and a local key-value store.
//!
//! ## How it works
//!
//! 1. Load a [`VocabularyStore`] from a [`VocabularyRepository`], falling back
//!    to the `Hanzi,Pinyin,English,Category` CSV when nothing is persisted.
//! 2. Narrow the entries to the selected categories (the *active set*).
//! 3. Ask a [`QuizEngine`] for a question in one of three [`QuizMode`]s. The
//!    engine picks the correct entry, draws up to three distractors from the
//!    same category, and shuffles the choices with Fisher-Yates.
//! 4. Check the learner's pick; reshuffle for another try, or move on.
//!
//! ## Key features
//!
//! - **Deterministic**: set `QuizConfig::rng_seed` (or inject any `rand::Rng`)
//!   to reproduce the exact same questions, which is how the tests run.
//! - **Persist-on-write**: every add/update/remove saves the full list before
//!   it becomes visible.
//! - **Stable ids**: duplicate entries are allowed and are edited through
//!   store-assigned [`EntryId`]s, never by field equality.
//!
//! ## Quick start
//!
//! ```rust
//! use hanzi_quiz::{
//!     KeyValueRepository, MemoryKeyValueStore, QuizConfig, QuizMode, QuizSession,
//!     VocabularyStore,
//! };
//!
//! let csv = "Hanzi,Pinyin,English,Category\n\
//!            你好,ni3 hao3,hello,Greetings\n\
//!            谢谢,xie4 xie4,thanks,Greetings\n";
//!
//! let kv = MemoryKeyValueStore::new();
//! let store = VocabularyStore::load_or_empty(KeyValueRepository::new(&kv), csv);
//!
//! let mut session = QuizSession::new(store.entries().to_vec(), &QuizConfig::default().with_seed(42));
//! session.set_mode(QuizMode::English);
//!
//! let question = session.next_question().cloned().expect("active set is not empty");
//! println!("What is: {}?", question.prompt);
//! for choice in &question.choices {
//!     println!("  - {choice}");
//! }
//!
//! let verdict = session.select(question.correct_answer()).expect("first pick");
//! assert!(verdict.correct);
//! ```

pub mod error;
pub mod models;
pub mod presentation;
pub mod quiz_engine;
pub mod settings;
pub mod speech;
pub mod vocabulary;

// Convenience re-exports so callers can use `hanzi_quiz::QuizEngine`
// directly without reaching into sub-modules.
pub use error::{
    DraftError, EditorError, LoadError, MalformedRowError, QuizError, RepositoryError, StoreError,
};
pub use models::{AnswerCheck, EntryId, QuizMode, QuizState, Question, VocabEntry};
pub use quiz_engine::{answer_field, check_answer, prompt_field, QuizEngine, QuizSession};
pub use settings::{QuizConfig, SpeechRate, Theme};
pub use speech::{play_chinese, Speaker, Utterance};
pub use vocabulary::{
    DictionaryView, EntryDraft, JsonFileRepository, KeyValueRepository, KeyValueStore,
    LearnedPinyin, MemoryKeyValueStore, PinyinSource, VocabularyRepository, VocabularyStore,
};
