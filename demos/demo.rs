//! End-to-end walk through the library.
//!
//! Run with: `RUST_LOG=debug cargo run --example demo`
//!
//! 1. **Load**: a scratch JSON repository in the temp dir is reset, so the
//!    vocabulary comes from `data/dictionary.csv`; edits then persist to it.
//! 2. **Quiz**: one seeded question per mode, a wrong pick, then "try again".
//! 3. **Categories**: narrowing to one category, then clearing everything.
//! 4. **Editor**: adding an entry whose Pinyin is derived from known readings.

use std::path::PathBuf;

use hanzi_quiz::presentation::{feedback_payload, question_payload};
use hanzi_quiz::{
    DictionaryView, EntryDraft, JsonFileRepository, LearnedPinyin, QuizConfig,
    QuizMode, QuizSession, Speaker, Utterance, VocabularyStore,
};

/// Prints instead of speaking.
struct ConsoleSpeaker;

impl Speaker for ConsoleSpeaker {
    fn cancel(&mut self) {}

    fn speak(&mut self, u: &Utterance) {
        println!("  🔊 [{} @ {}] {}", u.lang, u.rate, u.text);
    }
}

fn main() {
    env_logger::init();

    let data = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data");
    let scratch = std::env::temp_dir().join("hanzi_quiz_demo.json");
    let _ = std::fs::remove_file(&scratch);

    let repository = JsonFileRepository::new(&scratch);
    let mut store = match VocabularyStore::load_from_path(repository, data.join("dictionary.csv")) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("could not load vocabulary: {e}");
            return;
        }
    };
    println!("Loaded {} entries in {:?}", store.len(), store.categories());

    let config = QuizConfig::default().with_seed(42).with_speech_rate(0.8);
    let mut session = QuizSession::new(store.entries().to_vec(), &config);
    let mut speaker = ConsoleSpeaker;

    // ── one question per mode ──────────────────────────────────────────────
    for mode in QuizMode::ALL {
        session.set_mode(mode);
        let Some(question) = session.next_question().cloned() else {
            println!("No question available");
            continue;
        };
        println!();
        println!("[{}] What is: {}?", mode.direction(), question.prompt);
        println!("{}", question_payload(&question, None));

        let wrong = question
            .choices
            .iter()
            .find(|c| c.as_str() != question.correct_answer())
            .cloned()
            .unwrap_or_else(|| question.correct_answer().to_string());
        if let Some(check) = session.select(&wrong) {
            println!("  picked {wrong}: {}", feedback_payload(&check)["message"]);
        }
        session.speak_answer(&mut speaker);

        if let Some(retry) = session.try_again() {
            println!("  try again with {:?}", retry.choices);
        }
    }

    // ── categories ─────────────────────────────────────────────────────────
    session.clear_all();
    session.toggle_category("Numbers", true);
    println!();
    println!("Numbers only: {} entries", session.active_set().len());
    session.clear_all();
    println!("Cleared: next question enabled = {}", session.can_generate());

    // ── dictionary editor ──────────────────────────────────────────────────
    let learned = LearnedPinyin::from_entries(store.entries());
    let draft = EntryDraft::new("人人", "everyone", "People");
    match hanzi_quiz::vocabulary::submit_draft(&mut store, draft, &learned) {
        Ok(id) => println!("Added {id}: {:?}", store.get(id)),
        Err(e) => println!("Draft rejected: {e}"),
    }

    let mut view = DictionaryView::new(&store);
    view.select_category("People");
    for (id, entry) in view.rows(&store) {
        println!("  {id} {entry}");
    }
    println!("Persisted to {}", scratch.display());
}
