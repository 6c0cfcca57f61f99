use log::debug;
use rand::rngs::StdRng;
use rand::Rng;

use crate::models::{AnswerCheck, QuizMode, QuizState, Question, VocabEntry};
use crate::quiz_engine::generator::QuizEngine;
use crate::settings::{QuizConfig, SpeechRate};
use crate::speech::{play_chinese, Speaker};
use crate::vocabulary::category_filter::{active_categories, CategorySelection};

/// Controller state behind the quiz page.
///
/// Owns a snapshot of the vocabulary, the category checkboxes, the chosen
/// mode, the speech rate and the engine. The active set is recomputed whenever the selection
/// changes; an empty active set sends the engine to `Idle`.
#[derive(Debug)]
pub struct QuizSession<R = StdRng> {
    entries: Vec<VocabEntry>,
    categories: Vec<String>,
    selection: CategorySelection,
    active: Vec<VocabEntry>,
    mode: QuizMode,
    engine: QuizEngine<R>,
    selected: Option<String>,
    speech_rate: SpeechRate,
}

impl QuizSession<StdRng> {
    /// All categories selected, `Hanzi` mode.
    pub fn new(entries: Vec<VocabEntry>, config: &QuizConfig) -> Self {
        let mut session = Self::with_engine(entries, QuizEngine::new(config));
        session.speech_rate = config.speech_rate;
        session
    }
}

impl<R: Rng> QuizSession<R> {
    pub fn with_engine(entries: Vec<VocabEntry>, engine: QuizEngine<R>) -> Self {
        let categories = active_categories(&entries);
        let selection = CategorySelection::all(categories.iter().cloned());
        let active = selection.apply(&entries);
        QuizSession {
            entries,
            categories,
            selection,
            active,
            mode: QuizMode::default(),
            engine,
            selected: None,
            speech_rate: SpeechRate::NORMAL,
        }
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn selection(&self) -> &CategorySelection {
        &self.selection
    }

    pub fn active_set(&self) -> &[VocabEntry] {
        &self.active
    }

    pub fn mode(&self) -> QuizMode {
        self.mode
    }

    pub fn state(&self) -> QuizState {
        self.engine.state()
    }

    pub fn current(&self) -> Option<&Question> {
        self.engine.current()
    }

    /// The choice picked for the current question, if any.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Whether "next question" is enabled.
    pub fn can_generate(&self) -> bool {
        !self.active.is_empty()
    }

    pub fn speech_rate(&self) -> SpeechRate {
        self.speech_rate
    }

    pub fn set_speech_rate(&mut self, rate: SpeechRate) {
        self.speech_rate = rate;
    }

    /// Read the current question's Hanzi aloud at the session's rate.
    ///
    /// Returns `false` when there is no question.
    pub fn speak_answer(&self, speaker: &mut dyn Speaker) -> bool {
        let Some(question) = self.engine.current() else {
            return false;
        };
        play_chinese(speaker, &question.correct_entry.hanzi, self.speech_rate);
        true
    }

    /// Takes effect from the next question on.
    pub fn set_mode(&mut self, mode: QuizMode) {
        self.mode = mode;
    }

    /// Swap in a new vocabulary snapshot, e.g. after dictionary edits.
    ///
    /// Selected categories that still exist stay selected; new ones are added.
    pub fn replace_entries(&mut self, entries: Vec<VocabEntry>) {
        let previous = std::mem::take(&mut self.categories);
        self.categories = active_categories(&entries);
        for category in &self.categories {
            if !previous.contains(category) {
                self.selection.toggle(category, true);
            }
        }
        self.entries = entries;
        self.refresh_active();
    }

    pub fn toggle_category(&mut self, category: &str, on: bool) {
        self.selection.toggle(category, on);
        self.refresh_active();
    }

    pub fn select_all(&mut self) {
        self.selection.select_all(self.categories.iter().cloned());
        self.refresh_active();
    }

    pub fn clear_all(&mut self) {
        self.selection.clear_all();
        self.refresh_active();
    }

    pub fn next_question(&mut self) -> Option<&Question> {
        self.selected = None;
        self.engine.generate_question(&self.active, self.mode)?;
        self.engine.current()
    }

    /// Record the first selection for the current question.
    ///
    /// Further selections are ignored until `next_question` or `try_again`.
    pub fn select(&mut self, choice: &str) -> Option<AnswerCheck> {
        if self.engine.state() != QuizState::Active {
            debug!("quiz session: ignoring selection '{choice}' in {}", self.engine.state());
            return None;
        }
        let result = self.engine.check_answer(choice)?;
        self.selected = Some(choice.to_string());
        Some(result)
    }

    /// Same prompt, fresh choices.
    pub fn try_again(&mut self) -> Option<&Question> {
        self.selected = None;
        self.engine.reshuffle_choices(&self.active)?;
        self.engine.current()
    }

    fn refresh_active(&mut self) {
        self.active = self.selection.apply(&self.entries);
        debug!("quiz session: active set has {} entries", self.active.len());
        if self.active.is_empty() {
            self.engine.reset();
            self.selected = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speech::Utterance;
    use rand::SeedableRng;

    fn entries() -> Vec<VocabEntry> {
        vec![
            VocabEntry::new("你好", "ni3 hao3", "hello", "Greetings"),
            VocabEntry::new("谢谢", "xie4 xie4", "thanks", "Greetings"),
            VocabEntry::new("一", "yi1", "one", "Numbers"),
            VocabEntry::new("二", "er4", "two", "Numbers"),
        ]
    }

    fn session(seed: u64) -> QuizSession {
        QuizSession::new(entries(), &QuizConfig::default().with_seed(seed))
    }

    /// Collects spoken utterances.
    #[derive(Default)]
    struct Spoken(Vec<Utterance>);

    impl Speaker for Spoken {
        fn cancel(&mut self) {}

        fn speak(&mut self, utterance: &Utterance) {
            self.0.push(utterance.clone());
        }
    }

    #[test]
    fn configured_speech_rate_reaches_the_speaker() {
        let config = QuizConfig::default().with_seed(6).with_speech_rate(0.8);
        let mut s = QuizSession::new(entries(), &config);
        assert_eq!(s.speech_rate(), SpeechRate::new(0.8));

        let mut spoken = Spoken::default();
        assert!(!s.speak_answer(&mut spoken));

        let hanzi = s.next_question().unwrap().correct_entry.hanzi.clone();
        assert!(s.speak_answer(&mut spoken));
        s.set_speech_rate(SpeechRate::new(1.5));
        assert!(s.speak_answer(&mut spoken));

        let rates: Vec<f32> = spoken.0.iter().map(|u| u.rate.value()).collect();
        assert_eq!(rates, vec![0.8, 1.5]);
        assert!(spoken.0.iter().all(|u| u.text == hanzi && u.lang == "zh-CN"));
    }

    #[test]
    fn starts_with_everything_selected() {
        let s = session(1);
        assert_eq!(s.categories().to_vec(), vec!["Greetings", "Numbers"]);
        assert_eq!(s.active_set().len(), 4);
        assert!(s.can_generate());
        assert_eq!(s.state(), QuizState::Idle);
        assert_eq!(s.mode(), QuizMode::Hanzi);
    }

    #[test]
    fn second_selection_is_ignored() {
        let mut s = session(2);
        let q = s.next_question().cloned().unwrap();
        let first = s.select(q.correct_answer()).unwrap();
        assert!(first.correct);
        assert_eq!(s.selected(), Some(q.correct_answer()));
        assert!(s.select("anything").is_none());
        assert_eq!(s.state(), QuizState::Answered);

        let again = s.try_again().cloned().unwrap();
        assert_eq!(again.correct_entry, q.correct_entry);
        assert!(s.selected().is_none());
        assert!(s.select(again.correct_answer()).is_some());
    }

    #[test]
    fn clearing_categories_goes_idle_and_disables_next() {
        let mut s = session(3);
        s.next_question().unwrap();
        s.clear_all();
        assert!(!s.can_generate());
        assert_eq!(s.state(), QuizState::Idle);
        assert!(s.next_question().is_none());
        assert!(s.try_again().is_none());

        s.toggle_category("Numbers", true);
        let q = s.next_question().cloned().unwrap();
        assert_eq!(q.correct_entry.category, "Numbers");

        s.select_all();
        assert_eq!(s.active_set().len(), 4);
    }

    #[test]
    fn mode_change_applies_to_next_question() {
        let mut s = session(4);
        s.set_mode(QuizMode::English);
        let q = s.next_question().cloned().unwrap();
        assert_eq!(q.mode, QuizMode::English);
        assert_eq!(q.prompt, q.correct_entry.pinyin);
    }

    #[test]
    fn replaced_entries_keep_deselections() {
        let mut s = session(5);
        s.toggle_category("Numbers", false);
        let mut more = entries();
        more.push(VocabEntry::new("猫", "mao1", "cat", "Animals"));
        s.replace_entries(more);

        assert!(!s.selection().contains("Numbers"));
        assert!(s.selection().contains("Animals"));
        assert_eq!(s.active_set().len(), 3);
    }

    #[test]
    fn injected_rng_is_used() {
        let engine = QuizEngine::with_rng(StdRng::seed_from_u64(9), 4);
        let mut s = QuizSession::with_engine(entries(), engine);
        assert!(s.next_question().is_some());
    }
}
