use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::QuizError;
use crate::models::{AnswerCheck, QuizMode, QuizState, Question, VocabEntry};
use crate::quiz_engine::choices::{answer_field, build_choices, prompt_field};
use crate::quiz_engine::shuffle::pick;
use crate::settings::QuizConfig;

/// Generate a question ID from mode prefix + RNG draw.
fn make_question_id<R: Rng>(mode: QuizMode, rng: &mut R) -> String {
    format!("{}-{:08X}", mode.prefix(), rng.next_u32())
}

/// Compare `submitted` against the question's correct answer.
///
/// Pure: no engine state is touched, so repeated calls agree.
pub fn check_answer(question: &Question, submitted: &str) -> AnswerCheck {
    let correct_answer = answer_field(&question.correct_entry, question.mode);
    AnswerCheck {
        correct: submitted == correct_answer,
        correct_answer: correct_answer.to_string(),
    }
}

/// The question/answer state machine.
///
/// `Idle` → `Active` on a generated question, `Active` → `Answered` on a
/// checked answer, and back to `Active` on reshuffle or the next question.
/// Any operation that finds the active set empty drops to `Idle`.
#[derive(Debug)]
pub struct QuizEngine<R = StdRng> {
    rng: R,
    max_choices: usize,
    state: QuizState,
    current: Option<Question>,
    last_check: Option<AnswerCheck>,
}

impl QuizEngine<StdRng> {
    /// Seed from `config.rng_seed`, or from entropy when unset.
    pub fn new(config: &QuizConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        Self::with_rng(rng, config.max_choices)
    }
}

impl<R: Rng> QuizEngine<R> {
    pub fn with_rng(rng: R, max_choices: usize) -> Self {
        QuizEngine {
            rng,
            max_choices: max_choices.max(1),
            state: QuizState::Idle,
            current: None,
            last_check: None,
        }
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn current(&self) -> Option<&Question> {
        self.current.as_ref()
    }

    /// The feedback for the current question, once answered.
    pub fn last_check(&self) -> Option<&AnswerCheck> {
        self.last_check.as_ref()
    }

    pub fn max_choices(&self) -> usize {
        self.max_choices
    }

    /// Drop the current question and return to `Idle`.
    pub fn reset(&mut self) {
        if self.state != QuizState::Idle {
            debug!("quiz engine: {} -> Idle", self.state);
        }
        self.state = QuizState::Idle;
        self.current = None;
        self.last_check = None;
    }

    /// Pose a new question drawn from `active_set`.
    ///
    /// Returns `None` and goes `Idle` when the set is empty.
    pub fn generate_question(&mut self, active_set: &[VocabEntry], mode: QuizMode) -> Option<Question> {
        let Some(correct) = pick(active_set, &mut self.rng).cloned() else {
            debug!("quiz engine: active set is empty, no question");
            self.reset();
            return None;
        };

        let id = make_question_id(mode, &mut self.rng);
        let choices = build_choices(&mut self.rng, &correct, active_set, mode, self.max_choices);
        let question = Question {
            id,
            mode,
            prompt: prompt_field(&correct, mode).to_string(),
            correct_entry: correct,
            choices,
        };
        debug!(
            "quiz engine: posed {} ({} choices, category '{}')",
            question.id,
            question.choices.len(),
            question.correct_entry.category
        );
        Some(self.pose(question))
    }

    /// `generate_question` for callers that want a `Result`.
    pub fn try_generate(&mut self, active_set: &[VocabEntry], mode: QuizMode) -> Result<Question, QuizError> {
        self.generate_question(active_set, mode).ok_or(QuizError::EmptyActiveSet)
    }

    /// Fresh choices for the current prompt; the correct entry is kept.
    ///
    /// `None` when there is no current question, or when `active_set` is
    /// empty (which also resets to `Idle`).
    pub fn reshuffle_choices(&mut self, active_set: &[VocabEntry]) -> Option<Question> {
        if active_set.is_empty() {
            debug!("quiz engine: active set emptied before reshuffle");
            self.reset();
            return None;
        }
        let previous = self.current.take()?;

        let id = make_question_id(previous.mode, &mut self.rng);
        let choices = build_choices(
            &mut self.rng,
            &previous.correct_entry,
            active_set,
            previous.mode,
            self.max_choices,
        );
        debug!("quiz engine: reshuffled {} as {id}", previous.id);
        Some(self.pose(Question { id, choices, ..previous }))
    }

    /// Check `submitted` against the current question.
    ///
    /// Moves `Active` → `Answered`. Once answered, later submissions are
    /// ignored and the first verdict is returned; `None` when `Idle`.
    pub fn check_answer(&mut self, submitted: &str) -> Option<AnswerCheck> {
        if self.state == QuizState::Answered {
            return self.last_check.clone();
        }
        let question = self.current.as_ref()?;
        let result = check_answer(question, submitted);
        debug!(
            "quiz engine: {} answered {}",
            question.id,
            if result.correct { "correctly" } else { "incorrectly" }
        );
        self.state = QuizState::Answered;
        self.last_check = Some(result.clone());
        Some(result)
    }

    fn pose(&mut self, question: Question) -> Question {
        self.state = QuizState::Active;
        self.last_check = None;
        self.current = Some(question.clone());
        question
    }
}
