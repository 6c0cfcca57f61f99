use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Vocabulary records
// ---------------------------------------------------------------------------

/// One dictionary / quiz record.
///
/// Field names serialise capitalised (`Hanzi`, `Pinyin`, ...) so the same
/// struct reads CSV rows and round-trips through persisted JSON. All four
/// fields are opaque strings; duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VocabEntry {
    #[serde(rename = "Hanzi")]
    pub hanzi: String,
    #[serde(rename = "Pinyin")]
    pub pinyin: String,
    #[serde(rename = "English")]
    pub english: String,
    #[serde(rename = "Category")]
    pub category: String,
}

impl VocabEntry {
    pub fn new(
        hanzi: impl Into<String>,
        pinyin: impl Into<String>,
        english: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        VocabEntry {
            hanzi: hanzi.into(),
            pinyin: pinyin.into(),
            english: english.into(),
            category: category.into(),
        }
    }
}

impl fmt::Display for VocabEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {} [{}]", self.hanzi, self.pinyin, self.english, self.category)
    }
}

/// Store-assigned identity of a stored entry.
///
/// Ids are handed out in increasing order by one store instance and are not
/// persisted; reloading assigns fresh ids in list order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntryId(pub u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Quiz modes
// ---------------------------------------------------------------------------

/// Which field is asked for. The variant names the *answer* field.
///
/// | Mode      | Prompt  | Answer  |
/// |-----------|---------|---------|
/// | `Hanzi`   | English | Hanzi   |
/// | `Pinyin`  | Hanzi   | Pinyin  |
/// | `English` | Pinyin  | English |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum QuizMode {
    #[default]
    Hanzi,
    Pinyin,
    English,
}

impl QuizMode {
    pub const ALL: [QuizMode; 3] = [QuizMode::Hanzi, QuizMode::Pinyin, QuizMode::English];

    /// Short label used as the question-id prefix.
    pub fn prefix(self) -> &'static str {
        match self {
            QuizMode::Hanzi   => "HZ",
            QuizMode::Pinyin  => "PY",
            QuizMode::English => "EN",
        }
    }

    /// Human-readable direction, e.g. "English → Hanzi".
    pub fn direction(self) -> &'static str {
        match self {
            QuizMode::Hanzi   => "English → Hanzi",
            QuizMode::Pinyin  => "Hanzi → Pinyin",
            QuizMode::English => "Pinyin → English",
        }
    }
}

impl fmt::Display for QuizMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QuizMode::Hanzi   => "Hanzi",
            QuizMode::Pinyin  => "Pinyin",
            QuizMode::English => "English",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown quiz mode: {0}")]
pub struct UnknownQuizMode(pub String);

impl FromStr for QuizMode {
    type Err = UnknownQuizMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Hanzi"   => Ok(QuizMode::Hanzi),
            "Pinyin"  => Ok(QuizMode::Pinyin),
            "English" => Ok(QuizMode::English),
            other     => Err(UnknownQuizMode(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Question / answer types
// ---------------------------------------------------------------------------

/// A posed multiple-choice question.
///
/// `correct_entry` is a copy of the drawn entry; the engine never writes back
/// to the vocabulary it was generated from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// `"<mode prefix>-<8 hex digits>"`, e.g. `"HZ-1A2B3C4D"`.
    pub id: String,
    pub mode: QuizMode,
    pub correct_entry: VocabEntry,
    pub prompt: String,
    /// Distinct answer-field values in presentation order.
    pub choices: Vec<String>,
}

impl Question {
    /// The answer-field value of the correct entry.
    pub fn correct_answer(&self) -> &str {
        crate::quiz_engine::answer_field(&self.correct_entry, self.mode)
    }

    /// Position of the correct answer within `choices`.
    pub fn correct_index(&self) -> Option<usize> {
        let answer = self.correct_answer();
        self.choices.iter().position(|c| c == answer)
    }
}

/// Result of checking a submitted choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerCheck {
    pub correct: bool,
    pub correct_answer: String,
}

/// Engine lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QuizState {
    /// No current question.
    #[default]
    Idle,
    /// Question posed, waiting for an answer.
    Active,
    /// Answer given, feedback on screen.
    Answered,
}

impl fmt::Display for QuizState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizState::Idle     => write!(f, "Idle"),
            QuizState::Active   => write!(f, "Active"),
            QuizState::Answered => write!(f, "Answered"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiz_mode_parses_its_display_form() {
        for mode in QuizMode::ALL {
            assert_eq!(mode.to_string().parse::<QuizMode>(), Ok(mode));
        }
        assert_eq!(
            "hanzi".parse::<QuizMode>(),
            Err(UnknownQuizMode("hanzi".to_string()))
        );
    }

    #[test]
    fn vocab_entry_serialises_with_capitalised_fields() {
        let entry = VocabEntry::new("你好", "ni3 hao3", "hello", "Greetings");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["Hanzi"], "你好");
        assert_eq!(json["Pinyin"], "ni3 hao3");
        assert_eq!(json["English"], "hello");
        assert_eq!(json["Category"], "Greetings");
    }
}
