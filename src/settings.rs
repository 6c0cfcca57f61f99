//! Configuration passed explicitly into the engine and session, plus the
//! persisted theme preference.

use std::fmt;
use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::RepositoryError;
use crate::quiz_engine::choices::DEFAULT_MAX_CHOICES;
use crate::vocabulary::repository::KeyValueStore;

/// Key holding the theme preference.
pub const THEME_KEY: &str = "theme";

// ---------------------------------------------------------------------------
// Speech rate
// ---------------------------------------------------------------------------

/// Text-to-speech playback rate, always within `[MIN, MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f32", into = "f32")]
pub struct SpeechRate(f32);

impl SpeechRate {
    pub const MIN: f32 = 0.5;
    pub const MAX: f32 = 2.0;
    pub const NORMAL: SpeechRate = SpeechRate(1.0);

    /// Clamp into range; NaN and infinities fall back to normal speed.
    pub fn new(rate: f32) -> Self {
        if !rate.is_finite() {
            return Self::NORMAL;
        }
        SpeechRate(rate.clamp(Self::MIN, Self::MAX))
    }

    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for SpeechRate {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl From<f32> for SpeechRate {
    fn from(rate: f32) -> Self {
        SpeechRate::new(rate)
    }
}

impl From<SpeechRate> for f32 {
    fn from(rate: SpeechRate) -> Self {
        rate.0
    }
}

impl fmt::Display for SpeechRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}x", self.0)
    }
}

// ---------------------------------------------------------------------------
// Quiz configuration
// ---------------------------------------------------------------------------

/// Settings shared by the quiz engine, session and speech playback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Fixed seed for reproducible questions; entropy when `None`.
    pub rng_seed: Option<u64>,
    pub max_choices: usize,
    pub speech_rate: SpeechRate,
}

impl Default for QuizConfig {
    fn default() -> Self {
        QuizConfig {
            rng_seed: None,
            max_choices: DEFAULT_MAX_CHOICES,
            speech_rate: SpeechRate::default(),
        }
    }
}

impl QuizConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_max_choices(mut self, max_choices: usize) -> Self {
        self.max_choices = max_choices.max(1);
        self
    }

    pub fn with_speech_rate(mut self, rate: f32) -> Self {
        self.speech_rate = SpeechRate::new(rate);
        self
    }
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark  => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark  => "dark",
            Theme::Light => "light",
        }
    }

    /// Stored preference, `Light` when absent or unrecognised.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match store.get(THEME_KEY) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|_| {
                warn!("ignoring unknown theme preference '{raw}'");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                warn!("could not read theme preference: {e}");
                Theme::default()
            }
        }
    }

    pub fn save(self, store: &dyn KeyValueStore) -> Result<(), RepositoryError> {
        store.set(THEME_KEY, self.as_str())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark"  => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other   => Err(format!("Unknown theme: {other}")),
        }
    }
}
