//! Text-to-speech collaborator.
//!
//! Playback itself belongs to the host (browser speech synthesis, a native
//! TTS engine, ...). The crate only describes what to say and enforces the
//! cancel-then-speak order.

use serde::{Deserialize, Serialize};

use crate::settings::SpeechRate;

/// Mandarin Chinese, mainland voice.
pub const CHINESE_LANG: &str = "zh-CN";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Utterance {
    pub text: String,
    pub lang: String,
    pub rate: SpeechRate,
}

impl Utterance {
    pub fn chinese(text: impl Into<String>, rate: SpeechRate) -> Self {
        Utterance {
            text: text.into(),
            lang: CHINESE_LANG.to_string(),
            rate,
        }
    }
}

/// Fire-and-forget speech output.
pub trait Speaker {
    /// Stop whatever is currently being spoken.
    fn cancel(&mut self);
    fn speak(&mut self, utterance: &Utterance);
}

/// Speak `text` in Chinese, interrupting any utterance in flight.
///
/// Empty text is ignored.
pub fn play_chinese(speaker: &mut dyn Speaker, text: &str, rate: SpeechRate) {
    if text.is_empty() {
        return;
    }
    let utterance = Utterance::chinese(text, rate);
    speaker.cancel();
    speaker.speak(&utterance);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl Speaker for Recorder {
        fn cancel(&mut self) {
            self.calls.push("cancel".to_string());
        }

        fn speak(&mut self, u: &Utterance) {
            self.calls.push(format!("speak {} {} {}", u.text, u.lang, u.rate.value()));
        }
    }

    #[test]
    fn cancels_before_speaking() {
        let mut rec = Recorder::default();
        play_chinese(&mut rec, "你好", SpeechRate::new(0.5));
        play_chinese(&mut rec, "谢谢", SpeechRate::new(4.0));
        assert_eq!(
            rec.calls,
            vec!["cancel", "speak 你好 zh-CN 0.5", "cancel", "speak 谢谢 zh-CN 2"]
        );
    }

    #[test]
    fn empty_text_is_ignored() {
        let mut rec = Recorder::default();
        play_chinese(&mut rec, "", SpeechRate::NORMAL);
        assert!(rec.calls.is_empty());
    }
}
