//! Field lookups and distractor generation shared by question generation and
//! reshuffling.
//!
//! ## RNG ordering
//!
//! `build_choices()` draws distractors first and shuffles second. Seeded tests
//! depend on that order, so keep it when touching this file.

use std::collections::HashSet;

use rand::Rng;

use crate::models::{QuizMode, VocabEntry};
use crate::quiz_engine::shuffle::{pick, shuffle};

/// Upper bound on choices per question.
pub const DEFAULT_MAX_CHOICES: usize = 4;

/// The field shown to the learner.
pub fn prompt_field(entry: &VocabEntry, mode: QuizMode) -> &str {
    match mode {
        QuizMode::Hanzi   => &entry.english,
        QuizMode::Pinyin  => &entry.hanzi,
        QuizMode::English => &entry.pinyin,
    }
}

/// The field the learner has to pick.
pub fn answer_field(entry: &VocabEntry, mode: QuizMode) -> &str {
    match mode {
        QuizMode::Hanzi   => &entry.hanzi,
        QuizMode::Pinyin  => &entry.pinyin,
        QuizMode::English => &entry.english,
    }
}

/// Entries of `active_set` sharing `category`, in original order.
pub fn same_category<'a>(active_set: &'a [VocabEntry], category: &str) -> Vec<&'a VocabEntry> {
    active_set.iter().filter(|e| e.category == category).collect()
}

/// Build the shuffled choice list for `correct`.
///
/// Distractors are drawn uniformly from the same-category entries until the
/// list holds `min(max_choices, distinct answers available)` values. With
/// fewer than two same-category entries the list is just the correct answer.
pub fn build_choices<R: Rng>(
    rng: &mut R,
    correct: &VocabEntry,
    active_set: &[VocabEntry],
    mode: QuizMode,
    max_choices: usize,
) -> Vec<String> {
    let correct_answer = answer_field(correct, mode);
    let pool = same_category(active_set, &correct.category);

    let mut choices: Vec<String> = vec![correct_answer.to_string()];

    if pool.len() >= 2 {
        let distinct: HashSet<&str> = pool
            .iter()
            .map(|e| answer_field(e, mode))
            .chain(std::iter::once(correct_answer))
            .collect();
        let target = max_choices.max(1).min(distinct.len());

        let mut seen: HashSet<&str> = HashSet::from([correct_answer]);
        while choices.len() < target {
            let Some(drawn) = pick(&pool, rng) else { break };
            let value = answer_field(drawn, mode);
            if seen.insert(value) {
                choices.push(value.to_string());
            }
        }
    }

    shuffle(&mut choices, rng);
    choices
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn entry(h: &str, p: &str, e: &str, c: &str) -> VocabEntry {
        VocabEntry::new(h, p, e, c)
    }

    fn colours() -> Vec<VocabEntry> {
        vec![
            entry("红", "hong2", "red", "Colours"),
            entry("蓝", "lan2", "blue", "Colours"),
            entry("绿", "lv4", "green", "Colours"),
            entry("黄", "huang2", "yellow", "Colours"),
            entry("白", "bai2", "white", "Colours"),
            entry("一", "yi1", "one", "Numbers"),
        ]
    }

    #[test]
    fn field_lookup_follows_mode_table() {
        let e = entry("你好", "ni3 hao3", "hello", "Greetings");
        assert_eq!(prompt_field(&e, QuizMode::Hanzi), "hello");
        assert_eq!(answer_field(&e, QuizMode::Hanzi), "你好");
        assert_eq!(prompt_field(&e, QuizMode::Pinyin), "你好");
        assert_eq!(answer_field(&e, QuizMode::Pinyin), "ni3 hao3");
        assert_eq!(prompt_field(&e, QuizMode::English), "ni3 hao3");
        assert_eq!(answer_field(&e, QuizMode::English), "hello");
    }

    #[test]
    fn distractors_stay_within_category() {
        let set = colours();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let choices = build_choices(&mut rng, &set[0], &set, QuizMode::English, 4);
            assert_eq!(choices.len(), 4);
            assert!(!choices.contains(&"one".to_string()));
            assert_eq!(choices.iter().filter(|c| *c == "red").count(), 1);
        }
    }

    #[test]
    fn singleton_category_gives_one_choice() {
        let set = colours();
        let mut rng = StdRng::seed_from_u64(5);
        let choices = build_choices(&mut rng, &set[5], &set, QuizMode::Hanzi, 4);
        assert_eq!(choices, vec!["一".to_string()]);
    }

    #[test]
    fn duplicate_answers_cap_the_choice_count() {
        // Two entries but only one distinct answer value: must not spin.
        let set = vec![
            entry("好", "hao3", "good", "Adj"),
            entry("好", "hao3", "well", "Adj"),
        ];
        let mut rng = StdRng::seed_from_u64(9);
        let choices = build_choices(&mut rng, &set[0], &set, QuizMode::Pinyin, 4);
        assert_eq!(choices, vec!["hao3".to_string()]);
    }

    #[test]
    fn max_choices_is_respected() {
        let set = colours();
        let mut rng = StdRng::seed_from_u64(2);
        let choices = build_choices(&mut rng, &set[1], &set, QuizMode::Hanzi, 2);
        assert_eq!(choices.len(), 2);
        assert!(choices.contains(&"蓝".to_string()));
    }
}
