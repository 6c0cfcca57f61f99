use serde_json::{json, Value};

use crate::models::{AnswerCheck, Question};
use crate::settings::Theme;

/// Feedback line shown under the choices.
pub fn feedback_message(check: &AnswerCheck) -> String {
    if check.correct {
        "Correct!".to_string()
    } else {
        format!("Wrong. Correct answer: {}", check.correct_answer)
    }
}

/// Build the choice buttons; `selected` disables all of them.
fn choice_buttons(question: &Question, selected: Option<&str>) -> Value {
    let buttons: Vec<Value> = question
        .choices
        .iter()
        .enumerate()
        .map(|(idx, choice)| {
            let is_selected = selected == Some(choice.as_str());
            json!({
                "index":    idx,
                "text":     choice,
                "selected": is_selected,
                "disabled": selected.is_some(),
            })
        })
        .collect();
    Value::Array(buttons)
}

/// Map a `Question` to the JSON a UI renders.
///
/// The correct answer is not included; use [`feedback_payload`] after
/// the learner has picked.
pub fn question_payload(question: &Question, selected: Option<&str>) -> Value {
    json!({
        "id":        question.id,
        "mode":      question.mode.to_string(),
        "direction": question.mode.direction(),
        "prompt":    question.prompt,
        "choices":   choice_buttons(question, selected),
    })
}

pub fn feedback_payload(check: &AnswerCheck) -> Value {
    json!({
        "correct":        check.correct,
        "correct_answer": check.correct_answer,
        "message":        feedback_message(check),
    })
}

/// Root element class list for the active theme.
pub fn theme_payload(theme: Theme) -> Value {
    let root_class = match theme {
        Theme::Dark  => "dark",
        Theme::Light => "",
    };
    json!({
        "theme":      theme.as_str(),
        "root_class": root_class,
    })
}
