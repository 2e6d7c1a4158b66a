//! Twenty Questions over the raw-material catalogue.
//!
//! DESIGN
//! ======
//! The game is stateless: the answer sequence travels in the query string
//! (`?a=yny`) and every render replays it from the full catalogue. Question
//! choice is deterministic, so the same sequence always lands on the same
//! step. Only questions that split the remaining candidates are ever asked.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::filters::QueryPairs;
use crate::model::{MaterialCategory, RawMaterial};

pub const ANSWERS_KEY: &str = "a";
pub const MAX_QUESTIONS: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::Yes => 'y',
            Self::No => 'n',
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Question {
    Category(MaterialCategory),
    MajorProducer(String),
}

impl Question {
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Category(category) => {
                format!("Is it in the {} category?", category.label().to_lowercase())
            }
            Self::MajorProducer(country) => format!("Is {country} a major producer?"),
        }
    }

    #[must_use]
    pub fn matches(&self, material: &RawMaterial) -> bool {
        match self {
            Self::Category(category) => material.category == *category,
            Self::MajorProducer(country) => material.has_major_country(country),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Turn {
    pub question: Question,
    pub answer: Answer,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameStep<'a> {
    Ask {
        /// 1-based question number.
        number: usize,
        question: Question,
        remaining: usize,
    },
    Guess { material: &'a RawMaterial },
    Stumped,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameState<'a> {
    /// Questions asked so far, with the answers that were consumed.
    pub history: Vec<Turn>,
    pub step: GameStep<'a>,
}

impl GameState<'_> {
    /// Answers actually consumed, in order.
    #[must_use]
    pub fn answers(&self) -> Vec<Answer> {
        self.history.iter().map(|t| t.answer).collect()
    }

    /// Query pairs for the next state after answering the pending question.
    #[must_use]
    pub fn answer_pairs(&self, answer: Answer) -> QueryPairs {
        let mut answers = self.answers();
        answers.push(answer);
        answer_query_pairs(&answers)
    }

    /// Query pairs that take back the most recent answer.
    #[must_use]
    pub fn undo_pairs(&self) -> QueryPairs {
        let mut answers = self.answers();
        answers.pop();
        answer_query_pairs(&answers)
    }
}

/// Parse `y`/`n` characters, case-insensitively. Other characters are skipped.
#[must_use]
pub fn parse_answers(raw: &str) -> Vec<Answer> {
    raw.chars()
        .filter_map(|c| match c.to_ascii_lowercase() {
            'y' => Some(Answer::Yes),
            'n' => Some(Answer::No),
            _ => None,
        })
        .take(MAX_QUESTIONS)
        .collect()
}

#[must_use]
pub fn encode_answers(answers: &[Answer]) -> String {
    answers.iter().map(|a| a.as_char()).collect()
}

#[must_use]
pub fn answer_query_pairs(answers: &[Answer]) -> QueryPairs {
    if answers.is_empty() {
        return QueryPairs::new();
    }
    vec![(ANSWERS_KEY, encode_answers(answers))]
}

/// Replay `answers` against the catalogue and return the resulting step.
///
/// Answers left over once the game reaches a guess are ignored.
#[must_use]
pub fn play<'a>(materials: &'a [RawMaterial], answers: &[Answer]) -> GameState<'a> {
    let mut remaining = materials.iter().collect::<Vec<_>>();
    let mut history = Vec::<Turn>::new();
    let mut pending = answers.iter().copied();

    let step = loop {
        let first = match remaining.as_slice() {
            [] => break GameStep::Stumped,
            [only] => break GameStep::Guess { material: *only },
            [first, ..] => *first,
        };
        if history.len() >= MAX_QUESTIONS {
            break GameStep::Guess { material: first };
        }
        let Some(question) = best_question(&remaining) else {
            break GameStep::Guess { material: first };
        };
        let Some(answer) = pending.next() else {
            break GameStep::Ask {
                number: history.len() + 1,
                question,
                remaining: remaining.len(),
            };
        };

        let wanted = answer == Answer::Yes;
        remaining.retain(|m| question.matches(m) == wanted);
        history.push(Turn { question, answer });
    };

    GameState { history, step }
}

/// The question whose yes/no split is closest to even; ties go to the label.
fn best_question(remaining: &[&RawMaterial]) -> Option<Question> {
    let countries = remaining
        .iter()
        .flat_map(|m| m.major_countries.iter())
        .collect::<BTreeSet<_>>();

    let candidates = MaterialCategory::ALL
        .into_iter()
        .map(Question::Category)
        .chain(countries.into_iter().map(|c| Question::MajorProducer(c.clone())));

    candidates
        .filter_map(|question| {
            let yes = remaining.iter().filter(|m| question.matches(m)).count();
            let no = remaining.len() - yes;
            (yes > 0 && no > 0).then(|| (yes.abs_diff(no), question.label(), question))
        })
        .min_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)))
        .map(|(_, _, question)| question)
}

#[cfg(test)]
#[path = "game_test.rs"]
mod tests;
