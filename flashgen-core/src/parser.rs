//! Turns free-form model output into flashcards.
//!
//! The reply is scanned line by line. A line beginning with [`QUESTION_PREFIX`]
//! opens a new pair, a line beginning with [`ANSWER_PREFIX`] fills in (or
//! overwrites) the answer of the open pair, and every other line is skipped.
//! A pair is only kept once both sides are non-empty.

use crate::Flashcard;

pub const QUESTION_PREFIX: &str = "Q:";
pub const ANSWER_PREFIX: &str = "A:";

#[derive(Default)]
struct Pending {
    question: String,
    answer: String,
}

impl Pending {
    fn take_card(&mut self) -> Option<Flashcard> {
        let card = Flashcard::new(self.question.as_str(), self.answer.as_str()).ok()?;
        self.question.clear();
        self.answer.clear();
        Some(card)
    }
}

pub fn parse_response(text: &str) -> Vec<Flashcard> {
    let mut cards = Vec::new();
    let mut pending = Pending::default();

    for line in text.trim().lines() {
        if let Some(rest) = line.strip_prefix(QUESTION_PREFIX) {
            cards.extend(pending.take_card());
            pending.question = rest.trim().to_string();
            pending.answer.clear();
        } else if let Some(rest) = line.strip_prefix(ANSWER_PREFIX) {
            pending.answer = rest.trim().to_string();
        }
    }
    cards.extend(pending.take_card());

    tracing::debug!(cards = cards.len(), "parsed model response");
    cards
}
