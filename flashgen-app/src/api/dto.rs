use flashgen_core::{Flashcard, Phase, Session};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct SessionOut {
    pub topic: String,
    pub phase: Phase,
    pub cards: Vec<Flashcard>,
    pub last_error: Option<String>,
    pub generation: u64,
}

impl From<Session> for SessionOut {
    fn from(s: Session) -> Self {
        Self {
            topic: s.topic,
            phase: s.phase,
            cards: s.cards,
            last_error: s.last_error,
            generation: s.generation,
        }
    }
}

#[derive(Deserialize)]
pub struct GenerateIn {
    pub topic: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorOut {
    pub error: String,
}
