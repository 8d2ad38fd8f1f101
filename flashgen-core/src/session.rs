use serde::Serialize;

use crate::{parse_response, Flashcard, GenerateError, Phase};

/// In-memory state of the single screen. Lives as long as the process.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct Session {
    pub topic: String,
    pub phase: Phase,
    pub cards: Vec<Flashcard>,
    pub last_error: Option<String>,
    /// Bumped on every successful generation; lets views notice that `cards` was replaced.
    pub generation: u64,
}

/// Result of asking the session to start a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    Blank,
    Busy,
    Accepted { topic: String },
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idle -> Loading. Blank topics and requests while loading leave everything untouched.
    pub fn begin(&mut self, topic: &str) -> Admission {
        if topic.trim().is_empty() {
            return Admission::Blank;
        }
        if self.phase.is_loading() {
            return Admission::Busy;
        }
        self.topic = topic.to_string();
        self.phase = Phase::Loading;
        Admission::Accepted { topic: self.topic.clone() }
    }

    /// Loading -> Idle with the body of a successful reply. Returns the new cards.
    pub fn succeed(&mut self, raw: &str) -> Vec<Flashcard> {
        self.cards = parse_response(raw);
        self.last_error = None;
        self.generation += 1;
        self.phase = Phase::Idle;
        self.cards.clone()
    }

    /// Loading -> Idle after a failed request. Cards from earlier generations stay.
    pub fn fail(&mut self, err: &GenerateError) -> String {
        let notice = err.to_string();
        self.last_error = Some(notice.clone());
        self.phase = Phase::Idle;
        notice
    }

    /// Loading -> Idle when the caller went away before the request settled.
    pub fn cancel(&mut self) {
        if self.phase.is_loading() {
            self.last_error = Some("request cancelled".to_string());
            self.phase = Phase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_and_empty() {
        let s = Session::new();
        assert_eq!(s.topic, "");
        assert_eq!(s.phase, Phase::Idle);
        assert!(s.cards.is_empty());
        assert!(s.last_error.is_none());
    }

    #[test]
    fn blank_topic_is_not_admitted() {
        let mut s = Session::new();
        assert_eq!(s.begin("   "), Admission::Blank);
        assert_eq!(s, Session::new());
    }

    #[test]
    fn second_begin_while_loading_is_busy() {
        let mut s = Session::new();
        assert!(matches!(s.begin("rust"), Admission::Accepted { .. }));
        assert_eq!(s.begin("go"), Admission::Busy);
        assert_eq!(s.topic, "rust");
    }

    #[test]
    fn success_clears_previous_error() {
        let mut s = Session::new();
        s.begin("rust");
        s.fail(&GenerateError::request_failed("boom"));
        assert!(s.last_error.is_some());

        s.begin("rust");
        assert_eq!(s.succeed("Q: x\nA: y").len(), 1);
        assert!(s.last_error.is_none());
        assert_eq!(s.generation, 1);
        assert_eq!(s.phase, Phase::Idle);
    }

    #[test]
    fn cancel_returns_to_idle_keeping_cards() {
        let mut s = Session::new();
        s.begin("rust");
        s.succeed("Q: a\nA: b");
        s.begin("go");
        s.cancel();
        assert_eq!(s.phase, Phase::Idle);
        assert_eq!(s.cards.len(), 1);
        assert_eq!(s.last_error.as_deref(), Some("request cancelled"));
        assert!(matches!(s.begin("go"), Admission::Accepted { .. }));
    }

    #[test]
    fn cancel_when_idle_is_a_no_op() {
        let mut s = Session::new();
        s.cancel();
        assert_eq!(s, Session::new());
    }
}
