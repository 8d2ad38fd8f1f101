use parking_lot::RwLock;
use std::sync::Arc;

use crate::{build_prompt, Admission, CompletionClient, Flashcard, Session};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank topic; nothing changed and nothing was sent.
    Ignored,
    /// A request is already in flight; this one was rejected.
    Busy,
    /// The cards this request produced, as stored in the session.
    Generated { cards: Vec<Flashcard> },
    /// The attempt failed; `notice` is the message to show the user.
    Failed { notice: String },
}

/// Returns the session to `Idle` if a submission is dropped mid-request.
struct InFlight<'a> {
    session: &'a RwLock<Session>,
    settled: bool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            self.session.write().cancel();
            tracing::warn!("submission dropped before the request settled");
        }
    }
}

/// Drives one request per submission and owns the session state.
///
/// Clones share the same session, so a view can render snapshots while a
/// clone awaits the network in another task. The session lock is never held
/// across that await.
#[derive(Clone)]
pub struct RequestController {
    client: Arc<dyn CompletionClient>,
    session: Arc<RwLock<Session>>,
}

impl RequestController {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self {
            client,
            session: Arc::new(RwLock::new(Session::new())),
        }
    }

    pub fn snapshot(&self) -> Session {
        self.session.read().clone()
    }

    /// Edits the topic field without submitting. Ignored while a request is in flight.
    pub fn set_topic(&self, topic: impl Into<String>) {
        let mut s = self.session.write();
        if !s.phase.is_loading() {
            s.topic = topic.into();
        }
    }

    pub async fn submit(&self, topic: &str) -> SubmitOutcome {
        let admission = self.session.write().begin(topic);
        let topic = match admission {
            Admission::Blank => {
                tracing::warn!("ignoring submission with blank topic");
                return SubmitOutcome::Ignored;
            }
            Admission::Busy => {
                tracing::warn!(topic, "request already in flight; submission rejected");
                return SubmitOutcome::Busy;
            }
            Admission::Accepted { topic } => topic,
        };
        let mut in_flight = InFlight { session: &self.session, settled: false };

        let prompt = build_prompt(&topic);
        tracing::debug!(topic = %topic, "sending completion request");
        let result = self.client.complete(&prompt).await;

        let outcome = {
            let mut session = self.session.write();
            in_flight.settled = true;
            match result {
                Ok(raw) => SubmitOutcome::Generated { cards: session.succeed(&raw) },
                Err(err) => {
                    tracing::error!(topic = %topic, error = %err, "error generating flashcards");
                    SubmitOutcome::Failed { notice: session.fail(&err) }
                }
            }
        };
        if let SubmitOutcome::Generated { cards } = &outcome {
            tracing::info!(topic = %topic, count = cards.len(), "generated flashcards");
        }
        outcome
    }
}
