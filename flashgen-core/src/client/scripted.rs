use crate::GenerateError;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use tokio::sync::{Notify, Semaphore};

/// In-memory client that replays canned replies in order.
///
/// Every prompt is recorded. A gated client parks each call until
/// [`ScriptedClient::release`] is called, which keeps the caller in the
/// loading phase for as long as a test needs.
#[derive(Default)]
pub struct ScriptedClient {
    replies: Mutex<VecDeque<Result<String, GenerateError>>>,
    prompts: Mutex<Vec<String>>,
    gate: Option<Semaphore>,
    entered: Notify,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gated() -> Self {
        Self {
            gate: Some(Semaphore::new(0)),
            ..Self::default()
        }
    }

    pub fn push_reply(&self, text: impl Into<String>) -> &Self {
        self.replies.lock().push_back(Ok(text.into()));
        self
    }

    pub fn push_failure(&self, msg: impl Into<String>) -> &Self {
        self.replies
            .lock()
            .push_back(Err(GenerateError::request_failed(msg)));
        self
    }

    /// Lets `n` parked calls proceed.
    pub fn release(&self, n: usize) {
        if let Some(gate) = &self.gate {
            gate.add_permits(n);
        }
    }

    /// Resolves once a call has reached the client.
    pub async fn wait_for_call(&self) {
        self.entered.notified().await;
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().len()
    }
}

#[async_trait]
impl super::CompletionClient for ScriptedClient {
    async fn complete(&self, prompt: &str) -> Result<String, GenerateError> {
        self.prompts.lock().push(prompt.to_string());
        self.entered.notify_one();

        if let Some(gate) = &self.gate {
            let permit = gate
                .acquire()
                .await
                .map_err(|_| GenerateError::request_failed("scripted client closed"))?;
            permit.forget();
        }

        self.replies
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(GenerateError::request_failed("no scripted reply left")))
    }
}
