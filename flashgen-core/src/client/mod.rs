use crate::GenerateError;
use async_trait::async_trait;

pub mod scripted;

pub use scripted::ScriptedClient;

/// The remote collaborator: one prompt in, the generated text out.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, GenerateError>;
}
