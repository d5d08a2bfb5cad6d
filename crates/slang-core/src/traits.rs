use crate::{
    error::SlangError,
    message::{IncomingMessage, OutgoingMessage},
};
use async_trait::async_trait;

/// Messaging Channel trait.
///
/// Every messaging platform implements this trait to receive and send
/// messages. The gateway only ever talks to channels through it.
#[async_trait]
pub trait Channel: Send + Sync {
    /// Human-readable channel name.
    fn name(&self) -> &str;

    /// Start listening for incoming messages.
    /// Returns a receiver that yields incoming messages.
    async fn start(&self) -> Result<tokio::sync::mpsc::Receiver<IncomingMessage>, SlangError>;

    /// Send a response back through this channel.
    async fn send(&self, message: OutgoingMessage) -> Result<(), SlangError>;

    /// Acknowledge an inline-button press so the client stops its spinner.
    async fn answer_callback(&self, _callback_id: &str) -> Result<(), SlangError> {
        Ok(())
    }

    /// Graceful shutdown.
    async fn stop(&self) -> Result<(), SlangError>;
}
