//! The `Channel` trait — the seam every delivery surface implements.

use async_trait::async_trait;
use futures::stream::Stream;

use crate::error::Result;
use crate::types::{IncomingMessage, OutgoingMessage};

/// A delivery surface the responder can receive questions from and
/// send answers through.
#[async_trait]
pub trait Channel: Send + Sync {
    /// Channel name ("cli", "email").
    fn name(&self) -> &str;

    /// Verify connectivity and credentials.
    async fn connect(&mut self) -> Result<()>;

    async fn disconnect(&mut self) -> Result<()>;

    fn is_connected(&self) -> bool;

    /// Dispatch one reply.
    async fn send(&self, message: OutgoingMessage) -> Result<()>;

    /// Stream of incoming messages.
    async fn listen(&self) -> Result<Box<dyn Stream<Item = IncomingMessage> + Send + Unpin>>;
}
