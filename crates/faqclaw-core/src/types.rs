//! Message types exchanged between delivery surfaces and the responder.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A message received from a delivery surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomingMessage {
    /// Channel name ("cli", "email").
    pub channel: String,
    /// Sender address or identifier.
    pub sender: String,
    /// Sender display name, when the channel provides one.
    pub sender_name: Option<String>,
    /// Subject line (email only).
    pub subject: Option<String>,
    /// Plain-text body — the question to match.
    pub body: String,
    pub timestamp: DateTime<Utc>,
    /// Message-ID to thread replies on (email only).
    pub reply_to: Option<String>,
}

/// A reply to dispatch back through a delivery surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutgoingMessage {
    /// Recipient address or identifier.
    pub recipient: String,
    /// Subject line (email only).
    pub subject: Option<String>,
    /// Answer text or the fallback message.
    pub body: String,
    /// Message-ID this reply threads on.
    pub reply_to: Option<String>,
}

impl OutgoingMessage {
    /// Build the reply to an incoming message: same sender, subject
    /// prefixed with "Re: ", threaded on the original Message-ID.
    pub fn replying_to(incoming: &IncomingMessage, body: impl Into<String>) -> Self {
        Self {
            recipient: incoming.sender.clone(),
            subject: incoming
                .subject
                .as_deref()
                .map(|s| format!("Re: {s}")),
            body: body.into(),
            reply_to: incoming.reply_to.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_prefixes_subject() {
        let incoming = IncomingMessage {
            channel: "email".into(),
            sender: "alice@example.com".into(),
            sender_name: Some("Alice".into()),
            subject: Some("Internship question".into()),
            body: "How do I apply?".into(),
            timestamp: Utc::now(),
            reply_to: Some("<msg-1@example.com>".into()),
        };
        let reply = OutgoingMessage::replying_to(&incoming, "Via the portal");
        assert_eq!(reply.recipient, "alice@example.com");
        assert_eq!(reply.subject.as_deref(), Some("Re: Internship question"));
        assert_eq!(reply.reply_to.as_deref(), Some("<msg-1@example.com>"));
    }

    #[test]
    fn test_reply_without_subject() {
        let incoming = IncomingMessage {
            channel: "cli".into(),
            sender: "local".into(),
            sender_name: None,
            subject: None,
            body: "hello".into(),
            timestamp: Utc::now(),
            reply_to: None,
        };
        let reply = OutgoingMessage::replying_to(&incoming, "hi");
        assert!(reply.subject.is_none());
        assert!(reply.reply_to.is_none());
    }
}
