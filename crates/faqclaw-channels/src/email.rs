//! Email Channel — async IMAP polling + SMTP replies.
//!
//! Polls a mailbox on a fixed interval, extracts each unread message's
//! plain-text body, runs it through the matching engine, and replies
//! to the sender with subject "Re: <original>". Transport errors are
//! logged and the loop continues with the next cycle.

use async_trait::async_trait;
use futures::stream::Stream;
use serde::{Deserialize, Serialize};
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};

use faqclaw_core::config::EmailChannelConfig;
use faqclaw_core::error::{FaqClawError, Result};
use faqclaw_core::traits::Channel;
use faqclaw_core::types::{IncomingMessage, OutgoingMessage};

use crate::responder::Responder;

/// Email channel configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    pub imap_host: String,
    #[serde(default = "default_imap_port")]
    pub imap_port: u16,
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default = "default_mailbox")]
    pub mailbox: String,
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
    #[serde(default = "default_true")]
    pub unread_only: bool,
    #[serde(default = "default_true")]
    pub mark_as_read: bool,
}

fn default_imap_port() -> u16 {
    993
}
fn default_smtp_port() -> u16 {
    587
}
fn default_mailbox() -> String {
    "INBOX".into()
}
fn default_poll_interval() -> u64 {
    20
}
fn default_true() -> bool {
    true
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            imap_host: "imap.gmail.com".into(),
            imap_port: 993,
            smtp_host: "smtp.gmail.com".into(),
            smtp_port: 587,
            email: String::new(),
            password: String::new(),
            display_name: None,
            mailbox: "INBOX".into(),
            poll_interval_secs: 20,
            unread_only: true,
            mark_as_read: true,
        }
    }
}

impl From<&EmailChannelConfig> for EmailConfig {
    fn from(cfg: &EmailChannelConfig) -> Self {
        Self {
            imap_host: cfg.imap_host.clone(),
            imap_port: cfg.imap_port,
            smtp_host: cfg.smtp_host.clone(),
            smtp_port: cfg.smtp_port,
            email: cfg.email.clone(),
            password: cfg.password.clone(),
            display_name: cfg.display_name.clone(),
            mailbox: cfg.mailbox.clone(),
            poll_interval_secs: cfg.poll_interval_secs,
            ..Self::default()
        }
    }
}

/// Parsed email data.
#[derive(Debug, Clone)]
pub struct ParsedEmail {
    pub uid: u32,
    pub from: String,
    pub from_name: Option<String>,
    pub subject: String,
    pub body_text: String,
    pub message_id: Option<String>,
}

/// Type alias for the TLS IMAP stream used throughout this module.
type ImapTlsStream = async_imap::Client<tokio_native_tls::TlsStream<tokio::net::TcpStream>>;

/// Create TLS-wrapped IMAP connection (async, tokio-native).
async fn connect_imap_tls(host: &str, port: u16) -> Result<ImapTlsStream> {
    let tcp = tokio::net::TcpStream::connect((host, port))
        .await
        .map_err(|e| FaqClawError::Channel(format!("TCP connect: {e}")))?;

    let connector = native_tls::TlsConnector::new()
        .map_err(|e| FaqClawError::Channel(format!("TLS connector: {e}")))?;
    let connector = tokio_native_tls::TlsConnector::from(connector);

    let tls_stream = connector
        .connect(host, tcp)
        .await
        .map_err(|e| FaqClawError::Channel(format!("TLS handshake: {e}")))?;

    Ok(async_imap::Client::new(tls_stream))
}

/// Email channel — async IMAP reading + SMTP sending.
pub struct EmailChannel {
    config: EmailConfig,
    connected: bool,
    last_seen_uid: Arc<Mutex<u32>>,
}

impl EmailChannel {
    pub fn new(config: EmailConfig) -> Self {
        Self {
            config,
            connected: false,
            last_seen_uid: Arc::new(Mutex::new(0)),
        }
    }

    /// Fetch unread emails (async IMAP).
    pub async fn fetch_unread(&self) -> Result<Vec<ParsedEmail>> {
        imap_fetch_async(
            &self.config.imap_host,
            self.config.imap_port,
            &self.config.email,
            &self.config.password,
            &self.config.mailbox,
            self.config.unread_only,
            self.config.mark_as_read,
            &self.last_seen_uid,
        )
        .await
    }

    /// Send email via SMTP (async).
    pub async fn send_email(
        &self,
        to: &str,
        subject: &str,
        body: &str,
        in_reply_to: Option<&str>,
    ) -> Result<()> {
        use lettre::{
            AsyncSmtpTransport, AsyncTransport, Message as LettreMessage, message::Mailbox,
            message::header::ContentType, transport::smtp::authentication::Credentials,
        };

        let from_name = self.config.display_name.as_deref().unwrap_or("FaqClaw");
        let from_mailbox: Mailbox = format!("{from_name} <{}>", self.config.email)
            .parse()
            .map_err(|e| FaqClawError::Channel(format!("Invalid from: {e}")))?;

        let to_mailbox: Mailbox = to
            .parse()
            .map_err(|e| FaqClawError::Channel(format!("Invalid to: {e}")))?;

        let mut builder = LettreMessage::builder()
            .from(from_mailbox)
            .to(to_mailbox)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN);

        if let Some(reply_id) = in_reply_to {
            builder = builder.in_reply_to(reply_id.to_string());
        }

        let email = builder
            .body(body.to_string())
            .map_err(|e| FaqClawError::Channel(format!("Build email: {e}")))?;

        let creds = Credentials::new(self.config.email.clone(), self.config.password.clone());

        let mailer =
            AsyncSmtpTransport::<lettre::Tokio1Executor>::starttls_relay(&self.config.smtp_host)
                .map_err(|e| FaqClawError::Channel(format!("SMTP relay: {e}")))?
                .port(self.config.smtp_port)
                .credentials(creds)
                .build();

        mailer
            .send(email)
            .await
            .map_err(|e| FaqClawError::Channel(format!("SMTP send: {e}")))?;

        tracing::info!("📤 Reply sent to: {to}");
        Ok(())
    }

    /// Start IMAP polling — returns a stream of IncomingMessages.
    pub fn start_polling(self) -> EmailPollingStream {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        let config = self.config.clone();
        let last_seen = self.last_seen_uid.clone();

        tokio::spawn(async move {
            let ch = EmailChannel {
                config,
                connected: true,
                last_seen_uid: last_seen,
            };
            loop {
                match ch.fetch_unread().await {
                    Ok(emails) => {
                        for em in emails {
                            if tx.send(incoming_from(&em)).is_err() {
                                return;
                            }
                        }
                    }
                    Err(e) => tracing::error!("IMAP poll: {e}"),
                }
                tokio::time::sleep(std::time::Duration::from_secs(ch.config.poll_interval_secs))
                    .await;
            }
        });

        EmailPollingStream { rx }
    }

    /// Run the auto-responder loop forever: poll, answer every unread
    /// message, sleep, repeat. Matching is sequential within a batch;
    /// transport errors never end the loop.
    pub async fn run_autoresponder(&self, responder: &Responder) -> Result<()> {
        tracing::info!(
            "📧 Auto-responder polling {} every {}s",
            self.config.mailbox,
            self.config.poll_interval_secs
        );

        loop {
            match self.fetch_unread().await {
                Ok(emails) => {
                    for em in emails {
                        if em.from.is_empty() {
                            tracing::warn!("Skipping message {} with no sender", em.uid);
                            continue;
                        }
                        let reply = OutgoingMessage::replying_to(
                            &incoming_from(&em),
                            responder.respond(&em.body_text),
                        );
                        if let Err(e) = self.send(reply).await {
                            tracing::error!("Reply to {}: {e}", em.from);
                        }
                    }
                }
                Err(e) => tracing::error!("IMAP poll: {e}"),
            }
            tokio::time::sleep(std::time::Duration::from_secs(self.config.poll_interval_secs))
                .await;
        }
    }
}

fn incoming_from(em: &ParsedEmail) -> IncomingMessage {
    IncomingMessage {
        channel: "email".into(),
        sender: em.from.clone(),
        sender_name: em.from_name.clone(),
        subject: Some(em.subject.clone()),
        body: em.body_text.clone(),
        timestamp: chrono::Utc::now(),
        reply_to: em.message_id.clone(),
    }
}

/// Stream of incoming email messages.
pub struct EmailPollingStream {
    rx: tokio::sync::mpsc::UnboundedReceiver<IncomingMessage>,
}

impl Stream for EmailPollingStream {
    type Item = IncomingMessage;
    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}
impl Unpin for EmailPollingStream {}

#[async_trait]
impl Channel for EmailChannel {
    fn name(&self) -> &str {
        "email"
    }

    async fn connect(&mut self) -> Result<()> {
        let client = connect_imap_tls(&self.config.imap_host, self.config.imap_port).await?;
        let mut session = client
            .login(&self.config.email, &self.config.password)
            .await
            .map_err(|e| FaqClawError::AuthFailed(format!("IMAP auth: {}", e.0)))?;
        session.logout().await.ok();

        self.connected = true;
        tracing::info!("📧 Email connected: {}", self.config.email);
        Ok(())
    }

    async fn disconnect(&mut self) -> Result<()> {
        self.connected = false;
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    async fn send(&self, message: OutgoingMessage) -> Result<()> {
        let subject = message.subject.as_deref().unwrap_or("Re: your question");
        self.send_email(
            &message.recipient,
            subject,
            &message.body,
            message.reply_to.as_deref(),
        )
        .await
    }

    async fn listen(&self) -> Result<Box<dyn Stream<Item = IncomingMessage> + Send + Unpin>> {
        Ok(Box::new(futures::stream::pending()))
    }
}

/// Async IMAP fetch — fully async, no spawn_blocking needed.
#[allow(clippy::too_many_arguments)]
async fn imap_fetch_async(
    host: &str,
    port: u16,
    email: &str,
    password: &str,
    mailbox: &str,
    unread_only: bool,
    mark_as_read: bool,
    last_seen_uid: &Arc<Mutex<u32>>,
) -> Result<Vec<ParsedEmail>> {
    use futures::StreamExt;

    let client = connect_imap_tls(host, port).await?;
    let mut session = client
        .login(email, password)
        .await
        .map_err(|e| FaqClawError::Channel(format!("IMAP login: {}", e.0)))?;

    session
        .select(mailbox)
        .await
        .map_err(|e| FaqClawError::Channel(format!("Select: {e}")))?;

    let search = if unread_only { "UNSEEN" } else { "ALL" };
    let uids = session
        .uid_search(search)
        .await
        .map_err(|e| FaqClawError::Channel(format!("Search: {e}")))?;

    let last = *last_seen_uid.lock().unwrap();
    let new_uids: Vec<u32> = uids.into_iter().filter(|&u| u > last).collect();

    if new_uids.is_empty() {
        session.logout().await.ok();
        return Ok(vec![]);
    }

    let uid_set = new_uids
        .iter()
        .map(|u| u.to_string())
        .collect::<Vec<_>>()
        .join(",");
    let mut messages = session
        .uid_fetch(&uid_set, "(UID RFC822)")
        .await
        .map_err(|e| FaqClawError::Channel(format!("Fetch: {e}")))?;

    let mut emails = Vec::new();
    let mut max_uid = last;

    while let Some(msg_result) = messages.next().await {
        let msg = msg_result.map_err(|e| FaqClawError::Channel(format!("Fetch msg: {e}")))?;
        let uid = msg.uid.unwrap_or(0);
        if uid > max_uid {
            max_uid = uid;
        }
        if let Some(body) = msg.body()
            && let Some(parsed) = parse_email_bytes(body, uid)
        {
            emails.push(parsed);
        }
    }

    // Drop the messages stream before using session again
    drop(messages);

    if mark_as_read && !new_uids.is_empty() {
        session.uid_store(&uid_set, "+FLAGS (\\Seen)").await.ok();
    }

    *last_seen_uid.lock().unwrap() = max_uid;
    session.logout().await.ok();
    tracing::info!("📧 Fetched {} email(s)", emails.len());
    Ok(emails)
}

/// Parse raw email bytes. The first text/plain part wins; HTML-only
/// messages fall back to stripped HTML.
fn parse_email_bytes(raw: &[u8], uid: u32) -> Option<ParsedEmail> {
    use mail_parser::MessageParser;
    let parsed = MessageParser::default().parse(raw)?;

    let from = parsed
        .from()
        .and_then(|a| a.first())
        .map(|a| a.address().unwrap_or_default().to_string())
        .unwrap_or_default();

    let from_name = parsed
        .from()
        .and_then(|a| a.first())
        .and_then(|a| a.name())
        .map(String::from);

    let subject = parsed.subject().unwrap_or("(no subject)").to_string();

    let body_text = parsed
        .body_text(0)
        .map(|s| s.to_string())
        .unwrap_or_else(|| {
            parsed
                .body_html(0)
                .map(|h| strip_html(&h))
                .unwrap_or_default()
        });

    let message_id = parsed.message_id().map(String::from);

    Some(ParsedEmail {
        uid,
        from,
        from_name,
        subject,
        body_text: body_text.chars().take(4000).collect(),
        message_id,
    })
}

fn strip_html(html: &str) -> String {
    let mut out = String::new();
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EmailConfig::default();
        assert_eq!(config.imap_port, 993);
        assert_eq!(config.smtp_port, 587);
        assert_eq!(config.mailbox, "INBOX");
        assert_eq!(config.poll_interval_secs, 20);
        assert!(config.unread_only);
        assert!(config.mark_as_read);
    }

    #[test]
    fn test_config_from_core() {
        let core = EmailChannelConfig {
            enabled: true,
            email: "bot@example.com".into(),
            password: "secret".into(),
            poll_interval_secs: 60,
            ..EmailChannelConfig::default()
        };
        let config = EmailConfig::from(&core);
        assert_eq!(config.email, "bot@example.com");
        assert_eq!(config.poll_interval_secs, 60);
        assert!(config.unread_only);
    }

    #[test]
    fn test_parse_plain_text_email() {
        let raw = b"From: Alice <alice@example.com>\r\n\
            To: bot@example.com\r\n\
            Subject: Internship question\r\n\
            Message-ID: <msg-1@example.com>\r\n\
            Content-Type: text/plain\r\n\
            \r\n\
            How do I apply?\r\n";
        let parsed = parse_email_bytes(raw, 7).unwrap();
        assert_eq!(parsed.uid, 7);
        assert_eq!(parsed.from, "alice@example.com");
        assert_eq!(parsed.from_name.as_deref(), Some("Alice"));
        assert_eq!(parsed.subject, "Internship question");
        assert_eq!(parsed.body_text.trim(), "How do I apply?");
        assert_eq!(parsed.message_id.as_deref(), Some("msg-1@example.com"));
    }

    #[test]
    fn test_parse_multipart_prefers_text_plain() {
        let raw = b"From: bob@example.com\r\n\
            Subject: Hi\r\n\
            Content-Type: multipart/alternative; boundary=\"b1\"\r\n\
            \r\n\
            --b1\r\n\
            Content-Type: text/plain\r\n\
            \r\n\
            plain body\r\n\
            --b1\r\n\
            Content-Type: text/html\r\n\
            \r\n\
            <p>html body</p>\r\n\
            --b1--\r\n";
        let parsed = parse_email_bytes(raw, 1).unwrap();
        assert_eq!(parsed.body_text.trim(), "plain body");
    }

    #[test]
    fn test_parse_missing_subject() {
        let raw = b"From: carol@example.com\r\n\
            Content-Type: text/plain\r\n\
            \r\n\
            hello\r\n";
        let parsed = parse_email_bytes(raw, 2).unwrap();
        assert_eq!(parsed.subject, "(no subject)");
    }

    #[test]
    fn test_strip_html() {
        assert_eq!(strip_html("<p>Hello <b>world</b></p>"), "Hello world");
    }
}
