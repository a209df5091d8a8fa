//! FaqClaw configuration system.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqClawConfig {
    /// Path to the question/answer catalog (JSON array of records).
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,
    #[serde(default)]
    pub matcher: MatcherConfig,
    #[serde(default)]
    pub reply: ReplyConfig,
    #[serde(default)]
    pub channel: ChannelConfig,
}

fn default_catalog_path() -> String {
    "~/.faqclaw/catalog.json".into()
}

impl Default for FaqClawConfig {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            matcher: MatcherConfig::default(),
            reply: ReplyConfig::default(),
            channel: ChannelConfig::default(),
        }
    }
}

impl FaqClawConfig {
    /// Load config from the default path (~/.faqclaw/config.toml).
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::error::FaqClawError::Config(format!("Failed to read config: {e}")))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| crate::error::FaqClawError::Config(format!("Failed to parse config: {e}")))?;
        Ok(config)
    }

    /// Save config to the default path.
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::FaqClawError::Config(format!("Failed to serialize config: {e}")))?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Get the default config path.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".faqclaw")
            .join("config.toml")
    }

    /// Get the FaqClaw home directory.
    pub fn home_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".faqclaw")
    }
}

/// Matching engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Acceptance threshold — the winning cosine score must be
    /// strictly greater than this for a match.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_threshold() -> f64 {
    0.2
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
        }
    }
}

/// Canned reply texts shared by all surfaces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyConfig {
    #[serde(default = "default_greeting")]
    pub greeting: String,
    /// Sent whenever no catalog question is close enough.
    #[serde(default = "default_fallback")]
    pub fallback: String,
    #[serde(default = "default_goodbye")]
    pub goodbye: String,
    /// Case-insensitive substrings that end an interactive session.
    #[serde(default = "default_exit_phrases")]
    pub exit_phrases: Vec<String>,
}

fn default_greeting() -> String {
    "Welcome to the FaqClaw chatbot! Type 'exit' to stop the chat.".into()
}

fn default_fallback() -> String {
    "I'm sorry, I don't understand that question. Can you please rephrase \
     or ask something related to the internship program?"
        .into()
}

fn default_goodbye() -> String {
    "Goodbye! Feel free to come back if you have more questions.".into()
}

fn default_exit_phrases() -> Vec<String> {
    vec!["exit", "bye", "goodbye", "see you", "farewell"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for ReplyConfig {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
            fallback: default_fallback(),
            goodbye: default_goodbye(),
            exit_phrases: default_exit_phrases(),
        }
    }
}

/// Channel configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChannelConfig {
    #[serde(default)]
    pub email: Option<EmailChannelConfig>,
}

/// Email channel configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailChannelConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_imap_host")]
    pub imap_host: String,
    #[serde(default = "default_imap_port")]
    pub imap_port: u16,
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default = "default_mailbox")]
    pub mailbox: String,
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
}

fn default_imap_host() -> String {
    "imap.gmail.com".into()
}
fn default_imap_port() -> u16 {
    993
}
fn default_smtp_host() -> String {
    "smtp.gmail.com".into()
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

impl Default for EmailChannelConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            imap_host: default_imap_host(),
            imap_port: default_imap_port(),
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            email: String::new(),
            password: String::new(),
            display_name: None,
            mailbox: default_mailbox(),
            poll_interval_secs: default_poll_interval(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FaqClawConfig::default();
        assert!((config.matcher.threshold - 0.2).abs() < f64::EPSILON);
        assert_eq!(config.reply.exit_phrases.len(), 5);
        assert!(config.channel.email.is_none());
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r#"
            catalog_path = "./faq.json"

            [matcher]
            threshold = 0.35

            [reply]
            fallback = "No idea, sorry."

            [channel.email]
            enabled = true
            email = "bot@example.com"
            password = "app-password"
        "#;

        let config: FaqClawConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.catalog_path, "./faq.json");
        assert!((config.matcher.threshold - 0.35).abs() < f64::EPSILON);
        assert_eq!(config.reply.fallback, "No idea, sorry.");
        let email = config.channel.email.unwrap();
        assert!(email.enabled);
        assert_eq!(email.imap_host, "imap.gmail.com");
        assert_eq!(email.poll_interval_secs, 20);
    }

    #[test]
    fn test_config_missing_fields_use_defaults() {
        let toml_str = "";
        let config: FaqClawConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.catalog_path, "~/.faqclaw/catalog.json");
        assert!((config.matcher.threshold - 0.2).abs() < f64::EPSILON);
        assert!(config.reply.greeting.contains("FaqClaw"));
    }

    #[test]
    fn test_home_dir() {
        let home = FaqClawConfig::home_dir();
        assert!(home.to_string_lossy().contains("faqclaw"));
    }
}
