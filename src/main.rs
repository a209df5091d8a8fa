//! # FaqClaw — catalog-based FAQ auto-responder.
//!
//! Matches free-text questions against a fixed catalog of known
//! question/answer pairs and replies with the stored answer, through
//! a terminal chat loop or an email auto-responder.
//!
//! Usage:
//!   faqclaw chat                          # Interactive terminal chat
//!   faqclaw mail                          # Email auto-responder
//!   faqclaw chat --catalog ./faq.json     # Custom catalog
//!   faqclaw -v mail                       # Verbose logging

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use faqclaw_channels::Responder;
use faqclaw_channels::cli::ChatLoop;
use faqclaw_channels::email::{EmailChannel, EmailConfig};
use faqclaw_core::FaqClawConfig;
use faqclaw_engine::{Catalog, Matcher};

#[derive(Parser)]
#[command(
    name = "faqclaw",
    version,
    about = "🦜 FaqClaw — catalog-based FAQ auto-responder"
)]
struct Cli {
    /// Path to the question/answer catalog (JSON array)
    #[arg(short, long)]
    catalog: Option<String>,

    /// Path to the config file (default: ~/.faqclaw/config.toml)
    #[arg(long)]
    config: Option<String>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive terminal chat loop
    Chat,
    /// Email auto-responder (IMAP polling + SMTP replies)
    Mail,
}

fn expand_path(p: &str) -> String {
    shellexpand::tilde(p).to_string()
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "faqclaw=debug,faqclaw_engine=debug,faqclaw_channels=debug"
    } else {
        "faqclaw=info,faqclaw_engine=info,faqclaw_channels=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    // Load configuration
    let config = match &cli.config {
        Some(path) => FaqClawConfig::load_from(Path::new(&expand_path(path)))?,
        None => FaqClawConfig::load()?,
    };

    // Load the catalog — malformed data is fatal here, before any
    // surface starts.
    let catalog_path = expand_path(cli.catalog.as_deref().unwrap_or(&config.catalog_path));
    let catalog = Catalog::load(Path::new(&catalog_path))?;

    let matcher = Matcher::with_threshold(config.matcher.threshold);
    tracing::info!("🎯 Acceptance threshold: {}", matcher.threshold());
    let responder = Responder::new(
        Arc::new(catalog),
        Arc::new(matcher),
        config.reply.clone(),
    );

    match cli.command.unwrap_or(Command::Chat) {
        Command::Chat => {
            ChatLoop::new(responder).run().await?;
        }
        Command::Mail => {
            let email_cfg = config
                .channel
                .email
                .as_ref()
                .filter(|e| e.enabled)
                .ok_or_else(|| {
                    anyhow::anyhow!(
                        "Email channel not configured — add an enabled [channel.email] \
                         section to {}",
                        FaqClawConfig::default_path().display()
                    )
                })?;

            let channel = EmailChannel::new(EmailConfig::from(email_cfg));
            channel.run_autoresponder(&responder).await?;
        }
    }

    Ok(())
}
