//! The responder — one matching call per message, rendered as reply text.
//!
//! Both surfaces hold a clone of this; the catalog and matcher are
//! shared immutable state, so clones are cheap and concurrent use is
//! safe.

use std::sync::Arc;

use faqclaw_core::config::ReplyConfig;
use faqclaw_engine::{Catalog, Matcher};

#[derive(Clone)]
pub struct Responder {
    catalog: Arc<Catalog>,
    matcher: Arc<Matcher>,
    reply: ReplyConfig,
}

impl Responder {
    pub fn new(catalog: Arc<Catalog>, matcher: Arc<Matcher>, reply: ReplyConfig) -> Self {
        Self {
            catalog,
            matcher,
            reply,
        }
    }

    /// The catalog answer for the closest question, if one is close enough.
    pub fn answer(&self, text: &str) -> Option<&str> {
        let question = self
            .matcher
            .best_match(text.trim(), self.catalog.questions())?;
        self.catalog.answer_for(question)
    }

    /// Answer or fallback — what goes back on the wire. No-match is a
    /// valid outcome, not an error; the end user never sees a failure.
    pub fn respond(&self, text: &str) -> String {
        self.answer(text)
            .map(str::to_string)
            .unwrap_or_else(|| self.reply.fallback.clone())
    }

    /// Case-insensitive substring check against the configured exit
    /// phrases ("exit", "bye", ...).
    pub fn is_exit(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        self.reply
            .exit_phrases
            .iter()
            .any(|phrase| lowered.contains(&phrase.to_lowercase()))
    }

    pub fn reply_config(&self) -> &ReplyConfig {
        &self.reply
    }
}
