//! CLI Channel — the interactive terminal chat loop.
//!
//! One matching call per line of input, sequentially. Exit phrases
//! close the session, but only after a final match attempt — a line
//! like "what is the stipend, bye" still gets its answer before the
//! goodbye.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};

use faqclaw_core::error::{FaqClawError, Result};

use crate::responder::Responder;

pub struct ChatLoop {
    responder: Responder,
}

impl ChatLoop {
    pub fn new(responder: Responder) -> Self {
        Self { responder }
    }

    /// Run the chat loop until an exit phrase or EOF.
    pub async fn run(&self) -> Result<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let mut lines = stdin.lines();

        println!("{}", self.responder.reply_config().greeting);

        loop {
            print!("You: ");
            std::io::stdout()
                .flush()
                .map_err(|e| FaqClawError::Channel(format!("stdout: {e}")))?;

            let line = lines
                .next_line()
                .await
                .map_err(|e| FaqClawError::Channel(format!("stdin: {e}")))?;
            let Some(input) = line else {
                // EOF — treat like an exit without a closing line.
                break;
            };

            if self.responder.is_exit(&input) {
                match self.responder.answer(&input) {
                    Some(answer) => println!("Chatbot: {answer}"),
                    None => println!("Chatbot: {}", self.responder.reply_config().goodbye),
                }
                break;
            }

            println!("Chatbot: {}", self.responder.respond(&input));
        }

        tracing::info!("💬 Chat session ended");
        Ok(())
    }
}
