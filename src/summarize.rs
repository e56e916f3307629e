// src/summarize.rs
//
// Thin wrapper over the external summarization collaborator (an
// OpenAI-compatible chat-completions endpoint). Callers must not invoke
// it without a sample (see core/sample.rs); its failure is reportable,
// never fatal to the search.

use std::error::Error;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::consts::{SUMMARY_BASE_URL, SUMMARY_MODEL, SUMMARY_TIMEOUT_SECS};

/// Instruction framing sent with every summary request.
pub const SUMMARY_INSTRUCTION: &str =
    "Extract key skills, tools, and earning patterns from these job descriptions:";

const SYSTEM_PROMPT: &str = "You're a helpful job search assistant.";

/// Seam for the summarization collaborator, so the pipeline can run
/// against fakes in tests.
pub trait Summarize {
    fn summarize(&self, instruction: &str, content: &str) -> Result<String, Box<dyn Error>>;
}

/* ---------------- Wire types ---------------- */

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

/* ---------------- Client ---------------- */

pub struct ChatSummarizer {
    client: reqwest::blocking::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl ChatSummarizer {
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(SUMMARY_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();
        Self {
            client,
            api_key: api_key.into(),
            base_url: s!(SUMMARY_BASE_URL),
            model: s!(SUMMARY_MODEL),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

impl Summarize for ChatSummarizer {
    fn summarize(&self, instruction: &str, content: &str) -> Result<String, Box<dyn Error>> {
        let url = join!(self.base_url.trim_end_matches('/'), "/chat/completions");
        let user_content = join!(instruction, "\n", content);

        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                Message { role: "system", content: SYSTEM_PROMPT },
                Message { role: "user", content: &user_content },
            ],
        };

        logd!("Summarize: POST {} model={}", url, self.model);

        let resp = self.client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(format!("Summarizer error: HTTP {}", status).into());
        }

        let parsed: ChatResponse = resp.json()?;
        let text = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or("Summarizer returned no choices")?;

        Ok(text)
    }
}
