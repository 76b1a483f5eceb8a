use crate::extraction::ExtractedText;
use crate::llm_client::{ChatCompletionRequest, ChatMessage, Role, MAX_TOKENS, MODEL, TEMPERATURE};

use super::prompts::{critique_prompt, CRITIQUE_SYSTEM, GENERAL_TARGET};

/// A fully built critique request. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct CritiqueRequest {
    job_role: Option<String>,
    prompt: String,
}

impl CritiqueRequest {
    /// A blank or whitespace-only role is treated as absent.
    pub fn new(text: &ExtractedText, job_role: Option<&str>) -> Self {
        let job_role = job_role
            .map(str::trim)
            .filter(|role| !role.is_empty())
            .map(String::from);
        let target = job_role.as_deref().unwrap_or(GENERAL_TARGET);
        let prompt = critique_prompt(target, text.as_str());

        Self { job_role, prompt }
    }

    pub fn job_role(&self) -> Option<&str> {
        self.job_role.as_deref()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn to_chat_request(&self) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: MODEL.to_string(),
            messages: vec![
                ChatMessage {
                    role: Role::System,
                    content: CRITIQUE_SYSTEM.to_string(),
                },
                ChatMessage {
                    role: Role::User,
                    content: self.prompt.clone(),
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }
}
