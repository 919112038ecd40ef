//! Suggestion prompt assembly.
//!
//! The prompt is fixed: a system instruction that pins the assistant to
//! returning only the suggested text, and a user message embedding the
//! current file content between `---` fences followed by the user's
//! request. No templating engine is needed for a single static shape.

/// System message establishing the assistant's role.
pub const SYSTEM_PROMPT: &str = "You are an expert web editor assistant. \
Your task is to provide helpful and concise suggestions based on the user's \
file content and their request. Only return the suggested code or text, \
without any conversational filler.";

/// The complete prompt ready to send to a completion backend.
#[derive(Debug, Clone)]
pub struct SuggestPrompt {
    /// System message establishing the assistant's role.
    pub system: String,
    /// User message containing the file content and the request.
    pub user: String,
}

impl SuggestPrompt {
    /// Assemble the prompt for a suggestion request.
    #[must_use]
    pub fn new(content: &str, request: &str) -> Self {
        Self {
            system: SYSTEM_PROMPT.to_owned(),
            user: format!("File Content:\n---\n{content}\n---\nUser Request: {request}"),
        }
    }
}
