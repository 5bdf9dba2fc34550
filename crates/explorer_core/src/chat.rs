/// Agent description used when the agent URL field is left empty.
pub const DEFAULT_AGENT_URL: &str = "https://agent-search.ai/ad.json";

pub type SubmissionId = u64;

/// Payload of one chat submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub question: String,
    pub agent_url: String,
}

impl ChatRequest {
    /// Builds a request from raw field values, substituting the default
    /// agent URL when the field is empty.
    pub fn from_fields(question: &str, agent_url: &str) -> Self {
        let agent_url = if agent_url.is_empty() {
            DEFAULT_AGENT_URL
        } else {
            agent_url
        };
        Self {
            question: question.to_owned(),
            agent_url: agent_url.to_owned(),
        }
    }
}

/// Validated backend answer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatAnswer {
    /// HTML fragment rendered into the result area.
    pub content: String,
    pub visited_urls: Vec<String>,
}
