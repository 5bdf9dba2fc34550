//! JSON shapes exchanged with the backend `/api/chat` route.

use explorer_core::{ChatAnswer, ChatRequest};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequestBody<'a> {
    pub question: &'a str,
    pub agent_url: &'a str,
}

impl<'a> From<&'a ChatRequest> for ChatRequestBody<'a> {
    fn from(request: &'a ChatRequest) -> Self {
        Self {
            question: &request.question,
            agent_url: &request.agent_url,
        }
    }
}

/// Backend answer. Unknown fields (such as `crawled_documents`) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChatResponseBody {
    pub content: String,
    /// `null` and a missing key both mean "no URLs".
    #[serde(default, deserialize_with = "null_as_empty")]
    pub visited_urls: Vec<String>,
    #[serde(default, rename = "type")]
    pub response_type: Option<String>,
    #[serde(default)]
    pub task_type: Option<String>,
}

impl From<ChatResponseBody> for ChatAnswer {
    fn from(body: ChatResponseBody) -> Self {
        ChatAnswer {
            content: body.content,
            visited_urls: body.visited_urls,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
