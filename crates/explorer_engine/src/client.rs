use std::time::Duration;

use explorer_core::{ChatAnswer, ChatRequest};
use explorer_logging::{explorer_debug, explorer_error, explorer_info};
use reqwest::header::CONTENT_TYPE;

use crate::endpoint::chat_endpoint;
use crate::{ChatError, ChatRequestBody, ChatResponseBody, FailureKind};

#[derive(Debug, Clone)]
pub struct ChatSettings {
    /// Origin plus base path the API is mounted under, e.g. `http://host/anp`.
    pub base_url: String,
    pub connect_timeout: Duration,
    /// `None` waits for the backend indefinitely.
    pub request_timeout: Option<Duration>,
}

impl ChatSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
        }
    }
}

#[async_trait::async_trait]
pub trait ChatClient: Send + Sync {
    /// Issues one chat request and waits for it to settle.
    async fn submit(&self, request: &ChatRequest) -> Result<ChatAnswer, ChatError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestChatClient {
    settings: ChatSettings,
    client: reqwest::Client,
}

impl ReqwestChatClient {
    pub fn new(settings: ChatSettings) -> Result<Self, ChatError> {
        let mut builder = reqwest::Client::builder().connect_timeout(settings.connect_timeout);
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ChatError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }
}

#[async_trait::async_trait]
impl ChatClient for ReqwestChatClient {
    async fn submit(&self, request: &ChatRequest) -> Result<ChatAnswer, ChatError> {
        let result = post_chat(&self.client, &self.settings.base_url, request).await;
        if let Err(err) = &result {
            explorer_error!("Chat request failed ({}): {}", err.kind, err.message);
        }
        result
    }
}

async fn post_chat(
    client: &reqwest::Client,
    base_url: &str,
    request: &ChatRequest,
) -> Result<ChatAnswer, ChatError> {
    let endpoint = chat_endpoint(base_url)?;
    explorer_info!(
        "POST {} question_len={} agent_url={}",
        endpoint,
        request.question.len(),
        request.agent_url
    );

    let response = client
        .post(endpoint)
        .header(CONTENT_TYPE, "application/json")
        .json(&ChatRequestBody::from(request))
        .send()
        .await
        .map_err(map_reqwest_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(ChatError::http_status(status.as_u16()));
    }

    let bytes = response.bytes().await.map_err(map_reqwest_error)?;
    let body: ChatResponseBody = serde_json::from_slice(&bytes)
        .map_err(|err| ChatError::new(FailureKind::Decode, err.to_string()))?;
    explorer_debug!(
        "Chat answer type={:?} task_type={:?} content_len={} visited_urls={}",
        body.response_type,
        body.task_type,
        body.content.len(),
        body.visited_urls.len()
    );

    Ok(body.into())
}

fn map_reqwest_error(err: reqwest::Error) -> ChatError {
    if err.is_timeout() {
        return ChatError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return ChatError::new(FailureKind::Decode, err.to_string());
    }
    ChatError::new(FailureKind::Network, err.to_string())
}
