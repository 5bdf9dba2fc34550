//! Explorer engine: chat transport and effect execution.
mod client;
mod endpoint;
mod engine;
mod types;
mod wire;

pub use client::{ChatClient, ChatSettings, ReqwestChatClient};
pub use endpoint::{chat_endpoint, CHAT_ROUTE};
pub use engine::{EngineEvents, EngineHandle};
pub use types::{ChatError, EngineEvent, FailureKind};
pub use wire::{ChatRequestBody, ChatResponseBody};
