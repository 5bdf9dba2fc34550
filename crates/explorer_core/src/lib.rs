//! Explorer core: pure submission state machine and view-model helpers.
mod chat;
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use chat::{ChatAnswer, ChatRequest, SubmissionId, DEFAULT_AGENT_URL};
pub use effect::Effect;
pub use msg::Msg;
pub use state::{AppState, Phase, ResultArea};
pub use update::update;
pub use view_model::{AppViewModel, EMPTY_QUESTION_ALERT, PROCESSING_LABEL, SUBMIT_LABEL};
