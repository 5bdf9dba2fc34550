use crate::{ChatRequest, SubmissionId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Blocking user notification; no request is issued alongside it.
    Alert { message: String },
    SendChat {
        submission_id: SubmissionId,
        request: ChatRequest,
    },
}
