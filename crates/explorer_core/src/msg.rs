#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the question input.
    QuestionChanged(String),
    /// User edited the agent URL input.
    AgentUrlChanged(String),
    /// User clicked the submit control.
    SubmitClicked,
    /// The chat call for a submission settled.
    ChatCompleted {
        submission_id: crate::SubmissionId,
        /// Error side carries the human-readable failure message.
        outcome: Result<crate::ChatAnswer, String>,
    },
}
