use crate::view_model::{AppViewModel, PROCESSING_LABEL, SUBMIT_LABEL};
use crate::{ChatAnswer, SubmissionId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Busy {
        submission_id: SubmissionId,
    },
}

/// Content of the result container.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResultArea {
    #[default]
    Empty,
    /// Backend HTML fragment, inserted as markup.
    Html(String),
    /// Failure text, `Error: <message>`, inserted as plain text.
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    question: String,
    agent_url: String,
    phase: Phase,
    result: ResultArea,
    visited_urls: Vec<String>,
    last_submission_id: SubmissionId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let busy = self.is_busy();
        AppViewModel {
            question: self.question.clone(),
            agent_url: self.agent_url.clone(),
            submit_enabled: !busy,
            submit_label: if busy { PROCESSING_LABEL } else { SUBMIT_LABEL }.to_string(),
            result: self.result.clone(),
            visited_urls: self.visited_urls.clone(),
            dirty: self.dirty,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, Phase::Busy { .. })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn agent_url(&self) -> &str {
        &self.agent_url
    }

    /// Returns whether the state changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_question(&mut self, question: String) {
        if self.question != question {
            self.question = question;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_agent_url(&mut self, agent_url: String) {
        if self.agent_url != agent_url {
            self.agent_url = agent_url;
            self.mark_dirty();
        }
    }

    /// Enters the busy phase and clears previously rendered output.
    pub(crate) fn begin_submission(&mut self) -> SubmissionId {
        self.last_submission_id += 1;
        let submission_id = self.last_submission_id;
        self.phase = Phase::Busy { submission_id };
        self.result = ResultArea::Empty;
        self.visited_urls.clear();
        self.mark_dirty();
        submission_id
    }

    pub(crate) fn complete_success(&mut self, answer: ChatAnswer) {
        self.result = ResultArea::Html(answer.content);
        self.visited_urls = answer.visited_urls;
        self.finish();
    }

    pub(crate) fn complete_failure(&mut self, message: &str) {
        self.result = ResultArea::Error(format!("Error: {message}"));
        self.visited_urls.clear();
        self.finish();
    }

    fn finish(&mut self) {
        self.phase = Phase::Idle;
        self.mark_dirty();
    }
}
