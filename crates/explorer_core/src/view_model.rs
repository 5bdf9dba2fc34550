use crate::ResultArea;

/// Submit control label while idle.
pub const SUBMIT_LABEL: &str = "Submit Question";
/// Submit control label while a submission is in flight.
pub const PROCESSING_LABEL: &str = "Processing...";
pub const EMPTY_QUESTION_ALERT: &str = "Please enter a question";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub question: String,
    pub agent_url: String,
    pub submit_enabled: bool,
    pub submit_label: String,
    pub result: ResultArea,
    pub visited_urls: Vec<String>,
    pub dirty: bool,
}
