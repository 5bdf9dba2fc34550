use crate::view_model::EMPTY_QUESTION_ALERT;
use crate::{AppState, ChatRequest, Effect, Msg, Phase};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::QuestionChanged(question) => {
            state.set_question(question);
            Vec::new()
        }
        Msg::AgentUrlChanged(agent_url) => {
            state.set_agent_url(agent_url);
            Vec::new()
        }
        Msg::SubmitClicked => {
            if state.question().is_empty() {
                return (
                    state,
                    vec![Effect::Alert {
                        message: EMPTY_QUESTION_ALERT.to_string(),
                    }],
                );
            }
            // One submission at a time; the control is disabled while busy.
            if state.is_busy() {
                return (state, Vec::new());
            }

            let request = ChatRequest::from_fields(state.question(), state.agent_url());
            let submission_id = state.begin_submission();
            vec![Effect::SendChat {
                submission_id,
                request,
            }]
        }
        Msg::ChatCompleted {
            submission_id,
            outcome,
        } => {
            if state.phase() != (Phase::Busy { submission_id }) {
                return (state, Vec::new());
            }
            match outcome {
                Ok(answer) => state.complete_success(answer),
                Err(message) => state.complete_failure(&message),
            }
            Vec::new()
        }
    };

    (state, effects)
}
