use std::sync::{mpsc, Arc};
use std::thread::{self, JoinHandle};

use explorer_core::{ChatRequest, Msg, SubmissionId};
use explorer_engine::{ChatClient, EngineEvent, EngineEvents, EngineHandle};
use explorer_logging::{explorer_info, explorer_warn};

/// Bridges `SendChat` effects to the engine and engine events back to `Msg`s.
///
/// Dropping the runner closes the engine, which in turn ends the event loop.
pub struct EffectRunner {
    engine: EngineHandle,
    event_loop: JoinHandle<()>,
}

impl EffectRunner {
    pub fn new(client: Arc<dyn ChatClient>, msg_tx: mpsc::Sender<Msg>) -> Self {
        let (engine, events) = EngineHandle::new(client);
        let event_loop = spawn_event_loop(events, msg_tx);
        Self { engine, event_loop }
    }

    /// Stops the engine and waits for the event loop to exit.
    pub fn shutdown(self) {
        let Self { engine, event_loop } = self;
        drop(engine);
        if event_loop.join().is_err() {
            explorer_warn!("Effect event loop panicked");
        }
    }

    pub fn send_chat(&self, submission_id: SubmissionId, request: ChatRequest) {
        explorer_info!(
            "SendChat submission_id={} question_len={} agent_url={}",
            submission_id,
            request.question.len(),
            request.agent_url
        );
        self.engine.submit(submission_id, request);
    }
}

fn spawn_event_loop(events: EngineEvents, msg_tx: mpsc::Sender<Msg>) -> JoinHandle<()> {
    thread::spawn(move || {
        while let Some(event) = events.recv() {
            if msg_tx.send(map_event(event)).is_err() {
                break;
            }
        }
    })
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::ChatCompleted {
            submission_id,
            result,
        } => Msg::ChatCompleted {
            submission_id,
            outcome: result.map_err(|err| {
                explorer_warn!(
                    "Submission {} failed ({}): {}",
                    submission_id,
                    err.kind,
                    err
                );
                err.to_string()
            }),
        },
    }
}
