use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use explorer_core::{ChatRequest, SubmissionId};
use explorer_logging::{explorer_debug, explorer_error};

use crate::{ChatClient, ChatError, EngineEvent, FailureKind};

const SHUTDOWN_GRACE: Duration = Duration::from_secs(1);

enum EngineCommand {
    Submit {
        submission_id: SubmissionId,
        request: ChatRequest,
    },
}

/// Runs chat submissions on a background tokio runtime.
///
/// Every submitted request yields exactly one `EngineEvent::ChatCompleted`
/// on the paired `EngineEvents`. Dropping the handle stops the worker.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

/// Receiving side of an engine. Yields `None` once the worker has exited.
pub struct EngineEvents {
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(client: Arc<dyn ChatClient>) -> (Self, EngineEvents) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || run_worker(client, cmd_rx, event_tx));

        (Self { cmd_tx }, EngineEvents { event_rx })
    }

    pub fn submit(&self, submission_id: SubmissionId, request: ChatRequest) {
        let _ = self.cmd_tx.send(EngineCommand::Submit {
            submission_id,
            request,
        });
    }
}

impl EngineEvents {
    /// Blocks for the next event.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }

    /// Waits up to `timeout` for the next event.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

fn run_worker(
    client: Arc<dyn ChatClient>,
    cmd_rx: mpsc::Receiver<EngineCommand>,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(err) => {
            explorer_error!("Failed to start engine runtime: {}", err);
            let message = format!("engine runtime unavailable: {err}");
            // Still settle every submission so the UI leaves its busy state.
            while let Ok(EngineCommand::Submit { submission_id, .. }) = cmd_rx.recv() {
                let _ = event_tx.send(EngineEvent::ChatCompleted {
                    submission_id,
                    result: Err(ChatError::new(FailureKind::Unavailable, message.clone())),
                });
            }
            return;
        }
    };

    while let Ok(command) = cmd_rx.recv() {
        let client = client.clone();
        let event_tx = event_tx.clone();
        runtime.spawn(async move {
            handle_command(client.as_ref(), command, event_tx).await;
        });
    }
    explorer_debug!("Engine command channel closed");
    // In-flight requests are abandoned; their event senders drop with the tasks.
    runtime.shutdown_timeout(SHUTDOWN_GRACE);
}

async fn handle_command(
    client: &dyn ChatClient,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Submit {
            submission_id,
            request,
        } => {
            let result = client.submit(&request).await;
            let _ = event_tx.send(EngineEvent::ChatCompleted {
                submission_id,
                result,
            });
        }
    }
}
