use std::io;
use std::sync::{mpsc, Arc};
use std::time::{Duration, Instant};

use anyhow::Context;
use explorer_core::{update, AppState, Effect, Msg};
use explorer_engine::{ChatClient, ReqwestChatClient};
use explorer_logging::{explorer_debug, explorer_info};

use super::effects::EffectRunner;
use super::ui::page::{Page, PageCommand};
use super::{logging, terminal, ui, Args};

pub fn run_app(args: Args) -> anyhow::Result<()> {
    logging::initialize(args.log, args.log_level);
    explorer_info!("Starting explorer_app base_url={}", args.base_url);

    let client = ReqwestChatClient::new(args.chat_settings())
        .with_context(|| format!("building chat client for {}", args.base_url))?;
    let mut controller = Controller::new(Arc::new(client));

    let stdout = io::stdout();
    match &args.question {
        Some(question) => {
            terminal::run_once(&mut controller, question, &args.agent_url, &mut stdout.lock())?
        }
        None => terminal::run_interactive(&mut controller, io::stdin().lock(), &mut stdout.lock())?,
    }
    controller.shutdown();
    Ok(())
}

/// Owns the state machine and the page, and dispatches messages between them.
pub struct Controller {
    state: AppState,
    page: Page,
    runner: EffectRunner,
    msg_rx: mpsc::Receiver<Msg>,
}

impl Controller {
    pub fn new(client: Arc<dyn ChatClient>) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
        let runner = EffectRunner::new(client, msg_tx);
        let state = AppState::new();
        let mut page = Page::new();
        page.apply_all(ui::render::render(&state.view()));

        Self {
            state,
            page,
            runner,
            msg_rx,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    pub fn dispatch(&mut self, msg: Msg) {
        explorer_debug!("dispatch {:?}", msg);

        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        let view = state.view();
        self.state = state;

        if was_dirty {
            self.page.apply_all(ui::render::render(&view));
        }
        self.run_effects(effects);
    }

    fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Alert { message } => {
                    self.page.apply(PageCommand::ShowAlert { message });
                }
                Effect::SendChat {
                    submission_id,
                    request,
                } => self.runner.send_chat(submission_id, request),
            }
        }
    }

    /// Stops the engine and joins its event loop.
    pub fn shutdown(self) {
        self.runner.shutdown();
    }

    /// Dispatches every message already queued, without blocking.
    pub fn process_pending_messages(&mut self) {
        let mut inbox = Vec::new();
        while let Ok(msg) = self.msg_rx.try_recv() {
            inbox.push(msg);
        }
        for msg in inbox {
            self.dispatch(msg);
        }
    }

    /// Dispatches queued messages until no submission is in flight.
    ///
    /// Returns `false` if `timeout` elapsed first. `None` waits indefinitely.
    pub fn wait_until_idle(&mut self, timeout: Option<Duration>) -> bool {
        let deadline = timeout.map(|t| Instant::now() + t);
        self.process_pending_messages();
        while self.state.is_busy() {
            let msg = match deadline {
                Some(deadline) => {
                    let remaining = deadline.saturating_duration_since(Instant::now());
                    match self.msg_rx.recv_timeout(remaining) {
                        Ok(msg) => msg,
                        Err(_) => return false,
                    }
                }
                None => match self.msg_rx.recv() {
                    Ok(msg) => msg,
                    Err(_) => return false,
                },
            };
            self.dispatch(msg);
        }
        true
    }
}
