use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        cmd_executor::CmdExecutor,
        msg::Msg,
        raw_msg::RawMsg,
        state::AppState,
        store::SearchDispatcher,
        translator::translate_raw_to_domain,
        update::{update_with_context, UpdateContext},
    },
    infrastructure::tui::textarea_engine::TuiTextAreaEngine,
};

static ENGINE: TuiTextAreaEngine = TuiTextAreaEngine;

/// Drives the Elm loop: raw messages are translated, messages update the
/// state, and the resulting commands are executed.
///
/// A command that fails is reported back as `RawMsg::Error`, so the next
/// cycle puts it on the status bar.
pub struct Runtime {
    ctx: UpdateContext<'static>,
    state: AppState,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    cmd_executor: CmdExecutor,
}

impl Runtime {
    /// Create a new Runtime whose search intents go to `dispatcher`
    pub fn new(initial_state: AppState, dispatcher: Arc<dyn SearchDispatcher>) -> Self {
        Self {
            ctx: UpdateContext { text_area: &ENGINE },
            state: initial_state,
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            cmd_executor: CmdExecutor::new(dispatcher),
        }
    }

    /// Route terminal commands (resize) to the host
    pub fn add_tui_sender(&mut self, tui_sender: mpsc::UnboundedSender<TuiCommand>) {
        self.cmd_executor.set_tui_sender(tui_sender);
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Queue a raw message for the next update cycle
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        let state = std::mem::take(&mut self.state);
        let (new_state, commands) = update_with_context(msg, state, &self.ctx);
        self.state = new_state;

        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    /// Translate and process every queued raw message.
    /// Each one is translated against the state left by the previous one.
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            if !raw_msg.is_frequent() {
                log::trace!("raw: {raw_msg:?}");
            }
            for msg in translate_raw_to_domain(raw_msg, &self.state) {
                all_commands.extend(self.process_message(msg));
            }
        }

        all_commands
    }

    /// Execute all pending commands.
    /// Failures are queued as `RawMsg::Error` and also returned.
    pub fn execute_pending_commands(&mut self) -> Vec<String> {
        let commands: Vec<Cmd> = self.cmd_queue.drain(..).collect();
        let failures = self.cmd_executor.execute_commands(&commands);
        self.raw_msg_queue
            .extend(failures.iter().cloned().map(RawMsg::Error));
        failures
    }

    /// Process all messages and execute commands in one step
    pub fn run_update_cycle(&mut self) -> Vec<String> {
        self.process_all_messages();
        self.execute_pending_commands()
    }

    /// Get runtime statistics
    pub fn get_stats(&self) -> RuntimeStats {
        RuntimeStats {
            queued_raw_messages: self.raw_msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            pending_search: self.state.home.pending_search,
            is_overlay_visible: self.state.is_overlay_visible(),
            result_count: self.state.search.result_count(),
        }
    }
}

/// Runtime statistics
#[derive(Debug, Clone)]
pub struct RuntimeStats {
    pub queued_raw_messages: usize,
    pub queued_commands: usize,
    pub pending_search: bool,
    pub is_overlay_visible: bool,
    pub result_count: usize,
}
