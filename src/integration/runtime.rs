use std::collections::VecDeque;

use tokio::sync::mpsc;

use crate::core::{
    cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, translator::translate_raw_to_domain,
    update::update,
};

/// Message-loop runtime around the pure update function.
/// Owns the state; everything else talks to it through queues and channels.
pub struct Runtime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    msg_tx: mpsc::UnboundedSender<Msg>,
    msg_rx: mpsc::UnboundedReceiver<Msg>,
    raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
    raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
}

impl Runtime {
    pub fn new(initial_state: AppState) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let (raw_msg_tx, raw_msg_rx) = mpsc::unbounded_channel();

        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            msg_tx,
            msg_rx,
            raw_msg_tx,
            raw_msg_rx,
        }
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Send domain message directly (for testing)
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Send raw message (for integration with external systems)
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Sender handed to background services
    pub fn get_raw_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_msg_tx.clone()
    }

    pub fn get_sender(&self) -> mpsc::UnboundedSender<Msg> {
        self.msg_tx.clone()
    }

    /// Drain commands produced since the last call
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        let (new_state, commands) = update(msg, self.state.clone());
        self.state = new_state;

        for cmd in &commands {
            self.cmd_queue.push_back(cmd.clone());
        }

        commands
    }

    /// Process every queued raw and domain message
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        // Translate raw messages first so their domain messages run in order
        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            let domain_msgs = translate_raw_to_domain(raw_msg, &self.state);
            self.msg_queue.extend(domain_msgs);
        }

        while let Ok(raw_msg) = self.raw_msg_rx.try_recv() {
            let domain_msgs = translate_raw_to_domain(raw_msg, &self.state);
            self.msg_queue.extend(domain_msgs);
        }

        while let Some(msg) = self.msg_queue.pop_front() {
            let commands = self.process_message(msg);
            all_commands.extend(commands);
        }

        while let Ok(msg) = self.msg_rx.try_recv() {
            let commands = self.process_message(msg);
            all_commands.extend(commands);
        }

        all_commands
    }

    /// Get runtime statistics
    pub fn get_stats(&self) -> RuntimeStats {
        RuntimeStats {
            queued_messages: self.msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            active_panel: self.state.ui.active_panel.title(),
            active_rows: self.state.active_row_count(),
            form_open: self.state.ui.form.is_some(),
        }
    }
}

/// Runtime statistics
#[derive(Debug, Clone)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub queued_commands: usize,
    pub active_panel: &'static str,
    pub active_rows: usize,
    pub form_open: bool,
}
