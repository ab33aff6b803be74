use std::time::Duration;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::{
    core::{cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState},
    infrastructure::{
        api::RestClient,
        api_service::{ApiOperation, ApiService},
        config::Config,
        tui,
    },
    integration::runtime::Runtime,
    presentation,
};

/// Drives the whole application: pumps terminal events into the runtime,
/// dispatches the commands it produces to the API service, and renders.
pub struct AppRunner {
    runtime: Runtime,
    tui: tui::Tui,
    op_tx: mpsc::UnboundedSender<ApiOperation>,
    api_cancel: CancellationToken,
}

impl AppRunner {
    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    /// Create a new AppRunner with the runtime and infrastructure initialized.
    pub fn new_with_config(config: Config, tick_rate: f64, frame_rate: f64) -> Result<Self> {
        let initial_panel = config.initial_panel();
        let timeout = Duration::from_secs(config.request_timeout_secs);
        let client = RestClient::new(config.base_url.clone(), timeout)?;

        let initial_state = AppState::new_with_config(config);
        let mut runtime = Runtime::new(initial_state);

        let (op_tx, api_cancel, api_service) = ApiService::new(client, runtime.get_raw_sender())?;
        api_service.run();

        // Focusing the startup panel kicks off its first fetch
        runtime.send_msg(Msg::SelectPanel(initial_panel));

        let tui = tui::Tui::new()?.tick_rate(tick_rate).frame_rate(frame_rate);

        Ok(Self {
            runtime,
            tui,
            op_tx,
            api_cancel,
        })
    }

    /// Run the main loop: handle TUI events, update state, render.
    pub async fn run(&mut self) -> Result<()> {
        self.tui.enter()?;

        loop {
            if let Some(event) = self.tui.next().await {
                match event {
                    tui::Event::Quit => self.runtime.send_raw_msg(RawMsg::Quit),
                    tui::Event::Tick => self.runtime.send_raw_msg(RawMsg::Tick),
                    tui::Event::Render => {}
                    tui::Event::Resize(w, h) => self.runtime.send_raw_msg(RawMsg::Resize(w, h)),
                    tui::Event::Key(key) => self.runtime.send_raw_msg(RawMsg::Key(key)),
                    tui::Event::Init
                    | tui::Event::Error
                    | tui::Event::Closed
                    | tui::Event::FocusGained
                    | tui::Event::FocusLost
                    | tui::Event::Paste(_)
                    | tui::Event::Mouse(_) => {}
                }
            }

            self.runtime.process_all_messages();
            for cmd in self.runtime.pending_commands() {
                self.dispatch_command(cmd);
            }

            if self.runtime.state().system.should_suspend {
                self.tui.suspend()?;
                self.runtime.send_msg(Msg::Resume);
                self.runtime.process_all_messages();
                self.tui.resume()?;
            }

            self.render()?;

            if self.runtime.state().system.should_quit {
                break;
            }
        }

        self.api_cancel.cancel();
        self.tui.exit()?;
        Ok(())
    }

    /// Hand a command to the layer that executes it.
    fn dispatch_command(&self, cmd: Cmd) {
        match cmd {
            Cmd::FetchList { panel, token } => {
                let _ = self.op_tx.send(ApiOperation::FetchList { panel, token });
            }
            Cmd::FetchInsight {
                section,
                arg,
                token,
            } => {
                let _ = self.op_tx.send(ApiOperation::FetchInsight {
                    section,
                    arg,
                    token,
                });
            }
            Cmd::Create { panel, request } => {
                let _ = self.op_tx.send(ApiOperation::Create { panel, request });
            }
            Cmd::Patch { panel, request } => {
                let _ = self.op_tx.send(ApiOperation::Patch { panel, request });
            }
            Cmd::LogError { message } => log::error!("{message}"),
            Cmd::LogInfo { message } => log::info!("{message}"),
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.dispatch_command(cmd);
                }
            }
            Cmd::None => {}
        }
    }

    fn render(&mut self) -> Result<()> {
        let state = self.runtime.state().clone();
        self.tui.draw(|f| {
            presentation::view(&state, f, f.area());
        })?;
        Ok(())
    }
}
