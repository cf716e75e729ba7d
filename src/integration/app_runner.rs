use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use tokio::sync::{mpsc, watch, Mutex};

use crate::{
    core::{
        cmd::TuiCommand,
        raw_msg::RawMsg,
        state::{search::SearchState, AppState},
        store::{SearchDispatcher, SearchStateSource},
    },
    infrastructure::{config::Config, tui},
    integration::runtime::Runtime,
    presentation::components::Components,
};

/// What woke the runner up
enum Wake {
    Tui(Option<tui::Event>),
    /// `false` once the store has gone away
    SearchChanged(bool),
}

/// Host loop: feeds terminal events and store publications into the runtime,
/// applies terminal commands and renders after every cycle.
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
    components: Components,
    search_rx: watch::Receiver<SearchState>,
    tui_cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
    store_closed: bool,
}

impl AppRunner {
    /// Create a runner rendering to `tui` and talking to the given store
    pub fn new(
        config: Config,
        tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
        dispatcher: Arc<dyn SearchDispatcher>,
        source: Arc<dyn SearchStateSource>,
    ) -> Result<Self> {
        let mut initial_state = AppState::new_with_config(config);
        initial_state.search = source.snapshot();

        let mut runtime = Runtime::new(initial_state, dispatcher);
        let (tui_cmd_tx, tui_cmd_rx) = mpsc::unbounded_channel();
        runtime.add_tui_sender(tui_cmd_tx);

        Ok(Self {
            runtime,
            tui,
            components: Components::new(),
            search_rx: source.subscribe(),
            tui_cmd_rx,
            store_closed: false,
        })
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    /// Run until the state asks to quit or the terminal closes
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;
        self.render().await?;

        let result = self.run_loop().await;

        self.tui.lock().await.exit()?;
        result
    }

    async fn run_loop(&mut self) -> Result<()> {
        while !self.runtime.state().system.should_quit {
            self.run_one_cycle().await?;
        }
        Ok(())
    }

    /// Wait for one event, update the state and render
    pub async fn run_one_cycle(&mut self) -> Result<()> {
        // Messages queued before the wait (e.g. by tests) are handled first
        if self.runtime.get_stats().queued_raw_messages == 0 {
            match self.next_wake().await {
                Wake::Tui(Some(event)) => self.handle_tui_event(event),
                Wake::Tui(None) => {
                    log::info!("terminal event source closed");
                    self.runtime.send_raw_msg(RawMsg::Quit);
                }
                Wake::SearchChanged(true) => {
                    let snapshot = self.search_rx.borrow_and_update().clone();
                    self.runtime
                        .send_raw_msg(RawMsg::SearchStateChanged(snapshot));
                }
                Wake::SearchChanged(false) => {
                    log::warn!("search store closed; results will no longer update");
                    self.store_closed = true;
                }
            }
        }

        // Failed commands come back as errors on the next cycle
        self.runtime.run_update_cycle();

        self.apply_tui_commands().await?;
        self.handle_suspend().await?;
        self.render().await
    }

    async fn next_wake(&mut self) -> Wake {
        let tui = Arc::clone(&self.tui);
        let mut tui = tui.lock().await;
        tokio::select! {
            biased;
            changed = self.search_rx.changed(), if !self.store_closed => {
                Wake::SearchChanged(changed.is_ok())
            }
            event = tui.next() => Wake::Tui(event),
        }
    }

    fn handle_tui_event(&mut self, event: tui::Event) {
        let raw = match event {
            tui::Event::Quit | tui::Event::Closed => RawMsg::Quit,
            tui::Event::Tick => RawMsg::Tick,
            tui::Event::Render => RawMsg::Render,
            tui::Event::Resize(w, h) => RawMsg::Resize(w, h),
            tui::Event::Key(key) => RawMsg::Key(key),
            tui::Event::Paste(text) => RawMsg::Paste(text),
            tui::Event::Error => RawMsg::Error("Failed to read terminal event".to_string()),
            tui::Event::Init
            | tui::Event::FocusGained
            | tui::Event::FocusLost
            | tui::Event::Mouse(_) => return,
        };
        self.runtime.send_raw_msg(raw);
    }

    async fn apply_tui_commands(&mut self) -> Result<()> {
        while let Ok(cmd) = self.tui_cmd_rx.try_recv() {
            match cmd {
                TuiCommand::Resize { width, height } => {
                    self.tui
                        .lock()
                        .await
                        .resize(Rect::new(0, 0, width, height))?;
                }
            }
        }
        Ok(())
    }

    async fn handle_suspend(&mut self) -> Result<()> {
        if !self.runtime.state().system.should_suspend {
            return Ok(());
        }

        // Returns once the process is continued
        self.tui.lock().await.suspend()?;
        self.runtime.send_raw_msg(RawMsg::Resume);
        self.runtime.run_update_cycle();
        self.tui.lock().await.resume()?;
        Ok(())
    }

    async fn render(&mut self) -> Result<()> {
        let state = self.runtime.state();
        let components = &self.components;
        let mut tui = self.tui.lock().await;
        tui.draw(&mut |f: &mut tui::Frame<'_>| components.render(f, state))?;
        Ok(())
    }
}
