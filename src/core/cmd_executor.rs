use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::core::{
    cmd::{Cmd, TuiCommand},
    store::SearchDispatcher,
};

/// Command executor that forwards Elm commands to the search store and the host
#[derive(Clone)]
pub struct CmdExecutor {
    dispatcher: Arc<dyn SearchDispatcher>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
}

impl CmdExecutor {
    /// Create a new command executor dispatching search intents to `dispatcher`
    pub fn new(dispatcher: Arc<dyn SearchDispatcher>) -> Self {
        Self {
            dispatcher,
            tui_sender: None,
        }
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Execute a single command
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::Dispatch(intent) => {
                log::debug!("CmdExecutor: dispatching {}", intent.name());
                self.dispatcher.dispatch(intent.clone())?;
            }

            Cmd::Tui(TuiCommand::Resize { width, height }) => {
                if let Some(tx) = &self.tui_sender {
                    tx.send(TuiCommand::Resize {
                        width: *width,
                        height: *height,
                    })?;
                } else {
                    log::warn!(
                        "CmdExecutor: TUI sender not configured; dropping Resize command {width}x{height}"
                    );
                }
            }

            Cmd::LogError { message } => {
                log::error!("Elm command error: {message}");
            }
        }

        Ok(())
    }

    /// Execute commands in order, continuing past failures.
    /// Returns one message per failed command.
    pub fn execute_commands(&self, commands: &[Cmd]) -> Vec<String> {
        commands
            .iter()
            .filter_map(|cmd| match self.execute_command(cmd) {
                Ok(()) => {
                    log::trace!("CmdExecutor: executed {}", cmd.name());
                    None
                }
                Err(e) => {
                    let message = format!("Failed to execute {}: {e}", cmd.name());
                    log::error!("{message}");
                    Some(message)
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use color_eyre::eyre::eyre;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::store::SearchIntent;

    #[derive(Default)]
    struct RecordingDispatcher {
        intents: Mutex<Vec<SearchIntent>>,
    }

    impl RecordingDispatcher {
        fn intents(&self) -> Vec<SearchIntent> {
            self.intents.lock().map(|v| v.clone()).unwrap_or_default()
        }
    }

    impl SearchDispatcher for RecordingDispatcher {
        fn dispatch(&self, intent: SearchIntent) -> Result<()> {
            if let Ok(mut intents) = self.intents.lock() {
                intents.push(intent);
            }
            Ok(())
        }
    }

    struct FailingDispatcher;

    impl SearchDispatcher for FailingDispatcher {
        fn dispatch(&self, _intent: SearchIntent) -> Result<()> {
            Err(eyre!("store is gone"))
        }
    }

    fn create_test_executor() -> (CmdExecutor, Arc<RecordingDispatcher>) {
        let dispatcher = Arc::new(RecordingDispatcher::default());
        let executor = CmdExecutor::new(Arc::clone(&dispatcher) as Arc<dyn SearchDispatcher>);
        (executor, dispatcher)
    }

    #[test]
    fn test_execute_dispatch_forwards_intents_in_order() -> Result<()> {
        let (executor, dispatcher) = create_test_executor();

        executor.execute_command(&Cmd::search("dune"))?;
        executor.execute_command(&Cmd::cancel_search())?;

        assert_eq!(
            dispatcher.intents(),
            vec![SearchIntent::search("dune"), SearchIntent::CancelSearch]
        );
        Ok(())
    }

    #[test]
    fn test_execute_resize() -> Result<()> {
        let (mut executor, _dispatcher) = create_test_executor();
        let (tx, mut rx) = mpsc::unbounded_channel();
        executor.set_tui_sender(tx);

        executor.execute_command(&Cmd::Tui(TuiCommand::Resize {
            width: 120,
            height: 40,
        }))?;

        assert_eq!(
            rx.try_recv()?,
            TuiCommand::Resize {
                width: 120,
                height: 40
            }
        );
        Ok(())
    }

    #[test]
    fn test_execute_resize_without_sender_is_dropped() -> Result<()> {
        let (executor, dispatcher) = create_test_executor();

        executor.execute_command(&Cmd::Tui(TuiCommand::Resize {
            width: 1,
            height: 1,
        }))?;

        assert!(dispatcher.intents().is_empty());
        Ok(())
    }

    #[test]
    fn test_execute_commands_reports_failures_and_continues() {
        let executor = CmdExecutor::new(Arc::new(FailingDispatcher));

        let failures = executor.execute_commands(&[
            Cmd::search("a"),
            Cmd::LogError {
                message: "still running".into(),
            },
            Cmd::cancel_search(),
        ]);

        assert_eq!(
            failures,
            vec![
                "Failed to execute Dispatch(Search): store is gone".to_string(),
                "Failed to execute Dispatch(CancelSearch): store is gone".to_string(),
            ]
        );
    }

    #[test]
    fn test_execute_commands_without_failures_is_empty() {
        let (executor, dispatcher) = create_test_executor();

        let failures = executor.execute_commands(&[Cmd::search("a"), Cmd::cancel_search()]);

        assert!(failures.is_empty());
        assert_eq!(dispatcher.intents().len(), 2);
    }
}
