use serde::{Deserialize, Serialize};

use crate::core::store::SearchIntent;

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions
/// Represents side effects requested by the update function.
/// `Dispatch` carries what the screen wants from the search store; how the
/// store reacts is decided by whichever dispatcher is injected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    // Search store intents
    Dispatch(SearchIntent),

    // UI-related commands
    Tui(TuiCommand),

    // Logging related
    LogError { message: String },
}

impl Cmd {
    pub fn search(query: impl Into<String>) -> Cmd {
        Cmd::Dispatch(SearchIntent::search(query))
    }

    pub fn cancel_search() -> Cmd {
        Cmd::Dispatch(SearchIntent::CancelSearch)
    }

    /// Human-readable name used in execution logs
    pub fn name(&self) -> String {
        match self {
            Cmd::Dispatch(intent) => format!("Dispatch({})", intent.name()),
            Cmd::Tui(TuiCommand::Resize { .. }) => "Tui(Resize)".to_string(),
            Cmd::LogError { .. } => "LogError".to_string(),
        }
    }
}
