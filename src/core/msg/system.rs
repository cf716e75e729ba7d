use serde::{Deserialize, Serialize};

/// Messages specific to SystemState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SystemMsg {
    // System control
    Quit,
    Suspend,
    Resume,
    Resize(u16, u16),

    // Status management
    UpdateStatusMessage(String),
    ClearStatusMessage,
    ShowError(String),
}

impl SystemMsg {
    /// Determine if this is a frequent message during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, SystemMsg::Resize(..))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use color_eyre::Result;

    #[test]
    fn test_system_msg_frequent_detection() {
        assert!(SystemMsg::Resize(80, 24).is_frequent());
        assert!(!SystemMsg::Quit.is_frequent());
        assert!(!SystemMsg::ShowError("test".to_string()).is_frequent());
    }

    #[test]
    fn test_system_msg_serialization() -> Result<()> {
        let msg = SystemMsg::UpdateStatusMessage("test status".to_string());
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: SystemMsg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);

        Ok(())
    }
}
