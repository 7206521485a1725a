use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Everything a user can ask a layout to do.
///
/// Only the master area, master count and rotation actions are handled by the tile layout
/// itself. The rest belong to the host and are passed back to it through
/// [`crate::Engine::execute_without_layout_override`].
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub enum Action {
    DecreaseMasterAreaSize,
    IncreaseMasterAreaSize,
    IncreaseMasterWindowCount,
    DecreaseMasterWindowCount,
    Rotate,
    RotateReverse,
    RotatePart,
    FocusNextWindow,
    FocusPreviousWindow,
    MoveActiveWindowUp,
    MoveActiveWindowDown,
    ToggleActiveWindowFloating,
    SwitchToNextLayout,
    SwitchToPreviousLayout,
    Other(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Could not parse action: {0}")]
pub struct ParseActionError(String);

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DecreaseMasterAreaSize" => Ok(Self::DecreaseMasterAreaSize),
            "IncreaseMasterAreaSize" => Ok(Self::IncreaseMasterAreaSize),
            "IncreaseMasterWindowCount" => Ok(Self::IncreaseMasterWindowCount),
            "DecreaseMasterWindowCount" => Ok(Self::DecreaseMasterWindowCount),
            "Rotate" => Ok(Self::Rotate),
            "RotateReverse" => Ok(Self::RotateReverse),
            "RotatePart" => Ok(Self::RotatePart),
            "FocusNextWindow" => Ok(Self::FocusNextWindow),
            "FocusPreviousWindow" => Ok(Self::FocusPreviousWindow),
            "MoveActiveWindowUp" => Ok(Self::MoveActiveWindowUp),
            "MoveActiveWindowDown" => Ok(Self::MoveActiveWindowDown),
            "ToggleActiveWindowFloating" => Ok(Self::ToggleActiveWindowFloating),
            "SwitchToNextLayout" => Ok(Self::SwitchToNextLayout),
            "SwitchToPreviousLayout" => Ok(Self::SwitchToPreviousLayout),
            _ => match s.strip_prefix("Other:") {
                Some(name) if !name.is_empty() => Ok(Self::Other(name.to_owned())),
                _ => Err(ParseActionError(s.to_owned())),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_actions_parse_from_their_names() {
        assert_eq!("Rotate".parse::<Action>(), Ok(Action::Rotate));
        assert_eq!("RotatePart".parse::<Action>(), Ok(Action::RotatePart));
        assert_eq!(
            "IncreaseMasterWindowCount".parse::<Action>(),
            Ok(Action::IncreaseMasterWindowCount)
        );
    }

    #[test]
    fn host_actions_can_be_named_through_other() {
        assert_eq!(
            "Other:CloseWindow".parse::<Action>(),
            Ok(Action::Other("CloseWindow".to_owned()))
        );
        assert!("Other:".parse::<Action>().is_err());
    }

    #[test]
    fn unknown_actions_should_not_parse() {
        let err = "rotate".parse::<Action>().unwrap_err();
        assert_eq!(err.to_string(), "Could not parse action: rotate");
    }
}
