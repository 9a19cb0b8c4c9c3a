// src/cli/handlers/playback.rs

use crate::{core::console::Console, models::Bindings};
use anyhow::Result;

/// A transport action on the active player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    /// Resume playback.
    Play,
    /// Pause playback.
    Pause,
    /// Jump to the next track.
    Skip,
    /// Go back to the previous track.
    Prev,
}

impl Playback {
    /// The message printed for this action.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Play => t!("playback.play"),
            Self::Pause => t!("playback.pause"),
            Self::Skip => t!("playback.skip"),
            Self::Prev => t!("playback.prev"),
        }
    }
}

/// Prints the requested action.
pub fn handle(action: Playback, console: &Console, _bindings: &Bindings) -> Result<()> {
    log::info!("Playback action requested: {:?}", action);
    console.output(action.describe());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::console::Verbosity;
    use std::collections::HashSet;

    #[test]
    fn test_each_action_has_its_own_message() {
        let messages: HashSet<&str> = [
            Playback::Play.describe(),
            Playback::Pause.describe(),
            Playback::Skip.describe(),
            Playback::Prev.describe(),
        ]
        .into_iter()
        .collect();
        assert_eq!(messages.len(), 4);
    }

    #[test]
    fn test_handle_succeeds() {
        assert!(handle(Playback::Skip, &Console::new(Verbosity::Silent), &Bindings::new()).is_ok());
    }
}
