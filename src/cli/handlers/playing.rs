// src/cli/handlers/playing.rs

use crate::{core::console::Console, models::Bindings};
use anyhow::Result;

/// `playing fav`: save the current track to the library.
pub fn handle_fav(console: &Console, _bindings: &Bindings) -> Result<()> {
    log::info!("Saving the current track");
    console.output(t!("playing.fav"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::console::Verbosity;

    #[test]
    fn test_fav_succeeds() {
        assert!(handle_fav(&Console::new(Verbosity::Silent), &Bindings::new()).is_ok());
    }
}
