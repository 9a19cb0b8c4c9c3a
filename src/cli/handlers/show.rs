// src/cli/handlers/show.rs

use crate::{core::console::Console, models::Bindings};
use anyhow::Result;
use colored::Colorize;

/// A detail of the currently playing track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The artist name.
    Artist,
    /// The bare spotify artist id.
    ArtistId,
    /// The `spotify:artist:` URI.
    ArtistUri,
    /// The track title.
    Track,
    /// The bare spotify track id.
    TrackId,
    /// The `spotify:track:` URI.
    TrackUri,
}

impl Field {
    /// How the field is named in messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Artist => "artist",
            Self::ArtistId => "artist ID",
            Self::ArtistUri => "artist URI",
            Self::Track => "title",
            Self::TrackId => "track ID",
            Self::TrackUri => "track URI",
        }
    }
}

/// `show` on its own: the whole track attribution.
pub fn handle_current(console: &Console, _bindings: &Bindings) -> Result<()> {
    console.output(t!("show.current"));
    Ok(())
}

/// One `show <field>` subcommand.
pub fn handle_field(field: Field, console: &Console, _bindings: &Bindings) -> Result<()> {
    log::info!("Showing field {:?} of the current track", field);
    console.output(&format!(t!("show.field"), field = field.label().cyan()));
    Ok(())
}
