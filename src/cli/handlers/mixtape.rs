// src/cli/handlers/mixtape.rs

use crate::{constants::DEFAULT_MIXTAPE_LENGTH, core::console::Console, models::Bindings};
use anyhow::{Result, bail};
use std::fmt;

/// What a mixtape's recommendations start from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seed {
    /// The artist of the track currently playing.
    CurrentArtist,
    /// An artist looked up by name.
    Artist(String),
    /// The track currently playing.
    CurrentTrack,
    /// A bare spotify track id.
    Track(String),
}

/// A mixtape as described by the `mixtape` bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MixtapeRequest {
    /// Where the recommendations start.
    pub seed: Seed,
    /// Number of tracks requested.
    pub length: i64,
}

impl MixtapeRequest {
    /// An empty `artist` or `track` means the one currently playing.
    /// The two parameters never arrive together; their parsers reject that.
    pub fn from_bindings(bindings: &Bindings) -> Result<Self> {
        let seed = match (bindings.text("artist"), bindings.text("track")) {
            (Some(""), _) => Seed::CurrentArtist,
            (Some(artist), _) => Seed::Artist(artist.to_string()),
            (None, Some("")) => Seed::CurrentTrack,
            (None, Some(track)) => Seed::Track(track.to_string()),
            (None, None) => bail!(t!("mixtape.error.no_seed")),
        };
        let length = bindings.int("length").unwrap_or(DEFAULT_MIXTAPE_LENGTH);
        Ok(Self { seed, length })
    }
}

impl fmt::Display for MixtapeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.seed {
            Seed::CurrentArtist => write!(f, t!("mixtape.request.current_artist"), length = self.length),
            Seed::Artist(artist) => write!(
                f,
                t!("mixtape.request.artist"),
                length = self.length,
                artist = artist
            ),
            Seed::CurrentTrack => write!(f, t!("mixtape.request.current_track"), length = self.length),
            Seed::Track(track) => write!(
                f,
                t!("mixtape.request.track"),
                length = self.length,
                track = track
            ),
        }
    }
}

/// Builds the request from the bindings and prints it.
pub fn handle(console: &Console, bindings: &Bindings) -> Result<()> {
    let request = MixtapeRequest::from_bindings(bindings)?;
    log::info!("Mixtape request: {:?}", request);
    console.output(&request.to_string());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::console::Verbosity, models::Value};

    fn bindings(values: &[(&str, Value)]) -> Bindings {
        let mut bindings = Bindings::new();
        for (name, value) in values {
            bindings.set(*name, value.clone());
        }
        bindings
    }

    #[test]
    fn test_empty_artist_seeds_from_current_artist() {
        let b = bindings(&[("artist", Value::Text(String::new())), ("length", Value::Int(20))]);
        let request = MixtapeRequest::from_bindings(&b).unwrap();
        assert_eq!(request.seed, Seed::CurrentArtist);
        assert_eq!(request.length, 20);
    }

    #[test]
    fn test_named_artist() {
        let b = bindings(&[("artist", Value::Text("the sword".into()))]);
        let request = MixtapeRequest::from_bindings(&b).unwrap();
        assert_eq!(request.seed, Seed::Artist("the sword".to_string()));
        assert_eq!(request.length, DEFAULT_MIXTAPE_LENGTH);
        assert!(request.to_string().contains("the sword"));
    }

    #[test]
    fn test_track_seeds() {
        let b = bindings(&[("track", Value::Text(String::new()))]);
        assert_eq!(MixtapeRequest::from_bindings(&b).unwrap().seed, Seed::CurrentTrack);

        let b = bindings(&[("track", Value::Text("4uLU6hMCjMI75M1A2tKUQC".into()))]);
        assert_eq!(
            MixtapeRequest::from_bindings(&b).unwrap().seed,
            Seed::Track("4uLU6hMCjMI75M1A2tKUQC".to_string())
        );
    }

    #[test]
    fn test_no_seed_is_an_error() {
        let b = bindings(&[("length", Value::Int(10))]);
        let err = MixtapeRequest::from_bindings(&b).unwrap_err();
        assert_eq!(err.to_string(), "must pass artist or track parameter");
        assert!(handle(&Console::new(Verbosity::Silent), &b).is_err());
    }

    #[test]
    fn test_display_includes_length() {
        let request = MixtapeRequest {
            seed: Seed::CurrentTrack,
            length: 42,
        };
        assert!(request.to_string().contains("42"));
    }
}
