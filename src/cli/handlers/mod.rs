// src/cli/handlers/mod.rs

// One module per command group. Each handler receives the bindings of the
// leaf it is attached to; the music service itself is not reached from here.

/// `mixtape`: recommendations seeded by an artist or a track.
pub mod mixtape;
/// `play`, `pause`, `skip` and `prev`.
pub mod playback;
/// `playing` subcommands.
pub mod playing;
/// `show` and its field subcommands.
pub mod show;
