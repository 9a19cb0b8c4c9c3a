// src/cli/registry.rs

//! The static command tree of the `spotctl` binary.
//!
//! The tree is built once per process and only read afterwards. Handlers are
//! plain functions from [`crate::cli::handlers`]. Each closure captures the
//! console it prints through; everything else comes in through the bindings
//! of the leaf it is attached to.

use crate::{
    cli::handlers::{
        mixtape,
        playback::{self, Playback},
        playing,
        show::{self, Field},
    },
    constants::{APP_NAME, DEFAULT_MIXTAPE_LENGTH, MAX_MIXTAPE_LENGTH, MIN_MIXTAPE_LENGTH},
    core::{
        command::Command,
        console::Console,
        params::{IdKind, Param},
    },
    models::Example,
};

/// Builds the `spotctl` tree. Handler output goes through `console`.
pub fn build_command_tree(console: Console) -> Command {
    Command::router(
        APP_NAME,
        t!("cmd.root.help"),
        vec![
            playback_command("play", t!("cmd.play.help"), Playback::Play, console),
            playback_command("pause", t!("cmd.pause.help"), Playback::Pause, console),
            playback_command("skip", t!("cmd.skip.help"), Playback::Skip, console).alias("next"),
            playback_command("prev", t!("cmd.prev.help"), Playback::Prev, console)
                .alias("back")
                .alias("previous"),
            show_command(console),
            playing_command(console),
            mixtape_command(console),
        ],
    )
}

fn playback_command(name: &str, help: &str, action: Playback, console: Console) -> Command {
    Command::leaf(name, help, vec![], move |bindings| {
        playback::handle(action, &console, bindings)
    })
}

fn show_command(console: Console) -> Command {
    let field = move |name: &str, help: &str, field: Field| {
        Command::leaf(name, help, vec![], move |bindings| {
            show::handle_field(field, &console, bindings)
        })
    };

    Command::router(
        "show",
        t!("cmd.show.help"),
        vec![
            field("artist", t!("cmd.show.artist.help"), Field::Artist),
            field("artist-id", t!("cmd.show.artist_id.help"), Field::ArtistId),
            field("artist-uri", t!("cmd.show.artist_uri.help"), Field::ArtistUri),
            field("track", t!("cmd.show.track.help"), Field::Track),
            field("track-id", t!("cmd.show.track_id.help"), Field::TrackId),
            field("track-uri", t!("cmd.show.track_uri.help"), Field::TrackUri),
        ],
    )
    .with_handler(move |bindings| show::handle_current(&console, bindings))
}

fn playing_command(console: Console) -> Command {
    Command::router(
        "playing",
        t!("cmd.playing.help"),
        vec![Command::leaf(
            "fav",
            t!("cmd.playing.fav.help"),
            vec![],
            move |bindings| playing::handle_fav(&console, bindings),
        )],
    )
}

fn mixtape_command(console: Console) -> Command {
    Command::leaf(
        "mixtape",
        t!("cmd.mixtape.help"),
        vec![
            Param::text("artist", t!("cmd.mixtape.param.artist"))
                .alias("a")
                .conflicts_with("track"),
            Param::spotify_id("track", t!("cmd.mixtape.param.track"), IdKind::Track)
                .alias("t")
                .conflicts_with("artist"),
            Param::int(
                "length",
                t!("cmd.mixtape.param.length"),
                DEFAULT_MIXTAPE_LENGTH,
                MIN_MIXTAPE_LENGTH..=MAX_MIXTAPE_LENGTH,
            )
            .alias("n"),
        ],
        move |bindings| mixtape::handle(&console, bindings),
    )
    .example(Example::new(
        &["artist"],
        t!("cmd.mixtape.example.current_artist"),
    ))
    .example(Example::new(
        &["artist", "length=20"],
        t!("cmd.mixtape.example.current_artist_length"),
    ))
    .example(Example::new(
        &["artist=\"The Sword\""],
        t!("cmd.mixtape.example.named_artist"),
    ))
    .example(Example::new(
        &["artist=bill"],
        t!("cmd.mixtape.example.ambiguous_artist"),
    ))
    .example(Example::new(
        &["track"],
        t!("cmd.mixtape.example.current_track"),
    ))
    .example(
        Example::new(&["artist=Chavez", "track"], t!("cmd.mixtape.example.conflict"))
            .negative()
            .comment(t!("cmd.mixtape.example.conflict_comment")),
    )
}

// MARK: --- UNIT TESTS ---
