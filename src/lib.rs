//! spotctl: route command-line tokens through a nested, alias-aware command
//! tree and run the handler they land on.

include!(concat!(env!("OUT_DIR"), "/translations.rs"));

/// The `spotctl` binary surface: argument capture, the bundled tree and its handlers.
pub mod cli;
/// Names, sentinels and limits shared across the crate.
pub mod constants;
/// The command tree, its dispatcher and the ambient console and settings.
pub mod core;
/// Plain data passed between parameters, handlers and renderers.
pub mod models;
