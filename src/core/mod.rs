// src/core/mod.rs

/// Command tree nodes and tree validation.
pub mod command;
/// User settings loading.
pub mod config;
/// Verbosity levels, logging setup and the user-facing console.
pub mod console;
/// Routing tokens through the tree.
pub mod dispatcher;
/// Usage and example rendering.
pub mod help;
/// Leaf parameters and their consumption.
pub mod params;
