// src/core/dispatcher.rs

use crate::{
    constants::{EXAMPLES_FLAG, HELP_FLAG},
    core::{
        command::{Command, Handler, Node},
        help,
        params::Param,
    },
    models::Bindings,
};
use std::error::Error as StdError;
use thiserror::Error;

/// Failures returned up through the walk. The dispatcher never exits the process.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// No child of an interior node is named or aliased `token`.
    #[error("command not found")]
    CommandNotFound {
        /// The token that matched nothing.
        token: String,
    },
    /// A parameter rejected its value.
    #[error("error parsing param `{name}`: {source}")]
    Param {
        /// Canonical name of the failing parameter.
        name: String,
        /// The literal token the parameter was matched from, if it was present.
        raw: Option<String>,
        /// What the parse callback reported.
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
    /// Tokens left over after every parameter of the leaf had its turn.
    #[error("unknown params remaining: {}", .remaining.join(" "))]
    UnknownParams {
        /// The leaf that was reached.
        command: String,
        /// Unconsumed tokens in their original order.
        remaining: Vec<String>,
    },
    /// A childless node with nothing to run was given tokens. Carries its help text.
    #[error("{help}")]
    NotRunnable {
        /// The node that was reached.
        command: String,
        /// Its help text, which is also the error message.
        help: String,
    },
    /// The handler ran and failed. Propagated untouched, never retried.
    #[error("{source}")]
    Handler {
        /// The node whose handler failed.
        command: String,
        /// The handler's own error.
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl DispatchError {
    /// True for [`DispatchError::CommandNotFound`].
    pub fn is_command_not_found(&self) -> bool {
        matches!(self, Self::CommandNotFound { .. })
    }
}

/// How a dispatch ended without an error.
#[derive(Debug)]
pub enum Outcome {
    /// A handler ran. Carries what its parameters bound.
    Handled(Bindings),
    /// Usage for the subtree where the walk stopped. The caller prints it and exits non-zero.
    Usage(String),
    /// Examples for the subtree where the walk stopped. The caller prints it and exits non-zero.
    Examples(String),
}

/// Routes `tokens` through the tree rooted at `root` and runs the handler it lands on.
///
/// # Logic:
/// - No tokens left: a router without a handler yields its usage; anything
///   else runs (a leaf's implicit parameters still apply their defaults).
/// - A leading `--help` or `--examples` stops the walk at the current node.
/// - A node without children binds the remaining tokens through its
///   parameters in declaration order and runs its handler.
/// - Otherwise the first child whose name or alias equals the next token
///   wins and the walk continues there.
pub fn dispatch(root: &Command, tokens: &[String]) -> Result<Outcome, DispatchError> {
    log::debug!("Dispatching tokens: {:?}", tokens);
    visit(root, tokens)
}

fn visit(command: &Command, tokens: &[String]) -> Result<Outcome, DispatchError> {
    log::debug!("Visiting '{}' with {:?}", command.name(), tokens);

    let Some((first, rest)) = tokens.split_first() else {
        return match command.node() {
            Node::Router { handler: None, .. } => Ok(Outcome::Usage(help::render_usage(command))),
            Node::Router {
                handler: Some(handler),
                ..
            } => run(command, handler, Bindings::new()),
            Node::Leaf { params, handler } => {
                let bindings = bind_params(command, params, tokens)?;
                run(command, handler, bindings)
            }
        };
    };

    if first == HELP_FLAG {
        return Ok(Outcome::Usage(help::render_usage(command)));
    }
    if first == EXAMPLES_FLAG {
        return Ok(Outcome::Examples(help::render_examples(command)));
    }

    match command.node() {
        Node::Leaf { params, handler } => {
            let bindings = bind_params(command, params, tokens)?;
            run(command, handler, bindings)
        }
        Node::Router { children, handler } if children.is_empty() => match handler {
            Some(handler) => {
                let bindings = bind_params(command, &[], tokens)?;
                run(command, handler, bindings)
            }
            None => Err(DispatchError::NotRunnable {
                command: command.name().to_string(),
                help: command.help().to_string(),
            }),
        },
        Node::Router { .. } => match command.find_child(first) {
            Some(child) => visit(child, rest),
            None => {
                log::debug!("No child of '{}' matches '{}'", command.name(), first);
                Err(DispatchError::CommandNotFound {
                    token: first.clone(),
                })
            }
        },
    }
}

/// Feeds `tokens` through every parameter in declaration order into a fresh record.
fn bind_params(
    command: &Command,
    params: &[Param],
    tokens: &[String],
) -> Result<Bindings, DispatchError> {
    let mut bindings = Bindings::new();
    let mut remaining = tokens.to_vec();

    for param in params {
        remaining = param
            .consume(&remaining, &mut bindings)
            .map_err(|source| DispatchError::Param {
                name: param.name().to_string(),
                raw: bindings.raw(param.name()).map(str::to_string),
                source: source.into(),
            })?;
    }

    if !remaining.is_empty() {
        return Err(DispatchError::UnknownParams {
            command: command.name().to_string(),
            remaining,
        });
    }

    log::debug!("Bound for '{}': {:?}", command.name(), bindings);
    Ok(bindings)
}

fn run(command: &Command, handler: &Handler, bindings: Bindings) -> Result<Outcome, DispatchError> {
    log::debug!("Running handler for '{}'", command.name());
    handler(&bindings).map_err(|source| DispatchError::Handler {
        command: command.name().to_string(),
        source: source.into(),
    })?;
    Ok(Outcome::Handled(bindings))
}

// MARK: --- UNIT TESTS ---
