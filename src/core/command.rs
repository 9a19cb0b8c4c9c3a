// src/core/command.rs

use crate::{
    core::params::Param,
    models::{Bindings, Example},
};
use anyhow::Result;
use std::{collections::HashSet, fmt};
use thiserror::Error;

/// A runnable command body. It receives everything the leaf's parameters bound.
pub type Handler = Box<dyn Fn(&Bindings) -> Result<()>>;

/// Configuration mistakes caught by [`Command::validate`] before any dispatch.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TreeError {
    /// Two children of `parent` answer to `name`.
    #[error("'{name}' is used by more than one subcommand of '{parent}'")]
    DuplicateCommand {
        /// Space-separated path of the parent.
        parent: String,
        /// The colliding name or alias.
        name: String,
    },
    /// Two parameters of `command` answer to `name`.
    #[error("'{name}' is used by more than one parameter of '{command}'")]
    DuplicateParam {
        /// Space-separated path of the leaf.
        command: String,
        /// The colliding name or alias.
        name: String,
    },
}

/// What a node does once the walk reaches it.
pub enum Node {
    /// Routes the next token to one of its children. The optional handler runs
    /// when the walk ends here with no tokens left. A router with neither
    /// children nor a handler is a placeholder that only produces its help.
    Router {
        children: Vec<Command>,
        handler: Option<Handler>,
    },
    /// Consumes the remaining tokens through its parameters, then runs.
    Leaf { params: Vec<Param>, handler: Handler },
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Router { children, handler } => f
                .debug_struct("Router")
                .field("children", children)
                .field("has_handler", &handler.is_some())
                .finish(),
            Self::Leaf { params, .. } => f
                .debug_struct("Leaf")
                .field("params", params)
                .finish_non_exhaustive(),
        }
    }
}

/// A named, possibly aliased node of the static command tree.
#[derive(Debug)]
pub struct Command {
    name: String,
    aliases: Vec<String>,
    help: String,
    examples: Vec<Example>,
    node: Node,
}

impl Command {
    /// An interior node routing to `children`.
    pub fn router(name: impl Into<String>, help: impl Into<String>, children: Vec<Self>) -> Self {
        Self::with_node(
            name,
            help,
            Node::Router {
                children,
                handler: None,
            },
        )
    }

    /// A node that exists only to describe itself; it has nothing to run.
    pub fn placeholder(name: impl Into<String>, help: impl Into<String>) -> Self {
        Self::router(name, help, Vec::new())
    }

    /// A runnable node with the given parameters, consumed in declaration order.
    pub fn leaf(
        name: impl Into<String>,
        help: impl Into<String>,
        params: Vec<Param>,
        handler: impl Fn(&Bindings) -> Result<()> + 'static,
    ) -> Self {
        Self::with_node(
            name,
            help,
            Node::Leaf {
                params,
                handler: Box::new(handler),
            },
        )
    }

    fn with_node(name: impl Into<String>, help: impl Into<String>, node: Node) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            help: help.into(),
            examples: Vec::new(),
            node,
        }
    }

    /// Adds another name this command answers to.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Appends an example shown by `--examples`.
    pub fn example(mut self, example: Example) -> Self {
        self.examples.push(example);
        self
    }

    /// Sets the handler: the fallback of a router, or the body of a leaf.
    pub fn with_handler(mut self, handler: impl Fn(&Bindings) -> Result<()> + 'static) -> Self {
        match &mut self.node {
            Node::Router { handler: slot, .. } => *slot = Some(Box::new(handler)),
            Node::Leaf { handler: slot, .. } => *slot = Box::new(handler),
        }
        self
    }

    /// The canonical name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Alternative names in declaration order.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// One-line description shown in usage.
    pub fn help(&self) -> &str {
        &self.help
    }

    /// Examples declared on this node only.
    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    /// Whether this is a router or a leaf.
    pub fn node(&self) -> &Node {
        &self.node
    }

    /// Subcommands in declaration order. Always empty for a leaf.
    pub fn children(&self) -> &[Self] {
        match &self.node {
            Node::Router { children, .. } => children,
            Node::Leaf { .. } => &[],
        }
    }

    /// Declared parameters. Always empty for a router.
    pub fn params(&self) -> &[Param] {
        match &self.node {
            Node::Router { .. } => &[],
            Node::Leaf { params, .. } => params,
        }
    }

    /// The handler that runs when the walk ends here, if any.
    pub fn handler(&self) -> Option<&Handler> {
        match &self.node {
            Node::Router { handler, .. } => handler.as_ref(),
            Node::Leaf { handler, .. } => Some(handler),
        }
    }

    /// Name first, then aliases in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    /// True when `token` is the name or one of the aliases.
    pub fn matches(&self, token: &str) -> bool {
        self.names().any(|name| name == token)
    }

    /// The first child, in declaration order, whose name or alias is `token`.
    pub fn find_child(&self, token: &str) -> Option<&Self> {
        self.children().iter().find(|child| child.matches(token))
    }

    /// Every command path in pre-order, segments joined by `:`.
    pub fn paths(&self) -> Vec<String> {
        fn visit(command: &Command, prefix: &str, out: &mut Vec<String>) {
            let path = format!("{}{}", prefix, command.name);
            let child_prefix = format!("{}:", path);
            out.push(path);
            for child in command.children() {
                visit(child, &child_prefix, out);
            }
        }

        let mut out = Vec::new();
        visit(self, "", &mut out);
        out
    }

    /// Rejects name collisions among siblings and among a leaf's parameters.
    pub fn validate(&self) -> Result<(), TreeError> {
        self.validate_at(&self.name)
    }

    fn validate_at(&self, path: &str) -> Result<(), TreeError> {
        let mut seen = HashSet::new();
        for name in self.children().iter().flat_map(Self::names) {
            if !seen.insert(name) {
                return Err(TreeError::DuplicateCommand {
                    parent: path.to_string(),
                    name: name.to_string(),
                });
            }
        }

        let mut seen = HashSet::new();
        for name in self.params().iter().flat_map(Param::names) {
            if !seen.insert(name) {
                return Err(TreeError::DuplicateParam {
                    command: path.to_string(),
                    name: name.to_string(),
                });
            }
        }

        for child in self.children() {
            child.validate_at(&format!("{} {}", path, child.name))?;
        }
        Ok(())
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.paths().join("\n"))
    }
}
