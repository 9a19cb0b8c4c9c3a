// src/core/help.rs

//! Usage and example text for a command subtree.
//!
//! Both renderers walk the tree depth-first in pre-order, accumulating the
//! full command path (`spotctl show artist`) as they descend. They only build
//! strings; printing and exiting is left to the caller.

use crate::core::command::Command;
use colored::Colorize;

/// Renders `prefix+name -- help` for every node of the subtree, followed by
/// one indented `param :: help` line per parameter of a leaf.
pub fn render_usage(command: &Command) -> String {
    let mut out = String::new();
    visit_usage(command, "", &mut out);
    out
}

fn visit_usage(command: &Command, prefix: &str, out: &mut String) {
    let full_name = format!("{}{}", prefix, command.name());
    let aliases = if command.aliases().is_empty() {
        String::new()
    } else {
        format!(" ({})", command.aliases().join(", "))
            .dimmed()
            .to_string()
    };
    out.push_str(&format!(
        "{}{} -- {}\n",
        full_name.green(),
        aliases,
        command.help()
    ));

    for param in command.params() {
        let aliases = if param.aliases().is_empty() {
            String::new()
        } else {
            format!(" ({})", param.aliases().join(", "))
        };
        out.push_str(&format!(
            "    {}{} :: {}\n",
            param.name().blue(),
            aliases,
            param.help()
        ));
    }

    let child_prefix = format!("{} ", full_name);
    for child in command.children() {
        visit_usage(child, &child_prefix, out);
    }
}

/// Renders every example of the subtree as the full invocation line, an
/// optional `# comment`, and the description indented underneath.
/// Returns an empty string when the subtree has no examples.
pub fn render_examples(command: &Command) -> String {
    let mut out = String::new();
    visit_examples(command, "", &mut out);
    out
}

fn visit_examples(command: &Command, prefix: &str, out: &mut String) {
    let full_name = format!("{}{}", prefix, command.name());

    for example in command.examples() {
        let invocation = if example.args.is_empty() {
            full_name.clone()
        } else {
            format!("{} {}", full_name, example.args.join(" "))
        };
        let invocation = if example.negative {
            invocation.red()
        } else {
            invocation.green()
        };
        let comment = example
            .comment
            .as_ref()
            .map(|c| format!(" # {}", c).yellow().to_string())
            .unwrap_or_default();
        out.push_str(&format!("{}{}\n  {}\n\n", invocation, comment, example.desc));
    }

    let child_prefix = format!("{} ", full_name);
    for child in command.children() {
        visit_examples(child, &child_prefix, out);
    }
}
