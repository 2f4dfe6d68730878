//! Built-in REPL commands prefixed with `/`.
//!
//! Commands implement the [`Command`] trait and are registered in a
//! [`CommandRegistry`]. The registry handles dispatch, alias resolution,
//! and help generation. Anything that is not a command is draft text.

mod append;
mod clear;
mod copy;
mod help;
mod model;
mod quit;
mod rewrite;
mod show;
mod status;
mod theme;

use async_trait::async_trait;
use std::sync::Arc;

use crate::rewrite::RewriteMode;
use crate::session::Session;

pub use model::switch_model;

/// Read-only facts about the running session that commands may display.
pub struct SessionInfo<'a> {
    pub auth_status: &'a str,
    pub store: &'a str,
}

/// A state change the REPL needs to apply after a command runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateChange {
    /// Switch to a new model ID.
    Model(String),
}

/// What the REPL should do after a command runs.
pub enum CommandResult {
    /// Not a command; treat the input as draft text.
    NotACommand,
    /// Command handled, continue the REPL loop.
    Handled,
    /// Command produced a state change the REPL must apply.
    StateChanged(StateChange),
    /// Exit the REPL.
    Quit,
}

/// A REPL command. Implement this trait to add new commands.
#[async_trait]
pub trait Command: Send + Sync {
    /// Primary name, e.g. `"/expand"`.
    fn name(&self) -> &str;

    /// Alternative names. Bare words (no `/`) only match a whole line.
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// Argument hint for `/help`, e.g. `"<text>"`.
    fn usage(&self) -> &str {
        ""
    }

    /// One-line description for `/help`.
    fn description(&self) -> &str;

    /// Run the command. `args` is everything after the command name, trimmed.
    async fn execute(
        &self,
        args: &str,
        session: &mut Session,
        info: &SessionInfo<'_>,
    ) -> CommandResult;
}

/// Holds registered commands.
pub struct CommandRegistry {
    commands: Vec<Arc<dyn Command>>,
}

impl CommandRegistry {
    /// Create a registry with all built-in commands.
    pub fn new() -> Self {
        let mut commands: Vec<Arc<dyn Command>> = vec![
            Arc::new(help::HelpCommand),
            Arc::new(show::ShowCommand),
            Arc::new(append::AppendCommand),
            Arc::new(clear::ClearCommand),
        ];
        for mode in RewriteMode::all() {
            commands.push(Arc::new(rewrite::RewriteCommand::new(mode)));
        }
        commands.extend([
            Arc::new(copy::CopyCommand) as Arc<dyn Command>,
            Arc::new(theme::ThemeCommand),
            Arc::new(model::ModelCommand),
            Arc::new(status::StatusCommand),
            Arc::new(quit::QuitCommand),
        ]);
        Self { commands }
    }

    /// Register an additional command.
    pub fn register(&mut self, command: Arc<dyn Command>) {
        self.commands.push(command);
    }

    /// Dispatch input to a matching command, or return `NotACommand`.
    pub async fn dispatch(
        &self,
        input: &str,
        session: &mut Session,
        info: &SessionInfo<'_>,
    ) -> CommandResult {
        let (cmd, args) = split_command(input);

        for command in &self.commands {
            if cmd == command.name() || command.aliases().contains(&cmd) {
                // /help needs the registry itself
                if command.name() == "/help" {
                    print!("{}", self.help_text());
                    return CommandResult::Handled;
                }
                tracing::debug!(command = command.name(), "dispatching");
                return command.execute(args, session, info).await;
            }
        }

        if cmd.starts_with('/') {
            println!("unknown command: {cmd}");
            println!("type /help for available commands");
            return CommandResult::Handled;
        }

        CommandResult::NotACommand
    }

    /// Generate help text from all registered commands.
    pub fn help_text(&self) -> String {
        let entries: Vec<(String, &str)> = self
            .commands
            .iter()
            .map(|c| (format_label(c.name(), c.usage(), c.aliases()), c.description()))
            .collect();

        let max_width = entries
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(10);

        let mut out = String::new();
        for (label, desc) in &entries {
            out.push_str(&format!("  {label:<max_width$}  {desc}\n"));
        }
        out.push_str("\n  anything else replaces the draft text\n");
        out
    }

    /// All registered command names.
    pub fn names(&self) -> Vec<&str> {
        self.commands.iter().map(|c| c.name()).collect()
    }

    /// All registered names and aliases (for duplicate detection).
    pub fn all_triggers(&self) -> Vec<&str> {
        let mut triggers = Vec::new();
        for cmd in &self.commands {
            triggers.push(cmd.name());
            triggers.extend_from_slice(cmd.aliases());
        }
        triggers
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Slash input splits into name and args. Other input is matched whole, so
/// a draft that merely starts with "quit" is still a draft.
fn split_command(input: &str) -> (&str, &str) {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return (trimmed, "");
    }
    match trimmed.split_once(char::is_whitespace) {
        Some((cmd, args)) => (cmd, args.trim()),
        None => (trimmed, ""),
    }
}

fn format_label(name: &str, usage: &str, aliases: &[&str]) -> String {
    let mut label = name.to_string();
    if !usage.is_empty() {
        label.push(' ');
        label.push_str(usage);
    }
    if !aliases.is_empty() {
        label.push_str(&format!(" ({})", aliases.join(", ")));
    }
    label
}
