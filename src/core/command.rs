//! Opaque executable commands.
//!
//! A [`Command`] describes one thing to execute: a program, its arguments,
//! and environment overrides. The engine only ever builds commands - running
//! them (and deciding what "failure" means) is the caller's job.

use std::collections::BTreeMap;
use std::fmt;

/// One externally executable unit, produced for a single lifecycle step.
///
/// Commands are built on demand, never cached, and never mutated after
/// creation by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    program: String,
    args: Vec<String>,
    env: BTreeMap<String, String>,
    description: String,
}

impl Command {
    /// Create a new command for the given program.
    pub fn new(program: impl Into<String>) -> Self {
        Command {
            program: program.into(),
            args: Vec::new(),
            env: BTreeMap::new(),
            description: String::new(),
        }
    }

    /// Wrap a shell script in `bash -c`.
    pub fn shell(script: impl Into<String>) -> Self {
        Command::new("bash").arg("-c").arg(script)
    }

    /// Add a single argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set an environment variable override.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Attach a human-readable description of what this command does.
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Get the program.
    pub fn get_program(&self) -> &str {
        &self.program
    }

    /// Get the arguments.
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Get the environment overrides.
    pub fn get_env(&self) -> &BTreeMap<String, String> {
        &self.env
    }

    /// Get the description, empty if none was attached.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Render the command line for logs and error messages.
    pub fn display_command(&self) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_command())
    }
}
