//! External command execution
//!
//! Commands are run through `/bin/sh -c` and only their standard output is
//! kept. A nonzero exit status is not an error; callers inspect the text.

use crate::error::{Error, Result};
use std::process::{Command, Stdio};

/// Runs a shell command line and captures its standard output
pub trait CommandRunner {
    /// Run `command_line` and return everything it wrote to stdout
    fn run(&self, command_line: &str) -> Result<String>;
}

/// [`CommandRunner`] backed by `/bin/sh`
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: String,
}

impl ShellRunner {
    pub fn new() -> Self {
        Self {
            shell: "/bin/sh".to_string(),
        }
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command_line: &str) -> Result<String> {
        debug!("Running '{}'", command_line);
        let output = Command::new(&self.shell)
            .arg("-c")
            .arg(command_line)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output()
            .map_err(|e| Error::CommandSpawnFailed {
                command: command_line.to_string(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            debug!("'{}' exited with {}", command_line, output.status);
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Get the full command line of a process from the process listing
pub fn command_line_for_pid(runner: &dyn CommandRunner, pid: u32) -> Result<String> {
    let output = runner.run(&format!("/bin/ps -o args= -p {}", pid))?;
    Ok(output.trim_end_matches(['\n', '\r']).to_string())
}

/// Quote an argument so the shell passes it through as a single word
pub fn shell_quote(arg: &str) -> String {
    let is_plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "@%+=:,./-_".contains(c));
    if is_plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}
