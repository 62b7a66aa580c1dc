//! Invocation context
//!
//! Everything a component needs from the outside world (environment
//! variables and a way to run external commands) is carried by a
//! [`Context`] built once at start-up and passed down explicitly.

use crate::execution::{CommandRunner, ShellRunner};
use std::collections::HashMap;

/// Snapshot of environment variables
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    vars: HashMap<String, String>,
}

impl Environment {
    /// Capture the current process environment
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Build an environment from explicit pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Look up a variable; empty values count as unset
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Set or replace a variable
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }
}

/// Explicit context threaded through every component
pub struct Context {
    env: Environment,
    runner: Box<dyn CommandRunner>,
}

impl Context {
    /// Context backed by the real process environment and `/bin/sh`
    pub fn from_process() -> Self {
        Self::new(Environment::from_process(), Box::new(ShellRunner::new()))
    }

    /// Context with an injected environment and runner
    pub fn new(env: Environment, runner: Box<dyn CommandRunner>) -> Self {
        Self { env, runner }
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn runner(&self) -> &dyn CommandRunner {
        self.runner.as_ref()
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context").field("env", &self.env).finish()
    }
}
