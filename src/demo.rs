// Registry of the runnable pattern demos.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use colored::Colorize;
use serde::Deserialize;
use tracing::info;

use crate::config::PatternsConfig;
use crate::error::{PatternError, Result};
use crate::{abstract_factory, command, decorator, factory_method, observer, singleton};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    AbstractFactory,
    Command,
    Decorator,
    FactoryMethod,
    Observer,
    Singleton,
}

impl Pattern {
    pub const ALL: [Pattern; 6] = [
        Pattern::AbstractFactory,
        Pattern::Command,
        Pattern::Decorator,
        Pattern::FactoryMethod,
        Pattern::Observer,
        Pattern::Singleton,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pattern::AbstractFactory => "abstract_factory",
            Pattern::Command => "command",
            Pattern::Decorator => "decorator",
            Pattern::FactoryMethod => "factory_method",
            Pattern::Observer => "observer",
            Pattern::Singleton => "singleton",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Pattern::AbstractFactory => "Abstract Factory",
            Pattern::Command => "Command",
            Pattern::Decorator => "Decorator",
            Pattern::FactoryMethod => "Factory Method",
            Pattern::Observer => "Observer",
            Pattern::Singleton => "Singleton",
        }
    }

    pub fn run(self, out: &mut dyn Write, config: &PatternsConfig) -> Result<()> {
        match self {
            Pattern::AbstractFactory => abstract_factory::run_demo(out),
            Pattern::Command => command::run_demo(out, config.remote_slots),
            Pattern::Decorator => decorator::run_demo(out),
            Pattern::FactoryMethod => factory_method::run_demo(out),
            Pattern::Observer => observer::run_demo(out),
            Pattern::Singleton => singleton::run_demo(out),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Pattern::ALL
            .into_iter()
            .find(|p| p.name() == wanted)
            .ok_or_else(|| PatternError::UnknownPattern(s.to_string()))
    }
}

/// Run every configured pattern in order, with an optional banner before each.
pub fn run_all(out: &mut dyn Write, config: &PatternsConfig) -> Result<()> {
    for (i, pattern) in config.patterns.iter().copied().enumerate() {
        if config.banner {
            if i > 0 {
                writeln!(out)?;
            }
            let banner = format!("=== {} ===", pattern.title());
            writeln!(out, "{}", banner.bold().cyan())?;
        }
        info!(pattern = %pattern, "running demo");
        pattern.run(out, config)?;
    }
    info!(count = config.patterns.len(), "all demos finished");
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
