//! src/reporter.rs

use colored::Colorize;

/// How a status line should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Skipped,
    Info,
}

/// Sink for the human-readable status lines produced by each command.
pub trait Reporter {
    fn report(&mut self, tone: Tone, message: &str);

    fn success(&mut self, message: &str) {
        self.report(Tone::Success, message);
    }

    fn skipped(&mut self, message: &str) {
        self.report(Tone::Skipped, message);
    }

    fn info(&mut self, message: &str) {
        self.report(Tone::Info, message);
    }
}

/// Prints status lines to stdout.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&mut self, tone: Tone, message: &str) {
        match tone {
            Tone::Success => println!("{}", message.green()),
            Tone::Skipped => println!("{}", message.yellow()),
            Tone::Info => println!("{message}"),
        }
    }
}

/// Collects status lines in memory.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryReporter {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl MemoryReporter {
    pub fn output(&self) -> String {
        self.lines.join("\n")
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

#[cfg(test)]
impl Reporter for MemoryReporter {
    fn report(&mut self, _tone: Tone, message: &str) {
        self.lines.push(message.to_string());
    }
}
