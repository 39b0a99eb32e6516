//! User-facing console output
//!
//! Progress and status lines go to stdout, optionally colored. Diagnostics go
//! through `tracing` to stderr instead.

use std::io::Write;

use crossterm::style::Stylize;

/// Kind of message, which decides its color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Plain information (blue)
    Info,
    /// Per-post progress (green)
    Progress,
    /// Final success line (bold green)
    Success,
    /// Fatal error (bold red)
    Error,
}

/// Prints status and progress lines
#[derive(Debug, Clone, Copy)]
pub struct Console {
    colors: bool,
}

impl Console {
    /// Console printing with or without ANSI colors
    pub const fn new(colors: bool) -> Self {
        Self { colors }
    }

    /// Whether output is colored
    pub const fn colors(&self) -> bool {
        self.colors
    }

    /// `text` styled for `tone`, or unchanged when colors are off
    pub fn paint(&self, tone: Tone, text: &str) -> String {
        if !self.colors {
            return text.to_string();
        }
        match tone {
            Tone::Info => text.blue().to_string(),
            Tone::Progress => text.green().to_string(),
            Tone::Success => text.green().bold().to_string(),
            Tone::Error => text.red().bold().to_string(),
        }
    }

    /// Print a full line
    pub fn line(&self, tone: Tone, text: &str) {
        if tone == Tone::Error {
            eprintln!("{}", self.paint(tone, text));
        } else {
            println!("{}", self.paint(tone, text));
        }
    }

    /// Overwrite the current line with a progress message
    pub fn progress(&self, text: &str) {
        let mut out = std::io::stdout().lock();
        let _ = write!(out, "\r{}", self.paint(Tone::Progress, text));
        let _ = out.flush();
    }

    /// End a run of progress messages
    pub fn finish_progress(&self) {
        println!();
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_without_colors() {
        let console = Console::new(false);
        assert_eq!(console.paint(Tone::Error, "boom"), "boom");
        assert_eq!(console.paint(Tone::Progress, "Getting post 1"), "Getting post 1");
    }

    #[test]
    fn test_colored_output_wraps_text() {
        let console = Console::new(true);
        let painted = console.paint(Tone::Success, "done");
        assert!(painted.contains("done"));
        assert!(painted.starts_with("\u{1b}["));
        assert_ne!(painted, "done");
    }
}
