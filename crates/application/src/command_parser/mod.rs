//! Command parser - Parse chat lines into typed commands
//!
//! Matching is keyword based: the first word selects the command, the rest of
//! the line is passed through as the location argument with its casing intact.
//! See [`quick_patterns`] for the recognised keywords.

mod quick_patterns;

use std::fmt;

use domain::BotCommand;
use tracing::debug;

/// Prefix the chat framework uses to mark bot commands
const COMMAND_SYMBOL: char = '!';

/// Parser for converting chat lines to `BotCommand`
pub struct CommandParser {
    /// Patterns for keyword matching
    quick_patterns: Vec<QuickPattern>,
}

impl fmt::Debug for CommandParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandParser")
            .field("quick_patterns_count", &self.quick_patterns.len())
            .finish()
    }
}

/// A keyword pattern and the builder for its command
struct QuickPattern {
    /// Command words that trigger this pattern (lowercase)
    keywords: Vec<&'static str>,
    /// Function to build the command from the argument text
    builder: fn(&str) -> Option<BotCommand>,
}

impl CommandParser {
    /// Create a new command parser
    pub fn new() -> Self {
        Self {
            quick_patterns: Self::build_quick_patterns(),
        }
    }

    /// Parse a chat line into a command
    ///
    /// A leading command symbol (`!`) is ignored. Returns `None` if the first
    /// word is not a known command.
    pub fn parse(&self, input: &str) -> Option<BotCommand> {
        let input = input.trim();
        let input = input.strip_prefix(COMMAND_SYMBOL).unwrap_or(input);
        let (word, args) = match input.split_once(char::is_whitespace) {
            Some((word, args)) => (word, args.trim()),
            None => (input, ""),
        };
        let word = word.to_lowercase();

        for pattern in &self.quick_patterns {
            if pattern.keywords.contains(&word.as_str()) {
                if let Some(cmd) = (pattern.builder)(args) {
                    debug!(command = ?cmd, "Parsed command");
                    return Some(cmd);
                }
            }
        }

        None
    }

    /// All command words the parser recognises
    pub fn keywords(&self) -> Vec<&'static str> {
        self.quick_patterns
            .iter()
            .flat_map(|p| p.keywords.iter().copied())
            .collect()
    }
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new()
    }
}
