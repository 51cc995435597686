//! Keyword patterns for the weather commands

use domain::BotCommand;

use super::{CommandParser, QuickPattern};

impl CommandParser {
    /// Build the list of quick-match patterns
    pub(super) fn build_quick_patterns() -> Vec<QuickPattern> {
        vec![
            // Current weather
            QuickPattern {
                keywords: vec!["weather", "oweather"],
                builder: |args| {
                    Some(BotCommand::CurrentWeather {
                        location: args.to_string(),
                    })
                },
            },
            // Forecast
            QuickPattern {
                keywords: vec!["forecast"],
                builder: |args| {
                    Some(BotCommand::Forecast {
                        location: args.to_string(),
                    })
                },
            },
            // Help command
            QuickPattern {
                keywords: vec!["help", "?"],
                builder: |args| {
                    let topic = args.trim().to_lowercase();
                    Some(BotCommand::Help {
                        command: if topic.is_empty() { None } else { Some(topic) },
                    })
                },
            },
        ]
    }
}
