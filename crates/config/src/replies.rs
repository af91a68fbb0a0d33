//! Conversational reply table
//!
//! An ordered list of phrase/reply pairs evaluated first-match-wins, plus the
//! fixed replies for identity, gratitude, farewell and help intents. The
//! compiled-in defaults are the canonical reply set; a YAML file can replace
//! them wholesale for copy edits without a rebuild.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One greeting entry: any of `phrases` (whole-message match after
/// normalization) produces `reply`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GreetingEntry {
    pub phrases: Vec<String>,
    pub reply: String,
}

/// Replies for the non-greeting conversational intents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedReplies {
    /// "who are you", "what is your name"
    pub identity: String,
    /// "are you a bot", "are you real"
    pub bot_realness: String,
    /// "who made you", "who created you"
    pub creator: String,
    /// "thank you so much", "thanks a lot"
    pub gratitude_strong: String,
    /// "thank you", "thanks"
    pub gratitude: String,
    /// "bye", "see you", "good night"
    pub farewell: String,
    /// Time-of-day greetings inside a longer message
    pub good_morning: String,
    pub good_afternoon: String,
    pub good_evening: String,
    /// "help", "what can you do", "how to use", "assist"
    pub help: String,
    /// Name capture; `{name}` is replaced with the capitalized name
    pub name_greeting: String,
}

/// The full reply table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyTable {
    #[serde(default = "default_greetings")]
    pub greetings: Vec<GreetingEntry>,
    #[serde(default = "default_fixed")]
    pub fixed: FixedReplies,
}

impl Default for ReplyTable {
    fn default() -> Self {
        Self {
            greetings: default_greetings(),
            fixed: default_fixed(),
        }
    }
}

impl ReplyTable {
    /// Load a reply table from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_str = path.as_ref().display().to_string();
        let content = std::fs::read_to_string(path.as_ref()).map_err(|source| {
            ConfigError::ReplyIo {
                path: path_str.clone(),
                source,
            }
        })?;
        serde_yaml::from_str(&content).map_err(|source| ConfigError::ReplyParse {
            path: path_str,
            source,
        })
    }

    /// Look up an exact-phrase greeting reply for a normalized message.
    /// Entries are checked in declaration order, first match wins.
    pub fn greeting_reply(&self, normalized: &str) -> Option<&str> {
        self.greetings
            .iter()
            .find(|entry| entry.phrases.iter().any(|p| p == normalized))
            .map(|entry| entry.reply.as_str())
    }
}

fn entry(phrases: &[&str], reply: &str) -> GreetingEntry {
    GreetingEntry {
        phrases: phrases.iter().map(|p| p.to_string()).collect(),
        reply: reply.to_string(),
    }
}

fn default_greetings() -> Vec<GreetingEntry> {
    vec![
        entry(&["hi"], "Hi! How can I help you with your property search today?"),
        entry(&["hello"], "Hello! Welcome to PropBot. How can I assist you?"),
        entry(&["hey"], "Hey there! Ready to find your dream home?"),
        entry(
            &["good morning"],
            "Good morning! How can I help you start your property journey today?",
        ),
        entry(
            &["good afternoon"],
            "Good afternoon! Looking for a new place? I'm here to help.",
        ),
        entry(
            &["good evening"],
            "Good evening! How can I assist you with properties tonight?",
        ),
        entry(
            &["how are you"],
            "Hello! I'm fine, thank you. How are you? Ready to explore some properties?",
        ),
        entry(
            &["what's up", "whats up"],
            "All good here! How can I help you with your property needs?",
        ),
        entry(&["yo"], "Yo! Looking for a new home or investment?"),
        entry(&["yup"], "Hey! How can I help you today?"),
        entry(&["namaste"], "Namaste! How can I assist you in your property search?"),
        entry(&["salaam"], "Salaam! How can I help you today?"),
        entry(
            &["good night"],
            "Good night! If you need property info, I'm always here.",
        ),
        entry(&["hey there"], "Hey there! How can I help you with properties?"),
        entry(&["hello there"], "Hello there! How can I assist you?"),
        entry(&["howdy"], "Howdy! Looking for a new place?"),
        entry(&["greetings"], "Greetings! How can I help you today?"),
        entry(&["bonjour"], "Bonjour! How can I help you with your property search?"),
        entry(&["hola"], "Hola! How can I help you with your property search?"),
        entry(
            &["hey bot", "hello bot"],
            "Hey! I'm PropBot, your property assistant. How can I help?",
        ),
        entry(
            &["how are you doing"],
            "I'm doing great, thank you! How can I help you today?",
        ),
        entry(
            &["how is it going"],
            "It's going well! How can I assist you with properties?",
        ),
        entry(
            &["how's it going"],
            "All good here! How can I help you with your property needs?",
        ),
        entry(
            &["what's new", "whats new"],
            "I'm always learning new things about properties! How can I help you today?",
        ),
        entry(&["yo bot"], "Yo! I'm PropBot. Ready to help you find a home."),
        entry(
            &["hey propbot", "hello propbot", "hi propbot"],
            "Hey! I'm PropBot. How can I help you today?",
        ),
        entry(
            &["hey assistant", "hello assistant", "hi assistant"],
            "Hey! I'm your property assistant. How can I help?",
        ),
        entry(
            &["how are you propbot", "how are you assistant"],
            "I'm great, thank you! How can I help you today?",
        ),
        entry(
            &["how are you doing propbot", "how are you doing assistant"],
            "I'm doing well, thank you! How can I help you today?",
        ),
        entry(&["how are you today"], "I'm good, thank you! How can I help you today?"),
        entry(
            &["how are you feeling"],
            "I'm feeling great and ready to help you!",
        ),
        entry(&["how's your day"], "My day is going well! How can I help you?"),
        entry(&["how's your night"], "My night is going well! How can I help you?"),
        entry(
            &["how's your morning"],
            "My morning is going well! How can I help you?",
        ),
        entry(
            &["how's your afternoon"],
            "My afternoon is going well! How can I help you?",
        ),
        entry(
            &["how's your evening"],
            "My evening is going well! How can I help you?",
        ),
    ]
}

fn default_fixed() -> FixedReplies {
    FixedReplies {
        identity: "I am PropBot, your professional property assistant developed by \
                   agent Mira. I can help you find properties based on your preferences."
            .to_string(),
        bot_realness: "Yes, I'm an AI-powered assistant here to help you with all your \
                       property needs!"
            .to_string(),
        creator: "I was developed by agent Mira to help users like you find the perfect \
                  property."
            .to_string(),
        gratitude_strong: "You're very welcome! If you need more help, just ask.".to_string(),
        gratitude: "You're welcome! Let me know if you need anything else.".to_string(),
        farewell: "Goodbye! Have a great day! If you need property info, I'm always here."
            .to_string(),
        good_morning: "Good morning! How can I help you start your property journey today?"
            .to_string(),
        good_afternoon: "Good afternoon! Looking for a new place? I'm here to help.".to_string(),
        good_evening: "Good evening! How can I assist you with properties tonight?".to_string(),
        help: "You can ask me to find properties by location, price, amenities, or any \
               feature you want! Try messages like 'Show me apartments in Dallas under \
               $500,000' or 'Find villas with a swimming pool.'"
            .to_string(),
        name_greeting: "Nice to meet you, {name}! How can I assist you in finding your \
                        ideal property?"
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_lookup_is_whole_message() {
        let table = ReplyTable::default();
        assert!(table.greeting_reply("hi").is_some());
        // "hi there" is deliberately not in the table; longer messages fall
        // through to search interpretation.
        assert!(table.greeting_reply("hi there").is_none());
    }

    #[test]
    fn first_match_wins_order() {
        let table = ReplyTable::default();
        let reply = table.greeting_reply("hey").unwrap();
        assert_eq!(reply, "Hey there! Ready to find your dream home?");
    }

    #[test]
    fn yaml_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("replies.yaml");
        std::fs::write(
            &path,
            "greetings:\n  - phrases: [\"hi\"]\n    reply: \"custom hi\"\n",
        )
        .unwrap();

        let table = ReplyTable::load(&path).unwrap();
        assert_eq!(table.greeting_reply("hi"), Some("custom hi"));
        // Missing sections fall back to the defaults.
        assert!(table.fixed.help.contains("Dallas"));
    }
}
