//! Conversational intents
//!
//! Computed once per request before any entity extraction. A matched intent
//! fully determines the reply and no filtering occurs for that turn; the
//! classifier signals "no intent" with `Option::None`.

use serde::{Deserialize, Serialize};

/// Fixed conversational intents recognized ahead of search interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationalIntent {
    /// Exact-phrase greeting ("hi", "hello", "howdy", ...)
    Greeting,
    /// "who are you", "what is your name"
    IdentityQuestion,
    /// "are you a bot", "are you real"
    BotRealnessQuestion,
    /// "who made you", "who created you"
    CreatorQuestion,
    /// "thanks", "thank you"
    Gratitude,
    /// "bye", "see you", "good night"
    Farewell,
    /// "good morning" / "good afternoon" / "good evening" inside a longer message
    TimeOfDayGreeting,
    /// "help", "what can you do", "how to use", "assist"
    HelpRequest,
    /// "my name is X", or a recognized given name with no other intent
    NameCapture(String),
}
