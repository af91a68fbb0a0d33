//! Conversational classifier
//!
//! Checks a message against the fixed conversational intents before any
//! search interpretation. Precedence is load-bearing and mirrors production
//! behavior exactly: the exact-phrase greeting table first, then name
//! capture, then the substring intents. Greetings are whole-message matches
//! so that longer search queries never trip them.

use propbot_config::ReplyTable;
use propbot_core::ConversationalIntent;
use unicode_segmentation::UnicodeSegmentation;

use crate::normalize::NormalizedMessage;
use crate::vocab::GIVEN_NAMES;

/// A resolved conversational turn: the intent plus the reply it determines.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedReply {
    pub intent: ConversationalIntent,
    pub reply: String,
}

/// Classify a message, returning the canned reply when a conversational
/// intent matches. `None` means the message should be interpreted as a
/// search query.
pub fn classify(table: &ReplyTable, msg: &NormalizedMessage) -> Option<ClassifiedReply> {
    let text = msg.normalized.as_str();

    // 1. Exact-phrase greetings, first match wins.
    if let Some(reply) = table.greeting_reply(msg.phrase_key()) {
        return Some(ClassifiedReply {
            intent: ConversationalIntent::Greeting,
            reply: reply.to_string(),
        });
    }

    // 2. Name capture: the explicit phrase, or a recognized given name.
    if let Some(name) = capture_name(msg) {
        let reply = table
            .fixed
            .name_greeting
            .replace("{name}", &capitalize(&name));
        return Some(ClassifiedReply {
            intent: ConversationalIntent::NameCapture(name),
            reply,
        });
    }

    // 3. Substring intents, in fixed order.
    let fixed = &table.fixed;
    let (intent, reply) = if text.contains("who are you") || text.contains("what is your name") {
        (ConversationalIntent::IdentityQuestion, &fixed.identity)
    } else if text.contains("are you a bot") || text.contains("are you real") {
        (ConversationalIntent::BotRealnessQuestion, &fixed.bot_realness)
    } else if text.contains("who made you") || text.contains("who created you") {
        (ConversationalIntent::CreatorQuestion, &fixed.creator)
    } else if text.contains("thank you so much") || text.contains("thanks a lot") {
        (ConversationalIntent::Gratitude, &fixed.gratitude_strong)
    } else if text.contains("thank you") || text.contains("thanks") {
        (ConversationalIntent::Gratitude, &fixed.gratitude)
    } else if text.contains("bye") || text.contains("see you") || text.contains("good night") {
        (ConversationalIntent::Farewell, &fixed.farewell)
    } else if text.contains("good morning") {
        (ConversationalIntent::TimeOfDayGreeting, &fixed.good_morning)
    } else if text.contains("good afternoon") {
        (ConversationalIntent::TimeOfDayGreeting, &fixed.good_afternoon)
    } else if text.contains("good evening") {
        (ConversationalIntent::TimeOfDayGreeting, &fixed.good_evening)
    } else if text.contains("help")
        || text.contains("what can you do")
        || text.contains("how to use")
        || text.contains("assist")
    {
        (ConversationalIntent::HelpRequest, &fixed.help)
    } else {
        return None;
    };

    Some(ClassifiedReply {
        intent,
        reply: reply.clone(),
    })
}

/// Extract a personal name: "my name is X" takes the next token; otherwise
/// any token from the given-name table counts.
fn capture_name(msg: &NormalizedMessage) -> Option<String> {
    if let Some(after) = msg.normalized.split("my name is").nth(1) {
        let name = after
            .trim()
            .unicode_words()
            .next()
            .map(|w| w.to_string())?;
        if !name.is_empty() {
            return Some(name);
        }
    }

    msg.normalized
        .unicode_words()
        .find(|w| GIVEN_NAMES.contains(w))
        .map(|w| w.to_string())
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
