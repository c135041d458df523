//! # Terminal Rendering
//!
//! File: cli/src/chat/render.rs
//!
//! Formats chat messages as single terminal lines, using the `[shell]`
//! settings from the configuration.
//!
use super::message::{ChatMessage, Sender};
use crate::core::config::ShellConfig;

/// Renders `[HH:MM:SS] Label: text`, or `Label: text` without timestamps.
pub fn render_message(message: &ChatMessage, shell: &ShellConfig) -> String {
    let label = match message.sender() {
        Sender::User => &shell.user_label,
        Sender::Bot => &shell.bot_label,
    };
    if shell.show_timestamps {
        format!(
            "[{}] {}: {}",
            message.created_at().format(&shell.timestamp_format),
            label,
            message.text()
        )
    } else {
        format!("{}: {}", label, message.text())
    }
}

/// The two-line banner printed above the conversation.
pub fn header() -> String {
    "JFLYZ AI\nJamesFlyzone Partner".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_without_timestamps() {
        let shell = ShellConfig {
            show_timestamps: false,
            ..Default::default()
        };
        assert_eq!(
            render_message(&ChatMessage::from_user("yo"), &shell),
            "You: yo"
        );
        assert_eq!(
            render_message(&ChatMessage::from_bot("Let's build! 🔥"), &shell),
            "Jflyz: Let's build! 🔥"
        );
    }

    #[test]
    fn renders_timestamp_prefix() {
        let shell = ShellConfig {
            user_label: "James".into(),
            timestamp_format: "%Y".into(),
            ..Default::default()
        };
        let message = ChatMessage::from_user("drop date?");
        let expected = format!("[{}] James: drop date?", message.created_at().format("%Y"));
        assert_eq!(render_message(&message, &shell), expected);
    }
}
