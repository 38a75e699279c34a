//! Message formatting utilities for client display.

use chatrelay_server::infrastructure::dto::websocket::{ChatMessageInfo, ParticipantInfo};
use chatrelay_shared::time::timestamp_to_rfc3339;

const SECTION_RULE: &str = "============================================================";
const MESSAGE_RULE: &str = "------------------------------------------------------------";

/// Shown for participants and authors without a display name
const ANONYMOUS: &str = "(anonymous)";

/// Message formatter for client display
pub struct MessageFormatter;

impl MessageFormatter {
    /// Format the message log replayed right after connecting
    pub fn format_message_log(messages: &[ChatMessageInfo]) -> String {
        let mut output = String::new();
        output.push_str(&format!("\n\n{}\n", SECTION_RULE));
        output.push_str("Message log:\n");

        if messages.is_empty() {
            output.push_str("(No messages)\n");
        } else {
            for message in messages {
                output.push_str(&format!(
                    "[{}] @{}: {}\n",
                    timestamp_to_rfc3339(message.timestamp),
                    message.author.as_deref().unwrap_or(ANONYMOUS),
                    message.text.as_deref().unwrap_or_default()
                ));
            }
        }

        output.push_str(&format!("{}\n", SECTION_RULE));
        output
    }

    /// Format the participant list, marking entries carrying our own name
    ///
    /// Names are not unique, so every entry with `current_name` gets the mark.
    pub fn format_participant_list(participants: &[ParticipantInfo], current_name: &str) -> String {
        let mut output = String::new();
        output.push_str(&format!("\n\n{}\n", SECTION_RULE));
        output.push_str("Participants:\n");

        if participants.is_empty() {
            output.push_str("(No participants)\n");
        } else {
            for participant in participants {
                let name = participant.name.as_deref();
                let me_suffix = if name == Some(current_name) {
                    " (me)"
                } else {
                    ""
                };
                output.push_str(&format!(
                    "{}{} - connected at {}\n",
                    name.unwrap_or(ANONYMOUS),
                    me_suffix,
                    timestamp_to_rfc3339(participant.connected_at)
                ));
            }
        }

        output.push_str(&format!("{}\n", SECTION_RULE));
        output
    }

    /// Format a newly relayed chat message
    pub fn format_new_message(message: &ChatMessageInfo) -> String {
        format!(
            "\n\n{rule}\n@{}: {}\nsent at {}\n{rule}\n",
            message.author.as_deref().unwrap_or(ANONYMOUS),
            message.text.as_deref().unwrap_or_default(),
            timestamp_to_rfc3339(message.timestamp),
            rule = MESSAGE_RULE
        )
    }

    /// Format a binary message notification
    pub fn format_binary_message(byte_count: usize) -> String {
        format!("\n← Received {} bytes of binary data\n", byte_count)
    }

    /// Format a raw text message (when parsing fails)
    pub fn format_raw_message(text: &str) -> String {
        format!("\n← Received: {}\n", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(text: Option<&str>, author: Option<&str>) -> ChatMessageInfo {
        ChatMessageInfo {
            text: text.map(str::to_string),
            author: author.map(str::to_string),
            timestamp: 1672531200000,
        }
    }

    fn participant(name: Option<&str>) -> ParticipantInfo {
        ParticipantInfo {
            connection_id: "c0ffee".to_string(),
            name: name.map(str::to_string),
            connected_at: 1672531200000,
        }
    }

    #[test]
    fn test_format_message_log_empty() {
        // テスト項目: ログが空の場合、適切なメッセージが表示される
        // given (前提条件):
        let messages = vec![];

        // when (操作):
        let result = MessageFormatter::format_message_log(&messages);

        // then (期待する結果):
        assert!(result.contains("Message log:"));
        assert!(result.contains("(No messages)"));
    }

    #[test]
    fn test_format_message_log_keeps_order() {
        // テスト項目: ログのメッセージが送信順に表示される
        // given (前提条件):
        let messages = vec![
            message(Some("first"), Some("alice")),
            message(Some("second"), Some("bob")),
        ];

        // when (操作):
        let result = MessageFormatter::format_message_log(&messages);

        // then (期待する結果):
        let first = result.find("@alice: first").unwrap();
        let second = result.find("@bob: second").unwrap();
        assert!(first < second);
        assert!(result.contains("2023-01-01T00:00:00.000Z"));
    }

    #[test]
    fn test_format_participant_list_marks_me() {
        // テスト項目: 自分の名前の参加者にマークが付き、名前なしは匿名表示になる
        // given (前提条件):
        let participants = vec![
            participant(Some("alice")),
            participant(Some("bob")),
            participant(None),
        ];

        // when (操作):
        let result = MessageFormatter::format_participant_list(&participants, "alice");

        // then (期待する結果):
        assert!(result.contains("alice (me) - connected at"));
        assert!(result.contains("bob - connected at"));
        assert!(!result.contains("bob (me)"));
        assert!(result.contains("(anonymous) - connected at"));
    }

    #[test]
    fn test_format_participant_list_empty() {
        // テスト項目: 参加者が空の場合、適切なメッセージが表示される
        // given (前提条件):
        let participants = vec![];

        // when (操作):
        let result = MessageFormatter::format_participant_list(&participants, "alice");

        // then (期待する結果):
        assert!(result.contains("Participants:"));
        assert!(result.contains("(No participants)"));
    }

    #[test]
    fn test_format_new_message() {
        // テスト項目: 新着メッセージが正しくフォーマットされる
        // given (前提条件):
        let message = message(Some("Hello, world!"), Some("alice"));

        // when (操作):
        let result = MessageFormatter::format_new_message(&message);

        // then (期待する結果):
        assert!(result.contains("@alice: Hello, world!"));
        assert!(result.contains("sent at 2023-01-01"));
        assert!(result.contains(MESSAGE_RULE));
    }

    #[test]
    fn test_format_new_message_without_fields() {
        // テスト項目: 本文・送信者が欠けたメッセージも表示できる
        // given (前提条件):
        let message = message(None, None);

        // when (操作):
        let result = MessageFormatter::format_new_message(&message);

        // then (期待する結果):
        assert!(result.contains("@(anonymous): \n"));
    }

    #[test]
    fn test_format_raw_and_binary_message() {
        // テスト項目: 解釈できないフレームが生のまま表示される
        // given (前提条件):
        let text = "unknown frame";

        // when (操作):
        let raw = MessageFormatter::format_raw_message(text);
        let binary = MessageFormatter::format_binary_message(1024);

        // then (期待する結果):
        assert!(raw.contains("Received: unknown frame"));
        assert!(binary.contains("1024 bytes"));
    }
}
