//! Transcript formatting: stored history to instruction sequence.
//!
//! Converts a single session's message history into the ordered instruction
//! sequence handed to the completion service: one leading system instruction
//! followed by the user-authored turns.

use deskbot_types::message::{ChatMessage, MessageRole};

/// One formatted unit handed to the completion service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// System-level guidance, always first and always exactly one.
    System(String),
    /// A user-authored turn, in original order.
    UserTurn(String),
}

/// Build the instruction sequence for a completion call.
///
/// Emits exactly one `System` instruction carrying `system_prompt`, then one
/// `UserTurn` per `role == user` message in `history`, in input order.
/// Assistant messages are dropped: the baseline behavior does not replay
/// generated replies back to the model as prior turns.
///
/// `history` must already be in creation-time order and belong to a single
/// session; this function never reorders it.
pub fn format_transcript(history: &[ChatMessage], system_prompt: &str) -> Vec<Instruction> {
    let mut instructions = Vec::with_capacity(history.len() + 1);
    instructions.push(Instruction::System(system_prompt.to_string()));

    for message in history {
        match message.role {
            MessageRole::User => {
                instructions.push(Instruction::UserTurn(message.content.clone()));
            }
            MessageRole::Assistant => {}
        }
    }

    instructions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(content: &str) -> ChatMessage {
        ChatMessage::new("s", MessageRole::User, content)
    }

    fn assistant(content: &str) -> ChatMessage {
        ChatMessage::new("s", MessageRole::Assistant, content)
    }

    #[test]
    fn test_all_user_history_yields_len_plus_one() {
        let history = vec![user("one"), user("two"), user("three")];
        let instructions = format_transcript(&history, "guide");

        assert_eq!(instructions.len(), history.len() + 1);
        assert_eq!(instructions[0], Instruction::System("guide".to_string()));
        assert_eq!(instructions[1], Instruction::UserTurn("one".to_string()));
        assert_eq!(instructions[2], Instruction::UserTurn("two".to_string()));
        assert_eq!(instructions[3], Instruction::UserTurn("three".to_string()));
    }

    #[test]
    fn test_assistant_messages_are_dropped() {
        let history = vec![
            user("first question"),
            assistant("first answer"),
            user("second question"),
            assistant("second answer"),
        ];
        let instructions = format_transcript(&history, "guide");

        assert_eq!(instructions.len(), 3);
        assert!(instructions.iter().all(|i| match i {
            Instruction::UserTurn(text) => !text.contains("answer"),
            Instruction::System(_) => true,
        }));
        // Relative order of user turns preserved
        assert_eq!(
            instructions[1],
            Instruction::UserTurn("first question".to_string())
        );
        assert_eq!(
            instructions[2],
            Instruction::UserTurn("second question".to_string())
        );
    }

    #[test]
    fn test_empty_history_yields_system_only() {
        let instructions = format_transcript(&[], "guide");
        assert_eq!(instructions, vec![Instruction::System("guide".to_string())]);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let history = vec![user("a"), assistant("b")];
        let before: Vec<String> = history.iter().map(|m| m.content.clone()).collect();
        let _ = format_transcript(&history, "guide");
        let after: Vec<String> = history.iter().map(|m| m.content.clone()).collect();
        assert_eq!(before, after);
    }
}
