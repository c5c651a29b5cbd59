//! Terminal board rendering
//!
//! Thin presentation layer: materializes a reconciled board (and single
//! conversations) into terminal output. Takes the board as-is; all
//! partitioning and counting decisions live upstream.

use colored::Colorize;
use prettytable::{row, Table};

use crate::board::{Board, Conversation, MessageDirection, Priority};

/// Maximum characters of the last-message preview shown on a card
pub const MESSAGE_PREVIEW_LENGTH: usize = 100;

/// Render the full board, one section per column
///
/// Each section shows the column title with its count and a table of
/// cards. Empty columns render a placeholder line so the fixed column
/// layout stays visible.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    for column in &board.columns {
        let header = format!("{} ({})", column.status.label(), column.count());
        out.push('\n');
        out.push_str(&format!("{}\n", header.bold()));

        if column.conversations.is_empty() {
            out.push_str("  (empty)\n");
            continue;
        }

        let mut table = Table::new();
        table.add_row(row!["ID", "Contact", "Last message", "Created", "Priority"]);
        for conversation in &column.conversations {
            table.add_row(row![
                conversation.id,
                conversation.contact_name(),
                truncate_preview(&conversation.last_message_preview(), MESSAGE_PREVIEW_LENGTH),
                conversation
                    .created()
                    .map(|ts| ts.format_short())
                    .unwrap_or_default(),
                priority_badge(conversation.priority)
            ]);
        }
        out.push_str(&table.to_string());
    }

    if board.dropped > 0 {
        out.push_str(&format!(
            "\n{} conversation(s) with an off-board status were not shown\n",
            board.dropped
        ));
    }

    out
}

/// Render a single conversation's detail view
///
/// Contact block first, then the message history with direction markers,
/// or a placeholder when the conversation carries no messages.
pub fn render_conversation(conversation: &Conversation) -> String {
    let sender = conversation.sender();
    let email = sender
        .and_then(|s| s.email.as_deref())
        .unwrap_or("N/A");
    let phone = sender
        .and_then(|s| s.phone_number.as_deref())
        .unwrap_or("N/A");

    let mut out = String::new();
    out.push_str(&format!("{}\n", conversation.contact_name().bold()));
    out.push_str(&format!("Email: {}\n", email));
    out.push_str(&format!("Phone: {}\n", phone));
    out.push_str(&format!("Status: {}\n", conversation.status.label()));
    out.push_str(&format!("Conversation ID: {}\n", conversation.id));
    out.push('\n');

    if conversation.messages.is_empty() {
        out.push_str("No messages in this conversation.\n");
        return out;
    }

    for message in &conversation.messages {
        let direction = message.direction();
        let marker = direction_marker(direction);
        let name = message_sender_name(conversation, message.sender.as_ref(), direction);
        let time = message
            .created_at
            .as_ref()
            .map(|ts| ts.format_short())
            .unwrap_or_default();

        out.push_str(&format!(
            "{} {} [{}]\n    {}\n",
            marker,
            name,
            time,
            message.display_content()
        ));
    }

    out
}

/// Truncate preview text at a character boundary, appending an ellipsis
pub fn truncate_preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let mut truncated: String = text.chars().take(max_chars).collect();
        truncated.push_str("...");
        truncated
    }
}

fn priority_badge(priority: Option<Priority>) -> String {
    match priority {
        Some(Priority::High) => Priority::High.label().red().to_string(),
        Some(Priority::Medium) => Priority::Medium.label().yellow().to_string(),
        Some(Priority::Low) => Priority::Low.label().green().to_string(),
        None => String::new(),
    }
}

fn direction_marker(direction: MessageDirection) -> String {
    match direction {
        MessageDirection::Incoming => "<-".cyan().to_string(),
        MessageDirection::Outgoing => "->".green().to_string(),
        MessageDirection::Bot => "**".yellow().to_string(),
    }
}

/// Sender name for a message line, with per-direction fallbacks
fn message_sender_name(
    conversation: &Conversation,
    sender: Option<&crate::board::Sender>,
    direction: MessageDirection,
) -> String {
    let own_name = sender
        .and_then(|s| s.name.as_deref())
        .filter(|name| !name.is_empty());

    match direction {
        MessageDirection::Incoming => own_name
            .map(str::to_string)
            .unwrap_or_else(|| conversation.contact_name()),
        MessageDirection::Bot => own_name.unwrap_or("Bot").to_string(),
        MessageDirection::Outgoing => own_name.unwrap_or("Agent").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{reconcile, Message, MessageSummary, Sender, SenderType, Status};

    fn conversation(id: u64, status: Status) -> Conversation {
        Conversation {
            id,
            status,
            account_id: None,
            created_at: None,
            timestamp: None,
            priority: None,
            meta: None,
            sender: None,
            messages: Vec::new(),
            last_non_activity_message: None,
        }
    }

    #[test]
    fn test_truncate_preview_short_text_unchanged() {
        assert_eq!(truncate_preview("hello", 100), "hello");
    }

    #[test]
    fn test_truncate_preview_appends_ellipsis() {
        let long = "a".repeat(150);
        let truncated = truncate_preview(&long, 100);
        assert_eq!(truncated.chars().count(), 103);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_truncate_preview_is_char_boundary_safe() {
        let text = "café".repeat(50);
        let truncated = truncate_preview(&text, 100);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_render_board_shows_counts() {
        let board = reconcile(vec![
            conversation(1, Status::Open),
            conversation(2, Status::Open),
        ]);
        let rendered = render_board(&board);
        assert!(rendered.contains("Open (2)"));
        assert!(rendered.contains("Pending (0)"));
        assert!(rendered.contains("Resolved (0)"));
        assert!(rendered.contains("Snoozed (0)"));
    }

    #[test]
    fn test_render_board_mentions_dropped() {
        let board = reconcile(vec![conversation(1, Status::Closed)]);
        let rendered = render_board(&board);
        assert!(rendered.contains("1 conversation(s)"));
    }

    #[test]
    fn test_render_board_empty_column_placeholder() {
        let board = reconcile(Vec::new());
        let rendered = render_board(&board);
        assert!(rendered.contains("(empty)"));
    }

    #[test]
    fn test_render_conversation_without_messages() {
        let c = conversation(42, Status::Pending);
        let rendered = render_conversation(&c);
        assert!(rendered.contains("Contact #42"));
        assert!(rendered.contains("Email: N/A"));
        assert!(rendered.contains("Phone: N/A"));
        assert!(rendered.contains("No messages in this conversation."));
    }

    #[test]
    fn test_render_conversation_with_messages() {
        let mut c = conversation(226, Status::Open);
        c.sender = Some(Sender {
            name: Some("AZPost 6027".to_string()),
            email: None,
            phone_number: Some("+553131576027".to_string()),
        });
        c.messages = vec![Message {
            id: 1,
            content: Some("aabbcc".to_string()),
            processed_message_content: None,
            created_at: None,
            sender_type: Some(SenderType::Contact),
            sender: None,
        }];

        let rendered = render_conversation(&c);
        assert!(rendered.contains("aabbcc"));
        assert!(rendered.contains("AZPost 6027"));
        assert!(rendered.contains("Phone: +553131576027"));
    }

    #[test]
    fn test_message_sender_name_fallbacks() {
        let c = conversation(7, Status::Open);
        assert_eq!(
            message_sender_name(&c, None, MessageDirection::Incoming),
            "Contact #7"
        );
        assert_eq!(message_sender_name(&c, None, MessageDirection::Bot), "Bot");
        assert_eq!(
            message_sender_name(&c, None, MessageDirection::Outgoing),
            "Agent"
        );
    }

    #[test]
    fn test_preview_uses_summary_for_empty_message_list() {
        let mut c = conversation(1, Status::Open);
        c.last_non_activity_message = Some(MessageSummary {
            content: Some("from summary".to_string()),
        });
        let board = reconcile(vec![c]);
        let rendered = render_board(&board);
        assert!(rendered.contains("from summary"));
    }
}
