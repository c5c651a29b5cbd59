//! Board data model for Deskboard
//!
//! This module defines the wire-level conversation model received from the
//! helpdesk gateway and the in-memory board it is reconciled into. The
//! model is deliberately tolerant: almost every field is optional with a
//! documented fallback chain, because upstream payloads vary between
//! channel types and API versions.
//!
//! Board instances are ephemeral. A board is rebuilt from scratch on every
//! load cycle; no identity is preserved across reloads.

pub mod reconcile;

pub use reconcile::reconcile;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DeskboardError;

/// Conversation lifecycle status
///
/// Used both as a fetch filter and as a board column key. `Closed` exists
/// on the wire but has no board column; payloads carrying a status outside
/// this set decode to `Unknown` and are dropped during reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pending,
    Open,
    Resolved,
    Snoozed,
    Closed,
    #[serde(other)]
    Unknown,
}

/// The fixed, ordered set of board columns
///
/// One retrieval request is issued per entry during a load cycle, and the
/// reconciled board always contains exactly these columns in this order.
pub const BOARD_COLUMNS: [Status; 4] = [
    Status::Pending,
    Status::Open,
    Status::Resolved,
    Status::Snoozed,
];

impl Status {
    /// Human-readable column title for rendering
    pub fn label(&self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::Open => "Open",
            Status::Resolved => "Resolved",
            Status::Snoozed => "Snoozed",
            Status::Closed => "Closed",
            Status::Unknown => "Unknown",
        }
    }

    /// Returns true when this status has a board column
    pub fn is_board_column(&self) -> bool {
        BOARD_COLUMNS.contains(self)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Status::Pending => "pending",
            Status::Open => "open",
            Status::Resolved => "resolved",
            Status::Snoozed => "snoozed",
            Status::Closed => "closed",
            Status::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for Status {
    type Err = DeskboardError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Status::Pending),
            "open" => Ok(Status::Open),
            "resolved" => Ok(Status::Resolved),
            "snoozed" => Ok(Status::Snoozed),
            "closed" => Ok(Status::Closed),
            other => Err(DeskboardError::Config(format!(
                "Unknown status '{}'; expected one of pending, open, resolved, snoozed, closed",
                other
            ))),
        }
    }
}

/// Conversation priority as reported by the gateway
///
/// Absent when no priority has been assigned; cards without a priority are
/// rendered without a priority badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Display label for the priority badge
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

/// A creation timestamp as found on the wire
///
/// The gateway emits both numeric epoch seconds and ISO-8601 strings
/// depending on the field and API version; both encodings must be accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    /// Seconds since the Unix epoch
    Epoch(i64),
    /// ISO-8601 / RFC 3339 datetime string
    Iso(String),
}

impl Timestamp {
    /// Decode into a UTC datetime
    ///
    /// Returns `None` for out-of-range epochs or unparseable strings.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        match self {
            Timestamp::Epoch(secs) => Utc.timestamp_opt(*secs, 0).single(),
            Timestamp::Iso(raw) => DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
        }
    }

    /// Short display form (`dd/mm/yyyy hh:mm`), falling back to the raw
    /// value when the timestamp cannot be decoded
    pub fn format_short(&self) -> String {
        match self.to_utc() {
            Some(dt) => dt.format("%d/%m/%Y %H:%M").to_string(),
            None => match self {
                Timestamp::Epoch(secs) => secs.to_string(),
                Timestamp::Iso(raw) => raw.clone(),
            },
        }
    }
}

/// Sender descriptor for a conversation or message
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sender {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

/// Sender classification carried on each message
///
/// Anything outside the three known values decodes to `Other` and is
/// treated as an agent-authored (outgoing) message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SenderType {
    Contact,
    User,
    AgentBot,
    #[serde(other)]
    Other,
}

/// Direction of a message relative to the support desk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageDirection {
    /// Authored by the customer side (`Contact` or `User`)
    Incoming,
    /// Authored by a human agent (or an unclassified sender)
    Outgoing,
    /// Authored by an automation bot (`AgentBot`)
    Bot,
}

/// Placeholder shown when a message carries no usable content
pub const MESSAGE_CONTENT_PLACEHOLDER: &str = "Message without content";

/// Placeholder shown when a conversation has no messages at all
pub const NO_MESSAGES_PLACEHOLDER: &str = "No messages";

/// A single message inside a conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    /// Raw message content; empty strings are treated as absent
    #[serde(default)]
    pub content: Option<String>,
    /// Post-processed content, used when `content` is absent
    #[serde(default)]
    pub processed_message_content: Option<String>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub sender_type: Option<SenderType>,
    #[serde(default)]
    pub sender: Option<Sender>,
}

impl Message {
    /// Content to display for this message
    ///
    /// Fallback chain: `content`, then `processed_message_content`, then a
    /// fixed placeholder. Empty strings count as absent at every step.
    pub fn display_content(&self) -> &str {
        non_empty(self.content.as_deref())
            .or_else(|| non_empty(self.processed_message_content.as_deref()))
            .unwrap_or(MESSAGE_CONTENT_PLACEHOLDER)
    }

    /// Classify the message relative to the support desk
    pub fn direction(&self) -> MessageDirection {
        match self.sender_type {
            Some(SenderType::Contact) | Some(SenderType::User) => MessageDirection::Incoming,
            Some(SenderType::AgentBot) => MessageDirection::Bot,
            _ => MessageDirection::Outgoing,
        }
    }
}

/// Summary of the most recent non-activity message on a conversation
///
/// Used as the card preview when the inline `messages` list is empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageSummary {
    #[serde(default)]
    pub content: Option<String>,
}

/// Envelope metadata attached to a conversation by the gateway
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationMeta {
    #[serde(default)]
    pub sender: Option<Sender>,
}

/// A customer-support conversation as returned by the gateway
///
/// Instances are created fresh from each API response and discarded on the
/// next reload; only `id` and `status` are required on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: u64,
    pub status: Status,
    #[serde(default)]
    pub account_id: Option<u64>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    /// Secondary creation timestamp; some payloads carry only this field
    #[serde(default)]
    pub timestamp: Option<Timestamp>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub meta: Option<ConversationMeta>,
    #[serde(default)]
    pub sender: Option<Sender>,
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(default)]
    pub last_non_activity_message: Option<MessageSummary>,
}

impl Conversation {
    /// Sender descriptor, preferring the envelope's `meta.sender` over a
    /// top-level `sender`
    pub fn sender(&self) -> Option<&Sender> {
        self.meta
            .as_ref()
            .and_then(|meta| meta.sender.as_ref())
            .or(self.sender.as_ref())
    }

    /// Display name for the customer, with a `Contact #<id>` fallback
    pub fn contact_name(&self) -> String {
        self.sender()
            .and_then(|sender| non_empty(sender.name.as_deref()))
            .map(str::to_string)
            .unwrap_or_else(|| format!("Contact #{}", self.id))
    }

    /// Creation timestamp, preferring `created_at` over `timestamp`
    pub fn created(&self) -> Option<&Timestamp> {
        self.created_at.as_ref().or(self.timestamp.as_ref())
    }

    /// Preview text for the card: the last message's content, falling back
    /// to the last non-activity summary, then to a placeholder
    pub fn last_message_preview(&self) -> String {
        if let Some(last) = self.messages.last() {
            return last.display_content().to_string();
        }
        if let Some(summary) = &self.last_non_activity_message {
            if let Some(content) = non_empty(summary.content.as_deref()) {
                return content.to_string();
            }
        }
        NO_MESSAGES_PLACEHOLDER.to_string()
    }
}

/// One board column: a status key plus the conversations assigned to it
#[derive(Debug, Clone)]
pub struct Column {
    pub status: Status,
    pub conversations: Vec<Conversation>,
}

impl Column {
    /// Number of conversations in this column
    ///
    /// Always equal to the list length; counts are derived from membership,
    /// never tracked separately.
    pub fn count(&self) -> usize {
        self.conversations.len()
    }
}

/// The reconciled kanban board
///
/// Holds the fixed columns in [`BOARD_COLUMNS`] order plus a counter of
/// conversations whose status matched no column and were dropped.
#[derive(Debug, Clone)]
pub struct Board {
    pub columns: Vec<Column>,
    /// Conversations excluded because their status has no board column
    pub dropped: usize,
}

impl Board {
    /// An empty board with all columns present and zero counts
    pub fn empty() -> Self {
        Self {
            columns: BOARD_COLUMNS
                .iter()
                .map(|status| Column {
                    status: *status,
                    conversations: Vec::new(),
                })
                .collect(),
            dropped: 0,
        }
    }

    /// Look up a column by status key
    pub fn column(&self, status: Status) -> Option<&Column> {
        self.columns.iter().find(|column| column.status == status)
    }

    pub(crate) fn column_mut(&mut self, status: Status) -> Option<&mut Column> {
        self.columns
            .iter_mut()
            .find(|column| column.status == status)
    }

    /// Total number of conversations across all columns
    pub fn total(&self) -> usize {
        self.columns.iter().map(Column::count).sum()
    }

    /// Find a conversation anywhere on the board
    pub fn find(&self, id: u64) -> Option<&Conversation> {
        self.columns
            .iter()
            .flat_map(|column| column.conversations.iter())
            .find(|conversation| conversation.id == id)
    }

    /// Remove and return a conversation from whichever column holds it
    pub fn take(&mut self, id: u64) -> Option<Conversation> {
        for column in &mut self.columns {
            if let Some(index) = column
                .conversations
                .iter()
                .position(|conversation| conversation.id == id)
            {
                return Some(column.conversations.remove(index));
            }
        }
        None
    }

    /// Append a conversation to the column for `status`
    ///
    /// A no-op when `status` has no board column; callers validate the
    /// target before moving anything.
    pub fn push(&mut self, status: Status, conversation: Conversation) {
        if let Some(column) = self.column_mut(status) {
            column.conversations.push(conversation);
        }
    }
}

/// Treats empty strings as absent, mirroring the gateway's loose payloads
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
