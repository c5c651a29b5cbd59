//! Board reconciliation
//!
//! Pure partitioning of an aggregate conversation list into the fixed board
//! columns. No I/O, no side effects beyond a debug log for dropped entries;
//! the same input always produces the same board.

use super::{Board, Conversation};

/// Partition an aggregate conversation list into board columns
///
/// Each conversation is assigned to exactly one column by exact match of
/// its status field. Input order is preserved within each column and no
/// secondary sort is applied. Conversations whose status has no board
/// column (`closed`, unknown) are excluded and tallied in
/// [`Board::dropped`], so `sum(column counts) + dropped` always equals the
/// input length.
///
/// # Examples
///
/// ```
/// use deskboard::board::{reconcile, Status};
///
/// let board = reconcile(Vec::new());
/// assert_eq!(board.total(), 0);
/// assert_eq!(board.columns.len(), 4);
/// assert!(board.column(Status::Open).is_some());
/// ```
pub fn reconcile(conversations: Vec<Conversation>) -> Board {
    let mut board = Board::empty();

    for conversation in conversations {
        match board.column_mut(conversation.status) {
            Some(column) => column.conversations.push(conversation),
            None => {
                tracing::debug!(
                    "Dropping conversation {} with status '{}' (no board column)",
                    conversation.id,
                    conversation.status
                );
                board.dropped += 1;
            }
        }
    }

    board
}
