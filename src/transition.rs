//! Status transition controller
//!
//! Drives a single conversation's status change as a two-phase commit: the
//! move is applied to a staged copy of the board, the remote mutation is
//! issued, and only a successful response commits the staged copy. The
//! authoritative board handed in by the caller is never mutated before
//! remote confirmation.
//!
//! A failed mutation triggers exactly one full resynchronization (fetch
//! all partitions, reconcile) and reports the failure reason; there is no
//! automatic retry.

use crate::board::{Board, Status, BOARD_COLUMNS};
use crate::error::{DeskboardError, Result};
use crate::gateway::ConversationGateway;
use crate::sync::SyncEngine;

/// Result of a transition attempt
#[derive(Debug)]
pub enum TransitionOutcome {
    /// The remote mutation succeeded; the board reflects the staged move
    Committed(Board),
    /// The remote mutation failed; the board was reloaded from the gateway
    Resynced {
        /// Freshly resynchronized board
        board: Board,
        /// Why the mutation failed, for the operator alert
        reason: String,
    },
}

/// Coordinates status moves against the gateway and sync engine
pub struct TransitionController<'a, G: ConversationGateway> {
    sync: &'a SyncEngine<G>,
}

impl<'a, G: ConversationGateway> TransitionController<'a, G> {
    /// Create a controller over the given sync engine
    pub fn new(sync: &'a SyncEngine<G>) -> Self {
        Self { sync }
    }

    /// Move a conversation to a target column
    ///
    /// Validates the target and the conversation's presence before any
    /// network traffic, then runs the two-phase commit described in the
    /// module docs.
    ///
    /// # Errors
    ///
    /// Returns [`DeskboardError::Transition`] when `target` is not a board
    /// column or `id` is not on the board. Gateway failures are not
    /// errors; they produce [`TransitionOutcome::Resynced`].
    pub async fn move_conversation(
        &self,
        board: &Board,
        id: u64,
        target: Status,
    ) -> Result<TransitionOutcome> {
        if !BOARD_COLUMNS.contains(&target) {
            return Err(DeskboardError::Transition(format!(
                "'{}' is not a board column",
                target
            ))
            .into());
        }

        let mut staged = board.clone();
        let mut conversation = staged.take(id).ok_or_else(|| {
            DeskboardError::Transition(format!("conversation {} is not on the board", id))
        })?;
        let source = conversation.status;
        conversation.status = target;
        staged.push(target, conversation);

        match self.sync.gateway().update_status(id, target).await {
            Ok(()) => {
                tracing::info!("Conversation {} moved '{}' -> '{}'", id, source, target);
                Ok(TransitionOutcome::Committed(staged))
            }
            Err(e) => {
                tracing::error!(
                    "Status mutation failed for conversation {}: {}; resynchronizing",
                    id,
                    e
                );
                let board = self.sync.load_board().await;
                Ok(TransitionOutcome::Resynced {
                    board,
                    reason: e.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{reconcile, Conversation};
    use crate::gateway::MockConversationGateway;
    use mockall::predicate::eq;

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

    fn seed_board() -> Board {
        reconcile(vec![
            conversation(1, Status::Open),
            conversation(2, Status::Open),
            conversation(3, Status::Pending),
        ])
    }

    #[tokio::test]
    async fn test_successful_move_commits_staged_board() {
        let mut gateway = MockConversationGateway::new();
        gateway
            .expect_update_status()
            .with(eq(1), eq(Status::Resolved))
            .times(1)
            .returning(|_, _| Ok(()));

        let engine = SyncEngine::new(gateway);
        let controller = TransitionController::new(&engine);
        let board = seed_board();

        let outcome = controller
            .move_conversation(&board, 1, Status::Resolved)
            .await
            .unwrap();

        match outcome {
            TransitionOutcome::Committed(committed) => {
                assert_eq!(committed.total(), board.total());
                assert_eq!(committed.column(Status::Open).unwrap().count(), 1);
                assert_eq!(committed.column(Status::Resolved).unwrap().count(), 1);
                assert_eq!(committed.find(1).unwrap().status, Status::Resolved);
            }
            other => panic!("expected Committed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failed_move_resyncs_exactly_once() {
        let mut gateway = MockConversationGateway::new();
        gateway
            .expect_update_status()
            .times(1)
            .returning(|_, _| Err(DeskboardError::Transition("gateway returned 500".into()).into()));
        // The resynchronization fetches every partition exactly once.
        gateway
            .expect_list_conversations()
            .times(4)
            .returning(|status| {
                Ok(match status {
                    Status::Open => vec![
                        conversation(1, Status::Open),
                        conversation(2, Status::Open),
                    ],
                    Status::Pending => vec![conversation(3, Status::Pending)],
                    _ => Vec::new(),
                })
            });

        let engine = SyncEngine::new(gateway);
        let controller = TransitionController::new(&engine);
        let board = seed_board();

        let outcome = controller
            .move_conversation(&board, 1, Status::Resolved)
            .await
            .unwrap();

        match outcome {
            TransitionOutcome::Resynced { board: fresh, reason } => {
                // The move was discarded; the gateway still has 1 as open.
                assert_eq!(fresh.find(1).unwrap().status, Status::Open);
                assert_eq!(fresh.total(), 3);
                assert!(reason.contains("500"));
            }
            other => panic!("expected Resynced, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failed_move_leaves_authoritative_board_untouched() {
        let mut gateway = MockConversationGateway::new();
        gateway
            .expect_update_status()
            .times(1)
            .returning(|_, _| Err(DeskboardError::Transition("timeout".into()).into()));
        gateway
            .expect_list_conversations()
            .times(4)
            .returning(|_| Ok(Vec::new()));

        let engine = SyncEngine::new(gateway);
        let controller = TransitionController::new(&engine);
        let board = seed_board();

        let _ = controller
            .move_conversation(&board, 1, Status::Resolved)
            .await
            .unwrap();

        // The caller's board is unchanged whatever the outcome.
        assert_eq!(board.find(1).unwrap().status, Status::Open);
        assert_eq!(board.column(Status::Open).unwrap().count(), 2);
    }

    #[tokio::test]
    async fn test_move_to_non_column_is_rejected_before_network() {
        // No gateway expectations: any call would panic the mock.
        let gateway = MockConversationGateway::new();
        let engine = SyncEngine::new(gateway);
        let controller = TransitionController::new(&engine);
        let board = seed_board();

        let err = controller
            .move_conversation(&board, 1, Status::Closed)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("not a board column"));
    }

    #[tokio::test]
    async fn test_move_of_unknown_conversation_is_rejected() {
        let gateway = MockConversationGateway::new();
        let engine = SyncEngine::new(gateway);
        let controller = TransitionController::new(&engine);
        let board = seed_board();

        let err = controller
            .move_conversation(&board, 999, Status::Resolved)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("not on the board"));
    }
}
