//! Fetch aggregation and board loading
//!
//! The sync engine issues one retrieval request per board column,
//! tolerating partial failures, and reconciles the aggregate into a fresh
//! board. Partition fetches run sequentially on purpose: with at most four
//! partitions the summed latency is acceptable and the code stays free of
//! interleaving concerns.
//!
//! Overlapping reloads are serialized through an async mutex. A reload
//! requested while another is in flight waits its turn and then performs
//! its own full fetch, so a stale response can never overwrite a newer
//! one.

use tokio::sync::Mutex;

use crate::board::{reconcile, Board, Conversation, BOARD_COLUMNS};
use crate::gateway::ConversationGateway;

/// Drives the fetch → reconcile half of the pipeline
pub struct SyncEngine<G: ConversationGateway> {
    gateway: G,
    reload_lock: Mutex<()>,
}

impl<G: ConversationGateway> SyncEngine<G> {
    /// Create an engine over the given gateway client
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            reload_lock: Mutex::new(()),
        }
    }

    /// The gateway this engine loads from
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Fetch all partitions and reconcile them into a board
    ///
    /// Never fails: when every partition is unreachable the result is an
    /// empty board, with one warning logged per failed partition.
    pub async fn load_board(&self) -> Board {
        let _guard = self.reload_lock.lock().await;
        let aggregate = self.fetch_aggregate().await;
        let board = reconcile(aggregate);
        tracing::info!(
            "Board loaded: {} conversations, {} dropped",
            board.total(),
            board.dropped
        );
        board
    }

    /// Fetch every status partition and concatenate the results
    ///
    /// One request per entry in [`BOARD_COLUMNS`], awaited sequentially.
    /// A failed partition is skipped with a warning and the remaining
    /// partitions are still fetched; duplicates across partitions are not
    /// deduplicated.
    pub async fn fetch_aggregate(&self) -> Vec<Conversation> {
        let mut aggregate = Vec::new();

        for status in BOARD_COLUMNS {
            match self.gateway.list_conversations(status).await {
                Ok(batch) => {
                    tracing::debug!("Partition '{}' returned {} conversations", status, batch.len());
                    aggregate.extend(batch);
                }
                Err(e) => {
                    tracing::warn!("Skipping partition '{}': {}", status, e);
                }
            }
        }

        aggregate
    }
}
