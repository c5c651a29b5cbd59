//! Status move command
//!
//! Loads the current board and runs the transition controller's two-phase
//! commit. A committed move prints the updated board; a failed mutation
//! prints the operator alert followed by the resynchronized board.

use colored::Colorize;

use crate::board::Status;
use crate::commands::require_session;
use crate::config::Config;
use crate::error::Result;
use crate::gateway::HttpGateway;
use crate::render::render_board;
use crate::sync::SyncEngine;
use crate::transition::{TransitionController, TransitionOutcome};

/// Move one conversation to a target status column
pub async fn run_move(config: &Config, id: u64, status: &str) -> Result<()> {
    let target: Status = status.parse()?;

    let session = require_session()?;
    let gateway = HttpGateway::new(&config.gateway, session)?;
    let engine = SyncEngine::new(gateway);
    let controller = TransitionController::new(&engine);

    let board = engine.load_board().await;

    match controller.move_conversation(&board, id, target).await? {
        TransitionOutcome::Committed(board) => {
            println!(
                "{}",
                format!("Conversation {} moved to '{}'", id, target).green()
            );
            println!("{}", render_board(&board));
        }
        TransitionOutcome::Resynced { board, reason } => {
            eprintln!(
                "{}",
                format!(
                    "Failed to update status: {}. The board has been reloaded.",
                    reason
                )
                .red()
            );
            println!("{}", render_board(&board));
        }
    }

    Ok(())
}
