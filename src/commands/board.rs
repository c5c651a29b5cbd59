//! Board display command

use crate::commands::require_session;
use crate::config::Config;
use crate::error::Result;
use crate::gateway::HttpGateway;
use crate::render::render_board;
use crate::sync::SyncEngine;

/// Fetch every status partition, reconcile, and print the board
pub async fn run_board(config: &Config) -> Result<()> {
    let session = require_session()?;
    let gateway = HttpGateway::new(&config.gateway, session)?;
    let engine = SyncEngine::new(gateway);

    let board = engine.load_board().await;
    println!("{}", render_board(&board));
    Ok(())
}
