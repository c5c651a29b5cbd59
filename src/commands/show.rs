//! Conversation detail command

use crate::commands::require_session;
use crate::config::Config;
use crate::error::Result;
use crate::gateway::{ConversationGateway, HttpGateway};
use crate::render::render_conversation;

/// Fetch and render one conversation's full detail
pub async fn run_show(config: &Config, id: u64) -> Result<()> {
    let session = require_session()?;
    let gateway = HttpGateway::new(&config.gateway, session)?;

    let conversation = gateway.fetch_conversation(id).await?;
    println!("{}", render_conversation(&conversation));
    Ok(())
}
