/*!
Command handlers for the CLI

This module provides command handlers invoked by the CLI entrypoint.

It exposes five top-level command modules:

- `login` — Capture and store gateway credentials
- `board` — Fetch all conversations and render the board
- `move_status` — Move a conversation between status columns
- `show`  — Render a single conversation's detail
- `serve` — Run the local API proxy

The handlers are intentionally small and wire the library components
together: credential store, gateway client, sync engine, and renderer.
*/

pub mod board;
pub mod login;
pub mod move_status;
pub mod serve;
pub mod show;

use crate::credentials::{CredentialStore, Session};
use crate::error::{DeskboardError, Result};

/// Load the stored session, or fail with a hint to run `login`
pub(crate) fn require_session() -> Result<Session> {
    match CredentialStore.load()? {
        Some(session) => Ok(session),
        None => Err(DeskboardError::Credentials(
            "no credentials stored; run `deskboard login` first".to_string(),
        )
        .into()),
    }
}
