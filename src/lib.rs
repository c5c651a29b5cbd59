//! Deskboard - Terminal kanban board for helpdesk conversations
//!
//! This library provides the conversation synchronization and
//! status-transition pipeline behind the `deskboard` CLI, plus the local
//! proxy that hides the gateway host.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `board`: Conversation/board data model and the pure reconciler
//! - `gateway`: Remote gateway client (trait + HTTP implementation) and
//!   envelope decoding
//! - `sync`: Partition-by-partition fetch aggregation
//! - `transition`: Two-phase status move with resync-on-failure
//! - `render`: Terminal board and detail rendering
//! - `server`: Local API proxy and redirect helper
//! - `credentials`: Keyring-backed session persistence
//! - `config`: Configuration management and validation
//! - `error`: Error types and result alias
//! - `cli`: Command-line interface definition
//!
//! # Example
//!
//! ```no_run
//! use deskboard::board::Status;
//! use deskboard::config::Config;
//! use deskboard::credentials::Session;
//! use deskboard::gateway::HttpGateway;
//! use deskboard::sync::SyncEngine;
//!
//! # async fn example() -> deskboard::error::Result<()> {
//! let config = Config::load("config.yaml")?;
//! let session = Session {
//!     access_token: "token".to_string(),
//!     account_id: "74".to_string(),
//! };
//! let gateway = HttpGateway::new(&config.gateway, session)?;
//! let engine = SyncEngine::new(gateway);
//!
//! let board = engine.load_board().await;
//! println!("{} open", board.column(Status::Open).map(|c| c.count()).unwrap_or(0));
//! # Ok(())
//! # }
//! ```

pub mod board;
pub mod cli;
pub mod commands;
pub mod config;
pub mod credentials;
pub mod error;
pub mod gateway;
pub mod render;
pub mod server;
pub mod sync;
pub mod transition;

// Re-export commonly used types
pub use board::{reconcile, Board, Conversation, Status, BOARD_COLUMNS};
pub use config::Config;
pub use credentials::Session;
pub use error::{DeskboardError, Result};
pub use gateway::{ConversationGateway, HttpGateway};
pub use sync::SyncEngine;
pub use transition::{TransitionController, TransitionOutcome};
