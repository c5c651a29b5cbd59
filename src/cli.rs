//! Command-line interface definition for Deskboard
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for credential capture, board display, status
//! moves, conversation detail, and the proxy server.

use clap::{Parser, Subcommand};

/// Deskboard - Terminal kanban board for helpdesk conversations
///
/// Fetch conversations from a helpdesk gateway, view them as a kanban
/// board, and move them between status columns.
#[derive(Parser, Debug, Clone)]
#[command(name = "deskboard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for Deskboard
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Store gateway credentials (access token + account id)
    Login {
        /// Account identifier; prompted for when omitted
        #[arg(long)]
        account_id: Option<String>,

        /// API access token; prompted for when omitted
        #[arg(long)]
        token: Option<String>,
    },

    /// Fetch all conversations and render the board
    Board,

    /// Move a conversation to another status column
    Move {
        /// Conversation identifier
        id: u64,

        /// Target column (pending, open, resolved, snoozed)
        status: String,
    },

    /// Show the full detail of one conversation
    Show {
        /// Conversation identifier
        id: u64,
    },

    /// Run the local API proxy
    Serve {
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Upstream gateway base URL (overrides config)
        #[arg(long)]
        upstream: Option<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
