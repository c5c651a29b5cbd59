//! Credential capture command

use rustyline::DefaultEditor;

use crate::credentials::{CredentialStore, Session};
use crate::error::{DeskboardError, Result};

/// Capture the account id and access token and persist them
///
/// Values not supplied as flags are prompted for interactively. The
/// stored session is replaced wholesale.
pub fn run_login(account_id: Option<String>, token: Option<String>) -> Result<()> {
    let mut editor = DefaultEditor::new()?;

    let account_id = match account_id {
        Some(value) => value,
        None => editor.readline("Account ID: ")?,
    };
    let token = match token {
        Some(value) => value,
        None => editor.readline("API access token: ")?,
    };

    let account_id = account_id.trim();
    let token = token.trim();
    if account_id.is_empty() || token.is_empty() {
        return Err(DeskboardError::Credentials(
            "both the account id and the access token are required".to_string(),
        )
        .into());
    }

    CredentialStore.save(&Session {
        access_token: token.to_string(),
        account_id: account_id.to_string(),
    })?;

    println!("Credentials saved for account {}", account_id);
    Ok(())
}
