pub mod models;
pub mod parser;
pub mod writer;

use crate::session::Session;
use anyhow::{Context, Result};
use tracing::info;

/// Applies every intent in the script to `session`, stopping at the first failure.
pub fn run_script(session: &mut Session, path: &str) -> Result<()> {
    let script = parser::parse_script_file(path)?;
    info!(path, intents = script.len(), "running script");

    for line in script {
        session
            .apply(line.intent.clone())
            .with_context(|| format!("{}:{}: failed to apply '{}'", path, line.line_number, line.intent))?;
    }

    Ok(())
}
