//! Get path command implementation.

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;

use rtdb_core::{DatabasePath, DatabaseProvider, DatabaseTarget};

use crate::output;
use crate::store::CliStore;

/// An arbitrary, already validated path.
struct PathTarget(DatabasePath);

impl DatabaseTarget for PathTarget {
    fn path(&self) -> String {
        self.0.as_str().to_string()
    }
}

#[derive(Args, Debug)]
pub struct GetPathArgs {
    /// Slash-separated path (e.g., users/1/first_name); omit for the root
    #[arg(default_value = "")]
    pub path: String,

    /// Print compact JSON
    #[arg(long)]
    pub compact: bool,
}

pub async fn run(store: CliStore, args: GetPathArgs) -> Result<()> {
    let path = DatabasePath::new(&args.path).context("Invalid path")?;
    let provider = DatabaseProvider::<PathTarget, Value, _>::new(store);

    let value = provider
        .fetch(&PathTarget(path.clone()))
        .await
        .with_context(|| format!("Failed to read {}", path))?;

    if args.compact {
        output::json(&value)?;
    } else {
        output::json_pretty(&value)?;
    }

    Ok(())
}
