//! Get document command implementation.

use anyhow::{Context, Result};
use clap::Args;

use rtdb_core::{DatabaseProvider, UserRecord, UserTarget};

use crate::output;
use crate::store::CliStore;

#[derive(Args, Debug)]
pub struct GetDocumentArgs {
    /// Document id under `users`
    pub id: i64,

    /// Print labeled fields instead of JSON
    #[arg(long)]
    pub fields: bool,
}

pub async fn run(store: CliStore, args: GetDocumentArgs) -> Result<()> {
    let provider = DatabaseProvider::<UserTarget, UserRecord, _>::new(store);

    let user = provider
        .fetch(&UserTarget::GetDocument { id: args.id })
        .await
        .with_context(|| format!("Failed to get document {}", args.id))?;

    if args.fields {
        output::user(&user);
    } else {
        output::json_pretty(&user)?;
    }

    Ok(())
}
