//! List documents command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use rtdb_core::{DatabaseProvider, UserList, UserTarget};

use crate::output;
use crate::store::CliStore;

#[derive(Args, Debug)]
pub struct ListDocumentsArgs {
    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(store: CliStore, args: ListDocumentsArgs) -> Result<()> {
    let provider = DatabaseProvider::<UserTarget, UserList, _>::new(store);

    let result = provider.fetch(&UserTarget::ListDocuments).await;

    // An absent collection is an empty listing, not a failure
    let list = match result {
        Err(e) if e.is_no_data() && e.store_error().is_none() => UserList::default(),
        other => other.context("Failed to list documents")?,
    };

    if list.is_empty() {
        eprintln!("{}", "No documents found.".dimmed());
        return Ok(());
    }

    for entry in list.entries() {
        if args.pretty {
            output::json_pretty(entry)?;
        } else {
            output::json(entry)?;
        }
    }

    eprintln!();
    eprintln!("{}: {}", "Documents".dimmed(), list.len());

    Ok(())
}
