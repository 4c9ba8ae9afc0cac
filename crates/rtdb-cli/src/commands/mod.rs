//! Subcommand implementations.

mod get_document;
mod get_path;
mod list_documents;
mod validate;

use anyhow::Result;
use clap::Subcommand;

use crate::cli::ConnectionArgs;
use crate::store::CliStore;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch one user document and log the outcome
    Validate(validate::ValidateArgs),

    /// Fetch and decode a single user document
    GetDocument(get_document::GetDocumentArgs),

    /// Fetch and decode every user document
    ListDocuments(list_documents::ListDocumentsArgs),

    /// Fetch the raw JSON value at any path
    GetPath(get_path::GetPathArgs),
}

pub async fn handle(connection: ConnectionArgs, command: Command) -> Result<()> {
    let store = CliStore::open(&connection)?;

    match command {
        Command::Validate(args) => validate::run(store, args).await,
        Command::GetDocument(args) => get_document::run(store, args).await,
        Command::ListDocuments(args) => list_documents::run(store, args).await,
        Command::GetPath(args) => get_path::run(store, args).await,
    }
}
