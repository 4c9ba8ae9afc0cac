//! Validate command implementation.
//!
//! Issues one `GetDocument` request through the callback API and logs
//! whatever comes back.

use anyhow::{Context, Result};
use clap::Args;
use tokio::sync::oneshot;
use tracing::{error, info};

use rtdb_core::{DatabaseProvider, UserRecord, UserTarget};

use crate::output;
use crate::store::CliStore;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Document id to fetch
    #[arg(long, default_value_t = 1)]
    pub id: i64,
}

pub async fn run(store: CliStore, args: ValidateArgs) -> Result<()> {
    let provider = DatabaseProvider::<UserTarget, UserRecord, _>::new(store);
    let (tx, rx) = oneshot::channel();

    provider.request(UserTarget::GetDocument { id: args.id }, move |result| {
        match &result {
            Ok(user) => info!(?user, "Fetched user"),
            Err(e) => error!(error = %e, "Request failed"),
        }
        let _ = tx.send(result);
    });

    // Waits for as long as the store takes; there is no timeout.
    let result = rx.await.context("Request task ended without completing")?;

    match result {
        Ok(user) => {
            output::success("Document decoded");
            output::user(&user);
            Ok(())
        }
        Err(e) => {
            output::error(&format!("{} ({})", e, provider.store().location()));
            Err(e).context("Validation failed")
        }
    }
}
