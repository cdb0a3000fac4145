//! The three-stage fetch chain: credentials, token, employees.
//!
//! Each stage runs only after the previous one succeeded; the first failure
//! is returned through `?` and later stages never run. A failed run leaves
//! the roster table exactly as it was.

use crate::api::Backend;
use crate::error::Error;
use crate::render::RosterTable;
use crate::store::TokenStore;

/// Runs the full chain, appending the fetched roster to `roster`.
///
/// The bearer token is passed in memory between stages; the persistent store
/// is written once after a successful exchange and never re-read here.
pub fn run(backend: &Backend, store: &TokenStore, roster: &mut RosterTable) -> Result<(), Error> {
    let credentials = backend.fetch_credentials()?;
    tracing::info!(username = %credentials.username, "Fetched credentials");

    let token = backend.generate_token(&credentials)?;
    store.save(&token)?;
    tracing::info!("Token generated and stored");

    let employees = backend.fetch_employees(&token)?;
    tracing::info!(count = employees.len(), "Fetched employee roster");

    roster.append_employees(&employees);
    Ok(())
}
