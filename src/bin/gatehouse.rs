//! Login server binary.
//!
//! Serves the username/password login flow over HTTP and sets the session
//! cookies on success.

use gatehouse::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log();
    hosting::run().await?;
    Ok(())
}
