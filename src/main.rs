use anyhow::Result;
use homeobot::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
